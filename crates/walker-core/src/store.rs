//! Entry store for one display cycle.
//!
//! The search side hands over a complete, ordered result set per cycle. The
//! store keeps the display order and the key lookup together so the list
//! model and the row factory never see a half-updated set.

use std::collections::HashMap;
use tracing::warn;
use walker_types::Entry;

#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    keys: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(key, entry)` pairs in display order.
    ///
    /// Keys are expected to be unique within a cycle. A repeated key keeps its
    /// first position and the later entry is dropped.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Entry)>,
        K: Into<String>,
    {
        let iter = entries.into_iter();
        let (lower, _) = iter.size_hint();
        let mut store = Self {
            keys: Vec::with_capacity(lower),
            entries: HashMap::with_capacity(lower),
        };

        for (key, entry) in iter {
            let key = key.into();
            if store.entries.contains_key(&key) {
                warn!(key = %key, "duplicate entry key in result set, keeping the first");
                continue;
            }
            store.keys.push(key.clone());
            store.entries.insert(key, entry);
        }

        store
    }

    /// Keys in display order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.keys
            .iter()
            .filter_map(|key| self.entries.get(key).map(|entry| (key.as_str(), entry)))
    }

    /// New store holding the entries accepted by `keep`, order preserved
    #[must_use]
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str, &Entry) -> bool,
    {
        Self::from_entries(
            self.iter()
                .filter(|(key, entry)| keep(key, entry))
                .map(|(key, entry)| (key.to_string(), entry.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EntryStore {
        EntryStore::from_entries([
            ("a", Entry::new("Open File", "app")),
            ("b", Entry::new("Calc", "calc").with_subtitle("Calculator")),
            ("c", Entry::new("Terminal", "app")),
        ])
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let store = sample();
        assert_eq!(store.keys(), ["a", "b", "c"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_lookup() {
        let store = sample();
        assert_eq!(store.get("b").map(|e| e.label.as_str()), Some("Calc"));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_key_keeps_first() {
        let store = EntryStore::from_entries([
            ("a", Entry::new("First", "one")),
            ("b", Entry::new("Other", "two")),
            ("a", Entry::new("Second", "three")),
        ]);

        assert_eq!(store.keys(), ["a", "b"]);
        assert_eq!(store.get("a").map(|e| e.label.as_str()), Some("First"));
    }

    #[test]
    fn test_filtered_preserves_order() {
        let store = sample();
        let filtered = store.filtered(|_, entry| entry.class == "app");
        assert_eq!(filtered.keys(), ["a", "c"]);
        assert!(filtered.get("b").is_none());
    }

    #[test]
    fn test_empty_store() {
        let store = EntryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
