//! dmenu-style entry source.
//!
//! Entries are read once from stdin. A line holding a JSON object with an
//! `id` becomes that entry; any other non-empty line is its own id and label.
//! Each search text change produces a fresh [`EntryStore`] for the list.

use serde::Deserialize;
use std::io::{self, BufRead, IsTerminal};
use tracing::{debug, warn};
use walker_core::{Entry, EntryStore};

/// Style class of entries read as plain text lines
const DMENU_CLASS: &str = "dmenu";

#[derive(Debug, Deserialize)]
struct KeyedEntry {
    id: String,
    #[serde(flatten)]
    entry: Entry,
}

fn parse_line(line: &str) -> Option<(String, Entry)> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    if line.trim_start().starts_with('{')
        && let Ok(keyed) = serde_json::from_str::<KeyedEntry>(line)
    {
        return Some((keyed.id, keyed.entry));
    }

    Some((line.to_string(), Entry::new(line, DMENU_CLASS)))
}

/// All entries available to the launcher
#[derive(Debug, Default)]
pub struct EntrySource {
    all: EntryStore,
}

impl EntrySource {
    /// Parse entries from `reader`, one per line
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut parsed = Vec::new();
        for line in reader.lines() {
            if let Some(entry) = parse_line(&line?) {
                parsed.push(entry);
            }
        }

        debug!(count = parsed.len(), "entries read");
        Ok(Self {
            all: EntryStore::from_entries(parsed),
        })
    }

    /// Read stdin unless it is a terminal
    pub fn from_stdin() -> io::Result<Self> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            warn!("stdin is a terminal, starting without entries");
            return Ok(Self::default());
        }
        Self::from_reader(stdin.lock())
    }

    /// Entries whose label or subtitle contains `query`, ignoring case.
    /// An empty query returns everything.
    pub fn query(&self, query: &str) -> EntryStore {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.all.clone();
        }
        self.all.filtered(|_, entry| entry.matches_lowercase(&needle))
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }
}
