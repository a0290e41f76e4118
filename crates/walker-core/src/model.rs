//! List model and single selection with autoselect-first.

/// Ordered keys exposed to list virtualization. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemListModel {
    keys: Vec<String>,
}

impl ItemListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole model with a new result set
    pub fn replace(&mut self, keys: Vec<String>) {
        self.keys = keys;
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.keys.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Position of `key` in display order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }
}

/// A selection index moved from `previous` to `current`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

/// Single selection over an [`ItemListModel`].
///
/// Whenever the model holds items and nothing was chosen explicitly, index 0
/// is selected. There is no way to unselect while the model is non-empty.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    model: ItemListModel,
    selected: Option<usize>,
    explicit: bool,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &ItemListModel {
        &self.model
    }

    /// Swap in a new result set. Explicit choices never survive a cycle, so
    /// the selection falls back to the first item (or none when empty).
    pub fn set_items(&mut self, keys: Vec<String>) -> SelectionChange {
        let previous = self.selected;
        self.model.replace(keys);
        self.explicit = false;
        self.selected = (!self.model.is_empty()).then_some(0);
        SelectionChange {
            previous,
            current: self.selected,
        }
    }

    /// Explicitly select `position`. Out of range positions are ignored.
    /// Returns the change when the selected index actually moved.
    pub fn select(&mut self, position: usize) -> Option<SelectionChange> {
        if position >= self.model.len() {
            return None;
        }

        self.explicit = true;
        let previous = self.selected;
        if previous == Some(position) {
            return None;
        }

        self.selected = Some(position);
        Some(SelectionChange {
            previous,
            current: self.selected,
        })
    }

    /// Move one row down, stopping at the last row
    pub fn select_next(&mut self) -> Option<SelectionChange> {
        let next = self.selected.map_or(0, |i| i + 1);
        self.select(next)
    }

    /// Move one row up, stopping at the first row
    pub fn select_prev(&mut self) -> Option<SelectionChange> {
        let prev = self.selected?.checked_sub(1)?;
        self.select(prev)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected.and_then(|i| self.model.get(i))
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.selected == Some(position)
    }

    /// Whether the current selection came from a user choice
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }
}
