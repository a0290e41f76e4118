//! The launcher's item list: current entry store, selection and row factory.

use crate::factory::{BindOutcome, RecyclingFactory, RowSlot, RowSurface, WindowSurface};
use crate::model::{SelectionChange, SelectionModel};
use crate::store::EntryStore;
use tracing::debug;
use walker_types::{Entry, IconsConfig};

/// Per-window list state. Lives as long as the window; the entry store is
/// swapped once per search cycle.
#[derive(Debug, Default)]
pub struct ItemList {
    store: EntryStore,
    selection: SelectionModel,
    factory: RecyclingFactory,
}

impl ItemList {
    pub fn new(icons: IconsConfig) -> Self {
        Self {
            store: EntryStore::new(),
            selection: SelectionModel::new(),
            factory: RecyclingFactory::new(icons),
        }
    }

    /// Start a new display cycle with `store`.
    ///
    /// The model is replaced wholesale and the selection resets to the first
    /// row. The list is hidden while empty.
    pub fn set_results<W: WindowSurface>(
        &mut self,
        store: EntryStore,
        window: &W,
    ) -> SelectionChange {
        debug!(count = store.len(), "new result set");
        let keys = store.keys().to_vec();
        self.store = store;
        let change = self.selection.set_items(keys);
        window.set_list_visible(!self.selection.is_empty());
        change
    }

    pub fn setup<R: RowSurface>(&self, surface: R) -> RowSlot<R> {
        self.factory.setup(surface)
    }

    /// Bind the row at `position` showing `key`
    pub fn bind<R, W>(
        &self,
        slot: &mut RowSlot<R>,
        position: usize,
        key: &str,
        window: &W,
    ) -> BindOutcome
    where
        R: RowSurface,
        W: WindowSurface,
    {
        let selected = self.selection.is_selected(position);
        self.factory.bind(slot, key, &self.store, selected, window)
    }

    /// The toolkit moved its selection onto `slot`.
    ///
    /// The slot's entry becomes the selected one here too, then gets mirrored
    /// onto the window. Re-selecting the current row keeps an autoselection
    /// implicit.
    pub fn select_slot<R, W>(&mut self, slot: &RowSlot<R>, window: &W) -> bool
    where
        R: RowSurface,
        W: WindowSurface,
    {
        let Some(position) = slot.key().and_then(|key| self.selection.model().position(key))
        else {
            return false;
        };
        if !self.selection.is_selected(position) {
            self.selection.select(position);
        }
        RecyclingFactory::select(slot, &self.store, window)
    }

    pub fn select(&mut self, position: usize) -> Option<SelectionChange> {
        self.selection.select(position)
    }

    pub fn select_next(&mut self) -> Option<SelectionChange> {
        self.selection.select_next()
    }

    pub fn select_prev(&mut self) -> Option<SelectionChange> {
        self.selection.select_prev()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selection.selected_key()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_key().and_then(|key| self.store.get(key))
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn factory(&self) -> &RecyclingFactory {
        &self.factory
    }
}
