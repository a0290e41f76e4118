//! End-to-end display cycles through `ItemList`
//!
//! Simulates the virtualization: a small pool of slots is set up once and
//! rebound as result sets arrive and the selection moves.

use super::fixtures::{FakeRow, FakeWindow, sample_store};
use crate::factory::RowSlot;
use crate::list::ItemList;
use crate::store::EntryStore;
use walker_types::{Entry, IconsConfig};

/// Bind every model position to the slot pool, like a list view on scroll
fn bind_all(list: &ItemList, slots: &mut [RowSlot<FakeRow>], window: &FakeWindow) {
    let keys = list.selection().model().keys().to_vec();
    for (position, key) in keys.iter().enumerate() {
        let slot = &mut slots[position % slots.len()];
        list.bind(slot, position, key, window);
    }
}

fn pool(list: &ItemList, size: usize) -> Vec<RowSlot<FakeRow>> {
    (0..size).map(|_| list.setup(FakeRow::default())).collect()
}

#[test]
fn test_empty_result_set() {
    let mut list = ItemList::new(IconsConfig::default());
    let window = FakeWindow::default();
    window.list_visible.set(true);

    let change = list.set_results(EntryStore::new(), &window);
    let mut slots = pool(&list, 2);
    bind_all(&list, &mut slots, &window);

    assert_eq!(change.current, None);
    assert!(!window.list_visible.get());
    assert_eq!(list.selected(), None);
    assert_eq!(window.class_changes.get(), 0);
}

#[test]
fn test_single_entry_cycle() {
    let mut list = ItemList::new(IconsConfig::default());
    let window = FakeWindow::default();
    let store = EntryStore::from_entries([("a", Entry::new("Open File", "app"))]);

    list.set_results(store, &window);
    let mut slots = pool(&list, 1);
    bind_all(&list, &mut slots, &window);

    let row = slots[0].surface();
    assert!(window.list_visible.get());
    assert_eq!(row.classes, ["item", "app"]);
    assert_eq!(window.classes(), ["app"]);
    assert_eq!(row.visible_labels(), ["Open File"]);
    assert_eq!(row.subtitle, None);
}

#[test]
fn test_window_class_follows_selected_row() {
    let mut list = ItemList::new(IconsConfig::default());
    let window = FakeWindow::default();
    list.set_results(sample_store(), &window);
    let mut slots = pool(&list, 4);
    bind_all(&list, &mut slots, &window);
    assert_eq!(window.classes(), ["app"]);

    let change = list.select_next().unwrap();
    let current = change.current.unwrap();
    assert!(list.select_slot(&slots[current], &window));

    assert_eq!(list.selected_key(), Some("b"));
    assert_eq!(window.classes(), ["calc"]);
    assert_eq!(list.selected_entry().map(|e| e.label.as_str()), Some("Calc"));
}

#[test]
fn test_toolkit_selected_slot_becomes_the_selection() {
    let mut list = ItemList::new(IconsConfig::default());
    let window = FakeWindow::default();
    list.set_results(sample_store(), &window);
    let mut slots = pool(&list, 4);
    bind_all(&list, &mut slots, &window);

    // A click lands the toolkit selection on the third row
    assert!(list.select_slot(&slots[2], &window));

    assert_eq!(window.classes(), ["browser"]);
    assert_eq!(list.selected(), Some(2));
    assert_eq!(list.selected_key(), Some("c"));
    assert!(list.selection().is_explicit());

    // Keyboard navigation continues from the clicked row
    let change = list.select_prev().unwrap();
    assert_eq!(change.previous, Some(2));
    assert_eq!(list.selected_key(), Some("b"));
}

#[test]
fn test_reselecting_autoselected_slot_stays_implicit() {
    let mut list = ItemList::new(IconsConfig::default());
    let window = FakeWindow::default();
    list.set_results(sample_store(), &window);
    let mut slots = pool(&list, 2);
    bind_all(&list, &mut slots, &window);

    assert!(list.select_slot(&slots[0], &window));

    assert_eq!(list.selected_key(), Some("a"));
    assert!(!list.selection().is_explicit());
}

#[test]
fn test_select_slot_from_previous_cycle_is_ignored() {
    let mut list = ItemList::new(IconsConfig::default());
    let window = FakeWindow::default();
    list.set_results(sample_store(), &window);
    let mut slots = pool(&list, 1);
    bind_all(&list, &mut slots, &window);
    let changes = window.class_changes.get();

    let next = EntryStore::from_entries([("x", Entry::new("Files", "files"))]);
    list.set_results(next, &window);

    // slots[0] still shows "d" until it is rebound
    assert!(!list.select_slot(&slots[0], &window));
    assert_eq!(list.selected_key(), Some("x"));
    assert_eq!(window.class_changes.get(), changes);
}

#[test]
fn test_new_cycle_reuses_slots_and_resets_selection() {
    let mut list = ItemList::new(IconsConfig::default());
    let window = FakeWindow::default();
    list.set_results(sample_store(), &window);
    let mut slots = pool(&list, 2);
    bind_all(&list, &mut slots, &window);
    list.select(3);

    let next = EntryStore::from_entries([
        ("x", Entry::new("Files", "files").with_icon("folder")),
        ("y", Entry::new("Settings", "settings").with_subtitle("System")),
    ]);
    list.set_results(next, &window);
    bind_all(&list, &mut slots, &window);

    assert_eq!(list.selected(), Some(0));
    assert_eq!(window.classes(), ["files"]);
    for slot in &slots {
        assert!(slot.surface().icon_count() <= 1);
        assert_eq!(slot.surface().wrapper_count(), 1);
    }
    assert_eq!(slots[0].surface().visible_labels(), ["Files"]);
    assert_eq!(slots[1].surface().visible_labels(), ["Settings", "System"]);
}

#[test]
fn test_filtered_cycle_from_store() {
    let mut list = ItemList::new(IconsConfig::default());
    let window = FakeWindow::default();
    let all = sample_store();

    let needle = "calc";
    list.set_results(all.filtered(|_, e| e.matches_lowercase(needle)), &window);

    assert_eq!(list.selection().model().keys(), ["b"]);
    assert_eq!(list.selected_key(), Some("b"));
}
