//! Tests for the list model and autoselect-first selection

use super::fixtures::keys;
use crate::model::{SelectionChange, SelectionModel};
use proptest::prelude::*;

#[test]
fn test_autoselect_first_on_fill() {
    let mut selection = SelectionModel::new();

    let change = selection.set_items(keys(&["a", "b", "c"]));

    assert_eq!(
        change,
        SelectionChange {
            previous: None,
            current: Some(0)
        }
    );
    assert_eq!(selection.selected_key(), Some("a"));
    assert!(!selection.is_explicit());
}

#[test]
fn test_empty_model_has_no_selection() {
    let mut selection = SelectionModel::new();
    selection.set_items(keys(&["a"]));

    let change = selection.set_items(Vec::new());

    assert_eq!(change.current, None);
    assert_eq!(selection.selected(), None);
    assert_eq!(selection.selected_key(), None);
}

#[test]
fn test_explicit_choice_does_not_survive_new_cycle() {
    let mut selection = SelectionModel::new();
    selection.set_items(keys(&["a", "b", "c"]));
    selection.select(2);
    assert!(selection.is_explicit());

    selection.set_items(keys(&["x", "y", "z"]));

    assert_eq!(selection.selected(), Some(0));
    assert!(!selection.is_explicit());
}

#[test]
fn test_next_and_prev_clamp() {
    let mut selection = SelectionModel::new();
    selection.set_items(keys(&["a", "b"]));

    assert_eq!(selection.select_prev(), None);
    assert_eq!(
        selection.select_next(),
        Some(SelectionChange {
            previous: Some(0),
            current: Some(1)
        })
    );
    assert_eq!(selection.select_next(), None);
    assert_eq!(selection.selected_key(), Some("b"));
    assert_eq!(
        selection.select_prev(),
        Some(SelectionChange {
            previous: Some(1),
            current: Some(0)
        })
    );
}

#[test]
fn test_is_selected() {
    let mut selection = SelectionModel::new();
    selection.set_items(keys(&["a", "b"]));
    selection.select(1);

    assert!(!selection.is_selected(0));
    assert!(selection.is_selected(1));
}

proptest! {
    #[test]
    fn prop_non_empty_model_selects_first(names in prop::collection::vec("[a-z]{1,8}", 1..30)) {
        let mut selection = SelectionModel::new();
        selection.set_items(names.clone());

        prop_assert_eq!(selection.selected(), Some(0));
        prop_assert_eq!(selection.selected_key(), Some(names[0].as_str()));
    }

    #[test]
    fn prop_exactly_one_selected_while_non_empty(
        len in 1usize..20,
        moves in prop::collection::vec(any::<bool>(), 0..50),
    ) {
        let mut selection = SelectionModel::new();
        selection.set_items((0..len).map(|i| i.to_string()).collect());

        for down in moves {
            if down {
                selection.select_next();
            } else {
                selection.select_prev();
            }
            let selected = selection.selected();
            prop_assert!(selected.is_some_and(|i| i < len));
            prop_assert_eq!((0..len).filter(|i| selection.is_selected(*i)).count(), 1);
        }
    }
}
