//! Tests for applying config to the window layout

use super::fixtures::FakeLayout;
use crate::layout::LayoutPlan;
use walker_types::{Align, Config, Margins, Orientation};

fn apply(config: &Config) -> FakeLayout {
    let mut target = FakeLayout::default();
    LayoutPlan::from_config(config).apply(&mut target);
    target
}

#[test]
fn test_default_config_touches_nothing() {
    let target = apply(&Config::default());
    assert_eq!(target, FakeLayout::default());
    assert_eq!(target.calls, 0);
}

#[test]
fn test_width_and_max_height() {
    let mut config = Config::default();
    config.align.width = 420;
    config.list.max_height = 300;

    let target = apply(&config);

    assert_eq!(target.width, Some(420));
    assert_eq!(target.max_height, Some(300));
}

#[test]
fn test_alignment_maps_one_to_one() {
    for align in [Align::Fill, Align::Start, Align::End, Align::Center] {
        let mut config = Config::default();
        config.align.horizontal = Some(align);
        config.align.vertical = Some(align);

        let target = apply(&config);

        assert_eq!(target.halign, Some(align));
        assert_eq!(target.valign, Some(align));
    }
}

#[test]
fn test_unknown_alignment_from_json_is_noop() {
    let config: Config =
        serde_json::from_str(r#"{"align": {"horizontal": "left", "vertical": ""}}"#).unwrap();

    let target = apply(&config);

    assert_eq!(target.halign, None);
    assert_eq!(target.valign, None);
}

#[test]
fn test_margins_map_independently() {
    let mut config = Config::default();
    config.align.margins = Margins {
        top: 1,
        bottom: 2,
        start: 3,
        end: 4,
    };

    let target = apply(&config);

    assert_eq!(target.margin_top, Some(1));
    assert_eq!(target.margin_bottom, Some(2));
    assert_eq!(target.margin_start, Some(3));
    assert_eq!(target.margin_end, Some(4));
}

#[test]
fn test_zero_margin_leaves_default() {
    let mut config = Config::default();
    config.align.margins.top = 12;

    let target = apply(&config);

    assert_eq!(target.margin_top, Some(12));
    assert_eq!(target.margin_bottom, None);
    assert_eq!(target.margin_start, None);
    assert_eq!(target.margin_end, None);
}

#[test]
fn test_placeholder() {
    let mut config = Config::default();
    config.placeholder = "Search apps".to_string();
    assert_eq!(apply(&config).placeholder.as_deref(), Some("Search apps"));

    config.placeholder = String::new();
    assert_eq!(apply(&config).placeholder, None);
}

#[test]
fn test_horizontal_orientation_switches_axis_and_search() {
    let mut config = Config::default();
    config.orientation = Orientation::Horizontal;

    let target = apply(&config);

    assert!(target.horizontal);
    assert_eq!(target.search_valign, Some(Align::Start));
}

#[test]
fn test_vertical_orientation_leaves_axis_and_search() {
    let config: Config = serde_json::from_str(r#"{"orientation": "vertical"}"#).unwrap();
    let target = apply(&config);
    assert!(!target.horizontal);
    assert_eq!(target.search_valign, None);

    let config: Config = serde_json::from_str(r#"{"orientation": "upside-down"}"#).unwrap();
    let target = apply(&config);
    assert!(!target.horizontal);
    assert_eq!(target.search_valign, None);
}

#[test]
fn test_full_config_round_trip() {
    let json = r#"{
        "align": {
            "width": 500,
            "horizontal": "center",
            "vertical": "start",
            "margins": {"top": 50, "bottom": 5, "start": 6, "end": 7}
        },
        "list": {"maxHeight": 400},
        "placeholder": "Type to search"
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    let target = apply(&config);

    assert_eq!(
        target,
        FakeLayout {
            width: Some(500),
            max_height: Some(400),
            halign: Some(Align::Center),
            valign: Some(Align::Start),
            horizontal: false,
            search_valign: None,
            margin_top: Some(50),
            margin_bottom: Some(5),
            margin_start: Some(6),
            margin_end: Some(7),
            placeholder: Some("Type to search".to_string()),
            calls: 9,
        }
    );
}
