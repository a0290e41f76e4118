//! Shared types for the Walker launcher.
//!
//! This crate holds the data handed between the entry provider, the
//! toolkit-agnostic list logic in walker-core and the GTK frontend. All types
//! deserialize from the JSON forms used by `config.json` and the dmenu input.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `null` and `""` the same as absent
fn deserialize_empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

/// Deserialize an alignment name; empty and unknown names become `None`
fn deserialize_align<'de, D>(deserializer: D) -> Result<Option<Align>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(Align::from_name))
}

/// One candidate result shown as a row in the list.
///
/// Entries are keyed by an opaque id that lives outside the struct (see the
/// entry store in walker-core); the id is what the list model holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Main text of the row
    pub label: String,

    /// Secondary text rendered below the label
    #[serde(default, alias = "sub", deserialize_with = "deserialize_empty_as_none")]
    pub subtitle: Option<String>,

    /// Icon theme name
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    pub icon: Option<String>,

    /// Style class applied to the row, and to the window while selected
    #[serde(default, alias = "styleClass")]
    pub class: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            class: class.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into()).filter(|s: &String| !s.is_empty());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into()).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Whether label or subtitle contains `needle` (already lowercased)
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
            || self
                .subtitle
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle))
    }
}

/// The four canonical alignment values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    Fill,
    Start,
    End,
    Center,
}

impl Align {
    /// Map a config name to an alignment. Names are matched exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fill" => Some(Self::Fill),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
        }
    }
}

/// Main axis of the launcher box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    #[serde(other)]
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Margins {
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub bottom: i32,
    #[serde(default)]
    pub start: i32,
    #[serde(default)]
    pub end: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlignConfig {
    /// Fixed width of the launcher box, 0 keeps the natural width
    #[serde(default)]
    pub width: i32,
    #[serde(default, deserialize_with = "deserialize_align")]
    pub horizontal: Option<Align>,
    #[serde(default, deserialize_with = "deserialize_align")]
    pub vertical: Option<Align>,
    #[serde(default)]
    pub margins: Margins,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    /// Maximum height of the scrolled list, 0 leaves it unbounded
    #[serde(default)]
    pub max_height: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IconsConfig {
    #[serde(default)]
    pub hide: bool,
    /// Pixel size of row icons, 0 keeps the theme size
    #[serde(default)]
    pub size: i32,
}

/// Launcher configuration, read once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub align: AlignConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub icons: IconsConfig,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub placeholder: String,
}
