//! Style sheet registration on the GTK display

use gtk4::gdk;
use tracing::debug;
use walker_core::{StylePriority, StyleRegistry, StyleSheet};

/// Default sheet, used when `~/.config/walker/style.css` does not exist
pub const DEFAULT_STYLE: &str = include_str!("../assets/style.css");

/// Registers sheets as CSS providers for one display
pub struct DisplayStyles {
    display: gdk::Display,
}

impl DisplayStyles {
    pub fn new(display: gdk::Display) -> Self {
        Self { display }
    }
}

impl StyleRegistry for DisplayStyles {
    fn register(&self, sheet: &StyleSheet, priority: StylePriority) {
        let provider = gtk4::CssProvider::new();
        provider.load_from_string(&sheet.css);

        let priority = match priority {
            StylePriority::Application => gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            StylePriority::User => gtk4::STYLE_PROVIDER_PRIORITY_USER,
        };
        gtk4::style_context_add_provider_for_display(&self.display, &provider, priority);
        debug!(origin = ?sheet.origin, priority, "CSS provider registered");
    }
}
