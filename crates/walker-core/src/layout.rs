//! Config to window layout mapping.
//!
//! [`LayoutPlan::from_config`] keeps only the settings that differ from the
//! toolkit default; [`LayoutPlan::apply`] consumes the plan, so a plan is
//! applied at most once. Reconfiguring means building a new window.

use tracing::debug;
use walker_types::{Align, Config, Orientation};

/// Window widgets the layout touches
pub trait LayoutTarget {
    /// Fix the launcher box width, height stays natural
    fn set_box_width(&mut self, width: i32);
    fn set_list_max_height(&mut self, height: i32);
    fn set_box_halign(&mut self, align: Align);
    fn set_box_valign(&mut self, align: Align);
    /// Lay out the launcher box horizontally
    fn set_box_horizontal(&mut self);
    fn set_search_valign(&mut self, align: Align);
    fn set_margin_top(&mut self, margin: i32);
    fn set_margin_bottom(&mut self, margin: i32);
    fn set_margin_start(&mut self, margin: i32);
    fn set_margin_end(&mut self, margin: i32);
    fn set_placeholder(&mut self, text: &str);
}

/// Concrete layout changes derived from a [`Config`]. `None` means "leave the
/// toolkit default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPlan {
    pub width: Option<i32>,
    pub max_height: Option<i32>,
    pub halign: Option<Align>,
    pub valign: Option<Align>,
    pub horizontal: bool,
    pub margin_top: Option<i32>,
    pub margin_bottom: Option<i32>,
    pub margin_start: Option<i32>,
    pub margin_end: Option<i32>,
    pub placeholder: Option<String>,
}

fn positive(value: i32) -> Option<i32> {
    (value > 0).then_some(value)
}

impl LayoutPlan {
    pub fn from_config(config: &Config) -> Self {
        let margins = &config.align.margins;
        Self {
            width: positive(config.align.width),
            max_height: positive(config.list.max_height),
            halign: config.align.horizontal,
            valign: config.align.vertical,
            horizontal: config.orientation == Orientation::Horizontal,
            margin_top: positive(margins.top),
            margin_bottom: positive(margins.bottom),
            margin_start: positive(margins.start),
            margin_end: positive(margins.end),
            placeholder: Some(config.placeholder.clone()).filter(|p| !p.is_empty()),
        }
    }

    /// Push the plan into the window widgets
    pub fn apply<T: LayoutTarget>(self, target: &mut T) {
        debug!(plan = ?self, "applying layout");

        if let Some(width) = self.width {
            target.set_box_width(width);
        }
        if let Some(height) = self.max_height {
            target.set_list_max_height(height);
        }
        if let Some(align) = self.halign {
            target.set_box_halign(align);
        }
        if let Some(align) = self.valign {
            target.set_box_valign(align);
        }
        if self.horizontal {
            target.set_box_horizontal();
            // Keeps the search input pinned to the top instead of centered
            target.set_search_valign(Align::Start);
        }
        if let Some(margin) = self.margin_top {
            target.set_margin_top(margin);
        }
        if let Some(margin) = self.margin_bottom {
            target.set_margin_bottom(margin);
        }
        if let Some(margin) = self.margin_start {
            target.set_margin_start(margin);
        }
        if let Some(margin) = self.margin_end {
            target.set_margin_end(margin);
        }
        if let Some(placeholder) = self.placeholder.as_deref() {
            target.set_placeholder(placeholder);
        }
    }
}
