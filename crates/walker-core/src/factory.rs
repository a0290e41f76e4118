//! Recycling row factory.
//!
//! The list virtualization owns a small pool of row slots and reassigns them
//! to different entries as the list scrolls or the result set changes. Each
//! slot walks a fixed state machine:
//!
//! ```text
//! Unbound --setup--> Skeleton --bind--> Populated --bind--> Populated
//! ```
//!
//! A slot's content children (icon, text wrapper, label, subtitle) are created
//! once per slot lifetime. Later binds only reassign style classes and update
//! text and icon content in place, so a recycled slot never accumulates
//! duplicate children.
//!
//! The toolkit is reached through [`RowSurface`] and [`WindowSurface`]; the GTK
//! frontend implements them over real widgets, tests over recording fakes.

use crate::store::EntryStore;
use tracing::{debug, trace};
use walker_types::{Entry, IconsConfig};

/// Style class every row carries in addition to its entry class
pub const ITEM_CLASS: &str = "item";

/// Widget operations on one recycled row.
///
/// The factory guarantees the call order: `make_focusable` once, then at most
/// one `insert_text`, at most one `insert_icon` and at most one
/// `insert_subtitle` over the slot's lifetime. `update_*` calls only follow
/// the matching `insert_*`.
pub trait RowSurface {
    /// Skeleton setup: the row container accepts focus
    fn make_focusable(&mut self);

    /// Replace the row's style classes
    fn set_classes(&mut self, classes: &[&str]);

    /// Create the text wrapper holding a start-aligned label
    fn insert_text(&mut self, label: &str);

    fn update_label(&mut self, label: &str);

    /// Vertically center the text wrapper (single-line rows)
    fn set_text_centered(&mut self, centered: bool);

    /// Create the icon before the text wrapper. `pixel_size` of `None` keeps
    /// the theme size.
    fn insert_icon(&mut self, name: &str, pixel_size: Option<i32>);

    fn update_icon(&mut self, name: &str, visible: bool);

    /// Append a start-aligned subtitle label below the main label
    fn insert_subtitle(&mut self, subtitle: &str);

    fn update_subtitle(&mut self, subtitle: &str, visible: bool);

    fn grab_focus(&self);
}

/// Window-level effects of a selected row
pub trait WindowSurface {
    /// Replace the window's style classes
    fn set_window_classes(&self, classes: &[&str]);

    /// Give focus back to the search input, keeping its text selection
    fn focus_search_without_selecting(&self);

    fn set_list_visible(&self, visible: bool);
}

/// Optional children present in a populated row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowParts {
    pub icon: bool,
    pub subtitle: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotState {
    /// Freshly allocated, no widgets configured
    #[default]
    Unbound,
    /// Focusable container without content
    Skeleton,
    /// Text wrapper and label exist, plus the listed optional children
    Populated(RowParts),
}

impl SlotState {
    /// Setup transition. Setup on an already set-up slot leaves it as is.
    #[must_use]
    pub fn setup(self) -> Self {
        match self {
            Self::Unbound => Self::Skeleton,
            other => other,
        }
    }

    /// Content transition: the slot now holds at least the `needed` parts.
    /// Parts are only ever added.
    #[must_use]
    pub fn populate(self, needed: RowParts) -> Self {
        match self {
            Self::Populated(have) => Self::Populated(RowParts {
                icon: have.icon || needed.icon,
                subtitle: have.subtitle || needed.subtitle,
            }),
            Self::Unbound | Self::Skeleton => Self::Populated(needed),
        }
    }

    pub fn parts(self) -> Option<RowParts> {
        match self {
            Self::Populated(parts) => Some(parts),
            Self::Unbound | Self::Skeleton => None,
        }
    }
}

/// One recycled row: the toolkit surface plus its lifecycle state
#[derive(Debug)]
pub struct RowSlot<R> {
    surface: R,
    state: SlotState,
    key: Option<String>,
}

impl<R: RowSurface> RowSlot<R> {
    /// A slot the virtualization handed over without running setup
    pub fn unbound(surface: R) -> Self {
        Self {
            surface,
            state: SlotState::Unbound,
            key: None,
        }
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    /// Key of the entry currently shown in this slot
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }
}

/// What a bind did to its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// No entry for the key, slot untouched
    Skipped,
    /// Content children were created
    Built,
    /// Existing children were updated in place
    Refreshed,
}

/// Drives setup and bind for recycled rows
#[derive(Debug, Clone, Default)]
pub struct RecyclingFactory {
    icons: IconsConfig,
}

impl RecyclingFactory {
    pub fn new(icons: IconsConfig) -> Self {
        Self { icons }
    }

    /// Whether a row for `entry` carries an icon.
    ///
    /// An icon is shown when `icons.hide` is set or the entry names an icon.
    /// The `hide` half reads inverted, but it is the shipped behavior and is
    /// kept until the flag's meaning is settled.
    pub fn wants_icon(&self, entry: &Entry) -> bool {
        self.icons.hide || entry.icon().is_some()
    }

    fn icon_pixel_size(&self) -> Option<i32> {
        (self.icons.size > 0).then_some(self.icons.size)
    }

    /// Setup event: Unbound -> Skeleton
    #[allow(clippy::unused_self)] // Paired with `bind`
    pub fn setup<R: RowSurface>(&self, mut surface: R) -> RowSlot<R> {
        surface.make_focusable();
        RowSlot {
            surface,
            state: SlotState::Unbound.setup(),
            key: None,
        }
    }

    /// Bind event: show entry `key` in `slot`.
    ///
    /// A key without entry leaves the slot exactly as it was. When `selected`
    /// is set the row also takes over the window class, see
    /// [`RecyclingFactory::select`].
    pub fn bind<R, W>(
        &self,
        slot: &mut RowSlot<R>,
        key: &str,
        store: &EntryStore,
        selected: bool,
        window: &W,
    ) -> BindOutcome
    where
        R: RowSurface,
        W: WindowSurface,
    {
        let Some(entry) = store.get(key) else {
            trace!(key, "no entry for bound key, skipping");
            return BindOutcome::Skipped;
        };

        slot.surface.set_classes(&row_classes(entry));

        let outcome = match slot.state {
            SlotState::Unbound => {
                debug!(key, "bind before setup, setting up slot");
                slot.surface.make_focusable();
                slot.state = slot.state.setup();
                self.build(slot, entry)
            }
            SlotState::Skeleton => self.build(slot, entry),
            SlotState::Populated(parts) => self.refresh(slot, parts, entry),
        };
        slot.key = Some(key.to_string());

        if selected {
            Self::mirror(slot, entry, window);
        }

        outcome
    }

    /// Selection moved onto an already bound slot.
    ///
    /// Focuses the row, makes the window's classes exactly the entry's class
    /// and returns focus to the search input. Returns `false` when the slot is
    /// not bound to an entry of `store`.
    pub fn select<R, W>(slot: &RowSlot<R>, store: &EntryStore, window: &W) -> bool
    where
        R: RowSurface,
        W: WindowSurface,
    {
        let Some(entry) = slot.key.as_deref().and_then(|key| store.get(key)) else {
            return false;
        };
        Self::mirror(slot, entry, window);
        true
    }

    fn mirror<R: RowSurface, W: WindowSurface>(slot: &RowSlot<R>, entry: &Entry, window: &W) {
        slot.surface.grab_focus();
        window.set_window_classes(&window_classes(entry));
        window.focus_search_without_selecting();
    }

    /// Skeleton -> Populated
    fn build<R: RowSurface>(&self, slot: &mut RowSlot<R>, entry: &Entry) -> BindOutcome {
        let needed = RowParts {
            icon: self.wants_icon(entry),
            subtitle: entry.subtitle().is_some(),
        };

        if needed.icon {
            slot.surface
                .insert_icon(entry.icon().unwrap_or_default(), self.icon_pixel_size());
        }

        slot.surface.insert_text(&entry.label);

        match entry.subtitle() {
            Some(subtitle) => slot.surface.insert_subtitle(subtitle),
            None => slot.surface.set_text_centered(true),
        }

        slot.state = slot.state.populate(needed);
        BindOutcome::Built
    }

    /// Populated -> Populated, updating children in place
    fn refresh<R: RowSurface>(
        &self,
        slot: &mut RowSlot<R>,
        have: RowParts,
        entry: &Entry,
    ) -> BindOutcome {
        let needed = RowParts {
            icon: self.wants_icon(entry),
            subtitle: entry.subtitle().is_some(),
        };
        let icon_name = entry.icon().unwrap_or_default();

        match (have.icon, needed.icon) {
            (false, true) => slot.surface.insert_icon(icon_name, self.icon_pixel_size()),
            (true, visible) => slot.surface.update_icon(icon_name, visible),
            (false, false) => {}
        }

        slot.surface.update_label(&entry.label);

        match (have.subtitle, entry.subtitle()) {
            (false, Some(subtitle)) => slot.surface.insert_subtitle(subtitle),
            (true, Some(subtitle)) => slot.surface.update_subtitle(subtitle, true),
            (true, None) => slot.surface.update_subtitle("", false),
            (false, None) => {}
        }
        slot.surface.set_text_centered(!needed.subtitle);

        slot.state = slot.state.populate(needed);
        BindOutcome::Refreshed
    }
}

/// `["item", class]`, leaving out an empty entry class
pub fn row_classes(entry: &Entry) -> Vec<&str> {
    let mut classes = vec![ITEM_CLASS];
    if !entry.class.is_empty() {
        classes.push(entry.class.as_str());
    }
    classes
}

/// The window mirrors exactly the selected entry's class
pub fn window_classes(entry: &Entry) -> Vec<&str> {
    if entry.class.is_empty() {
        Vec::new()
    } else {
        vec![entry.class.as_str()]
    }
}
