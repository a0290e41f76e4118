//! Recycled list rows.
//!
//! `GtkRow` is the widget side of a row slot; the list view's
//! `SignalListItemFactory` forwards setup, bind and selection changes to the
//! shared `ItemList`.

use crate::window::WindowWidgets;
use gtk4::prelude::*;
use gtk4::{Align, Orientation, SignalListItemFactory};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;
use walker_core::{ItemList, RowSlot, RowSurface};

/// List item data key holding the row slot
const SLOT_KEY: &str = "walker-slot";

type SlotHandle = Rc<RefCell<RowSlot<GtkRow>>>;

struct TextWidgets {
    wrapper: gtk4::Box,
    label: gtk4::Label,
    subtitle: Option<gtk4::Label>,
}

/// Row container plus the content children created so far
pub struct GtkRow {
    container: gtk4::Box,
    icon: Option<gtk4::Image>,
    text: Option<TextWidgets>,
}

impl Default for GtkRow {
    fn default() -> Self {
        Self::new()
    }
}

impl GtkRow {
    pub fn new() -> Self {
        Self {
            container: gtk4::Box::new(Orientation::Horizontal, 0),
            icon: None,
            text: None,
        }
    }

    pub fn widget(&self) -> &gtk4::Box {
        &self.container
    }
}

fn start_label(text: &str, class: &str) -> gtk4::Label {
    let label = gtk4::Label::new(Some(text));
    label.set_halign(Align::Start);
    label.set_css_classes(&[class]);
    label
}

impl RowSurface for GtkRow {
    fn make_focusable(&mut self) {
        self.container.set_focusable(true);
    }

    fn set_classes(&mut self, classes: &[&str]) {
        self.container.set_css_classes(classes);
    }

    fn insert_text(&mut self, label: &str) {
        let wrapper = gtk4::Box::new(Orientation::Vertical, 0);
        wrapper.set_css_classes(&["textwrapper"]);

        let label = start_label(label, "label");
        wrapper.append(&label);
        self.container.append(&wrapper);

        self.text = Some(TextWidgets {
            wrapper,
            label,
            subtitle: None,
        });
    }

    fn update_label(&mut self, label: &str) {
        if let Some(text) = &self.text {
            text.label.set_label(label);
        }
    }

    fn set_text_centered(&mut self, centered: bool) {
        if let Some(text) = &self.text {
            text.wrapper
                .set_valign(if centered { Align::Center } else { Align::Fill });
        }
    }

    fn insert_icon(&mut self, name: &str, pixel_size: Option<i32>) {
        let icon = gtk4::Image::from_icon_name(name);
        icon.set_icon_size(gtk4::IconSize::Large);
        if let Some(size) = pixel_size {
            icon.set_pixel_size(size);
        }
        icon.set_css_classes(&["icon"]);
        self.container.prepend(&icon);
        self.icon = Some(icon);
    }

    fn update_icon(&mut self, name: &str, visible: bool) {
        if let Some(icon) = &self.icon {
            icon.set_icon_name(Some(name));
            icon.set_visible(visible);
        }
    }

    fn insert_subtitle(&mut self, subtitle: &str) {
        if let Some(text) = &mut self.text {
            let label = start_label(subtitle, "sub");
            text.wrapper.append(&label);
            text.subtitle = Some(label);
        }
    }

    fn update_subtitle(&mut self, subtitle: &str, visible: bool) {
        if let Some(label) = self.text.as_ref().and_then(|t| t.subtitle.as_ref()) {
            label.set_label(subtitle);
            label.set_visible(visible);
        }
    }

    fn grab_focus(&self) {
        self.container.grab_focus();
    }
}

fn slot_of(list_item: &gtk4::ListItem) -> Option<SlotHandle> {
    // SAFETY: SLOT_KEY is only ever set to a `SlotHandle` in `connect_setup`
    unsafe {
        list_item
            .data::<SlotHandle>(SLOT_KEY)
            .map(|ptr| ptr.as_ref().clone())
    }
}

/// Factory wiring list items to `ItemList` row slots
pub fn create_factory(
    list: &Rc<RefCell<ItemList>>,
    window: &WindowWidgets,
) -> SignalListItemFactory {
    let factory = SignalListItemFactory::new();

    let setup_list = Rc::clone(list);
    let setup_window = window.clone();
    factory.connect_setup(move |_, object| {
        let Some(list_item) = object.downcast_ref::<gtk4::ListItem>() else {
            return;
        };

        let row = GtkRow::new();
        list_item.set_child(Some(row.widget()));
        let slot: SlotHandle = Rc::new(RefCell::new(setup_list.borrow().setup(row)));

        let notify_list = Rc::clone(&setup_list);
        let notify_window = setup_window.clone();
        let notify_slot = Rc::downgrade(&slot);
        list_item.connect_selected_notify(move |item| {
            if !item.is_selected() {
                return;
            }
            let Some(slot) = notify_slot.upgrade() else {
                return;
            };
            // Already borrowed when the selection moves during this slot's bind
            let Ok(slot) = slot.try_borrow() else {
                return;
            };
            let Ok(mut list) = notify_list.try_borrow_mut() else {
                return;
            };
            list.select_slot(&slot, &notify_window);
        });

        // SAFETY: read back only as `SlotHandle` in `slot_of`
        unsafe {
            list_item.set_data(SLOT_KEY, slot);
        }
    });

    let bind_list = Rc::clone(list);
    let bind_window = window.clone();
    factory.connect_bind(move |_, object| {
        let Some(list_item) = object.downcast_ref::<gtk4::ListItem>() else {
            return;
        };
        let Some(key) = list_item
            .item()
            .and_downcast::<gtk4::StringObject>()
            .map(|s| s.string())
        else {
            return;
        };
        let Some(slot) = slot_of(list_item) else {
            trace!(key = %key, "bind on item without slot");
            return;
        };

        let Ok(list) = bind_list.try_borrow() else {
            return;
        };
        let position = list_item.position() as usize;
        list.bind(&mut slot.borrow_mut(), position, &key, &bind_window);
    });

    factory
}
