//! Launcher window built from the embedded layout template

use crate::provider::EntrySource;
use crate::row;
use anyhow::Context;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, debug_span, info};
use walker_core::{
    Align, Config, Error, ItemList, LayoutPlan, LayoutTarget, SelectionChange, WindowSurface,
};

/// Window structure: `win` > `box` > (`search`, `scroll` > `list`)
const LAYOUT: &str = include_str!("../assets/layout.ui");

fn template_object<T: IsA<glib::Object>>(builder: &gtk4::Builder, id: &str) -> Result<T, Error> {
    builder
        .object::<T>(id)
        .ok_or_else(|| Error::Template(format!("missing object '{id}'")))
}

fn gtk_align(align: Align) -> gtk4::Align {
    match align {
        Align::Fill => gtk4::Align::Fill,
        Align::Start => gtk4::Align::Start,
        Align::End => gtk4::Align::End,
        Align::Center => gtk4::Align::Center,
    }
}

/// The template's named widgets
#[derive(Clone)]
pub struct WindowWidgets {
    window: gtk4::ApplicationWindow,
    container: gtk4::Box,
    scroll: gtk4::ScrolledWindow,
    search: gtk4::Entry,
    list: gtk4::ListView,
}

impl WindowWidgets {
    fn from_template(builder: &gtk4::Builder) -> Result<Self, Error> {
        Ok(Self {
            window: template_object(builder, "win")?,
            container: template_object(builder, "box")?,
            scroll: template_object(builder, "scroll")?,
            search: template_object(builder, "search")?,
            list: template_object(builder, "list")?,
        })
    }
}

impl WindowSurface for WindowWidgets {
    fn set_window_classes(&self, classes: &[&str]) {
        self.window.set_css_classes(classes);
    }

    fn focus_search_without_selecting(&self) {
        self.search.grab_focus_without_selecting();
    }

    fn set_list_visible(&self, visible: bool) {
        self.list.set_visible(visible);
    }
}

impl LayoutTarget for WindowWidgets {
    fn set_box_width(&mut self, width: i32) {
        self.container.set_size_request(width, -1);
    }

    fn set_list_max_height(&mut self, height: i32) {
        self.scroll.set_max_content_height(height);
    }

    fn set_box_halign(&mut self, align: Align) {
        self.container.set_halign(gtk_align(align));
    }

    fn set_box_valign(&mut self, align: Align) {
        self.container.set_valign(gtk_align(align));
    }

    fn set_box_horizontal(&mut self) {
        self.container.set_orientation(gtk4::Orientation::Horizontal);
    }

    fn set_search_valign(&mut self, align: Align) {
        self.search.set_valign(gtk_align(align));
    }

    fn set_margin_top(&mut self, margin: i32) {
        self.container.set_margin_top(margin);
    }

    fn set_margin_bottom(&mut self, margin: i32) {
        self.container.set_margin_bottom(margin);
    }

    fn set_margin_start(&mut self, margin: i32) {
        self.container.set_margin_start(margin);
    }

    fn set_margin_end(&mut self, margin: i32) {
        self.container.set_margin_end(margin);
    }

    fn set_placeholder(&mut self, text: &str) {
        self.search.set_placeholder_text(Some(text));
    }
}

pub struct LauncherWindow {
    app: gtk4::Application,
    widgets: WindowWidgets,
    items: gtk4::StringList,
    selection: gtk4::SingleSelection,
    list: Rc<RefCell<ItemList>>,
    source: EntrySource,
}

impl LauncherWindow {
    /// Build the window once; layout and factory are fixed for its lifetime.
    ///
    /// # Errors
    ///
    /// Fails when the layout template lacks one of its named objects.
    pub fn new(
        app: &gtk4::Application,
        config: &Config,
        source: EntrySource,
    ) -> anyhow::Result<Rc<Self>> {
        let builder = gtk4::Builder::from_string(LAYOUT);
        let mut widgets =
            WindowWidgets::from_template(&builder).context("Failed to load layout template")?;
        widgets.window.set_application(Some(app));

        Self::init_layer_shell(&widgets.window);

        LayoutPlan::from_config(config).apply(&mut widgets);

        let items = gtk4::StringList::new(&[]);
        let selection = gtk4::SingleSelection::new(Some(items.clone()));
        selection.set_autoselect(true);
        selection.set_can_unselect(false);

        let list = Rc::new(RefCell::new(ItemList::new(config.icons.clone())));
        let factory = row::create_factory(&list, &widgets);

        widgets.list.set_model(Some(&selection));
        widgets.list.set_factory(Some(&factory));
        widgets.list.set_visible(false);

        let launcher = Rc::new(Self {
            app: app.clone(),
            widgets,
            items,
            selection,
            list,
            source,
        });

        Self::connect_search(&launcher);
        Self::connect_selection(&launcher);
        Self::connect_keys(&launcher);
        launcher.refresh("");

        info!("Launcher window ready");
        Ok(launcher)
    }

    fn init_layer_shell(window: &gtk4::ApplicationWindow) {
        window.init_layer_shell();
        window.set_layer(Layer::Overlay);
        window.set_keyboard_mode(KeyboardMode::Exclusive);
        window.set_namespace(Some("walker"));

        // Fullscreen surface: the box's alignment and margins place the launcher
        window.set_anchor(Edge::Top, true);
        window.set_anchor(Edge::Left, true);
        window.set_anchor(Edge::Right, true);
        window.set_anchor(Edge::Bottom, true);
        window.set_exclusive_zone(-1);
    }

    fn connect_search(launcher: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(launcher);
        launcher.widgets.search.connect_changed(move |search| {
            if let Some(launcher) = weak.upgrade() {
                launcher.refresh(&search.text());
            }
        });
    }

    /// Selection changes made by the list view itself (pointer clicks)
    /// become the list's selection, so activation and navigation follow the
    /// highlighted row.
    fn connect_selection(launcher: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(launcher);
        launcher.selection.connect_selected_notify(move |selection| {
            let Some(launcher) = weak.upgrade() else {
                return;
            };
            let Ok(position) = usize::try_from(selection.selected()) else {
                return;
            };
            // Held while the list itself drives the change
            let Ok(mut list) = launcher.list.try_borrow_mut() else {
                return;
            };
            if position < list.selection().len() && list.selected() != Some(position) {
                debug!(position, "selection moved by list view");
                list.select(position);
            }
        });
    }

    fn connect_keys(launcher: &Rc<Self>) {
        let controller = gtk4::EventControllerKey::new();
        controller.set_propagation_phase(gtk4::PropagationPhase::Capture);

        let weak: Weak<Self> = Rc::downgrade(launcher);
        controller.connect_key_pressed(move |_, keyval, _keycode, _modifier| {
            let Some(launcher) = weak.upgrade() else {
                return glib::Propagation::Proceed;
            };

            match keyval {
                gdk::Key::Down => {
                    let change = launcher.list.borrow_mut().select_next();
                    launcher.apply_selection(change);
                    glib::Propagation::Stop
                }
                gdk::Key::Up => {
                    let change = launcher.list.borrow_mut().select_prev();
                    launcher.apply_selection(change);
                    glib::Propagation::Stop
                }
                gdk::Key::Return | gdk::Key::KP_Enter => {
                    launcher.activate();
                    glib::Propagation::Stop
                }
                gdk::Key::Escape => {
                    debug!("Escape pressed, quitting");
                    launcher.app.quit();
                    glib::Propagation::Stop
                }
                _ => glib::Propagation::Proceed,
            }
        });

        launcher.widgets.window.add_controller(controller);
    }

    /// New display cycle for `query`
    fn refresh(&self, query: &str) {
        let _span = debug_span!("cycle", query).entered();
        let store = self.source.query(query);
        let keys: Vec<String> = store.keys().to_vec();

        let change = self
            .list
            .borrow_mut()
            .set_results(store, &self.widgets);

        let additions: Vec<&str> = keys.iter().map(String::as_str).collect();
        self.items.splice(0, self.items.n_items(), &additions);
        self.sync_selection(change.current);
    }

    fn apply_selection(&self, change: Option<SelectionChange>) {
        if let Some(change) = change {
            self.sync_selection(change.current);
        }
    }

    /// Push the list's selection into the GTK selection model
    fn sync_selection(&self, current: Option<usize>) {
        let Some(position) = current.and_then(|i| u32::try_from(i).ok()) else {
            self.selection.set_selected(gtk4::INVALID_LIST_POSITION);
            return;
        };

        self.selection.set_selected(position);
        self.widgets
            .list
            .scroll_to(position, gtk4::ListScrollFlags::NONE, None);
    }

    /// Print the selected key and quit
    fn activate(&self) {
        if let Some(key) = self.list.borrow().selected_key() {
            info!(key, "activated");
            println!("{key}");
        }
        self.app.quit();
    }

    pub fn present(&self) {
        self.widgets.window.present();
        self.widgets.search.grab_focus();
    }
}
