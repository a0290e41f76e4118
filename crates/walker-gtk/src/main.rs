//! walker - GTK4 launcher popup
//!
//! Reads entries from stdin, shows them in a layer-shell overlay and prints
//! the key of the activated entry to stdout.

mod provider;
mod row;
mod styles;
mod window;

use gtk4::prelude::*;
use gtk4::{gdk, gio, glib};
use provider::EntrySource;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use styles::{DEFAULT_STYLE, DisplayStyles};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use walker_core::config::{Directories, load_config};
use walker_core::{Error, StyleEngine};
use window::LauncherWindow;

const APP_ID: &str = "org.walker.Launcher";

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

// stdout carries the selection, so logs never go there
fn setup_logging() {
    #[cfg(debug_assertions)]
    {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_filename = format!("walker-{timestamp}.log");
        let log_path = std::path::Path::new("/tmp").join(&log_filename);

        let symlink_path = std::path::Path::new("/tmp/walker.log");
        let _ = std::fs::remove_file(symlink_path);
        let _ = std::os::unix::fs::symlink(&log_path, symlink_path);

        let file_appender = tracing_appender::rolling::never("/tmp", &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(env_filter("walker=debug,walker_core=debug"))
            .init();

        std::mem::forget(guard);
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter("walker=info,walker_core=info"))
            .init();
    }
}

fn main() -> glib::ExitCode {
    setup_logging();

    info!("Starting walker");

    // Read before GTK takes over the main loop
    let source = match EntrySource::from_stdin() {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to read entries from stdin: {e}");
            return glib::ExitCode::FAILURE;
        }
    };
    info!(count = source.len(), "entries loaded");

    if let Err(e) = gtk4::init() {
        error!("Failed to initialize GTK: {e}");
        return glib::ExitCode::FAILURE;
    }

    if !gtk4_layer_shell::is_supported() {
        error!("{}", Error::LayerShellUnsupported);
        return glib::ExitCode::FAILURE;
    }

    let dirs = match Directories::new() {
        Ok(dirs) => dirs,
        Err(e) => {
            error!("{e}");
            return glib::ExitCode::FAILURE;
        }
    };
    let config = load_config(&dirs.config_file);

    let Some(display) = gdk::Display::default() else {
        error!("No default display");
        return glib::ExitCode::FAILURE;
    };
    let registry = DisplayStyles::new(display);
    match StyleEngine::global().install(&registry, &dirs.style_file, DEFAULT_STYLE) {
        Ok(origin) => info!(?origin, "style installed"),
        Err(e) => {
            error!("Failed to install style: {e}");
            return glib::ExitCode::FAILURE;
        }
    }

    let app = gtk4::Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let source = RefCell::new(Some(source));
    let launcher: RefCell<Option<Rc<LauncherWindow>>> = RefCell::new(None);
    let failed = Rc::new(Cell::new(false));
    let activate_failed = Rc::clone(&failed);
    app.connect_activate(move |app| {
        let Some(source) = source.borrow_mut().take() else {
            return;
        };
        match LauncherWindow::new(app, &config, source) {
            Ok(window) => {
                window.present();
                launcher.replace(Some(window));
            }
            Err(e) => {
                error!("Failed to build launcher window: {e:#}");
                activate_failed.set(true);
                app.quit();
            }
        }
    });

    let status = app.run_with_args::<&str>(&[]);
    if failed.get() {
        return glib::ExitCode::FAILURE;
    }
    status
}
