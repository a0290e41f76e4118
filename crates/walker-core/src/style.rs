//! Style sheet resolution and one-time registration.
//!
//! The sheet is either the user's `style.css` or the default compiled into the
//! binary. It is registered once per process, before the window is shown, at
//! user priority so it beats application-default styling.

use crate::{Error, Result};
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Where a resolved sheet came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOrigin {
    Override(PathBuf),
    Embedded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePriority {
    Application,
    User,
}

#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub origin: StyleOrigin,
    pub css: Cow<'static, str>,
}

/// Process-wide style registry of the toolkit
pub trait StyleRegistry {
    fn register(&self, sheet: &StyleSheet, priority: StylePriority);
}

/// Load `override_path` when it is a regular file, else `embedded`.
///
/// # Errors
///
/// An override that cannot be inspected or read is an error; only a path
/// that does not exist falls back to the embedded sheet silently.
pub fn resolve_style(override_path: &Path, embedded: &'static str) -> Result<StyleSheet> {
    let style_read = |source| Error::StyleRead {
        path: override_path.to_path_buf(),
        source,
    };

    match std::fs::metadata(override_path) {
        Ok(meta) if meta.is_file() => {
            let css = std::fs::read_to_string(override_path).map_err(style_read)?;
            info!("Using style override {}", override_path.display());
            return Ok(StyleSheet {
                origin: StyleOrigin::Override(override_path.to_path_buf()),
                css: Cow::Owned(css),
            });
        }
        Ok(_) => debug!("{} is not a file, using default", override_path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No style override at {}, using default", override_path.display());
        }
        Err(e) => return Err(style_read(e)),
    }

    Ok(StyleSheet {
        origin: StyleOrigin::Embedded,
        css: Cow::Borrowed(embedded),
    })
}

/// Registers a sheet exactly once
#[derive(Debug, Default)]
pub struct StyleEngine {
    installed: OnceLock<StyleOrigin>,
}

impl StyleEngine {
    pub const fn new() -> Self {
        Self {
            installed: OnceLock::new(),
        }
    }

    /// The engine shared by the whole process
    pub fn global() -> &'static StyleEngine {
        static ENGINE: StyleEngine = StyleEngine::new();
        &ENGINE
    }

    /// Resolve the sheet and register it at user priority.
    ///
    /// # Errors
    ///
    /// Fails when the override cannot be read or a sheet was already
    /// installed through this engine.
    pub fn install<R: StyleRegistry>(
        &self,
        registry: &R,
        override_path: &Path,
        embedded: &'static str,
    ) -> Result<StyleOrigin> {
        if self.installed.get().is_some() {
            return Err(Error::StyleAlreadyRegistered);
        }

        let sheet = resolve_style(override_path, embedded)?;
        self.installed
            .set(sheet.origin.clone())
            .map_err(|_| Error::StyleAlreadyRegistered)?;
        registry.register(&sheet, StylePriority::User);
        Ok(sheet.origin)
    }

    pub fn installed(&self) -> Option<&StyleOrigin> {
        self.installed.get()
    }
}
