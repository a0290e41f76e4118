use crate::{Error, Result};
use directories::BaseDirs;
use std::path::PathBuf;

/// Name of the per-user config subdirectory
const APP_DIR: &str = "walker";

/// User-facing paths of the launcher
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/walker)
    pub config: PathBuf,

    /// Config file path
    pub config_file: PathBuf,

    /// Style sheet override
    pub style_file: PathBuf,
}

impl Directories {
    /// Resolve the directories from the user's config directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigDirUnavailable`] when no home directory can be
    /// determined. The launcher treats this as fatal.
    pub fn new() -> Result<Self> {
        let base = BaseDirs::new().ok_or(Error::ConfigDirUnavailable)?;
        Ok(Self::with_base(base.config_dir().join(APP_DIR)))
    }

    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.json"),
            style_file: base.join("style.css"),
            config: base,
        }
    }
}
