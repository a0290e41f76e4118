mod dirs;
mod validation;

pub use dirs::Directories;
pub use validation::warn_unknown_fields;
pub use walker_types::{AlignConfig, Config, IconsConfig, ListConfig, Margins};

use crate::Result;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Read and parse `config.json`. `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when the file cannot be read and
/// [`crate::Error::Json`] when it is not a valid config.
pub fn read_config(path: &Path) -> Result<Option<Config>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    warn_unknown_fields(&content, "config.json");
    Ok(Some(serde_json::from_str(&content)?))
}

/// Load `config.json`, falling back to defaults.
///
/// A missing file is the normal case. A file that cannot be read or parsed is
/// reported and replaced by defaults, since every field already has a
/// "leave the toolkit alone" default.
pub fn load_config(path: &Path) -> Config {
    match read_config(path) {
        Ok(Some(config)) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Ok(None) => {
            info!("No config at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            warn!("Ignoring {}: {e}", path.display());
            Config::default()
        }
    }
}
