use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine the user config directory")]
    ConfigDirUnavailable,

    #[error("Failed to read style override {}: {source}", path.display())]
    StyleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Style sheet already registered")]
    StyleAlreadyRegistered,

    #[error("gtk-layer-shell not supported")]
    LayerShellUnsupported,

    #[error("Layout template error: {0}")]
    Template(String),
}

pub type Result<T> = std::result::Result<T, Error>;
