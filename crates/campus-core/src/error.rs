//! Error types for configuration and storage.
//!
//! Container operations never return these: they report bad input through
//! `bool`/`Option` results instead.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid campus map JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("route {from} -> {to} has invalid distance {distance}")]
    InvalidRoute {
        from: String,
        to: String,
        distance: f64,
    },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
