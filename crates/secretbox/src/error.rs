//! Error types for the codec helpers.

use std::path::PathBuf;
use thiserror::Error;

/// Crate result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the explicit encode/decode helpers.
///
/// Decode failures from the underlying format are passed through
/// transparently, so their message and source are those of the
/// format library itself.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
