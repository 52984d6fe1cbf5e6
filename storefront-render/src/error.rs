//! Static render error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failures while loading page metadata or writing the rendered document
#[derive(Error, Debug)]
pub enum RenderError {
    /// Metadata file could not be read
    #[error("failed to read page metadata {path}: {source}")]
    ReadMeta {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata file is not valid JSON for `PageMeta`
    #[error("invalid page metadata in {path}: {source}")]
    ParseMeta {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output directory or file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
