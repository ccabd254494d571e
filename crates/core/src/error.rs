//! Error types for stylesheet generation.

use std::path::PathBuf;

/// Result type for stylesheet generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning folders or writing stylesheets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to list a directory (the scan root or a family folder).
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the output directory.
    #[error("Failed to create output directory '{path}': {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a generated stylesheet.
    #[error("Failed to write stylesheet '{path}': {source}")]
    WriteStylesheet {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to remove the output directory.
    #[error("Failed to remove directory '{path}': {source}")]
    RemoveDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
