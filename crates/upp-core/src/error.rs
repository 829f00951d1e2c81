//! Error types for upp-core

use std::path::PathBuf;

/// Result type for upp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in upp-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration document is missing or unparsable. Recoverable: the
    /// build continues without merging.
    #[error("Failed to load {path}: {message}")]
    ConfigLoad { path: PathBuf, message: String },

    /// The document parsed but the entry list location has the wrong shape
    #[error("Invalid configuration document: {message}")]
    InvalidDocument { message: String },

    // Transparent wrappers for underlying crate errors
    /// Block parse or entry error from upp-blocks
    #[error(transparent)]
    Blocks(#[from] upp_blocks::Error),

    /// Filesystem error from upp-fs
    #[error(transparent)]
    Fs(#[from] upp_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
