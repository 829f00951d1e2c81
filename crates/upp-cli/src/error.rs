//! Error types for upp-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from upp-core
    #[error(transparent)]
    Core(#[from] upp_core::Error),

    /// Error from upp-blocks
    #[error(transparent)]
    Blocks(#[from] upp_blocks::Error),

    /// Error from upp-fs
    #[error(transparent)]
    Fs(#[from] upp_fs::Error),

    /// Directory traversal error
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
