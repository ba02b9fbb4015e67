//! Error types for jot-core

use thiserror::Error;

/// Result type alias using jot-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jot-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A selected file could not be read while encoding attachments
    #[error("Failed to read file '{name}': {source}")]
    FileRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed `data:` URL
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// Key-value storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}
