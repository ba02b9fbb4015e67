use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] jot_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note content provided")]
    EmptyContent,
    #[error("Note title and content cannot be empty")]
    EmptyNote,
    #[error("Invalid note ID: {0}")]
    InvalidNoteId(String),
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Attachment '{name}' not found on note {id}")]
    AttachmentNotFound { id: String, name: String },
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
