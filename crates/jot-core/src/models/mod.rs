//! Data models for Jot

mod attachment;
mod note;

pub use attachment::{upsert_attachment, Attachment};
pub use note::{join_tags, normalize_tag, parse_tags, Note, NoteFields, NoteId};
