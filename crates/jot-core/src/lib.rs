//! jot-core - Core library for Jot
//!
//! This crate contains the note models, key-value persistence, the editor
//! draft, tag/search queries, and attachment encoding used by Jot clients.

pub mod editor;
pub mod error;
pub mod export;
pub mod manager;
pub mod media;
pub mod models;
pub mod search;
pub mod storage;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use manager::{NoteManager, SaveOutcome};
pub use models::{Note, NoteId};
