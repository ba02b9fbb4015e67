//! Key-value persistence backends.
//!
//! The note store persists a single serialized snapshot under one key; the
//! backend only needs whole-value reads and writes.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use crate::Result;

/// String key-value storage collaborator.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
