//! Directory-backed key-value store, one JSON file per key.

use std::io;
use std::path::PathBuf;

use super::KeyValueStore;
use crate::{Error, Result};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Error::Io(error)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Readers must only ever observe a complete value.
        let temp_path = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path)?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "Wrote storage entry");
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(Error::Storage(format!("invalid storage key '{key}'")))
    }
}
