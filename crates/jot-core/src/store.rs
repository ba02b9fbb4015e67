//! Authoritative note collection mirrored to key-value storage.
//!
//! The store keeps notes newest-first and rewrites the full serialized
//! snapshot after every mutation. Hydration never fails: missing or malformed
//! data yields an empty collection.

use crate::models::{Note, NoteFields, NoteId};
use crate::storage::KeyValueStore;
use crate::util::unix_timestamp_ms_now;
use crate::Result;

/// Storage key holding the serialized note array.
pub const NOTES_STORAGE_KEY: &str = "jot-notes";

/// Ordered note collection backed by a [`KeyValueStore`].
pub struct NoteStore<S> {
    storage: S,
    key: String,
    notes: Vec<Note>,
    last_issued_id: i64,
    clock: fn() -> i64,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Hydrate a store from the default storage key.
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, NOTES_STORAGE_KEY)
    }

    /// Hydrate a store from a custom storage key.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let notes = read_snapshot(&storage, &key);
        tracing::info!(key = %key, count = notes.len(), "Loaded notes");

        Self {
            storage,
            key,
            notes,
            last_issued_id: 0,
            clock: unix_timestamp_ms_now,
        }
    }

    /// Replace the time source used for id generation.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// All notes, newest first.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, dropping the in-memory collection.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replace the whole collection and persist the full snapshot.
    ///
    /// On a write failure the previous collection is kept.
    pub fn mutate(&mut self, notes: Vec<Note>) -> Result<()> {
        let snapshot = serde_json::to_string(&notes)?;
        self.storage.set(&self.key, &snapshot)?;
        self.notes = notes;
        Ok(())
    }

    /// Prepend a new note and return its id.
    pub fn add(&mut self, fields: NoteFields) -> Result<NoteId> {
        let id = self.next_id();

        let mut notes = Vec::with_capacity(self.notes.len() + 1);
        notes.push(Note::new(id, fields));
        notes.extend(self.notes.iter().cloned());
        self.mutate(notes)?;

        self.last_issued_id = id.value();
        tracing::debug!(%id, "Added note");
        Ok(id)
    }

    /// Replace a note's mutable fields in place.
    ///
    /// Returns `false` without writing when no note has the id.
    pub fn update(&mut self, id: NoteId, fields: NoteFields) -> Result<bool> {
        let Some(position) = self.position(id) else {
            tracing::debug!(%id, "Update skipped, note not found");
            return Ok(false);
        };

        let mut notes = self.notes.clone();
        notes[position].apply(fields);
        self.mutate(notes)?;

        tracing::debug!(%id, "Updated note");
        Ok(true)
    }

    /// Delete a note.
    ///
    /// Returns `false` without writing when no note has the id.
    pub fn remove(&mut self, id: NoteId) -> Result<bool> {
        if self.position(id).is_none() {
            tracing::debug!(%id, "Remove skipped, note not found");
            return Ok(false);
        }

        let notes = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        self.mutate(notes)?;

        tracing::debug!(%id, "Removed note");
        Ok(true)
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    // Time-derived, but strictly greater than every id issued or loaded so far.
    fn next_id(&self) -> NoteId {
        let max_existing = self
            .notes
            .iter()
            .map(|note| note.id.value())
            .max()
            .unwrap_or(0);

        let candidate = (self.clock)()
            .max(self.last_issued_id.saturating_add(1))
            .max(max_existing.saturating_add(1));
        NoteId::from_raw(candidate)
    }
}

fn read_snapshot<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Note> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(key, "Failed to read stored notes, starting empty: {}", error);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Note>>(&raw) {
        Ok(notes) => notes,
        Err(error) => {
            tracing::warn!(key, "Failed to parse stored notes, starting empty: {}", error);
            Vec::new()
        }
    }
}
