//! Application state: store, editor draft, and query inputs in one owned value.

use crate::editor::Draft;
use crate::media::{encode_files, SelectedFile};
use crate::models::{Note, NoteId};
use crate::search::{tag_vocabulary, visible_notes, TagFilter};
use crate::storage::KeyValueStore;
use crate::store::NoteStore;
use crate::{Error, Result};

/// Result of [`NoteManager::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(NoteId),
    Updated(NoteId),
    /// The note being edited no longer exists; nothing was written.
    Missing(NoteId),
    /// Title or content was blank; nothing was written and the draft is kept.
    Rejected,
}

/// Owns every piece of mutable note-manager state.
pub struct NoteManager<S> {
    store: NoteStore<S>,
    draft: Draft,
    search: String,
    tag_filter: TagFilter,
}

impl<S: KeyValueStore> NoteManager<S> {
    /// Hydrate from storage with a blank draft and no filters.
    pub fn load(storage: S) -> Self {
        Self::from_store(NoteStore::load(storage))
    }

    pub fn from_store(store: NoteStore<S>) -> Self {
        Self {
            store,
            draft: Draft::new(),
            search: String::new(),
            tag_filter: TagFilter::All,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn tag_filter(&self) -> &TagFilter {
        &self.tag_filter
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn set_tags_input(&mut self, tags: impl Into<String>) {
        self.draft.tags_input = tags.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_tag_filter(&mut self, tag_filter: TagFilter) {
        self.tag_filter = tag_filter;
    }

    /// Load an existing note into the draft.
    pub fn start_edit(&mut self, id: NoteId) -> Result<()> {
        let note = self
            .store
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        self.draft.start_edit(note);
        Ok(())
    }

    /// Reset the draft to a blank new note.
    pub fn clear_editor(&mut self) {
        self.draft.clear();
    }

    /// Commit the draft to the store.
    ///
    /// Blank title or content is a silent no-op. Otherwise the draft is
    /// cleared after the write.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let Some(fields) = self.draft.to_fields() else {
            tracing::debug!("Save skipped: title and content are required");
            return Ok(SaveOutcome::Rejected);
        };

        let outcome = match self.draft.editing_id() {
            Some(id) => {
                if self.store.update(id, fields)? {
                    SaveOutcome::Updated(id)
                } else {
                    SaveOutcome::Missing(id)
                }
            }
            None => SaveOutcome::Created(self.store.add(fields)?),
        };

        self.draft.clear();
        Ok(outcome)
    }

    /// Delete a note, resetting the draft if it was being edited.
    pub fn delete(&mut self, id: NoteId) -> Result<bool> {
        let removed = self.store.remove(id)?;
        if self.draft.editing_id() == Some(id) {
            self.draft.clear();
        }
        Ok(removed)
    }

    /// Encode selected files and append them to the draft.
    ///
    /// A failed read leaves the draft's attachments as they were.
    pub async fn attach_files(&mut self, files: &[SelectedFile]) -> Result<usize> {
        if files.is_empty() {
            return Ok(0);
        }

        let attachments = encode_files(files).await?;
        let count = attachments.len();
        self.draft.add_attachments(attachments);
        Ok(count)
    }

    /// Remove an attachment from the draft only.
    pub fn remove_attachment(&mut self, name: &str) -> bool {
        self.draft.remove_attachment(name)
    }

    /// Notes matching the current search text and tag filter.
    #[must_use]
    pub fn visible_notes(&self) -> Vec<&Note> {
        visible_notes(self.store.notes(), &self.search, &self.tag_filter)
    }

    /// Tag vocabulary of the whole store.
    #[must_use]
    pub fn tag_vocabulary(&self) -> Vec<String> {
        tag_vocabulary(self.store.notes())
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}
