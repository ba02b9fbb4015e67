//! Editor draft: the single transient note form.

use crate::models::{
    join_tags, parse_tags, upsert_attachment, Attachment, Note, NoteFields, NoteId,
};

/// Which note, if any, the draft was loaded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftMode {
    /// Blank form for a new note.
    #[default]
    New,
    /// Copy of an existing note's fields.
    Editing(NoteId),
}

/// Uncommitted form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    mode: DraftMode,
    /// Raw title input
    pub title: String,
    /// Raw content input
    pub content: String,
    /// Comma-separated tag input
    pub tags_input: String,
    attachments: Vec<Attachment>,
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> DraftMode {
        self.mode
    }

    /// Id of the note being edited, `None` for a new note.
    #[must_use]
    pub const fn editing_id(&self) -> Option<NoteId> {
        match self.mode {
            DraftMode::New => None,
            DraftMode::Editing(id) => Some(id),
        }
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Load a note's fields for editing.
    pub fn start_edit(&mut self, note: &Note) {
        *self = Self {
            mode: DraftMode::Editing(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            tags_input: join_tags(&note.tags),
            attachments: note.attachments.clone(),
        };
    }

    /// Reset to a blank new-note form.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Append attachments, replacing same-named ones.
    pub fn add_attachments(&mut self, attachments: impl IntoIterator<Item = Attachment>) {
        for attachment in attachments {
            upsert_attachment(&mut self.attachments, attachment);
        }
    }

    /// Remove an attachment by name. Returns whether one was removed.
    pub fn remove_attachment(&mut self, name: &str) -> bool {
        let before = self.attachments.len();
        self.attachments.retain(|attachment| attachment.name != name);
        self.attachments.len() != before
    }

    /// Validated note fields, or `None` when title or content is blank.
    #[must_use]
    pub fn to_fields(&self) -> Option<NoteFields> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return None;
        }

        Some(NoteFields {
            title: title.to_string(),
            content: content.to_string(),
            tags: parse_tags(&self.tags_input),
            attachments: self.attachments.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attachment(name: &str) -> Attachment {
        Attachment {
            name: name.to_string(),
            mime_type: "text/plain".to_string(),
            size: 0,
            data_url: "data:text/plain;base64,".to_string(),
        }
    }

    fn note() -> Note {
        Note::new(
            NoteId::from_raw(5),
            NoteFields {
                title: "Title".to_string(),
                content: "Body".to_string(),
                tags: vec!["school".to_string(), "work".to_string()],
                attachments: vec![attachment("a.txt")],
            },
        )
    }

    #[test]
    fn start_edit_copies_fields_and_joins_tags() {
        let mut draft = Draft::new();
        draft.start_edit(&note());

        assert_eq!(draft.mode(), DraftMode::Editing(NoteId::from_raw(5)));
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.tags_input, "school, work");
        assert_eq!(draft.attachments().len(), 1);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut draft = Draft::new();
        draft.start_edit(&note());

        draft.clear();
        let once = draft.clone();
        draft.clear();

        assert_eq!(draft, once);
        assert_eq!(draft, Draft::new());
    }

    #[test]
    fn to_fields_trims_and_parses_tags() {
        let mut draft = Draft::new();
        draft.title = "  A ".to_string();
        draft.content = "\nB\n".to_string();
        draft.tags_input = "x, Y, x".to_string();

        let fields = draft.to_fields().unwrap();
        assert_eq!(fields.title, "A");
        assert_eq!(fields.content, "B");
        assert_eq!(fields.tags, vec!["x", "y"]);
    }

    #[test]
    fn to_fields_rejects_blank_title_or_content() {
        let mut draft = Draft::new();
        draft.title = "   ".to_string();
        draft.content = "body".to_string();
        assert_eq!(draft.to_fields(), None);

        draft.title = "title".to_string();
        draft.content = " \t".to_string();
        assert_eq!(draft.to_fields(), None);
    }

    #[test]
    fn remove_attachment_matches_by_name() {
        let mut draft = Draft::new();
        draft.add_attachments([attachment("a.txt"), attachment("b.txt")]);

        assert!(draft.remove_attachment("a.txt"));
        assert!(!draft.remove_attachment("a.txt"));
        assert_eq!(draft.attachments()[0].name, "b.txt");
    }
}
