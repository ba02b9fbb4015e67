//! Note model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::attachment::Attachment;

/// A unique, time-derived identifier for a note (Unix ms at creation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw identifier value
    #[must_use]
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw identifier value
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Trimmed, non-empty body text
    pub content: String,
    /// Normalized tags in first-occurrence order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Inline-encoded attachments
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachments: Vec<Attachment>,
}

// Older snapshots may carry `null` where a list is expected.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Note {
    /// Build a note from an id and its mutable fields
    #[must_use]
    pub fn new(id: NoteId, fields: NoteFields) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            tags: fields.tags,
            attachments: fields.attachments,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn apply(&mut self, fields: NoteFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.tags = fields.tags;
        self.attachments = fields.attachments;
    }

    /// Check whether the note carries the given (already normalized) tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Title and content joined by a single space, the text search runs over
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }

    /// Look up an attachment by name
    #[must_use]
    pub fn attachment(&self, name: &str) -> Option<&Attachment> {
        self.attachments.iter().find(|a| a.name == name)
    }
}

/// The mutable fields of a note, as committed from a draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub attachments: Vec<Attachment>,
}

/// Normalize a single tag: trimmed and lowercased
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Parse comma-separated tag input
///
/// Tags are trimmed, lowercased and deduplicated, keeping first-occurrence
/// order. Empty segments are dropped.
///
/// # Examples
///
/// ```
/// use jot_core::models::parse_tags;
///
/// let tags = parse_tags("  School , work, SCHOOL");
/// assert_eq!(tags, vec!["school", "work"]);
/// ```
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(normalize_tag) {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Join tags back into editable comma-separated text
#[must_use]
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_note() -> Note {
        Note::new(
            NoteId::from_raw(42),
            NoteFields {
                title: "Grocery List".to_string(),
                content: "buy milk".to_string(),
                tags: vec!["home".to_string()],
                attachments: Vec::new(),
            },
        )
    }

    #[test]
    fn test_note_id_parse() {
        let parsed: NoteId = " 1700000000000 ".parse().unwrap();
        assert_eq!(parsed, NoteId::from_raw(1_700_000_000_000));
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_id_serializes_as_number() {
        let json = serde_json::to_string(&NoteId::from_raw(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_parse_tags_normalizes_and_dedups() {
        assert_eq!(parse_tags("  School , work, SCHOOL"), vec!["school", "work"]);
    }

    #[test]
    fn test_parse_tags_drops_empty_segments() {
        assert_eq!(parse_tags(" , ,x,, "), vec!["x"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_join_tags_round_trips_parse() {
        let tags = parse_tags("x, y");
        assert_eq!(join_tags(&tags), "x, y");
        assert_eq!(parse_tags(&join_tags(&tags)), tags);
    }

    #[test]
    fn test_searchable_text_joins_with_space() {
        assert_eq!(sample_note().searchable_text(), "Grocery List buy milk");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut note = sample_note();
        note.apply(NoteFields {
            title: "Errands".to_string(),
            content: "post office".to_string(),
            ..Default::default()
        });
        assert_eq!(note.id, NoteId::from_raw(42));
        assert_eq!(note.title, "Errands");
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_deserialize_tolerates_missing_lists() {
        let note: Note =
            serde_json::from_str(r#"{"id":1,"title":"t","content":"c"}"#).unwrap();
        assert!(note.tags.is_empty());
        assert!(note.attachments.is_empty());
    }

    #[test]
    fn test_deserialize_treats_null_lists_as_empty() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"t","content":"c","tags":null,"attachments":null}"#,
        )
        .unwrap();
        assert!(note.tags.is_empty());
        assert!(note.attachments.is_empty());
    }
}
