//! Derived views over the note collection: tag vocabulary and visible notes.
//!
//! Both are recomputed from scratch on every call with a linear scan.

use std::collections::BTreeSet;
use std::fmt;

use crate::models::{normalize_tag, Note};

/// Sentinel vocabulary entry meaning "no tag filter".
pub const ALL_TAGS: &str = "all";

/// Selected tag filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parse a vocabulary entry; `"all"` (any case) and blank mean no filter.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let tag = normalize_tag(value);
        if tag.is_empty() || tag == ALL_TAGS {
            Self::All
        } else {
            Self::Tag(tag)
        }
    }

    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => note.has_tag(tag),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TAGS),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Sorted union of all note tags, led by the `"all"` sentinel.
#[must_use]
pub fn tag_vocabulary(notes: &[Note]) -> Vec<String> {
    let tags = notes
        .iter()
        .flat_map(|note| note.tags.iter())
        .filter(|tag| tag.as_str() != ALL_TAGS)
        .map(String::as_str)
        .collect::<BTreeSet<_>>();

    std::iter::once(ALL_TAGS)
        .chain(tags)
        .map(ToString::to_string)
        .collect()
}

/// Case-insensitive substring match over title and content.
///
/// A blank query matches every note.
#[must_use]
pub fn matches_search(note: &Note, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || note.searchable_text().to_lowercase().contains(&query)
}

/// Notes passing both the tag filter and the search text, in store order.
#[must_use]
pub fn visible_notes<'a>(
    notes: &'a [Note],
    search: &str,
    tag_filter: &TagFilter,
) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| tag_filter.matches(note))
        .filter(|note| matches_search(note, search))
        .collect()
}
