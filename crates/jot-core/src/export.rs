//! Note export rendering shared by clients.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::Note;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render notes as pretty-printed JSON in the persisted record layout.
pub fn render_json_export(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(notes)
}

/// Render notes in Markdown with frontmatter blocks.
///
/// Attachments are listed by name only; their payloads stay in JSON exports.
#[must_use]
pub fn render_markdown_export(notes: &[Note]) -> String {
    let mut output = String::new();

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", note.id);
        let _ = writeln!(output, "tags:");
        for tag in &note.tags {
            let _ = writeln!(output, "  - {tag}");
        }
        if !note.attachments.is_empty() {
            let _ = writeln!(output, "attachments:");
            for attachment in &note.attachments {
                let _ = writeln!(
                    output,
                    "  - {} ({}, {} bytes)",
                    attachment.name, attachment.mime_type, attachment.size
                );
            }
        }
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        let _ = writeln!(output, "# {}", note.title);
        let _ = writeln!(output);
        output.push_str(&note.content);
        output.push('\n');
    }

    output
}

/// Render notes based on selected export format.
pub fn render_notes_export(notes: &[Note], format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(notes),
        ExportFormat::Markdown => Ok(render_markdown_export(notes)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("jot-export-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attachment, NoteFields, NoteId};

    fn note() -> Note {
        Note::new(
            NoteId::from_raw(123),
            NoteFields {
                title: "Hello".to_string(),
                content: "export body".to_string(),
                tags: vec!["tag".to_string()],
                attachments: vec![Attachment {
                    name: "a.txt".to_string(),
                    mime_type: "text/plain".to_string(),
                    size: 1,
                    data_url: "data:text/plain;base64,YQ==".to_string(),
                }],
            },
        )
    }

    #[test]
    fn render_markdown_export_includes_frontmatter_and_content() {
        let rendered = render_markdown_export(&[note()]);
        assert!(rendered.contains("id: 123"));
        assert!(rendered.contains("tags:\n  - tag"));
        assert!(rendered.contains("attachments:\n  - a.txt (text/plain, 1 bytes)"));
        assert!(rendered.contains("# Hello\n\nexport body"));
        assert!(!rendered.contains("base64"));
    }

    #[test]
    fn render_json_export_parses_back() {
        let rendered = render_notes_export(&[note()], ExportFormat::Json).unwrap();
        let parsed: Vec<Note> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, vec![note()]);
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "jot-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 456),
            "jot-export-456.md"
        );
    }
}
