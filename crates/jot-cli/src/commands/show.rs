use jot_core::media::attachment_kind_label;
use jot_core::Note;

use crate::commands::common::{
    find_note, format_size, open_manager, parse_note_id, render_tags, DataLocation,
};
use crate::error::CliError;

pub fn run_show(id: &str, as_json: bool, location: &DataLocation) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let manager = open_manager(location);
    let note = find_note(&manager, note_id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("{}", render_note(note));
    }

    Ok(())
}

pub fn render_note(note: &Note) -> String {
    let mut lines = vec![format!("{}  {}", note.id, note.title)];

    let tags = render_tags(note);
    if !tags.is_empty() {
        lines.push(format!("tags: {tags}"));
    }

    if !note.attachments.is_empty() {
        lines.push("attachments:".to_string());
        for attachment in &note.attachments {
            lines.push(format!(
                "  - {} ({}, {})",
                attachment.name,
                attachment_kind_label(&attachment.name, &attachment.mime_type),
                format_size(attachment.size)
            ));
        }
    }

    lines.push(String::new());
    lines.push(note.content.clone());
    lines.join("\n")
}
