use jot_core::search::TagFilter;

use crate::commands::common::{
    format_note_lines, note_to_list_item, open_manager, DataLocation, NoteListItem,
};
use crate::error::CliError;

pub fn run_list(
    search: &str,
    tag: &str,
    limit: Option<usize>,
    as_json: bool,
    location: &DataLocation,
) -> Result<(), CliError> {
    let mut manager = open_manager(location);
    manager.set_search(search);
    manager.set_tag_filter(TagFilter::parse(tag));

    let mut notes = manager.visible_notes();
    tracing::debug!(
        search = manager.search(),
        tag = %manager.tag_filter(),
        matched = notes.len(),
        "Filtered notes"
    );
    if let Some(limit) = limit {
        notes.truncate(limit);
    }

    if as_json {
        let json_items = notes
            .iter()
            .copied()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if notes.is_empty() {
        println!("No notes found.");
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}
