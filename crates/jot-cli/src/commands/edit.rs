use std::path::PathBuf;

use crate::commands::common::{
    capture_editor_input_with_initial, find_note, open_manager, parse_note_id, report_save,
    selected_files, DataLocation,
};
use crate::error::CliError;

/// Field changes requested on the command line.
#[derive(Debug, Default)]
pub struct EditChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub attach: Vec<PathBuf>,
    pub remove_attachment: Vec<String>,
}

impl EditChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.attach.is_empty()
            && self.remove_attachment.is_empty()
    }
}

pub async fn run_edit(
    id: &str,
    mut changes: EditChanges,
    location: &DataLocation,
) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let mut manager = open_manager(location);
    let current_content = find_note(&manager, note_id)?.content.clone();

    if changes.is_empty() {
        let Some(edited_content) = capture_editor_input_with_initial(&current_content)? else {
            return Err(CliError::EmptyContent);
        };
        if edited_content == current_content {
            println!("{note_id}");
            return Ok(());
        }
        changes.content = Some(edited_content);
    }

    manager.start_edit(note_id)?;
    if let Some(title) = changes.title {
        manager.set_title(title);
    }
    if let Some(content) = changes.content {
        manager.set_content(content);
    }
    if let Some(tags) = changes.tags {
        manager.set_tags_input(tags);
    }
    for name in &changes.remove_attachment {
        if !manager.remove_attachment(name) {
            return Err(CliError::AttachmentNotFound {
                id: note_id.to_string(),
                name: name.clone(),
            });
        }
    }
    manager.attach_files(&selected_files(&changes.attach)).await?;

    let id = report_save(manager.save()?)?;
    println!("{id}");
    Ok(())
}
