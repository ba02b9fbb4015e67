use std::path::PathBuf;

use crate::commands::common::{
    open_manager, report_save, resolve_note_content, selected_files, DataLocation,
};
use crate::error::CliError;

pub async fn run_add(
    title: &str,
    content: Option<&str>,
    tags: &str,
    attach: &[PathBuf],
    location: &DataLocation,
) -> Result<(), CliError> {
    if title.trim().is_empty() {
        return Err(CliError::EmptyNote);
    }
    let content = resolve_note_content(content)?;

    let mut manager = open_manager(location);
    manager.set_title(title);
    manager.set_content(content);
    manager.set_tags_input(tags);
    manager.attach_files(&selected_files(attach)).await?;

    let id = report_save(manager.save()?)?;
    println!("{id}");
    Ok(())
}
