use std::path::{Path, PathBuf};

use jot_core::media::{attachment_output_path, decode_data_url};

use crate::commands::common::{find_note, open_manager, parse_note_id, DataLocation};
use crate::error::CliError;

pub fn run_attachment(
    id: &str,
    name: &str,
    output_path: Option<&Path>,
    location: &DataLocation,
) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let manager = open_manager(location);
    let note = find_note(&manager, note_id)?;

    let attachment = note
        .attachment(name)
        .ok_or_else(|| CliError::AttachmentNotFound {
            id: note_id.to_string(),
            name: name.to_string(),
        })?;
    let decoded = decode_data_url(&attachment.data_url)?;

    let path = resolve_output_path(output_path, &attachment.name)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &decoded.bytes)?;

    tracing::debug!(
        note_id = %note_id,
        name = %attachment.name,
        bytes = decoded.bytes.len(),
        "Wrote attachment"
    );
    println!("{}", path.display());
    Ok(())
}

/// An existing directory receives the attachment under its own name.
fn resolve_output_path(output_path: Option<&Path>, name: &str) -> Result<PathBuf, CliError> {
    match output_path {
        Some(path) if path.is_dir() => Ok(attachment_output_path(path, name)),
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(attachment_output_path(&std::env::current_dir()?, name)),
    }
}
