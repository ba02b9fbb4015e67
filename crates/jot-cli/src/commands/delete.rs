use crate::commands::common::{open_manager, parse_note_id, DataLocation};
use crate::error::CliError;

pub fn run_delete(id: &str, location: &DataLocation) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let mut manager = open_manager(location);

    if !manager.delete(note_id)? {
        return Err(CliError::NoteNotFound(note_id.to_string()));
    }

    println!("{note_id}");
    Ok(())
}
