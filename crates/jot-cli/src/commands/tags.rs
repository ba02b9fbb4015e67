use crate::commands::common::{open_manager, DataLocation};
use crate::error::CliError;

pub fn run_tags(location: &DataLocation) -> Result<(), CliError> {
    let manager = open_manager(location);
    for tag in manager.tag_vocabulary() {
        println!("{tag}");
    }
    Ok(())
}
