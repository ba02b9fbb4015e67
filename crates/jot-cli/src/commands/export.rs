use std::path::{Path, PathBuf};

use jot_core::export::{render_notes_export, suggested_export_file_name};
use jot_core::util::unix_timestamp_ms_now;

use crate::cli::ExportFormat;
use crate::commands::common::{open_manager, DataLocation};
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    location: &DataLocation,
) -> Result<(), CliError> {
    let manager = open_manager(location);
    let rendered = render_notes_export(manager.notes(), format.into())?;

    if let Some(path) = output_path {
        let path = resolve_export_path(path, format);
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

/// A directory target receives a timestamped file name.
pub fn resolve_export_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.is_dir() {
        path.join(suggested_export_file_name(
            format.into(),
            unix_timestamp_ms_now(),
        ))
    } else {
        path.to_path_buf()
    }
}
