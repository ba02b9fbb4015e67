use std::env;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use jot_core::media::SelectedFile;
use jot_core::models::Attachment;
use jot_core::storage::FileKeyValueStore;
use jot_core::store::NoteStore;
use jot_core::util::truncate_chars;
use jot_core::{Note, NoteId, NoteManager, SaveOutcome};
use serde::Serialize;

use crate::error::CliError;

pub type CliManager = NoteManager<FileKeyValueStore>;

/// Where the CLI keeps its notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLocation {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: i64,
    pub title: String,
    pub preview: String,
    pub tags: Vec<String>,
    pub attachments: Vec<AttachmentListItem>,
}

#[derive(Debug, Serialize)]
pub struct AttachmentListItem {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
}

pub fn open_manager(location: &DataLocation) -> CliManager {
    let storage = FileKeyValueStore::new(&location.data_dir);
    NoteManager::from_store(NoteStore::load_with_key(storage, location.storage_key.as_str()))
}

/// Map a save outcome to the saved note id.
pub fn report_save(outcome: SaveOutcome) -> Result<NoteId, CliError> {
    match outcome {
        SaveOutcome::Created(id) | SaveOutcome::Updated(id) => Ok(id),
        SaveOutcome::Missing(id) => Err(CliError::NoteNotFound(id.to_string())),
        SaveOutcome::Rejected => Err(CliError::EmptyNote),
    }
}

pub fn parse_note_id(id: &str) -> Result<NoteId, CliError> {
    id.parse::<NoteId>()
        .map_err(|_| CliError::InvalidNoteId(id.trim().to_string()))
}

pub fn find_note<'a>(manager: &'a CliManager, id: NoteId) -> Result<&'a Note, CliError> {
    manager
        .store()
        .get(id)
        .ok_or_else(|| CliError::NoteNotFound(id.to_string()))
}

pub fn selected_files(paths: &[PathBuf]) -> Vec<SelectedFile> {
    paths.iter().map(SelectedFile::from_path).collect()
}

pub fn format_note_lines(notes: &[&Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let id = note.id.to_string();
            let title = truncate_chars(&note.title, 30);
            let preview = note_preview(note, 40);
            let tags = render_tags(note);
            let clip = if note.attachments.is_empty() {
                String::new()
            } else {
                format!("  [{} file(s)]", note.attachments.len())
            };

            if tags.is_empty() {
                format!("{id:<13}  {title:<30}  {preview}{clip}")
            } else {
                format!("{id:<13}  {title:<30}  {preview:<40}  {tags}{clip}")
            }
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.value(),
        title: note.title.clone(),
        preview: note_preview(note, 80),
        tags: note.tags.clone(),
        attachments: note.attachments.iter().map(attachment_to_list_item).collect(),
    }
}

pub fn attachment_to_list_item(attachment: &Attachment) -> AttachmentListItem {
    AttachmentListItem {
        name: attachment.name.clone(),
        mime_type: attachment.mime_type.clone(),
        size: attachment.size,
    }
}

pub fn note_preview(note: &Note, max_chars: usize) -> String {
    let first_line = note.content.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, max_chars)
}

pub fn render_tags(note: &Note) -> String {
    note.tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<String>>()
        .join(" ")
}

#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;

    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    }
}

pub fn resolve_note_content(content: Option<&str>) -> Result<String, CliError> {
    if let Some(content) = content.and_then(normalize_content) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    if let Some(content) = capture_editor_input()? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

pub fn capture_editor_input() -> Result<Option<String>, CliError> {
    capture_editor_input_with_initial("")
}

/// Open `initial_content` in the user's editor and return the saved text.
pub fn capture_editor_input_with_initial(
    initial_content: &str,
) -> Result<Option<String>, CliError> {
    let mut file = tempfile::Builder::new()
        .prefix("jot-note-")
        .suffix(".md")
        .tempfile()?;
    file.write_all(initial_content.as_bytes())?;
    file.flush()?;

    launch_editor(&preferred_editor(), file.path())?;
    let note_content = std::fs::read_to_string(file.path())?;
    Ok(normalize_content(&note_content))
}

/// Run an editor command line such as `vi` or `code --wait` on `file_path`.
pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CliError::EditorFailed("empty EDITOR command".into()))?;

    let status = Command::new(program).args(parts).arg(file_path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(CliError::EditorFailed(format!(
            "`{editor}` exited with status {status}"
        )))
    }
}

fn preferred_editor() -> String {
    ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}
