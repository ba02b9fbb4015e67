use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "Tag, search and attach files to plain text notes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the notes file
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        #[arg(short, long)]
        title: String,
        /// Note content (read from stdin or $EDITOR when omitted)
        #[arg(short, long)]
        content: Option<String>,
        /// Comma-separated tags, e.g. "school, work"
        #[arg(long, default_value = "")]
        tags: String,
        /// Files to attach
        #[arg(short, long = "attach", value_name = "PATH")]
        attach: Vec<PathBuf>,
    },
    /// Edit an existing note
    Edit {
        /// Note ID
        id: String,
        /// Replace the title
        #[arg(short, long)]
        title: Option<String>,
        /// Replace the content
        #[arg(short, long)]
        content: Option<String>,
        /// Replace the tags (comma-separated)
        #[arg(long)]
        tags: Option<String>,
        /// Files to attach
        #[arg(short, long = "attach", value_name = "PATH")]
        attach: Vec<PathBuf>,
        /// Attachment names to remove
        #[arg(long = "remove-attachment", value_name = "NAME")]
        remove_attachment: Vec<String>,
    },
    /// List notes, optionally filtered by search text and tag
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text to look for in title and content
        #[arg(short, long, default_value = "")]
        search: String,
        /// Tag to filter by ("all" for no filter)
        #[arg(long, default_value = "all")]
        tag: String,
        /// Number of notes to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one note in full
    Show {
        /// Note ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every tag in use
    Tags,
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note ID
        id: String,
    },
    /// Write a saved attachment back to disk
    Attachment {
        /// Note ID
        id: String,
        /// Attachment name
        name: String,
        /// Output path (current directory when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Export notes
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl From<ExportFormat> for jot_core::export::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
