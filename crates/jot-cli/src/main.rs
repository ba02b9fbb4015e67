//! Jot CLI - Command-line interface for tagged notes with attachments
//!
//! Every invocation loads the notes snapshot, applies one command and writes
//! the snapshot back.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::attachment::run_attachment;
use crate::commands::common::DataLocation;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::{run_edit, EditChanges};
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::show::run_show;
use crate::commands::tags::run_tags;
use crate::config::{CliConfig, DATA_DIR_ENV};
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let location = resolve_location(&cli)?;
    tracing::debug!(
        data_dir = %location.data_dir.display(),
        key = %location.storage_key,
        "Using note storage"
    );

    match cli.command {
        Commands::Add {
            title,
            content,
            tags,
            attach,
        } => run_add(&title, content.as_deref(), &tags, &attach, &location).await?,
        Commands::Edit {
            id,
            title,
            content,
            tags,
            attach,
            remove_attachment,
        } => {
            let changes = EditChanges {
                title,
                content,
                tags,
                attach,
                remove_attachment,
            };
            run_edit(&id, changes, &location).await?;
        }
        Commands::List {
            search,
            tag,
            limit,
            json,
        } => run_list(&search, &tag, limit, json, &location)?,
        Commands::Show { id, json } => run_show(&id, json, &location)?,
        Commands::Tags => run_tags(&location)?,
        Commands::Delete { id } => run_delete(&id, &location)?,
        Commands::Attachment { id, name, output } => {
            run_attachment(&id, &name, output.as_deref(), &location)?;
        }
        Commands::Export { format, output } => {
            run_export(format, output.as_deref(), &location)?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(
        "jot=warn"
            .parse()
            .unwrap_or_else(|_| LevelFilter::WARN.into()),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_location(cli: &Cli) -> Result<DataLocation, CliError> {
    let config = CliConfig::load().map_err(CliError::Config)?;
    let data_dir = config
        .resolve_data_dir(cli.data_dir.clone(), std::env::var_os(DATA_DIR_ENV))
        .map_err(CliError::Config)?;

    Ok(DataLocation {
        data_dir,
        storage_key: config.storage_key().to_string(),
    })
}
