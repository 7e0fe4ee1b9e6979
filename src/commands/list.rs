//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which prints the configured
//! repositories ordered by priority. It is a read-only operation.

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, ValueEnum};

use rit_repo::lister::{RepositoryLister, StorageLister};
use rit_repo::output;
use rit_repo::storage::FileStorage;
use rit_repo::suggestions;

use super::Context;

/// List configured repositories ordered by priority
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output formats for the repository listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Aligned, human-readable table
    #[default]
    Table,
    /// JSON array
    Json,
    /// YAML sequence
    Yaml,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs, context: &Context) -> Result<()> {
    let lister = StorageLister::new(&context.home, Arc::new(FileStorage));
    let list = lister
        .list()
        .map_err(|e| suggestions::explain(e, &[]))?;

    match args.format {
        OutputFormat::Table => {
            if list.is_empty() {
                println!("No repositories configured.");
            } else {
                print!("{}", output::render_table(&list, &context.output));
            }
        }
        OutputFormat::Json => println!("{}", output::render_json(&list)?),
        OutputFormat::Yaml => print!("{}", output::render_yaml(&list)?),
    }

    Ok(())
}
