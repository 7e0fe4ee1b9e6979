//! # Set-Priority Command Implementation
//!
//! This module implements the `set-priority` subcommand, which moves one
//! repository to a new rank and renumbers the rest.
//!
//! ## Input
//!
//! - **Arguments**: `rit-repo set-priority NAME PRIORITY`.
//! - **Stdin** (deprecated): `--stdin` reads `{"name": ..., "priority": ...}`.
//! - **Prompt**: anything not given as an argument is asked for
//!   interactively.

use std::io::{self, Read};
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use dialoguer::{Input, Select};
use serde::Deserialize;

use rit_repo::error::Error;
use rit_repo::priority::PrioritySetter;
use rit_repo::storage::FileStorage;
use rit_repo::suggestions;

use super::Context;

/// Change the priority of a repository
#[derive(Args, Debug)]
pub struct SetPriorityArgs {
    /// Name of the repository to move.
    pub name: Option<String>,

    /// New priority, 0 is looked up first. Out-of-range values are clamped.
    #[arg(allow_negative_numbers = true)]
    pub priority: Option<i64>,

    /// Read the request as JSON from stdin (deprecated).
    #[arg(long, conflicts_with_all = ["name", "priority"])]
    pub stdin: bool,
}

/// A priority change request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriorityRequest {
    pub name: String,
    pub priority: i64,
}

/// Execute the `set-priority` command.
pub fn execute(args: SetPriorityArgs, context: &Context) -> Result<()> {
    let setter = PrioritySetter::new(&context.home, Arc::new(FileStorage));

    let request = match (args.name, args.priority) {
        (Some(name), Some(priority)) => PriorityRequest { name, priority },
        (name, priority) => super::read_input(
            args.stdin,
            || read_request(io::stdin().lock()),
            || prompt_request(&setter, name, priority),
        )?,
    };

    let rank = setter
        .set_priority(&request.name, request.priority)
        .map_err(|e| explain(&setter, e))?;

    if i64::try_from(rank) != Ok(request.priority) {
        println!(
            "Requested priority {} is out of range, using {}",
            request.priority, rank
        );
    }
    println!("Repository '{}' now has priority {}", request.name, rank);
    Ok(())
}

/// Decode a request from a JSON reader.
pub fn read_request<R: Read>(reader: R) -> Result<PriorityRequest> {
    serde_json::from_reader(reader).map_err(|e| suggestions::invalid_stdin(&e))
}

/// Ask for whatever part of the request is missing.
///
/// Fails with hints pointing at arguments and `--stdin` when there is no
/// terminal to prompt on.
fn prompt_request(
    setter: &PrioritySetter,
    name: Option<String>,
    priority: Option<i64>,
) -> Result<PriorityRequest> {
    let name = match name {
        Some(name) => name,
        None => {
            let list = setter.list().map_err(|e| suggestions::explain(e, &[]))?;
            let names: Vec<&str> = list
                .by_priority()
                .into_iter()
                .map(|r| r.name.as_str())
                .collect();
            if names.is_empty() {
                anyhow::bail!("No repositories configured.");
            }
            let index = Select::new()
                .with_prompt("Which repository?")
                .items(&names[..])
                .default(0)
                .interact()
                .map_err(suggestions::not_interactive)?;
            names[index].to_string()
        }
    };

    let priority = match priority {
        Some(priority) => priority,
        None => Input::<i64>::new()
            .with_prompt("New priority")
            .interact_text()
            .map_err(suggestions::not_interactive)?,
    };

    Ok(PriorityRequest { name, priority })
}

/// Attach hints to a failed `set_priority`.
fn explain(setter: &PrioritySetter, error: Error) -> anyhow::Error {
    let names: Vec<String> = match &error {
        Error::NotFound { .. } => setter
            .list()
            .map(|list| list.names().into_iter().map(str::to_string).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    suggestions::explain(error, &names)
}
