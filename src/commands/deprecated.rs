//! Retired command names.
//!
//! Old command names stay registered (hidden from help) so scripts using
//! them get a migration message instead of a usage error.

use anyhow::Result;
use clap::Args;

/// Arguments of a retired command. Everything is accepted and ignored.
#[derive(Args, Debug)]
pub struct DeprecatedArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub args: Vec<String>,
}

/// Migration message for a retired command.
pub fn message(command: &str, migration: &str) -> String {
    format!("Command \"{command}\" is deprecated, {migration}")
}

/// Print the migration message and succeed.
pub fn execute(command: &str, migration: &str) -> Result<()> {
    eprintln!("{}", message(command, migration));
    Ok(())
}
