//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `rit-repo` command-line tool, one file per command.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `rit_repo` library.

use std::path::PathBuf;

use anyhow::Result;

use rit_repo::output::OutputConfig;

pub mod completions;
pub mod deprecated;
pub mod list;
pub mod set_priority;

/// Warning printed when a command reads its input from stdin.
pub const STDIN_WARNING: &str = "stdin input is deprecated and will no longer be supported in \
     future versions. Please pass arguments for programmatic use";

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Home directory holding `repos/repositories.json`
    pub home: PathBuf,
    /// Color preferences for terminal output
    pub output: OutputConfig,
}

/// Obtain command input either from stdin or from an interactive prompt.
///
/// `stdin` selects the strategy. Reading from stdin prints a deprecation
/// warning first.
pub fn read_input<T>(
    stdin: bool,
    from_stdin: impl FnOnce() -> Result<T>,
    from_prompt: impl FnOnce() -> Result<T>,
) -> Result<T> {
    if stdin {
        eprintln!("warning: {STDIN_WARNING}");
        from_stdin()
    } else {
        from_prompt()
    }
}
