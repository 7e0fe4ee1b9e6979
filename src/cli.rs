//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use rit_repo::defaults;
use rit_repo::output::OutputConfig;

use crate::commands::{self, Context};

/// rit-repo - Manage the lookup priority of formula repositories
#[derive(Parser, Debug)]
#[command(name = "rit-repo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Home directory holding repos/repositories.json (defaults to ~/.rit)
    #[arg(long, global = true, value_name = "DIR", env = defaults::HOME_ENV)]
    home: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List configured repositories ordered by priority
    List(commands::list::ListArgs),

    /// Change the priority of a repository
    SetPriority(commands::set_priority::SetPriorityArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),

    /// Retired, use set-priority
    #[command(hide = true)]
    UpdatePriority(commands::deprecated::DeprecatedArgs),

    /// Retired, use set-priority
    #[command(hide = true)]
    Order(commands::deprecated::DeprecatedArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let context = Context {
            home: defaults::resolve_home(self.home),
            output: OutputConfig::from_env_and_flag(&self.color),
        };
        log::debug!("Using home directory {}", context.home.display());

        match self.command {
            Commands::List(args) => commands::list::execute(args, &context),
            Commands::SetPriority(args) => commands::set_priority::execute(args, &context),
            Commands::Completions(args) => commands::completions::execute(args),
            Commands::UpdatePriority(_) => {
                commands::deprecated::execute("update-priority", "use 'set-priority' instead")
            }
            Commands::Order(_) => {
                commands::deprecated::execute("order", "use 'set-priority' instead")
            }
        }
    }
}

/// Set up `env_logger` on stderr. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
