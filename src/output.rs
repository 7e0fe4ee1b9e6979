//! # Output Rendering
//!
//! This module renders repository lists for the terminal and decides
//! whether output may be colored.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;
use std::fmt::Write;

use console::style;

use crate::error::Result;
use crate::repository::{Repository, RepositoryList};

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `--color=always` forces colors on (overriding `NO_COLOR`),
    /// `--color=never` forces them off, and anything else detects support
    /// from the environment and the terminal.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        let lookup = |key: &str| env::var_os(key).map(|v| v.to_string_lossy().into_owned());
        env_color_preference(lookup)
            .unwrap_or_else(|| console::Term::stdout().features().colors_supported())
    }

    /// Create a configuration with colors always disabled.
    pub fn plain() -> Self {
        Self { use_color: false }
    }
}

/// Color choice dictated by the environment, if any.
///
/// `None` means the environment is silent and the terminal decides.
fn env_color_preference(var: impl Fn(&str) -> Option<String>) -> Option<bool> {
    // NO_COLOR disables on presence alone, even when empty.
    let no_color = var("NO_COLOR").is_some();
    let clicolor_off = var("CLICOLOR").as_deref() == Some("0");
    let forced = var("CLICOLOR_FORCE").is_some_and(|v| !matches!(v.as_str(), "" | "0"));
    let dumb = var("TERM").as_deref() == Some("dumb");

    match (no_color || clicolor_off, forced, dumb) {
        (true, _, _) => Some(false),
        (false, true, _) => Some(true),
        (false, false, true) => Some(false),
        (false, false, false) => None,
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Where a repository is fetched from, as shown to users.
fn source(repository: &Repository) -> &str {
    if repository.is_local || repository.url.is_empty() {
        "local"
    } else {
        &repository.url
    }
}

/// Render repositories as an aligned table ordered by priority.
pub fn render_table(list: &RepositoryList, config: &OutputConfig) -> String {
    let rows = list.by_priority();
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or_default();
    let version_width = rows
        .iter()
        .map(|r| r.version.chars().count())
        .chain(std::iter::once("VERSION".len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    let header = format!(
        "{:<8} {:<name_width$} {:<version_width$} SOURCE",
        "PRIORITY", "NAME", "VERSION"
    );
    let _ = writeln!(
        out,
        "{}",
        if config.use_color {
            style(header).bold().to_string()
        } else {
            header
        }
    );

    for repository in rows {
        let name = format!("{:<name_width$}", repository.name);
        let name = if config.use_color {
            style(name).cyan().to_string()
        } else {
            name
        };
        let _ = writeln!(
            out,
            "{:<8} {} {:<version_width$} {}",
            repository.priority,
            name,
            repository.version,
            source(repository)
        );
    }

    out
}

/// Render repositories as pretty JSON in priority order.
pub fn render_json(list: &RepositoryList) -> Result<String> {
    Ok(serde_json::to_string_pretty(&list.by_priority())?)
}

/// Render repositories as YAML in priority order.
pub fn render_yaml(list: &RepositoryList) -> Result<String> {
    Ok(serde_yaml::to_string(&list.by_priority())?)
}
