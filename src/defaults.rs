//! Default locations for rit-repo state.
//!
//! The only configurable input is the home directory. Everything else is a
//! fixed layout underneath it.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the home directory.
pub const HOME_ENV: &str = "RIT_HOME";

/// Directory name used under the user's home directory.
pub const HOME_DIR_NAME: &str = ".rit";

/// Returns the default home directory.
///
/// Uses `~/.rit`, falling back to `.rit` in the current directory when the
/// user's home directory cannot be determined.
///
/// This can be overridden by the `--home` CLI flag or the `RIT_HOME`
/// environment variable.
pub fn default_home() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(HOME_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(HOME_DIR_NAME))
}

/// Resolves the home directory from an optional explicit value.
pub fn resolve_home(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(default_home)
}

/// Location of the repositories file under `home`.
pub fn repositories_file(home: &Path) -> PathBuf {
    home.join("repos").join("repositories.json")
}
