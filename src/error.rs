//! # Error Handling
//!
//! This module defines the centralized error type for `rit-repo`. It uses
//! `thiserror` to describe every failure mode of the repository priority
//! manager with a descriptive message.
//!
//! ## Key Components
//!
//! - **`Error`**: one variant per failure kind. Callers match on the variant,
//!   never on the rendered message. `NotExist` is kept distinct from generic
//!   read failures because the CLI answers it with a dedicated hint.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Failures are grouped by the stage that produced them:
//!
//! - Listing: `NotExist`, `Read`, `Parse`, `List`.
//! - Mutation: `NotFound`.
//! - Persistence: `Serialization`, `Write`.
//! - Rendering: `Yaml`.

use std::path::PathBuf;

use thiserror::Error;

/// Message shown when no repositories file has been created yet.
pub const NO_REPOSITORIES_MESSAGE: &str =
    "no repositories configured, add a repository before changing priorities";

/// Main error type for rit-repo operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repositories file does not exist.
    ///
    /// Detected with an existence check before any read is attempted.
    #[error("{NO_REPOSITORIES_MESSAGE} (looked for {})", path.display())]
    NotExist { path: PathBuf },

    /// The repositories file exists but could not be read.
    #[error("Failed to read repositories from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The repositories file is not a well-formed list of repositories.
    ///
    /// The decoder message is kept verbatim.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A listing collaborator failed for a reason not covered above.
    #[error("{message}")]
    List { message: String },

    /// No repository with the requested name exists in the list.
    #[error("Repository not found: {name}")]
    NotFound { name: String },

    /// The list could not be encoded for persistence.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The list could not be rendered as YAML for display.
    #[error("YAML rendering error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The storage backend refused the write.
    #[error("Failed to write repositories to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
