//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_repositories(repositories::THREE);
//!     fixture.command().arg("list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::repositories;
    pub use super::TestFixture;
}

/// Repositories file contents for testing.
#[allow(dead_code)]
pub mod repositories {
    /// Three repositories with contiguous ranks.
    pub const THREE: &str = r#"
[
    {
        "name": "commons",
        "version": "v2.0.0",
        "url": "https://github.com/formulas/commons",
        "priority": 0,
        "provider": "Github"
    },
    {
        "name": "repo-1",
        "version": "0.0.0",
        "priority": 1,
        "isLocal": true,
        "provider": "Local"
    },
    {
        "name": "repo-2",
        "version": "0.0.0",
        "priority": 2,
        "isLocal": true,
        "provider": "Local"
    }
]
"#;

    /// Malformed JSON for error testing.
    pub const MALFORMED: &str = r#"[{"errorHere: "commons", "priority": 0}]"#;

    /// No repositories at all.
    pub const EMPTY: &str = "[]";
}

/// A temporary home directory with an optional repositories file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty home directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `repos/repositories.json` with the given content.
    pub fn with_repositories(self, content: &str) -> Self {
        self.temp_dir
            .child("repos/repositories.json")
            .write_str(content)
            .expect("Failed to write repositories file");
        self
    }

    /// Path of the home directory.
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the repositories file.
    pub fn repositories_path(&self) -> PathBuf {
        self.temp_dir.path().join("repos").join("repositories.json")
    }

    /// Current repositories as `(name, priority)` pairs in stored order.
    #[allow(dead_code)]
    pub fn ranks(&self) -> Vec<(String, u64)> {
        let content =
            std::fs::read_to_string(self.repositories_path()).expect("Failed to read repositories");
        let value: serde_json::Value =
            serde_json::from_str(&content).expect("Repositories file is not JSON");
        value
            .as_array()
            .expect("Repositories file is not an array")
            .iter()
            .map(|r| {
                (
                    r["name"].as_str().unwrap_or_default().to_string(),
                    r["priority"].as_u64().unwrap_or_default(),
                )
            })
            .collect()
    }

    /// A command for the rit-repo binary pointed at this home.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("rit-repo").expect("binary not built");
        cmd.env_remove("RIT_HOME")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--home")
            .arg(self.home());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for building expected `(name, priority)` pairs.
#[allow(dead_code)]
pub fn ranks(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
    pairs.iter().map(|(n, p)| (n.to_string(), *p)).collect()
}
