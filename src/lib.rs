//! # Repository Priority Library
//!
//! This library manages the ordered list of formula repositories used by the
//! `rit-repo` command-line tool to decide lookup precedence when the same
//! formula is provided by several repositories.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use rit_repo::defaults::repositories_file;
//! use rit_repo::priority::PrioritySetter;
//! use rit_repo::storage::MemoryStorage;
//!
//! let home = Path::new("/home/user/.rit");
//! let storage = MemoryStorage::new().with_file(
//!     repositories_file(home),
//!     r#"[
//!         {"name": "commons", "version": "v2.0.0", "url": "https://example.com", "priority": 0},
//!         {"name": "local", "priority": 1, "isLocal": true}
//!     ]"#,
//! );
//!
//! let setter = PrioritySetter::new(home, Arc::new(storage));
//! setter.set_priority("local", 0).unwrap();
//!
//! let list = setter.list().unwrap();
//! assert_eq!(list.names(), vec!["local", "commons"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Repositories (`repository`)**: the descriptor type and the ordered
//!   list, including the reordering algorithm.
//! - **Storage (`storage`)**: a byte-level read/write/exists capability with
//!   filesystem and in-memory backends.
//! - **Lister and Writer (`lister`, `writer`)**: decode and encode the
//!   repositories file through a storage backend.
//! - **Priority Setter (`priority`)**: the read-modify-write transaction that
//!   changes one repository's rank.
//!
//! ## Execution Flow
//!
//! 1.  **List**: check the repositories file exists, read and decode it.
//! 2.  **Reorder**: clamp the requested rank, move the repository and
//!     renumber every rank.
//! 3.  **Write**: encode the list and hand it to storage.
//!
//! A failure at any step aborts the operation before anything is written.

pub mod defaults;
pub mod error;
pub mod lister;
pub mod output;
pub mod priority;
pub mod repository;
pub mod storage;
pub mod suggestions;
pub mod writer;

#[cfg(test)]
mod priority_proptest;
