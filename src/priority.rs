//! # Priority Setter
//!
//! This module provides the `PrioritySetter`, which changes the lookup rank
//! of one repository and persists the renumbered list.
//!
//! ## Design
//!
//! The setter is a read-modify-write transaction over two operation traits:
//!
//! - **`RepositoryLister`**: produces the current list.
//! - **`RepositoryWriter`**: persists the new list.
//!
//! Each call lists afresh, mutates the list in memory with
//! [`RepositoryList::set_priority`] and hands the result to the writer. No
//! state is kept between calls and nothing is written unless every earlier
//! step succeeded, so a failure leaves the previous file authoritative.
//!
//! There is no locking. Two processes racing on the same file resolve as
//! last-writer-wins.

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::error::Result;
use crate::lister::{RepositoryLister, StorageLister};
use crate::repository::RepositoryList;
use crate::storage::Storage;
use crate::writer::{RepositoryWriter, StorageWriter};

/// Changes repository priorities on top of a lister and a writer.
pub struct PrioritySetter {
    lister: Box<dyn RepositoryLister>,
    writer: Box<dyn RepositoryWriter>,
}

impl PrioritySetter {
    /// Creates a setter that reads and writes `<home>/repos/repositories.json`
    /// through `storage`.
    pub fn new(home: &Path, storage: Arc<dyn Storage>) -> Self {
        Self {
            lister: Box::new(StorageLister::new(home, storage.clone())),
            writer: Box::new(StorageWriter::new(home, storage)),
        }
    }

    /// Creates a setter with custom lister and writer implementations.
    pub fn with_operations(
        lister: Box<dyn RepositoryLister>,
        writer: Box<dyn RepositoryWriter>,
    ) -> Self {
        Self { lister, writer }
    }

    /// Lists the repositories through the configured lister.
    pub fn list(&self) -> Result<RepositoryList> {
        self.lister.list()
    }

    /// Moves `name` to rank `requested` and persists the result.
    ///
    /// Out-of-range ranks are clamped silently. Returns the rank the
    /// repository ended up with.
    ///
    /// # Errors
    ///
    /// Listing errors are returned unchanged, an unknown name yields
    /// [`crate::error::Error::NotFound`], and write failures are returned as
    /// produced by the writer. The writer is not called if listing or the
    /// lookup fails.
    pub fn set_priority(&self, name: &str, requested: i64) -> Result<usize> {
        let mut list = self.lister.list()?;
        let rank = list.set_priority(name, requested)?;
        self.writer.write(&list)?;

        info!("Repository '{name}' now has priority {rank}");
        Ok(rank)
    }
}
