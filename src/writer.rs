//! Persisting a [`RepositoryList`] back to the repositories file

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::defaults::repositories_file;
use crate::error::{Error, Result};
use crate::repository::RepositoryList;
use crate::storage::Storage;

/// Anything that can persist a repository list.
pub trait RepositoryWriter: Send + Sync {
    /// Replace the persisted list with `list`.
    fn write(&self, list: &RepositoryList) -> Result<()>;
}

/// Writes repositories as a JSON file into a [`Storage`] backend.
///
/// The output is the same format [`crate::lister::StorageLister`] reads.
/// A failed write is not retried and no temporary file is used, so whether
/// the previous content survives depends on the backend.
#[derive(Clone)]
pub struct StorageWriter {
    path: PathBuf,
    storage: Arc<dyn Storage>,
}

impl StorageWriter {
    /// Writer for `<home>/repos/repositories.json`.
    pub fn new(home: &Path, storage: Arc<dyn Storage>) -> Self {
        Self::at_path(repositories_file(home), storage)
    }

    /// Writer for an explicit file path.
    pub fn at_path(path: PathBuf, storage: Arc<dyn Storage>) -> Self {
        Self { path, storage }
    }

    /// Path of the repositories file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RepositoryWriter for StorageWriter {
    fn write(&self, list: &RepositoryList) -> Result<()> {
        let mut content = serde_json::to_vec_pretty(list)?;
        content.push(b'\n');

        self.storage
            .write(&self.path, &content)
            .map_err(|source| Error::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Wrote {} repositories to {}",
            list.len(),
            self.path.display()
        );
        Ok(())
    }
}
