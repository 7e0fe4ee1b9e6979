//! Loading the repositories file into a [`RepositoryList`]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::defaults::repositories_file;
use crate::error::{Error, Result};
use crate::repository::RepositoryList;
use crate::storage::Storage;

/// Anything that can produce the current repository list.
pub trait RepositoryLister: Send + Sync {
    /// Load the current list.
    fn list(&self) -> Result<RepositoryList>;
}

/// Lists repositories from a JSON file held in a [`Storage`] backend.
#[derive(Clone)]
pub struct StorageLister {
    path: PathBuf,
    storage: Arc<dyn Storage>,
}

impl StorageLister {
    /// Lister for `<home>/repos/repositories.json`.
    pub fn new(home: &Path, storage: Arc<dyn Storage>) -> Self {
        Self::at_path(repositories_file(home), storage)
    }

    /// Lister for an explicit file path.
    pub fn at_path(path: PathBuf, storage: Arc<dyn Storage>) -> Self {
        Self { path, storage }
    }

    /// Path of the repositories file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RepositoryLister for StorageLister {
    fn list(&self) -> Result<RepositoryList> {
        if !self.storage.exists(&self.path) {
            return Err(Error::NotExist {
                path: self.path.clone(),
            });
        }

        let bytes = self.storage.read(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;

        let list: RepositoryList =
            serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Loaded {} repositories from {}",
            list.len(),
            self.path.display()
        );
        Ok(list)
    }
}
