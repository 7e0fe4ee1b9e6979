//! # Repository Descriptors
//!
//! This module defines the in-memory model of the repositories file: the
//! [`Repository`] descriptor and the ordered [`RepositoryList`] that owns
//! them for the duration of one operation.
//!
//! ## Priority Ranks
//!
//! Every repository carries a `priority` rank. For a list of `N` entries the
//! ranks are expected to be exactly `0..N`, each used once. The list keeps
//! entries in the order they were read; the rank is a separate field and is
//! only renumbered when [`RepositoryList::set_priority`] mutates the list.
//!
//! ## Reordering
//!
//! `set_priority` clamps the requested rank into the valid range, lifts the
//! target out of the rank-ordered sequence, reinserts it at the clamped
//! position and renumbers every entry. The renumbering pass is total, so the
//! contiguous-rank invariant holds afterwards even when the input list had
//! gaps or duplicate ranks.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Provider label used for repositories that live on the local machine.
pub const LOCAL_PROVIDER: &str = "Local";

/// One entry of the repositories file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Unique name of the repository within a list.
    pub name: String,

    /// Version string. Opaque to this crate.
    #[serde(default)]
    pub version: String,

    /// Remote location. Empty for local repositories.
    #[serde(default)]
    pub url: String,

    /// Zero-based lookup rank.
    #[serde(default)]
    pub priority: usize,

    /// Whether the repository lives on the local machine.
    #[serde(default, rename = "isLocal")]
    pub is_local: bool,

    /// Informational provider label, e.g. "Github" or "Local".
    #[serde(default)]
    pub provider: String,

    /// Fields this crate does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Repository {
    /// Create a repository with only a name and a rank.
    pub fn new(name: impl Into<String>, priority: usize) -> Self {
        Self {
            name: name.into(),
            version: String::new(),
            url: String::new(),
            priority,
            is_local: false,
            provider: String::new(),
            extra: Map::new(),
        }
    }

    /// Create a local repository.
    pub fn local(name: impl Into<String>, priority: usize) -> Self {
        Self {
            is_local: true,
            provider: LOCAL_PROVIDER.to_string(),
            ..Self::new(name, priority)
        }
    }
}

/// Ordered collection of repositories as read from storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryList {
    repositories: Vec<Repository>,
}

impl RepositoryList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repositories
    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    /// Whether the list has no repositories
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Iterate in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, Repository> {
        self.repositories.iter()
    }

    /// Look up a repository by name
    pub fn get(&self, name: &str) -> Option<&Repository> {
        self.repositories.iter().find(|r| r.name == name)
    }

    /// Names in stored order
    pub fn names(&self) -> Vec<&str> {
        self.repositories.iter().map(|r| r.name.as_str()).collect()
    }

    /// Repositories sorted by rank. Equal ranks keep their stored order.
    pub fn by_priority(&self) -> Vec<&Repository> {
        let mut sorted: Vec<&Repository> = self.repositories.iter().collect();
        sorted.sort_by_key(|r| r.priority);
        sorted
    }

    /// Whether the ranks are exactly `0..len`, each used once.
    pub fn has_contiguous_priorities(&self) -> bool {
        let mut ranks: Vec<usize> = self.repositories.iter().map(|r| r.priority).collect();
        ranks.sort_unstable();
        ranks.into_iter().eq(0..self.len())
    }

    /// Move the named repository to `requested` and renumber every rank.
    ///
    /// Out-of-range requests are clamped into `[0, len - 1]` without error.
    /// After the call the list is stored in rank order and the ranks are
    /// `0..len`. Returns the rank the repository ended up with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no repository has that name. The list
    /// is left untouched in that case.
    pub fn set_priority(&mut self, name: &str, requested: i64) -> Result<usize> {
        let index = self
            .repositories
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
            })?;

        let rank = clamp_priority(requested, self.len());
        if i64::try_from(rank) != Ok(requested) {
            debug!("Requested priority {requested} for '{name}' clamped to {rank}");
        }

        let target = self.repositories.remove(index);
        // Stable, so entries sharing a rank keep their stored order.
        self.repositories.sort_by_key(|r| r.priority);
        self.repositories.insert(rank, target);

        for (position, repository) in self.repositories.iter_mut().enumerate() {
            repository.priority = position;
        }

        Ok(rank)
    }
}

/// Bound a requested rank into `[0, len - 1]`.
///
/// An empty list has no valid rank; zero is returned so callers can still
/// index an insertion point.
pub fn clamp_priority(requested: i64, len: usize) -> usize {
    let Some(last) = len.checked_sub(1) else {
        return 0;
    };
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).map_or(last, |rank| rank.min(last))
    }
}

impl From<Vec<Repository>> for RepositoryList {
    fn from(repositories: Vec<Repository>) -> Self {
        Self { repositories }
    }
}

impl FromIterator<Repository> for RepositoryList {
    fn from_iter<I: IntoIterator<Item = Repository>>(iter: I) -> Self {
        Self {
            repositories: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RepositoryList {
    type Item = &'a Repository;
    type IntoIter = std::slice::Iter<'a, Repository>;

    fn into_iter(self) -> Self::IntoIter {
        self.repositories.iter()
    }
}

impl IntoIterator for RepositoryList {
    type Item = Repository;
    type IntoIter = std::vec::IntoIter<Repository>;

    fn into_iter(self) -> Self::IntoIter {
        self.repositories.into_iter()
    }
}
