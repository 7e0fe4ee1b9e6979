//! Byte-level storage backends for the repositories file

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Read, write and check for raw bytes at a path.
///
/// The priority manager only ever talks to storage through this trait, so a
/// filesystem, an in-memory fake or any other backend can be plugged in.
pub trait Storage: Send + Sync {
    /// Read the full contents at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the contents at `path`.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Whether anything is stored at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Storage backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl Storage for FileStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// In-memory storage, mainly for tests and dry runs.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with string content
    pub fn with_file<P: AsRef<Path>>(self, path: P, content: &str) -> Self {
        self.lock()
            .insert(path.as_ref().to_path_buf(), content.as_bytes().to_vec());
        self
    }

    /// Current content of a file as a string, if present and valid UTF-8
    pub fn contents<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        self.lock()
            .get(path.as_ref())
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        // A poisoned map is still a consistent map of whole files.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.lock().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.lock().insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }
}
