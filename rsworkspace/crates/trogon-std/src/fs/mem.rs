#[cfg(any(test, feature = "test-support"))]
use std::cell::{Cell, RefCell};
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::io;
#[cfg(any(test, feature = "test-support"))]
use std::path::{Path, PathBuf};

#[cfg(any(test, feature = "test-support"))]
use super::{ExistsFile, ReadFile};

/// Uses `RefCell` for interior mutability — all methods take `&self`.
///
/// Counts reads so tests can assert how often a file was actually opened.
///
/// # Path Semantics
///
/// Paths are stored as raw [`PathBuf`] keys with **no normalization**.
/// `".env"` and `"./.env"` are two distinct entries.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct MemFs {
    files: RefCell<HashMap<PathBuf, String>>,
    reads: Cell<usize>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.borrow_mut().remove(path.as_ref());
    }

    /// Number of successful and failed [`ReadFile::read_to_string`] calls.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadFile for MemFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.set(self.reads.get() + 1);
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ExistsFile for MemFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}
