//! Text File Store
//!
//! File-backed [`Store`] implementation. Writes go to a sibling temp file
//! which is then renamed over the target, so a reader never observes a torn
//! snapshot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{CacheError, Result};
use crate::store::Store;

// == Text File ==
/// A single text file acting as a durable snapshot store.
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file itself is not touched until [`Store::read`] or
    /// [`Store::write`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, source: io::Error) -> CacheError {
        CacheError::Storage {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Store for TextFile {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))
    }

    fn write(&self, data: &str) -> Result<()> {
        // Rename within the same directory so the swap is atomic.
        let tmp_path = self.path.with_extension("tmp");

        let mut content = data.to_string();
        if !content.ends_with('\n') {
            content.push('\n');
        }

        fs::write(&tmp_path, content).map_err(|e| self.storage_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.storage_error(e))
    }
}
