//! File system access
//!
//! A small trait seam so the bundler can run against real disk in the binary
//! and an in-memory map in unit tests. Each read is bounded to its own call;
//! no handle outlives the operation that opened it.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BundleError, BundleResult};

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content as UTF-8 text
    fn read_to_string(&self, path: &Path) -> BundleResult<String>;

    /// Write file content, create-or-overwrite
    fn write_atomic(&self, path: &Path, content: &str) -> BundleResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}

/// Local disk implementation
///
/// Writes go through a tempfile-then-rename so a failure mid-write never
/// leaves a truncated output file behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> BundleResult<String> {
        std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => BundleError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => BundleError::Read {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> BundleResult<()> {
        let write_err = |source| BundleError::Write {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(write_err)?;

        // Temp file in the same directory so the final rename stays on one
        // filesystem.
        let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<PathBuf, String>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> BundleResult<String> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| BundleError::InputNotFound {
                path: path.to_path_buf(),
            })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> BundleResult<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }
}
