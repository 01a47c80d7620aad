//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use gostart_core::{
    application::ports::Filesystem,
    error::{GostartError, GostartResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep one handle and give
/// another to a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            inner.add_parents(&path);
            inner.files.insert(path, content.into());
        }
        self
    }

    /// A file's content, if present (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directory paths, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn poisoned(path: &Path) -> GostartError {
        GostartError::filesystem(path, "memory filesystem lock poisoned")
    }
}

impl MemoryFilesystemInner {
    fn add_parents(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                self.directories.insert(current.clone());
            }
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> GostartResult<Option<String>> {
        let inner = self.inner.read().map_err(|_| Self::poisoned(path))?;
        if inner.directories.contains(path) {
            return Err(GostartError::filesystem(path, "is a directory"));
        }
        Ok(inner.files.get(path).cloned())
    }

    fn write_file(&self, path: &Path, content: &str) -> GostartResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned(path))?;
        if inner.directories.contains(path) {
            return Err(GostartError::filesystem(path, "is a directory"));
        }
        inner.add_parents(path);
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> GostartResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
