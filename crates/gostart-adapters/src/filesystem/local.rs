//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use gostart_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GostartError, GostartResult},
};
use tempfile::NamedTempFile;
use tracing::trace;

/// Production filesystem rooted at a project directory.
///
/// Relative paths handed to the port are resolved against `root`. Writes go
/// through a temporary sibling file that is renamed over the target, so a
/// reader never observes a half-written file.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Filesystem rooted at the current working directory.
    pub fn new() -> Self {
        Self::with_root(".")
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> GostartResult<Option<String>> {
        match std::fs::read_to_string(self.resolve(path)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "read file")),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> GostartResult<()> {
        let target = self.resolve(path);
        let parent = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| map_io_error(path, e, "create directory"))?;

        let mut temp =
            NamedTempFile::new_in(parent).map_err(|e| map_io_error(path, e, "create temp file"))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|e| map_io_error(path, e, "write file"))?;
        temp.persist(&target)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;

        trace!(path = %target.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> GostartResult<()> {
        std::fs::create_dir_all(self.resolve(path))
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GostartError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
