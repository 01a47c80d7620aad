//! Project path conventions.
//!
//! Every path the generator touches is derived from a [`ProjectLayout`]
//! handed to the services at construction. Paths are relative to the project
//! root; the same relative directories double as Go import sub-paths.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, kind::AggregatorKind};

/// Where things live inside a generated Go project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Module manifest holding the `module <path>` line.
    pub manifest: PathBuf,
    pub usecases_dir: PathBuf,
    pub repositories_dir: PathBuf,
    pub handlers_dir: PathBuf,
    pub database_dir: PathBuf,
    /// Dependency bootstrap file patched by `create feature`.
    pub bootstrap_file: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("go.mod"),
            usecases_dir: PathBuf::from("src/app/usecases"),
            repositories_dir: PathBuf::from("src/infrastructure/repositories"),
            handlers_dir: PathBuf::from("src/interface/handler"),
            database_dir: PathBuf::from("src/infrastructure/database"),
            bootstrap_file: PathBuf::from("src/app/bootstrap/bootstrap.go"),
        }
    }
}

impl ProjectLayout {
    /// Reject absolute paths and parent traversal.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("manifest", &self.manifest),
            ("usecases_dir", &self.usecases_dir),
            ("repositories_dir", &self.repositories_dir),
            ("handlers_dir", &self.handlers_dir),
            ("database_dir", &self.database_dir),
            ("bootstrap_file", &self.bootstrap_file),
        ];

        for (field, path) in fields {
            if path.as_os_str().is_empty() {
                return Err(DomainError::InvalidLayout {
                    reason: format!("{field} cannot be empty"),
                });
            }
            if path
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
            {
                return Err(DomainError::InvalidLayout {
                    reason: format!(
                        "{field} must be a relative path inside the project: {}",
                        path.display()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Directory holding the per-component packages of `kind`.
    pub fn dir_for(&self, kind: AggregatorKind) -> &Path {
        match kind {
            AggregatorKind::Usecase => &self.usecases_dir,
            AggregatorKind::Repository => &self.repositories_dir,
            AggregatorKind::Handler => &self.handlers_dir,
        }
    }

    pub fn aggregator_path(&self, kind: AggregatorKind) -> PathBuf {
        self.dir_for(kind).join(kind.aggregator_file_name())
    }

    pub fn component_dir(&self, kind: AggregatorKind, name: &str) -> PathBuf {
        self.dir_for(kind).join(name)
    }

    /// Import sub-path of the aggregator package, e.g. `src/app/usecases`.
    pub fn import_root(&self, kind: AggregatorKind) -> String {
        to_import_path(self.dir_for(kind))
    }

    /// Full import path of a directory under `module`.
    pub fn import_path(&self, module: &str, dir: &Path) -> String {
        format!("{}/{}", module, to_import_path(dir))
    }
}

/// Render a relative path with `/` separators regardless of platform.
fn to_import_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(seg) => Some(seg.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
