//! What a generation command did, for the CLI to print.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    application::ports::{Filesystem, FormatOutcome, TemplateData, TemplateName, TemplateRenderer},
    domain::AggregatorKind,
    error::GostartResult,
};

/// Result of one [`AggregatorSync::sync`](super::AggregatorSync::sync) call.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The aggregator did not exist and was seeded with the entry.
    Created { path: PathBuf, format: FormatOutcome },
    /// The aggregator was regenerated with `entries` entries.
    Updated {
        path: PathBuf,
        entries: usize,
        format: FormatOutcome,
    },
    /// Entry already registered; nothing was written.
    Unchanged { path: PathBuf },
}

impl SyncOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created { path, .. } | Self::Updated { path, .. } | Self::Unchanged { path } => {
                path
            }
        }
    }

    pub fn wrote(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }

    /// `Some(false)` when the formatter failed and raw output was kept.
    pub fn formatted(&self) -> Option<bool> {
        match self {
            Self::Created { format, .. } | Self::Updated { format, .. } => {
                Some(format.is_formatted())
            }
            Self::Unchanged { .. } => None,
        }
    }
}

/// Result of one [`BootstrapWiring::wire`](super::BootstrapWiring::wire) call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WiringReport {
    pub path: PathBuf,
    /// The file was absent and seeded from the skeleton.
    pub seeded: bool,
    pub inserted: Vec<String>,
    pub already_present: usize,
    /// Markers missing from the file; their lines were skipped.
    pub not_applicable: Vec<&'static str>,
}

impl WiringReport {
    pub fn wrote(&self) -> bool {
        self.seeded || !self.inserted.is_empty()
    }
}

/// Files and directories touched by a command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub directories: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    /// Existing files left untouched.
    pub skipped: Vec<PathBuf>,
    pub synced: Vec<(AggregatorKind, SyncOutcome)>,
    pub wiring: Option<WiringReport>,
}

impl GenerationReport {
    pub fn is_noop(&self) -> bool {
        self.directories.is_empty()
            && self.written.is_empty()
            && self.synced.iter().all(|(_, s)| !s.wrote())
            && self.wiring.as_ref().is_none_or(|w| !w.wrote())
    }

    pub fn merge(&mut self, other: GenerationReport) {
        self.directories.extend(other.directories);
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
        self.synced.extend(other.synced);
        if other.wiring.is_some() {
            self.wiring = other.wiring;
        }
    }
}

/// Render `template` into `path` unless it exists and `overwrite` is off.
pub(crate) fn emit(
    filesystem: &dyn Filesystem,
    renderer: &dyn TemplateRenderer,
    path: PathBuf,
    template: TemplateName,
    data: &TemplateData,
    overwrite: bool,
    report: &mut GenerationReport,
) -> GostartResult<()> {
    if !overwrite && filesystem.exists(&path) {
        debug!(path = %path.display(), "File exists, skipping");
        report.skipped.push(path);
        return Ok(());
    }

    let content = renderer.render(template, data)?;
    filesystem.write_file(&path, &content)?;
    info!(path = %path.display(), %template, "Generated file");
    report.written.push(path);
    Ok(())
}
