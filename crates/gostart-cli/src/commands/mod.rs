//! Command handlers. Each one turns parsed arguments into a core service
//! call and prints the resulting report.

pub mod completions;
pub mod config;
pub mod create;
pub mod docker;
pub mod init;

use std::path::Path;

use gostart_adapters::{BuiltinRenderer, GofmtFormatter, LocalFilesystem, PassthroughFormatter};
use gostart_core::application::SourceFormatter;
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Filesystem rooted at the project directory.
pub(crate) fn filesystem(project_dir: &Path) -> CliResult<LocalFilesystem> {
    if !project_dir.is_dir() {
        return Err(CliError::ProjectDirNotFound {
            path: project_dir.to_path_buf(),
        });
    }
    Ok(LocalFilesystem::with_root(project_dir))
}

/// Built-in templates, shadowed by `templates.dir` when configured.
pub(crate) fn renderer(config: &AppConfig, project_dir: &Path) -> CliResult<BuiltinRenderer> {
    match config.templates_dir(project_dir) {
        Some(dir) => Ok(BuiltinRenderer::with_override_dir(dir)?),
        None => Ok(BuiltinRenderer::new()),
    }
}

pub(crate) fn formatter(config: &AppConfig) -> Box<dyn SourceFormatter> {
    if config.formatter.enabled {
        let gofmt = GofmtFormatter::from_command_line(&config.formatter.command);
        debug!(program = gofmt.program(), "Formatter enabled");
        Box::new(gofmt)
    } else {
        debug!("Formatter disabled");
        Box::new(PassthroughFormatter)
    }
}
