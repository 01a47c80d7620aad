//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the services need from the outside world.
//! The `gostart-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::domain::Entry;
use crate::error::GostartResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gostart_adapters::filesystem::LocalFilesystem` (production)
/// - `gostart_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are relative to the project root the adapter was opened on.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file. `Ok(None)` when it does not exist.
    fn read_file(&self, path: &Path) -> GostartResult<Option<String>>;

    /// Replace the whole content of a file, creating parent directories.
    fn write_file(&self, path: &Path, content: &str) -> GostartResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GostartResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Every template the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Usecase,
    UsecaseInterface,
    Repository,
    RepositoryInterface,
    Handler,
    Main,
    Air,
    Database,
    Gitignore,
    Readme,
    Env,
    Config,
    Response,
    Request,
    Models,
    Dockerfile,
    DockerCompose,
}

impl TemplateName {
    pub const ALL: [TemplateName; 17] = [
        Self::Usecase,
        Self::UsecaseInterface,
        Self::Repository,
        Self::RepositoryInterface,
        Self::Handler,
        Self::Main,
        Self::Air,
        Self::Database,
        Self::Gitignore,
        Self::Readme,
        Self::Env,
        Self::Config,
        Self::Response,
        Self::Request,
        Self::Models,
        Self::Dockerfile,
        Self::DockerCompose,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Usecase => "usecase",
            Self::UsecaseInterface => "usecase_interface",
            Self::Repository => "repository",
            Self::RepositoryInterface => "repository_interface",
            Self::Handler => "handler",
            Self::Main => "main",
            Self::Air => "air",
            Self::Database => "database",
            Self::Gitignore => "gitignore",
            Self::Readme => "readme",
            Self::Env => "env",
            Self::Config => "config",
            Self::Response => "response",
            Self::Request => "request",
            Self::Models => "models",
            Self::Dockerfile => "dockerfile",
            Self::DockerCompose => "docker_compose",
        }
    }

    /// File name of the template source, e.g. `usecase.tmpl`.
    pub fn file_name(&self) -> String {
        format!("{}.tmpl", self.as_str())
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".tmpl")?;
        Self::ALL.into_iter().find(|t| t.as_str() == stem)
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values available to templates as `{{.ServiceName}}`,
/// `{{.ServiceNameLower}}` and `{{.ModuleName}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateData {
    pub service_name: String,
    pub service_name_lower: String,
    pub module_name: String,
}

impl TemplateData {
    pub fn for_component(entry: &Entry) -> Self {
        Self {
            service_name: entry.display_name().to_string(),
            service_name_lower: entry.name().to_string(),
            module_name: entry.module_path().to_string(),
        }
    }

    pub fn for_project(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            ..Self::default()
        }
    }

    pub fn for_service(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            service_name_lower: service_name.to_lowercase(),
            ..Self::default()
        }
    }

    /// `(placeholder, value)` pairs in the `{{.Field}}` syntax.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("ServiceName", self.service_name.as_str()),
            ("ServiceNameLower", self.service_name_lower.as_str()),
            ("ModuleName", self.module_name.as_str()),
        ]
    }
}

/// Port for template rendering.
///
/// Implemented by:
/// - `gostart_adapters::renderer::BuiltinRenderer` (embedded templates with
///   an optional override directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: TemplateName, data: &TemplateData) -> GostartResult<String>;
}

/// Why the pretty-printer did not produce output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The formatter could not be run at all.
    #[error("formatter `{command}` unavailable: {reason}")]
    Unavailable { command: String, reason: String },

    /// The formatter ran and rejected the source.
    #[error("formatter rejected source: {reason}")]
    Rejected { reason: String },
}

/// Port for the target language's canonical pretty-printer.
///
/// Implemented by:
/// - `gostart_adapters::formatter::GofmtFormatter` (pipes through `gofmt`)
/// - `gostart_adapters::formatter::PassthroughFormatter` (formatting disabled)
#[cfg_attr(test, mockall::automock)]
pub trait SourceFormatter: Send + Sync {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Which path the best-effort formatting step took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    Formatted(String),
    /// The formatter failed; `text` is the engine's own output, verbatim.
    Unformatted { text: String, reason: FormatError },
}

impl FormatOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Formatted(text) | Self::Unformatted { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Formatted(text) | Self::Unformatted { text, .. } => text,
        }
    }

    pub fn is_formatted(&self) -> bool {
        matches!(self, Self::Formatted(_))
    }
}

/// Run `formatter` over `text`, keeping `text` when it fails.
///
/// Formatting is cosmetic: a failure is logged and reported in the outcome,
/// never returned as an error.
pub fn format_or_fallback(formatter: &dyn SourceFormatter, text: String) -> FormatOutcome {
    match formatter.format(&text) {
        Ok(formatted) => FormatOutcome::Formatted(formatted),
        Err(reason) => {
            warn!(%reason, "Formatter failed, keeping unformatted output");
            FormatOutcome::Unformatted { text, reason }
        }
    }
}
