//! Application layer errors.
//!
//! These errors represent failures in orchestration (I/O through ports,
//! template lookup), not naming or layout rules. Those are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed. Always fatal for the current command.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// No template registered under this name.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run gostart from the project root".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "A template could not be rendered".into(),
                "If you use a custom templates directory, check its placeholders".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{}'", name),
                "Remove the file from your templates directory to use the built-in one".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
