//! Unified error handling for gostart-core.
//!
//! Wraps domain and application errors behind one type carrying
//! user-actionable suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for gostart-core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GostartError {
    /// Naming, layout or manifest rule violations.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Port failures (filesystem, templates).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl GostartError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Shorthand for a filesystem failure at `path`.
    pub fn filesystem(path: impl Into<std::path::PathBuf>, reason: impl ToString) -> Self {
        ApplicationError::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
        .into()
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type GostartResult<T> = Result<T, GostartError>;
