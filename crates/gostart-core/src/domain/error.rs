// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports carry them around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },

    #[error("Invalid project layout: {reason}")]
    InvalidLayout { reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Module name not found in {manifest}")]
    ModuleNameNotFound { manifest: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidComponentName { name, reason } => vec![
                format!("'{}' cannot be used as a Go package name: {}", name, reason),
                "Use lowercase letters, digits, and underscores".into(),
                "Start with a letter, e.g. user, order, blog_post".into(),
            ],
            Self::InvalidLayout { reason } => vec![
                format!("Layout issue: {}", reason),
                "Check the [layout] section of your gostart.toml".into(),
            ],
            Self::ModuleNameNotFound { manifest } => vec![
                format!("No 'module <path>' line could be read from {}", manifest),
                "Run: go mod init <module-path>".into(),
                "Run gostart from the project root (where go.mod lives)".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidComponentName { .. } => ErrorCategory::Validation,
            Self::InvalidLayout { .. } => ErrorCategory::Validation,
            Self::ModuleNameNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
