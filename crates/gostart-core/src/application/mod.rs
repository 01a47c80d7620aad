//! Application layer for gostart.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AggregatorSync, BootstrapWiring,
//!   ComponentService, ProjectService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! text-manipulation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AggregatorSync, BootstrapWiring, ComponentService, GenerationReport, ProjectService,
    SyncOutcome, WiringReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Filesystem, FormatError, FormatOutcome, SourceFormatter, TemplateData, TemplateName,
    TemplateRenderer,
};

pub use error::ApplicationError;
