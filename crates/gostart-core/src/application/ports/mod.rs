//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gostart-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRenderer`: Template rendering
//!   - `SourceFormatter`: Best-effort pretty-printing
//!
//! - **Driving (Input) Ports**: Called by the CLI, implemented by services

pub mod output;

pub use output::{
    Filesystem, FormatError, FormatOutcome, SourceFormatter, TemplateData, TemplateName,
    TemplateRenderer, format_or_fallback,
};

#[cfg(test)]
pub use output::{MockFilesystem, MockSourceFormatter, MockTemplateRenderer};
