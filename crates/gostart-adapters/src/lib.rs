//! Infrastructure adapters for gostart.
//!
//! This crate implements the ports defined in `gostart-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod formatter;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::{GofmtFormatter, PassthroughFormatter};
pub use renderer::BuiltinRenderer;
