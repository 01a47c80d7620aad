//! gostart Core - incremental source patching for Go project scaffolds
//!
//! This crate provides the domain and application layers for the gostart
//! generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gostart-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ComponentService, ProjectService,     │
//! │   AggregatorSync, BootstrapWiring)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRenderer,          │
//! │  SourceFormatter)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gostart-adapters (Infrastructure)   │
//! │ (LocalFilesystem, BuiltinRenderer,      │
//! │  GofmtFormatter)                        │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (AggregatorParser, render_aggregator,   │
//! │  MarkerInjector, WiringPlan)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gostart_core::prelude::*;
//!
//! # fn run(
//! #     fs: Box<dyn Filesystem>,
//! #     renderer: Box<dyn TemplateRenderer>,
//! #     formatter: Box<dyn SourceFormatter>,
//! # ) -> GostartResult<()> {
//! let service = ComponentService::new(fs, renderer, formatter, ProjectLayout::default());
//! let report = service.create(AggregatorKind::Usecase, "user")?;
//! assert!(!report.written.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentService, GenerationReport, ProjectService, SyncOutcome, WiringReport,
        ports::{
            Filesystem, FormatError, SourceFormatter, TemplateData, TemplateName,
            TemplateRenderer,
        },
    };
    pub use crate::domain::{AggregatorKind, Entry, EntrySet, ProjectLayout};
    pub use crate::error::{GostartError, GostartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
