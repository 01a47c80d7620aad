//! Core domain layer for gostart.
//!
//! Pure text and path logic with no I/O. Everything here operates on
//! `&str` in and `String` out; reading and writing files is the job of the
//! application layer's ports.
//!
//! ## Pieces
//!
//! - [`entry`]: one registered component and the ordered, deduplicated set
//!   of them
//! - [`aggregator`]: the recognised grammar, parser and writer for
//!   aggregator files
//! - [`injector`]: line-anchored splicing used on the bootstrap file
//! - [`bootstrap`]: the bootstrap skeleton, its markers and the per-feature
//!   wiring plan
//! - [`layout`], [`kind`], [`naming`], [`manifest`]: conventions
pub mod aggregator;
pub mod bootstrap;
pub mod entry;
pub mod error;
pub mod injector;
pub mod kind;
pub mod layout;
pub mod manifest;
pub mod naming;

pub use aggregator::{AggregatorParser, ParsedAggregator, render_aggregator};
pub use bootstrap::{BootstrapSkeleton, Injection, Markers, WiringPlan, WiringSlot};
pub use entry::{Entry, EntrySet};
pub use error::{DomainError, ErrorCategory};
pub use injector::{Splice, contains_line, inject_after_marker, splice_after_marker};
pub use kind::AggregatorKind;
pub use layout::ProjectLayout;
pub use manifest::parse_module_name;
pub use naming::{normalize_component_name, title_case};
