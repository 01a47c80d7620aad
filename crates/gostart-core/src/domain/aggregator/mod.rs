//! Aggregator files: one Go package per kind that re-exports every
//! generated component of that kind (`usecases.go`, `repositories.go`,
//! `handler.go`).

pub mod grammar;
pub mod parser;
pub mod writer;

pub use parser::{AggregatorParser, ParsedAggregator};
pub use writer::{alias_ident, binding_ident, binding_line, render_aggregator};
