//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level commands: create a component, wire a feature, initialise a
//! project.

pub mod aggregator_sync;
pub mod bootstrap_service;
pub mod component_service;
pub mod project_service;
pub mod report;

pub use aggregator_sync::AggregatorSync;
pub use bootstrap_service::BootstrapWiring;
pub use component_service::{ComponentService, component_files};
pub use project_service::{DEFAULT_SERVICE_NAME, PLACEHOLDER_MODULE, ProjectService};
pub use report::{GenerationReport, SyncOutcome, WiringReport};
