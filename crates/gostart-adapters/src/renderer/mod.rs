//! Template renderers.

mod builtin;

pub use builtin::{BuiltinRenderer, embedded, render_placeholders};
