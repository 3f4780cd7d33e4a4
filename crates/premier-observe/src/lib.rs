//! Observability for the Premier Bank site widgets: subscriber setup and
//! the span field names used across the workspace.

pub mod attrs;
pub mod tracing_setup;
