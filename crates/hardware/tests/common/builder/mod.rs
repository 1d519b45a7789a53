//! Test builders.

/// Program builder.
pub mod program;
