//! Shared test infrastructure.

/// Fluent program builders.
pub mod builder;

/// `TestContext` harness around `Simulator`.
pub mod harness;
