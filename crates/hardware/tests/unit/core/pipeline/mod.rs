//! Unit tests for the pipeline.

/// Tick-level scheduling: admission, ordering, completion.
pub mod engine;


/// Individual stage behaviour.
pub mod stages;
