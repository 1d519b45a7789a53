//! Unit tests for the processor core.


/// Pipeline engine, stages, and hazards.
pub mod pipeline;
