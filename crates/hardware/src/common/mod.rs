//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides fundamental building blocks shared by every component. It includes:
//! 1. **Constants:** Register-file width, instruction size, and encoding field layout.
//! 2. **Error Handling:** The single error type returned by every fallible operation.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types returned by the loader, pipeline, and run controller.
pub mod error;

pub use error::{SimError, SimResult};
