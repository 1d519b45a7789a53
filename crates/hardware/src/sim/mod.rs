//! Simulation session, program loading, and diagnostics.
//!
//! Provides the run controller that owns one CPU and one pipeline, the loader
//! that turns program text into program memory, and the cycle diagram.

/// Per-instruction, per-cycle stage diagram.
pub mod diagram;

/// Program text parsing and file loading.
pub mod loader;

/// Run controller: load, step, breakpoints, run-to-end, forwarding toggle.
pub mod simulator;

pub use diagram::{CycleDiagram, DiagramRow};
pub use loader::{LoadReport, RejectedLine, load_program_file, parse_program};
pub use simulator::Simulator;
