//! Five-stage pipeline simulator library.
//!
//! This crate implements a cycle-level simulator of a classic in-order MIPS-style
//! pipeline for teaching hazards, stalls, and forwarding:
//! 1. **Core:** Pipeline engine (fetch, decode, execute, memory, writeback), register
//!    file with pending-write tracking, data memory, and the stall machine.
//! 2. **ISA:** Decoding and disassembly for `lw`, `sw`, `add`, `beqz`, and `nop`.
//! 3. **Simulation:** Program loader, run controller, and the cycle diagram.
//! 4. **Support:** Configuration, error types, and statistics collection.
//!
//! # Examples
//!
//! ```
//! use pipesim_core::{Config, Simulator};
//! use pipesim_core::isa::Instruction;
//! use pipesim_core::core::arch::Program;
//!
//! let mut sim = Simulator::new(&Config::default());
//! sim.load(Program::new(vec![Instruction::add(3, 1, 2)]));
//! let ticks = sim.run_to_end().unwrap();
//! assert_eq!(ticks, 5);
//! assert_eq!(sim.registers().read(3), 3);
//! ```

/// Common types and constants (errors, encoding layout).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (architectural state, pipeline, hazards).
pub mod core;
/// Instruction set (decode, instruction model, disassembly).
pub mod isa;
/// Run controller, program loader, and cycle diagram.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type returned by every fallible operation.
pub use crate::common::error::SimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds architectural state, latches, and stats.
pub use crate::core::Cpu;
/// Pipeline stage identifier, used for breakpoints.
pub use crate::core::pipeline::Stage;
/// Top-level session; construct with `Simulator::new`.
pub use crate::sim::Simulator;
