//! Architectural state.
//!
//! This module contains the state visible to a program, independent of how the
//! pipeline schedules it. It includes the following modules:
//! 1. **GPRs:** Signed register file with per-register pending-write owners.
//! 2. **Data Memory:** Flat word-addressed data store with bounds checking.
//! 3. **Instruction Memory:** The loaded program, indexed by `pc / 4`.

/// Word-addressed data memory.
pub mod dmem;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Instruction (program) memory.
pub mod imem;

pub use dmem::DataMemory;
pub use gpr::{Gpr, Register};
pub use imem::Program;
