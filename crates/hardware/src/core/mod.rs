//! Core processor implementation.
//!
//! This module contains the processor model: the architectural state, the CPU
//! container that the stages operate on, and the five-stage pipeline that
//! schedules in-flight instructions.

/// Architectural state (register file, data memory, program memory).
pub mod arch;

/// CPU state container and hazard/forwarding operations.
pub mod cpu;

/// Instruction pipeline implementation (engine, stages, latches, hazards, signals).
pub mod pipeline;

pub use self::cpu::Cpu;
pub use self::pipeline::Pipeline;
