//! # Unit Components
//!
//! This module serves as the central hub for the tests of each simulator component.



/// Unit tests for the processor core: architectural state, stages, hazards, engine.
pub mod core;

/// Unit tests for the instruction set: decoding and disassembly.
pub mod isa;
