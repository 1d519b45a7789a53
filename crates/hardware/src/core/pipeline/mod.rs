//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The per-tick scheduler that runs every in-flight instruction oldest first.
//! 2. **Hazards:** Read-after-write detection and the Forward Value Table.
//! 3. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 4. **Roster:** The ordered list of in-flight instructions.
//! 5. **Signals:** Stage identifiers, diagram cells, and the stall machine.
//! 6. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 7. **Traits:** Common interface for the latches.

/// Per-tick pipeline scheduler.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// In-flight instruction roster.
pub mod roster;

/// Stage identifiers, diagram cells, and stall state.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;

pub use engine::{Pipeline, TickCell, TickReport};
pub use signals::{Stage, StageCell, StallState};
