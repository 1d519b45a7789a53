//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Each stage function runs one stage for one in-flight
//! instruction and reports whether it advanced, held, or retired. It includes:
//! 1. **Fetch:** Resolves branches, fills IF/ID, and checks for data hazards.
//! 2. **Decode:** Reads operands and marks the destination register pending.
//! 3. **Execute:** Performs the add or computes the effective address.
//! 4. **Memory:** Handles data load and store operations.
//! 5. **Writeback:** Commits results to the register file and retires.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
