//! Major opcodes and secondary selector fields.
//!
//! Defines the opcode field (bits 31..26) values and the extra fields that
//! distinguish instructions sharing an opcode.

/// Load word (`lw rt, imm(rs)`).
pub const OP_LOAD: u32 = 0b100000;

/// Store word (`sw imm(rs), rt`).
pub const OP_STORE: u32 = 0b101000;

/// Register-register arithmetic; the function field selects the operation.
pub const OP_SPECIAL: u32 = 0b000000;

/// Register-immediate branches; the rt field selects the condition.
pub const OP_REGIMM: u32 = 0b000001;

/// Function field of `add` under [`OP_SPECIAL`].
pub const FUNCT_ADD: u32 = 0b100000;

/// rt field of `beqz` under [`OP_REGIMM`].
pub const RT_BEQZ: u32 = 0b00010;
