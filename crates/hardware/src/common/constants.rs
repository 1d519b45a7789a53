//! Global Simulator Constants.
//!
//! This module defines constants used across the simulator. It includes:
//! 1. **Architectural Constants:** Register count and instruction size.
//! 2. **Encoding Constants:** Field masks and shifts for the 32-bit instruction word.
//! 3. **Initial State:** Values seeded into the register file on reset.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Size of one instruction in bytes; the program counter advances by this amount.
pub const INSTRUCTION_SIZE: i64 = 4;

/// Number of characters in one textual instruction encoding.
pub const ENCODING_WIDTH: usize = 32;

/// Bit mask for extracting the opcode field (bits 31..26).
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit position shift for the opcode field.
pub const OPCODE_SHIFT: u32 = 26;

/// Bit mask for a five-bit register field.
pub const REG_MASK: u32 = 0x1F;

/// Bit position shift for the first source register (rs) field.
pub const RS_SHIFT: u32 = 21;

/// Bit position shift for the second source register (rt) field.
pub const RT_SHIFT: u32 = 16;

/// Bit position shift for the destination register (rd) field.
pub const RD_SHIFT: u32 = 11;

/// Bit mask for the function-code field (bits 5..0).
pub const FUNCT_MASK: u32 = 0x3F;

/// Bit mask for the 16-bit immediate field (bits 15..0).
pub const IMM_MASK: u32 = 0xFFFF;

/// Registers given a non-zero value on reset, as `(index, value)` pairs.
pub const SEEDED_REGISTERS: [(usize, i64); 2] = [(1, 1), (2, 2)];

/// Default number of words in data memory.
pub const DEFAULT_DATA_WORDS: usize = 1000;
