//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode values, the decoded instruction model, the text and
//! word decoders, and the disassembler for the five-instruction teaching ISA:
//! `lw`, `sw`, `add`, `beqz`, and `nop`.

/// Instruction decoding from program text and raw words.
pub mod decode;

/// Instruction disassembler for traces and the cycle diagram.
pub mod disasm;

/// Decoded instruction model and bit extraction utilities.
pub mod instruction;

/// Opcode and selector field values.
pub mod opcodes;

pub use decode::{decode_line, decode_word};
pub use instruction::{Instruction, InstructionKind};
