//! Instruction Disassembler.
//!
//! Renders instructions as assembly text for the cycle diagram, traces, and
//! test diagnostics. The output is deterministic:
//!
//! ```text
//! lw r3,0(r1)   sw 4(r1),r2   add r3,r1,r2   beqz r1,8   nop
//! ```

use std::fmt;

use crate::isa::decode::decode_word;
use crate::isa::instruction::{Instruction, InstructionKind};

/// Disassembles a decoded instruction.
pub fn disassemble(inst: &Instruction) -> String {
    inst.to_string()
}

/// Disassembles a raw instruction word, yielding `"unknown"` for unrecognized encodings.
pub fn disassemble_word(word: u32) -> String {
    decode_word(word).map_or_else(|| "unknown".to_string(), |inst| inst.to_string())
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InstructionKind::Load => write!(f, "lw r{},{}(r{})", self.rt, self.imm, self.rs),
            InstructionKind::Store => write!(f, "sw {}(r{}),r{}", self.imm, self.rs, self.rt),
            InstructionKind::Add => write!(f, "add r{},r{},r{}", self.rd, self.rs, self.rt),
            InstructionKind::BranchIfZero => write!(f, "beqz r{},{}", self.rs, self.imm),
            InstructionKind::NoOp => f.write_str("nop"),
        }
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "lw",
            Self::Store => "sw",
            Self::Add => "add",
            Self::BranchIfZero => "beqz",
            Self::NoOp => "nop",
        };
        f.write_str(name)
    }
}
