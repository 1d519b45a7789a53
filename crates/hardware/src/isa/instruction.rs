//! Instruction representation and bit extraction utilities.
//!
//! Provides the decoded [`Instruction`] value that flows through the pipeline and
//! the [`InstructionBits`] trait for pulling fields out of a 32-bit encoding.
//! Field layout, most significant bit first:
//!
//! ```text
//! | opcode 31..26 | rs 25..21 | rt 20..16 | rd 15..11 | shamt 10..6 | funct 5..0 |
//! |               |           |           |          imm 15..0                   |
//! ```

use crate::common::constants::{
    FUNCT_MASK, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, REG_MASK, RD_SHIFT, RS_SHIFT, RT_SHIFT,
};
use crate::isa::opcodes;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31..26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25..21).
    fn rs(&self) -> usize;

    /// Extracts the second register field (bits 20..16).
    ///
    /// This is the destination of a load, the data source of a store, the
    /// second operand of an add, and the condition selector of a branch.
    fn rt(&self) -> usize;

    /// Extracts the destination register field (bits 15..11).
    fn rd(&self) -> usize;

    /// Extracts the function field (bits 5..0).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate (bits 15..0) without sign extension.
    fn imm(&self) -> i64;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> i64 {
        (self & IMM_MASK) as i64
    }
}

/// The five instruction shapes understood by the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    /// `lw rt, imm(rs)`: `rt <- Mem[rs + imm]`.
    Load,
    /// `sw imm(rs), rt`: `Mem[rs + imm] <- rt`.
    Store,
    /// `add rd, rs, rt`: `rd <- rs + rt`.
    Add,
    /// `beqz rs, imm`: branch to `pc + imm` when `rs` reads zero.
    BranchIfZero,
    /// `nop`.
    #[default]
    NoOp,
}

/// A decoded instruction.
///
/// Immutable once built. Fields that an instruction kind does not use are zero;
/// `rd` is only meaningful for [`InstructionKind::Add`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation performed.
    pub kind: InstructionKind,
    /// First source register (base register for memory operations).
    pub rs: usize,
    /// Second register (load destination, store source, add operand).
    pub rt: usize,
    /// Destination register of an add.
    pub rd: usize,
    /// Unsigned 16-bit immediate widened to `i64`.
    pub imm: i64,
}

impl Instruction {
    /// Builds `lw rt, imm(rs)`.
    pub const fn load(rt: usize, imm: i64, rs: usize) -> Self {
        Self {
            kind: InstructionKind::Load,
            rs,
            rt,
            rd: 0,
            imm,
        }
    }

    /// Builds `sw imm(rs), rt`.
    pub const fn store(imm: i64, rs: usize, rt: usize) -> Self {
        Self {
            kind: InstructionKind::Store,
            rs,
            rt,
            rd: 0,
            imm,
        }
    }

    /// Builds `add rd, rs, rt`.
    pub const fn add(rd: usize, rs: usize, rt: usize) -> Self {
        Self {
            kind: InstructionKind::Add,
            rs,
            rt,
            rd,
            imm: 0,
        }
    }

    /// Builds `beqz rs, imm`.
    pub const fn beqz(rs: usize, imm: i64) -> Self {
        Self {
            kind: InstructionKind::BranchIfZero,
            rs,
            rt: 0,
            rd: 0,
            imm,
        }
    }

    /// Builds `nop`.
    pub const fn nop() -> Self {
        Self {
            kind: InstructionKind::NoOp,
            rs: 0,
            rt: 0,
            rd: 0,
            imm: 0,
        }
    }

    /// Returns the register this instruction writes at Writeback, if any.
    pub const fn dest(&self) -> Option<usize> {
        match self.kind {
            InstructionKind::Load => Some(self.rt),
            InstructionKind::Add => Some(self.rd),
            _ => None,
        }
    }

    /// Returns the canonical 32-bit encoding of this instruction.
    ///
    /// Register indices are masked to five bits and the immediate to sixteen.
    pub const fn encode(&self) -> u32 {
        let rs = (self.rs as u32 & REG_MASK) << RS_SHIFT;
        let rt = (self.rt as u32 & REG_MASK) << RT_SHIFT;
        let imm = self.imm as u32 & IMM_MASK;
        match self.kind {
            InstructionKind::Load => (opcodes::OP_LOAD << OPCODE_SHIFT) | rs | rt | imm,
            InstructionKind::Store => (opcodes::OP_STORE << OPCODE_SHIFT) | rs | rt | imm,
            InstructionKind::Add => {
                let rd = (self.rd as u32 & REG_MASK) << RD_SHIFT;
                (opcodes::OP_SPECIAL << OPCODE_SHIFT) | rs | rt | rd | opcodes::FUNCT_ADD
            }
            InstructionKind::BranchIfZero => {
                (opcodes::OP_REGIMM << OPCODE_SHIFT) | rs | (opcodes::RT_BEQZ << RT_SHIFT) | imm
            }
            InstructionKind::NoOp => 0,
        }
    }
}
