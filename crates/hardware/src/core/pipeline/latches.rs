//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four single-slot latches between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Each latch carries one instruction's stage-specific payload.
//! 2. **Ownership:** Each latch records the sequence number of the instruction that wrote it,
//!    so the reading stage can confirm it consumes its own instruction's data.
//!
//! A latch is written by exactly one stage per tick and read only by the next stage.

use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::Instruction;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Sequence number of the occupant; 0 when empty.
    pub seq: u64,
    /// Program counter of the instruction.
    pub pc: i64,
    /// Program counter after branch resolution.
    pub npc: i64,
    /// The fetched instruction.
    pub inst: Instruction,
}

/// ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Sequence number of the occupant; 0 when empty.
    pub seq: u64,
    /// Program counter of the instruction.
    pub pc: i64,
    /// The decoded instruction.
    pub inst: Instruction,
    /// ALU input A (value of `rs`).
    pub alu_a: i64,
    /// ALU input B (value of `rt`).
    pub alu_b: i64,
    /// Immediate operand.
    pub imm: i64,
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Sequence number of the occupant; 0 when empty.
    pub seq: u64,
    /// Program counter of the instruction.
    pub pc: i64,
    /// The executing instruction.
    pub inst: Instruction,
    /// ALU result: the sum for an add, the effective address for a load or store.
    pub alu_out: i64,
    /// Value a store writes to memory.
    pub store_data: i64,
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Sequence number of the occupant; 0 when empty.
    pub seq: u64,
    /// Program counter of the instruction.
    pub pc: i64,
    /// The instruction about to retire.
    pub inst: Instruction,
    /// ALU result carried through Memory.
    pub alu_out: i64,
    /// Value read by a load.
    pub load_data: i64,
}

macro_rules! impl_latch {
    ($($latch:ty),* $(,)?) => {
        $(
            impl PipelineLatch for $latch {
                fn flush(&mut self) {
                    *self = Self::default();
                }

                fn occupant(&self) -> Option<u64> {
                    (self.seq != 0).then_some(self.seq)
                }
            }
        )*
    };
}

impl_latch!(IfId, IdEx, ExMem, MemWb);
