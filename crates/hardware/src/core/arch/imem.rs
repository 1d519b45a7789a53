//! Instruction Memory.
//!
//! Holds the loaded program as an immutable sequence of decoded instructions,
//! one per 4-byte slot, so the instruction at program counter `pc` is
//! `program[pc / 4]`.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::Instruction;

/// A loaded program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    insts: Vec<Instruction>,
}

impl Program {
    /// Wraps a list of instructions.
    pub const fn new(insts: Vec<Instruction>) -> Self {
        Self { insts }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.insts.len()
    }

    /// Returns `true` if no instructions are loaded.
    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }

    /// Returns `true` if `pc` is non-negative and its slot lies inside the program.
    ///
    /// Alignment is not checked; `pc / 4` truncates.
    pub fn contains(&self, pc: i64) -> bool {
        self.slot(pc).is_some()
    }

    /// Returns the instruction at `pc`, or `None` when `pc` is past either end.
    pub fn fetch(&self, pc: i64) -> Option<Instruction> {
        self.slot(pc).map(|idx| self.insts[idx])
    }

    /// Returns all instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.insts
    }

    fn slot(&self, pc: i64) -> Option<usize> {
        if pc < 0 {
            return None;
        }
        usize::try_from(pc / INSTRUCTION_SIZE)
            .ok()
            .filter(|&idx| idx < self.insts.len())
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
