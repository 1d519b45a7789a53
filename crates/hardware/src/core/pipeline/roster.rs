//! In-Flight Instruction Roster.
//!
//! The ordered set of instructions currently in the pipeline, oldest first.
//! Each record carries the stage it will execute on the next tick.

use crate::core::pipeline::signals::Stage;
use crate::isa::Instruction;

/// One instruction in the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InFlight {
    /// Strictly increasing identity assigned at admission; never reused.
    pub seq: u64,
    /// Program counter the instruction was fetched from.
    pub pc: i64,
    /// The instruction.
    pub inst: Instruction,
    /// Stage to execute on the next tick.
    pub stage: Stage,
}

/// Oldest-first list of in-flight instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<InFlight>,
}

impl Roster {
    /// Creates an empty roster.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a newly admitted instruction as the youngest entry.
    pub fn push(&mut self, entry: InFlight) {
        debug_assert!(self.entries.last().is_none_or(|last| last.seq < entry.seq));
        self.entries.push(entry);
    }

    /// Number of in-flight instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the pipeline is drained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at position `idx` (0 = oldest).
    pub fn get(&self, idx: usize) -> Option<&InFlight> {
        self.entries.get(idx)
    }

    /// Moves the entry at position `idx` to `stage`.
    pub fn set_stage(&mut self, idx: usize, stage: Stage) {
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.stage = stage;
        }
    }

    /// Removes the entry at position `idx`; younger entries shift down by one.
    pub fn remove(&mut self, idx: usize) -> Option<InFlight> {
        (idx < self.entries.len()).then(|| self.entries.remove(idx))
    }

    /// Returns the in-flight instruction fetched from `pc` whose next stage is `stage`.
    pub fn find(&self, pc: i64, stage: Stage) -> Option<&InFlight> {
        self.entries
            .iter()
            .find(|e| e.pc == pc && e.stage == stage)
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &InFlight> + '_ {
        self.entries.iter()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
