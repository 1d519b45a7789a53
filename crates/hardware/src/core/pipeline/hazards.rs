//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for keeping register reads correct when an
//! older in-flight instruction has not yet written its result. It provides:
//! 1. **Hazard Detection:** Fetch-time checks that decide whether the fetched
//!    instruction must be held in Decode.
//! 2. **Resolution:** The test that releases a held instruction.
//! 3. **Operand Forwarding:** A per-register table of values published by Execute
//!    (add) and Memory (load) ahead of Writeback.
//!
//! A register is a hazard while it is pending and, when forwarding is enabled,
//! its current owner has not published a value yet.

use crate::common::constants::NUM_REGS;
use crate::core::arch::Gpr;
use crate::isa::{Instruction, InstructionKind};

/// A set of register indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegMask(u32);

impl RegMask {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Adds register `idx` to the set.
    pub const fn insert(&mut self, idx: usize) {
        self.0 |= 1 << idx;
    }

    /// Returns `true` if `idx` is in the set.
    pub const fn contains(self, idx: usize) -> bool {
        self.0 & (1 << idx) != 0
    }

    /// Returns `true` if the set holds no registers.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..NUM_REGS).filter(move |&idx| self.contains(idx))
    }
}

impl FromIterator<usize> for RegMask {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut mask = Self::EMPTY;
        for idx in iter {
            mask.insert(idx);
        }
        mask
    }
}

/// A value published for forwarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardEntry {
    /// The forwarded result.
    pub value: i64,
    /// Sequence number of the instruction that produced it.
    pub producer: u64,
}

/// Forward Value Table: the most recent published value per register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardTable {
    entries: [Option<ForwardEntry>; NUM_REGS],
}

impl Default for ForwardTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            entries: [None; NUM_REGS],
        }
    }

    /// Publishes `value` for register `reg`, replacing any older entry.
    pub const fn publish(&mut self, reg: usize, value: i64, producer: u64) {
        self.entries[reg] = Some(ForwardEntry { value, producer });
    }

    /// Returns the latest entry for `reg`.
    pub const fn get(&self, reg: usize) -> Option<ForwardEntry> {
        self.entries[reg]
    }

    /// Returns `true` if `producer` is the latest publisher for `reg`.
    pub fn published_by(&self, reg: usize, producer: u64) -> bool {
        self.entries[reg].is_some_and(|e| e.producer == producer)
    }

    /// Drops the entry for `reg`, but ONLY if `producer` published it.
    ///
    /// Called when the producer retires so its value cannot outlive it.
    pub fn clear_if_match(&mut self, reg: usize, producer: u64) {
        if self.published_by(reg, producer) {
            self.entries[reg] = None;
        }
    }

    /// Removes every entry.
    pub const fn flush(&mut self) {
        self.entries = [None; NUM_REGS];
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Returns `true` if no values are published.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }
}

/// Registers checked for hazards when `inst` is fetched.
///
/// Load checks its base `rs`, Store checks only its data register `rt`, and
/// Add checks both operands. Branches and no-ops are never held.
pub fn checked_registers(inst: &Instruction) -> RegMask {
    let mut mask = RegMask::EMPTY;
    match inst.kind {
        InstructionKind::Load => mask.insert(inst.rs),
        InstructionKind::Store => mask.insert(inst.rt),
        InstructionKind::Add => {
            mask.insert(inst.rs);
            mask.insert(inst.rt);
        }
        InstructionKind::BranchIfZero | InstructionKind::NoOp => {}
    }
    mask
}

/// Checks whether register `reg` is a read-after-write hazard.
///
/// # Arguments
///
/// * `reg` - Register index.
/// * `regs` - Register file with pending owners.
/// * `fwd` - Forward Value Table.
/// * `forwarding` - Whether the bypass network is enabled.
///
/// # Returns
///
/// `true` if the register is pending and its owner's value is not yet available.
pub fn is_hazard(reg: usize, regs: &Gpr, fwd: &ForwardTable, forwarding: bool) -> bool {
    regs.pending_owner(reg)
        .is_some_and(|owner| !(forwarding && fwd.published_by(reg, owner)))
}

/// Returns the subset of `inst`'s checked registers that are hazards.
///
/// An empty result means the instruction may proceed through Decode.
pub fn detect_hazards(
    inst: &Instruction,
    regs: &Gpr,
    fwd: &ForwardTable,
    forwarding: bool,
) -> RegMask {
    checked_registers(inst)
        .iter()
        .filter(|&reg| is_hazard(reg, regs, fwd, forwarding))
        .collect()
}

/// Returns `true` once no register in `awaiting` is a hazard.
pub fn all_resolved(awaiting: RegMask, regs: &Gpr, fwd: &ForwardTable, forwarding: bool) -> bool {
    awaiting
        .iter()
        .all(|reg| !is_hazard(reg, regs, fwd, forwarding))
}

/// Reads an operand for Decode.
///
/// With forwarding, a pending register is served from the Forward Value Table
/// when an entry exists; every other read comes from the register file.
///
/// # Returns
///
/// The operand value and whether it was forwarded.
pub fn read_operand(reg: usize, regs: &Gpr, fwd: &ForwardTable, forwarding: bool) -> (i64, bool) {
    if forwarding && regs.is_pending(reg) {
        if let Some(entry) = fwd.get(reg) {
            return (entry.value, true);
        }
    }
    (regs.read(reg), false)
}
