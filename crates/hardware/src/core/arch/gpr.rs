//! General-Purpose Register File.
//!
//! This module implements the register file seen by the pipeline. It performs the following:
//! 1. **Storage:** Maintains 32 signed registers (`r0`-`r31`); `r0` is an ordinary register.
//! 2. **Pending Writes:** Tracks which in-flight instruction, by sequence number, will
//!    write each register at Writeback.
//! 3. **Debugging:** Renders the complete register state for the `sr` command.

use std::fmt;

use crate::common::constants::{NUM_REGS, SEEDED_REGISTERS};

/// One architectural register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Register {
    /// Current committed value.
    pub value: i64,
    /// Sequence number of the in-flight instruction that will write this register.
    pub pending: Option<u64>,
}

impl Register {
    /// Returns `true` if a not-yet-retired instruction will write this register.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [Register; NUM_REGS],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register file with every register zero and nothing pending.
    pub fn new() -> Self {
        Self {
            regs: [Register::default(); NUM_REGS],
        }
    }

    /// Creates a register file in its reset state: zero except `r1 = 1` and `r2 = 2`.
    ///
    /// # Returns
    ///
    /// A new `Gpr` with the seeded registers applied and nothing pending.
    pub fn seeded() -> Self {
        let mut gpr = Self::new();
        for (idx, val) in SEEDED_REGISTERS {
            gpr.write(idx, val);
        }
        gpr
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    pub const fn read(&self, idx: usize) -> i64 {
        self.regs[idx].value
    }

    /// Writes a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to write.
    pub const fn write(&mut self, idx: usize, val: i64) {
        self.regs[idx].value = val;
    }

    /// Returns a copy of one register, value and pending owner.
    pub const fn get(&self, idx: usize) -> Register {
        self.regs[idx]
    }

    /// Returns `true` if register `idx` awaits a write from an in-flight instruction.
    pub const fn is_pending(&self, idx: usize) -> bool {
        self.regs[idx].is_pending()
    }

    /// Returns the sequence number of the instruction that will write `idx`, if any.
    pub const fn pending_owner(&self, idx: usize) -> Option<u64> {
        self.regs[idx].pending
    }

    /// Marks register `idx` as pending, owned by the instruction `seq`.
    ///
    /// A younger writer replaces an older one.
    pub const fn set_pending(&mut self, idx: usize, seq: u64) {
        self.regs[idx].pending = Some(seq);
    }

    /// Clears the pending flag of `idx`, but ONLY if `seq` still owns it.
    ///
    /// # Returns
    ///
    /// `true` if the flag was cleared.
    pub fn clear_pending_if_match(&mut self, idx: usize, seq: u64) -> bool {
        let slot = &mut self.regs[idx].pending;
        if *slot == Some(seq) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Iterates over `(index, register)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Register)> + '_ {
        self.regs.iter().copied().enumerate()
    }
}

impl fmt::Display for Gpr {
    /// Four registers per line; pending registers are marked with `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, regs) in self.regs.chunks(4).enumerate() {
            for (col, reg) in regs.iter().enumerate() {
                let idx = line * 4 + col;
                let mark = if reg.is_pending() { '*' } else { ' ' };
                write!(f, "r{idx:<2} = {:>8}{mark}  ", reg.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
