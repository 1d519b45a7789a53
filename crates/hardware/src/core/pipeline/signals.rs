//! Pipeline stage identifiers and control state.
//!
//! This module defines the small value types that drive scheduling. It performs:
//! 1. **Stage Identification:** The five stages, their labels, and parsing from user input.
//! 2. **Diagram Cells:** What one instruction did in one cycle.
//! 3. **Stall Control:** The two-state stall machine and per-stage outcomes.

use std::fmt;
use std::str::FromStr;

use crate::common::error::SimError;
use crate::core::pipeline::hazards::RegMask;

/// One of the five pipeline stages, in program order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Instruction fetch and branch resolution.
    Fetch,
    /// Operand read and pending-write marking.
    Decode,
    /// ALU operation or address generation.
    Execute,
    /// Data memory access.
    Memory,
    /// Register write and retirement.
    Writeback,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::Memory,
        Self::Writeback,
    ];

    /// Zero-based position of the stage (Fetch = 0 .. Writeback = 4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The stage an instruction enters after this one, `None` after Writeback.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Fetch => Some(Self::Decode),
            Self::Decode => Some(Self::Execute),
            Self::Execute => Some(Self::Memory),
            Self::Memory => Some(Self::Writeback),
            Self::Writeback => None,
        }
    }

    /// Short label used by the cycle diagram and traces.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::Memory => "MEM",
            Self::Writeback => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Stage {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| SimError::InvalidBreakpoint(format!("stage index {value} not in 0..5")))
    }
}

impl FromStr for Stage {
    type Err = SimError;

    /// Accepts a stage index (`0`-`4`), a label (`IF`, `ID`, `EX`, `MEM`, `WB`),
    /// or a full name (`fetch`, `decode`, ...), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Self::try_from(index);
        }
        match s.to_ascii_lowercase().as_str() {
            "if" | "fetch" => Ok(Self::Fetch),
            "id" | "decode" => Ok(Self::Decode),
            "ex" | "execute" => Ok(Self::Execute),
            "mem" | "memory" => Ok(Self::Memory),
            "wb" | "writeback" => Ok(Self::Writeback),
            _ => Err(SimError::InvalidBreakpoint(format!("unknown stage {s:?}"))),
        }
    }
}

/// What one instruction did during one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageCell {
    /// The instruction executed this stage.
    Ran(Stage),
    /// The instruction was held in place.
    Stall,
}

impl fmt::Display for StageCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ran(stage) => stage.fmt(f),
            Self::Stall => f.write_str("Stall"),
        }
    }
}

/// Result of running one stage for one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage completed; the instruction moves to the next stage.
    Advance,
    /// The instruction stays in its current stage.
    Hold,
    /// Writeback completed; the instruction leaves the pipeline.
    Retire,
}

/// The global stall machine.
///
/// Entered when Fetch detects a read-after-write hazard for the instruction it
/// just fetched; left when every awaited register resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StallState {
    /// Instructions flow freely.
    #[default]
    Running,
    /// The consumer is held in Decode until its awaited registers resolve.
    StalledInDecode {
        /// Sequence number of the held instruction.
        consumer: u64,
        /// Registers the consumer is waiting on.
        awaiting: RegMask,
    },
}

impl StallState {
    /// Returns `true` if Decode is held.
    pub const fn is_stalled(&self) -> bool {
        matches!(self, Self::StalledInDecode { .. })
    }
}
