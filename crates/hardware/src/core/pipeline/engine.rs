//! Pipeline Engine.
//!
//! This module advances the whole pipeline by one clock tick. It performs:
//! 1. **Ordered Stage Execution:** Every in-flight instruction runs its current stage,
//!    oldest first. The fixed order models the simultaneous hardware stages: an older
//!    producer always writes before a younger consumer reads in the same tick.
//! 2. **Admission:** When the pipeline is not stalled and the PC points inside the
//!    program, a new instruction is admitted and fetched in the same tick.
//! 3. **Reporting:** One [`TickCell`] per processed instruction for the cycle diagram.

use tracing::trace;

use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::roster::{InFlight, Roster};
use crate::core::pipeline::signals::{Stage, StageCell, StageOutcome};
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::isa::Instruction;

/// One instruction's activity during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickCell {
    /// Sequence number of the instruction.
    pub seq: u64,
    /// Program counter of the instruction.
    pub pc: i64,
    /// The instruction.
    pub inst: Instruction,
    /// What it did.
    pub cell: StageCell,
}

/// Everything that happened during one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Cycle number of this tick (1-based).
    pub cycle: u64,
    /// Activity of each processed instruction, oldest first.
    pub cells: Vec<TickCell>,
    /// Sequence number of the instruction admitted this tick.
    pub admitted: Option<u64>,
    /// Sequence numbers of the instructions that retired this tick.
    pub retired: Vec<u64>,
    /// Whether any instruction was held this tick.
    pub stalled: bool,
}

/// The scheduling half of the processor: the in-flight roster and the
/// sequence counter. Architectural state lives in [`Cpu`].
#[derive(Clone, Debug)]
pub struct Pipeline {
    /// In-flight instructions, oldest first.
    pub roster: Roster,
    next_seq: u64,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates an empty pipeline; the first admitted instruction gets sequence number 1.
    pub const fn new() -> Self {
        Self {
            roster: Roster::new(),
            next_seq: 1,
        }
    }

    /// Drops all in-flight instructions and restarts sequence numbering.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.next_seq = 1;
    }

    /// Returns `true` if no instruction is in flight.
    pub fn is_drained(&self) -> bool {
        self.roster.is_empty()
    }

    /// Advances the pipeline by one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Mutable reference to the CPU state.
    ///
    /// # Returns
    ///
    /// A report of what every instruction did, or the first stage error.
    /// A stage error leaves the tick partially applied.
    pub fn tick(&mut self, cpu: &mut Cpu) -> SimResult<TickReport> {
        cpu.stats.cycles += 1;
        let mut report = TickReport {
            cycle: cpu.stats.cycles,
            ..TickReport::default()
        };

        let mut idx = 0;
        while let Some(slot) = self.roster.get(idx).copied() {
            let outcome = Self::run_stage(cpu, &slot)?;
            Self::record(&mut report, &slot, outcome);
            match outcome {
                StageOutcome::Advance => {
                    if let Some(next) = slot.stage.next() {
                        self.roster.set_stage(idx, next);
                    }
                    idx += 1;
                }
                StageOutcome::Hold => idx += 1,
                StageOutcome::Retire => {
                    let _ = self.roster.remove(idx);
                    report.retired.push(slot.seq);
                }
            }
        }

        if !cpu.stall.is_stalled() {
            if let Some(inst) = cpu.program.fetch(cpu.pc) {
                let slot = InFlight {
                    seq: self.next_seq,
                    pc: cpu.pc,
                    inst,
                    stage: Stage::Fetch,
                };
                self.next_seq += 1;
                let outcome = fetch_stage(cpu, &slot);
                Self::record(&mut report, &slot, outcome);
                self.roster.push(InFlight {
                    stage: Stage::Decode,
                    ..slot
                });
                report.admitted = Some(slot.seq);
            }
        }

        if report.stalled {
            cpu.stats.stall_cycles += 1;
        }
        trace!(
            cycle = report.cycle,
            in_flight = self.roster.len(),
            stalled = report.stalled,
            "tick"
        );
        Ok(report)
    }

    fn run_stage(cpu: &mut Cpu, slot: &InFlight) -> SimResult<StageOutcome> {
        Ok(match slot.stage {
            Stage::Fetch => fetch_stage(cpu, slot),
            Stage::Decode => decode_stage(cpu, slot),
            Stage::Execute => execute_stage(cpu, slot),
            Stage::Memory => mem_stage(cpu, slot)?,
            Stage::Writeback => wb_stage(cpu, slot),
        })
    }

    fn record(report: &mut TickReport, slot: &InFlight, outcome: StageOutcome) {
        let cell = if outcome == StageOutcome::Hold {
            report.stalled = true;
            StageCell::Stall
        } else {
            StageCell::Ran(slot.stage)
        };
        report.cells.push(TickCell {
            seq: slot.seq,
            pc: slot.pc,
            inst: slot.inst,
            cell,
        });
    }
}
