//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It resolves `beqz` against the current register file to pick the next PC,
//! fills the IF/ID latch, and runs the hazard check that may hold the
//! fetched instruction in Decode.

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfId;
use crate::core::pipeline::roster::InFlight;
use crate::core::pipeline::signals::StageOutcome;
use crate::isa::InstructionKind;

/// Executes the instruction fetch stage for `slot`.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `slot` - The in-flight instruction being fetched
///
/// # Behavior
///
/// - Holds the instruction in Fetch while the pipeline is stalled
/// - Sets the PC to `pc + imm` for a `beqz` whose register reads zero, else `pc + 4`
/// - Writes IF/ID and enters the stall state on a data hazard
pub fn fetch_stage(cpu: &mut Cpu, slot: &InFlight) -> StageOutcome {
    if cpu.stall.is_stalled() {
        trace!(seq = slot.seq, "IF  held pc={}", slot.pc);
        return StageOutcome::Hold;
    }

    let inst = slot.inst;
    let taken = inst.kind == InstructionKind::BranchIfZero && cpu.regs.read(inst.rs) == 0;
    let npc = if taken {
        cpu.stats.branches_taken += 1;
        slot.pc.wrapping_add(inst.imm)
    } else {
        slot.pc.wrapping_add(INSTRUCTION_SIZE)
    };
    cpu.pc = npc;

    cpu.if_id = IfId {
        seq: slot.seq,
        pc: slot.pc,
        npc,
        inst,
    };
    trace!(seq = slot.seq, "IF  pc={} inst={inst} npc={npc}", slot.pc);

    let _ = cpu.check_fetch_hazards(&inst, slot.seq);
    StageOutcome::Advance
}
