//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline.
//! It holds a stalled instruction in place, otherwise reads the operand
//! registers (from the Forward Value Table for pending registers when
//! forwarding is enabled), fills ID/EX, and marks the destination of a
//! load or add as pending.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::IdEx;
use crate::core::pipeline::roster::InFlight;
use crate::core::pipeline::signals::{StageOutcome, StallState};
use crate::isa::InstructionKind;

/// Executes the instruction decode stage for `slot`.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `slot` - The in-flight instruction in Decode
///
/// # Returns
///
/// [`StageOutcome::Hold`] while the stall machine holds this instruction,
/// otherwise [`StageOutcome::Advance`].
pub fn decode_stage(cpu: &mut Cpu, slot: &InFlight) -> StageOutcome {
    if let StallState::StalledInDecode { consumer, awaiting } = cpu.stall {
        debug_assert_eq!(consumer, slot.seq);
        trace!(seq = slot.seq, ?awaiting, "ID  stall pc={}", slot.pc);
        return StageOutcome::Hold;
    }
    debug_assert_eq!(cpu.if_id.seq, slot.seq);

    let inst = cpu.if_id.inst;
    let (alu_a, alu_b) = match inst.kind {
        InstructionKind::Load => (cpu.read_operand(inst.rs), 0),
        InstructionKind::Store | InstructionKind::Add => {
            (cpu.read_operand(inst.rs), cpu.read_operand(inst.rt))
        }
        InstructionKind::BranchIfZero | InstructionKind::NoOp => (0, 0),
    };

    cpu.id_ex = IdEx {
        seq: slot.seq,
        pc: cpu.if_id.pc,
        inst,
        alu_a,
        alu_b,
        imm: inst.imm,
    };

    if let Some(rd) = inst.dest() {
        cpu.regs.set_pending(rd, slot.seq);
    }
    trace!(seq = slot.seq, "ID  pc={} a={alu_a} b={alu_b}", slot.pc);
    StageOutcome::Advance
}
