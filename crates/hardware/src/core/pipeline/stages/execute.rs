//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline.
//! An add computes its sum, a load or store computes its effective address
//! `rs + imm`. With forwarding enabled, an add publishes its sum here.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::core::pipeline::roster::InFlight;
use crate::core::pipeline::signals::StageOutcome;
use crate::isa::InstructionKind;

/// Executes the execute stage for `slot`.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `slot` - The in-flight instruction in Execute
pub fn execute_stage(cpu: &mut Cpu, slot: &InFlight) -> StageOutcome {
    debug_assert_eq!(cpu.id_ex.seq, slot.seq);
    let IdEx {
        pc,
        inst,
        alu_a,
        alu_b,
        imm,
        ..
    } = cpu.id_ex;

    let (alu_out, store_data) = match inst.kind {
        InstructionKind::Add => (alu_a.wrapping_add(alu_b), 0),
        InstructionKind::Load | InstructionKind::Store => (alu_a.wrapping_add(imm), alu_b),
        InstructionKind::BranchIfZero | InstructionKind::NoOp => (0, 0),
    };

    cpu.ex_mem = ExMem {
        seq: slot.seq,
        pc,
        inst,
        alu_out,
        store_data,
    };
    trace!(seq = slot.seq, "EX  pc={pc} alu_out={alu_out}");

    if cpu.forwarding && inst.kind == InstructionKind::Add {
        cpu.publish(inst.rd, alu_out, slot.seq);
    }
    StageOutcome::Advance
}
