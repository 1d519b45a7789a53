//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits load and add results to the register file, releases the
//! pending flag, updates retirement statistics, and retires the instruction.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::roster::InFlight;
use crate::core::pipeline::signals::StageOutcome;
use crate::isa::InstructionKind;

/// Executes the writeback stage for `slot`.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `slot` - The in-flight instruction in Writeback
///
/// # Returns
///
/// Always [`StageOutcome::Retire`].
pub fn wb_stage(cpu: &mut Cpu, slot: &InFlight) -> StageOutcome {
    debug_assert_eq!(cpu.mem_wb.seq, slot.seq);
    let wb = cpu.mem_wb;

    match wb.inst.kind {
        InstructionKind::Add => cpu.retire_write(wb.inst.rd, wb.alu_out, slot.seq),
        InstructionKind::Load => cpu.retire_write(wb.inst.rt, wb.load_data, slot.seq),
        InstructionKind::Store | InstructionKind::BranchIfZero | InstructionKind::NoOp => {}
    }
    trace!(seq = slot.seq, "WB  pc={}", wb.pc);

    cpu.stats.record_retire(wb.inst.kind);
    debug!(seq = slot.seq, pc = wb.pc, "retired {}", wb.inst);
    StageOutcome::Retire
}
