//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! Loads read data memory, stores write it, and everything else passes its
//! ALU result through. With forwarding enabled, a load publishes its value here.

use tracing::trace;

use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::pipeline::roster::InFlight;
use crate::core::pipeline::signals::StageOutcome;
use crate::isa::InstructionKind;

/// Executes the memory stage for `slot`.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `slot` - The in-flight instruction in Memory
///
/// # Returns
///
/// [`StageOutcome::Advance`], or [`crate::common::SimError::AddressOutOfRange`]
/// when the effective address falls outside data memory.
pub fn mem_stage(cpu: &mut Cpu, slot: &InFlight) -> SimResult<StageOutcome> {
    debug_assert_eq!(cpu.ex_mem.seq, slot.seq);
    let ExMem {
        pc,
        inst,
        alu_out,
        store_data,
        ..
    } = cpu.ex_mem;

    let load_data = match inst.kind {
        InstructionKind::Load => cpu.dmem.read(alu_out)?,
        InstructionKind::Store => {
            cpu.dmem.write(alu_out, store_data)?;
            0
        }
        InstructionKind::Add | InstructionKind::BranchIfZero | InstructionKind::NoOp => 0,
    };

    cpu.mem_wb = MemWb {
        seq: slot.seq,
        pc,
        inst,
        alu_out,
        load_data,
    };
    trace!(seq = slot.seq, "MEM pc={pc} addr={alu_out} data={load_data}");

    if cpu.forwarding && inst.kind == InstructionKind::Load {
        cpu.publish(inst.rt, load_data, slot.seq);
    }
    Ok(StageOutcome::Advance)
}
