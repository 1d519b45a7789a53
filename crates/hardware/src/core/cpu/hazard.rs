//! Hazard and forwarding operations on the CPU.
//!
//! Wraps the pure checks in [`crate::core::pipeline::hazards`] with the state
//! transitions the stages perform:
//! 1. **Stall Entry:** Fetch holds the fetched instruction when its operands are not ready.
//! 2. **Operand Read:** Decode reads the register file or the Forward Value Table.
//! 3. **Publication:** Execute and Memory publish results early when forwarding.
//! 4. **Retirement:** Writeback commits a result and releases its pending flag.
//!
//! After every publication or retirement the stall machine is re-evaluated.

use tracing::debug;

use super::Cpu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::signals::StallState;
use crate::isa::Instruction;

impl Cpu {
    /// Checks `inst`, just fetched as instruction `seq`, and enters the stall
    /// state if any of its checked registers is a hazard.
    ///
    /// # Returns
    ///
    /// `true` if the pipeline stalled.
    pub fn check_fetch_hazards(&mut self, inst: &Instruction, seq: u64) -> bool {
        let awaiting = hazards::detect_hazards(inst, &self.regs, &self.forward, self.forwarding);
        if awaiting.is_empty() {
            return false;
        }
        debug!(seq, ?awaiting, "stall: {inst} waits in decode");
        self.stall = StallState::StalledInDecode {
            consumer: seq,
            awaiting,
        };
        true
    }

    /// Reads an operand register for Decode, counting forwarded reads.
    pub fn read_operand(&mut self, reg: usize) -> i64 {
        let (value, forwarded) =
            hazards::read_operand(reg, &self.regs, &self.forward, self.forwarding);
        if forwarded {
            self.stats.forwarded_values += 1;
        }
        value
    }

    /// Publishes `value` for `reg` on behalf of `producer` and re-evaluates the stall.
    pub fn publish(&mut self, reg: usize, value: i64, producer: u64) {
        self.forward.publish(reg, value, producer);
        debug!(producer, reg, value, "forward r{reg} = {value}");
        self.reevaluate_stall();
    }

    /// Commits a Writeback result: writes the register, clears the pending flag
    /// and forward entry if `producer` still owns them, and re-evaluates the stall.
    pub fn retire_write(&mut self, reg: usize, value: i64, producer: u64) {
        self.regs.write(reg, value);
        let _ = self.regs.clear_pending_if_match(reg, producer);
        self.forward.clear_if_match(reg, producer);
        self.reevaluate_stall();
    }

    /// Returns to [`StallState::Running`] once every awaited register has resolved.
    pub fn reevaluate_stall(&mut self) {
        if let StallState::StalledInDecode { consumer, awaiting } = self.stall {
            if hazards::all_resolved(awaiting, &self.regs, &self.forward, self.forwarding) {
                debug!(consumer, "stall released");
                self.stall = StallState::Running;
            }
        }
    }
}
