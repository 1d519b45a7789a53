//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Retired counts by kind (load, store, add, branch, no-op).
//! 3. **Hazards:** Stall cycles, taken branches, and forwarded operand reads.

use std::fmt::Write as _;

use crate::isa::InstructionKind;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Cycles in which at least one instruction was held in Decode.
    pub stall_cycles: u64,
    /// Number of instructions that completed Writeback.
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of add instructions retired.
    pub inst_add: u64,
    /// Count of branch instructions retired.
    pub inst_branch: u64,
    /// Count of no-op instructions retired.
    pub inst_nop: u64,

    /// Number of branches whose register read zero at Fetch.
    pub branches_taken: u64,
    /// Number of operand reads served by the Forward Value Table.
    pub forwarded_values: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"hazards"`.
/// Pass an empty slice to `SimStats::render_sections` to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "hazards"];

const RULE: &str = "----------------------------------------------------------";

impl SimStats {
    /// Counts one retired instruction of `kind`.
    pub const fn record_retire(&mut self, kind: InstructionKind) {
        self.instructions_retired += 1;
        match kind {
            InstructionKind::Load => self.inst_load += 1,
            InstructionKind::Store => self.inst_store += 1,
            InstructionKind::Add => self.inst_add += 1,
            InstructionKind::BranchIfZero => self.inst_branch += 1,
            InstructionKind::NoOp => self.inst_nop += 1,
        }
    }

    /// Cycles per retired instruction, or 0.0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Renders the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; unknown
    /// names are ignored. Pass an empty slice to render all sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to render, or empty for all.
    ///
    /// # Returns
    ///
    /// The formatted report.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let mut out = String::new();

        // Writing into a String cannot fail.
        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc;
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "PIPELINE SIMULATION STATISTICS");
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "ClockCycles              {}", self.cycles);
            let _ = writeln!(out, "StallCycles              {}", self.stall_cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "sim_ipc                  {ipc:.4}");
            let _ = writeln!(out, "sim_cpi                  {:.4}", self.cpi());
            let _ = writeln!(out, "{RULE}");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.add", self.inst_add),
                ("op.branch", self.inst_branch),
                ("op.nop", self.inst_nop),
            ] {
                let pct = count as f64 / instr * 100.0;
                let _ = writeln!(out, "  {name:<21}{count} ({pct:.2}%)");
            }
            let _ = writeln!(out, "{RULE}");
        }
        if want("hazards") {
            let stall_pct = self.stall_cycles as f64 / cyc * 100.0;
            let _ = writeln!(out, "HAZARDS");
            let _ = writeln!(
                out,
                "  stalls.data          {} ({stall_pct:.2}%)",
                self.stall_cycles
            );
            let _ = writeln!(out, "  branches.taken       {}", self.branches_taken);
            let _ = writeln!(out, "  forwarded.operands   {}", self.forwarded_values);
            let _ = writeln!(out, "{RULE}");
        }
        out
    }
}
