//! Cycle Diagram.
//!
//! Records, for every instruction that entered the pipeline, which stage it
//! ran (or whether it stalled) in each cycle. Rows grow with the program; there
//! is no fixed bound on instructions or cycles.

use std::fmt;

use crate::core::pipeline::{StageCell, TickReport};
use crate::isa::Instruction;

/// Width of the instruction column.
const NAME_WIDTH: usize = 25;

/// Width of each cycle column.
const CELL_WIDTH: usize = 7;

/// One instruction's row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramRow {
    /// Sequence number of the instruction.
    pub seq: u64,
    /// Program counter it was fetched from.
    pub pc: i64,
    /// The instruction.
    pub inst: Instruction,
    /// Cycle of its Fetch.
    pub first_cycle: u64,
    /// One cell per cycle from `first_cycle` on.
    pub cells: Vec<StageCell>,
}

impl DiagramRow {
    /// Returns the cell recorded for `cycle`, if the instruction was in flight then.
    pub fn cell_at(&self, cycle: u64) -> Option<StageCell> {
        let offset = cycle.checked_sub(self.first_cycle)?;
        self.cells.get(usize::try_from(offset).ok()?).copied()
    }
}

/// Per-instruction, per-cycle record of pipeline activity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleDiagram {
    rows: Vec<DiagramRow>,
    cycles: u64,
}

impl CycleDiagram {
    /// Creates an empty diagram.
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            cycles: 0,
        }
    }

    /// Appends one tick's activity.
    pub fn record(&mut self, report: &TickReport) {
        self.cycles = self.cycles.max(report.cycle);
        for cell in &report.cells {
            match self.rows.binary_search_by_key(&cell.seq, |row| row.seq) {
                Ok(pos) => self.rows[pos].cells.push(cell.cell),
                Err(pos) => self.rows.insert(
                    pos,
                    DiagramRow {
                        seq: cell.seq,
                        pc: cell.pc,
                        inst: cell.inst,
                        first_cycle: report.cycle,
                        cells: vec![cell.cell],
                    },
                ),
            }
        }
    }

    /// Rows in admission order.
    pub fn rows(&self) -> &[DiagramRow] {
        &self.rows
    }

    /// The row of instruction `seq`.
    pub fn row(&self, seq: u64) -> Option<&DiagramRow> {
        self.rows
            .binary_search_by_key(&seq, |row| row.seq)
            .ok()
            .map(|pos| &self.rows[pos])
    }

    /// Number of cycles recorded.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Empties the diagram.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.cycles = 0;
    }
}

impl fmt::Display for CycleDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = format!("{:<w$}", "Instruction/Cycles", w = NAME_WIDTH);
        for cycle in 1..=self.cycles {
            header.push_str(&format!("{cycle:>w$}", w = CELL_WIDTH));
        }
        writeln!(f, "{}", header.trim_end())?;

        for row in &self.rows {
            let mut line = format!("{:<w$}", row.inst.to_string(), w = NAME_WIDTH);
            for cycle in 1..=self.cycles {
                let label = row.cell_at(cycle).map(|c| c.to_string()).unwrap_or_default();
                line.push_str(&format!("{label:>w$}", w = CELL_WIDTH));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
