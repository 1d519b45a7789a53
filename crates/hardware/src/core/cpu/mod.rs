//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, data memory, program memory, and the PC.
//! 2. **Pipeline Control:** Holds the four inter-stage latches and the stall machine.
//! 3. **Forwarding:** Owns the Forward Value Table and the forwarding policy.
//! 4. **Statistics:** Accumulates cycle, stall, and retirement counters.

/// Operand reads, forwarding publication, and stall transitions.
pub mod hazard;

use tracing::info;

use crate::config::Config;
use crate::core::arch::{DataMemory, Gpr, Program};
use crate::core::pipeline::hazards::ForwardTable;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::signals::StallState;
use crate::core::pipeline::traits::PipelineLatch;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// Every stage reads and writes state through this structure; the pipeline
/// engine owns only the roster of in-flight instructions.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General Purpose Registers with pending-write owners.
    pub regs: Gpr,
    /// Data memory.
    pub dmem: DataMemory,
    /// Loaded program.
    pub program: Program,
    /// Program Counter of the next instruction to admit.
    pub pc: i64,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,

    /// Stall machine.
    pub stall: StallState,
    /// Forward Value Table (used only when `forwarding` is set).
    pub forward: ForwardTable,
    /// Whether Decode may take operands from the Forward Value Table.
    pub forwarding: bool,

    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU with no program loaded.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` in its reset state, sized and configured from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::seeded(),
            dmem: DataMemory::new(config.memory.data_words),
            program: Program::default(),
            pc: 0,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            stall: StallState::Running,
            forward: ForwardTable::new(),
            forwarding: config.pipeline.forwarding,
            stats: SimStats::default(),
        }
    }

    /// Installs `program` and resets all other state.
    pub fn load_program(&mut self, program: Program) {
        self.program = program;
        self.reset();
    }

    /// Returns every component except the program and the forwarding policy to
    /// its initial state.
    ///
    /// Registers are zero except `r1 = 1` and `r2 = 2`; memory is zero; the PC,
    /// latches, stall machine, forward table, and counters are cleared.
    pub fn reset(&mut self) {
        self.regs = Gpr::seeded();
        self.dmem.clear();
        self.pc = 0;
        self.if_id.flush();
        self.id_ex.flush();
        self.ex_mem.flush();
        self.mem_wb.flush();
        self.stall = StallState::Running;
        self.forward.flush();
        self.stats = SimStats::default();
        info!(
            instructions = self.program.len(),
            forwarding = self.forwarding,
            "cpu reset"
        );
    }
}
