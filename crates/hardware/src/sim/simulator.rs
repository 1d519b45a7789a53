//! Simulator: owns both the CPU and the pipeline side-by-side.
//!
//! This is the run controller. It performs:
//! 1. **Session lifecycle:** Loading a program, resetting, and toggling forwarding.
//! 2. **Execution control:** Single steps, run-to-breakpoint, and run-to-end, each
//!    bounded by the configured cycle limit.
//! 3. **Diagnostics:** Recording every tick into the cycle diagram and exposing
//!    registers, memory, statistics, and the roster for inspection.
//!
//! A stage error (an out-of-range data address) halts the session: it is
//! marked complete and must be reset or reloaded before it can run again.

use std::path::Path;

use tracing::{info, warn};

use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::arch::{DataMemory, Gpr, Program};
use crate::core::pipeline::roster::Roster;
use crate::core::pipeline::{Pipeline, Stage};
use crate::core::Cpu;
use crate::sim::diagram::CycleDiagram;
use crate::sim::loader::{self, LoadReport, RejectedLine};
use crate::stats::SimStats;

/// Top-level simulator: CPU architectural state + pipeline + diagram.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, latches, stats).
    pub cpu: Cpu,
    /// Pipeline scheduler (roster of in-flight instructions).
    pub pipeline: Pipeline,
    /// Per-instruction, per-cycle stage record.
    pub diagram: CycleDiagram,
    max_cycles: u64,
    complete: bool,
}

impl Simulator {
    /// Creates a new simulator with no program loaded.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (memory size, forwarding, cycle limit).
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            pipeline: Pipeline::new(),
            diagram: CycleDiagram::new(),
            max_cycles: config.general.max_cycles,
            complete: false,
        }
    }

    /// Installs `program` and resets all other state.
    pub fn load(&mut self, program: Program) {
        self.cpu.load_program(program);
        self.pipeline.reset();
        self.diagram.clear();
        self.complete = false;
    }

    /// Parses program text and loads the result.
    ///
    /// # Returns
    ///
    /// The lines that were left out because they did not decode.
    pub fn load_source(&mut self, text: &str) -> Vec<RejectedLine> {
        let LoadReport { program, rejected } = loader::parse_program(text);
        self.load(program);
        rejected
    }

    /// Reads, parses, and loads a program file.
    ///
    /// # Returns
    ///
    /// The rejected lines, or [`SimError::Io`] if the file cannot be read; the
    /// current session is left untouched on error.
    pub fn load_file(&mut self, path: &Path) -> SimResult<Vec<RejectedLine>> {
        let LoadReport { program, rejected } = loader::load_program_file(path)?;
        self.load(program);
        Ok(rejected)
    }

    /// Restarts the loaded program from its initial state.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.pipeline.reset();
        self.diagram.clear();
        self.complete = false;
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// # Returns
    ///
    /// `true` if the program completed on this tick.
    ///
    /// # Errors
    ///
    /// [`SimError::ProgramNotLoaded`], [`SimError::ProgramAlreadyComplete`], or a
    /// stage error, which halts the session.
    pub fn step(&mut self) -> SimResult<bool> {
        if self.cpu.program.is_empty() {
            return Err(SimError::ProgramNotLoaded);
        }
        if self.complete {
            return Err(SimError::ProgramAlreadyComplete);
        }

        match self.pipeline.tick(&mut self.cpu) {
            Ok(report) => {
                self.diagram.record(&report);
                self.complete = self.pipeline.is_drained();
                if self.complete {
                    info!(
                        cycles = self.cpu.stats.cycles,
                        stalls = self.cpu.stats.stall_cycles,
                        "program complete"
                    );
                }
                Ok(self.complete)
            }
            Err(err) => {
                self.complete = true;
                warn!(cycle = self.cpu.stats.cycles, "session halted: {err}");
                Err(err)
            }
        }
    }

    /// Runs until an in-flight instruction fetched from `pc` is about to execute `stage`.
    ///
    /// The roster is checked before each tick, so a breakpoint that already
    /// matches returns immediately. A Fetch breakpoint never matches: an
    /// instruction is admitted and fetched within the same tick.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the target instruction; must be a multiple of 4
    ///   inside the program.
    /// * `stage` - Stage the instruction must be waiting to execute.
    ///
    /// # Returns
    ///
    /// The number of ticks taken.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidBreakpoint`] for an impossible `pc`,
    /// [`SimError::ExecutionComplete`] if the program finishes first,
    /// [`SimError::CycleLimitExceeded`], or any [`Simulator::step`] error.
    pub fn run_to_breakpoint(&mut self, pc: i64, stage: Stage) -> SimResult<u64> {
        self.ensure_runnable()?;
        if pc < 0 || pc % 4 != 0 || !self.cpu.program.contains(pc) {
            return Err(SimError::InvalidBreakpoint(format!(
                "pc {pc} is not an instruction address in a {}-instruction program",
                self.cpu.program.len()
            )));
        }

        let start = self.cpu.stats.cycles;
        loop {
            if self.pipeline.roster.find(pc, stage).is_some() {
                info!(pc, %stage, "breakpoint hit");
                return Ok(self.cpu.stats.cycles - start);
            }
            if self.complete {
                return Err(SimError::ExecutionComplete {
                    pc,
                    stage: stage.to_string(),
                });
            }
            self.check_cycle_limit()?;
            let _ = self.step()?;
        }
    }

    /// Runs until the program completes.
    ///
    /// # Returns
    ///
    /// The number of ticks taken.
    pub fn run_to_end(&mut self) -> SimResult<u64> {
        self.ensure_runnable()?;
        let start = self.cpu.stats.cycles;
        while !self.complete {
            self.check_cycle_limit()?;
            let _ = self.step()?;
        }
        Ok(self.cpu.stats.cycles - start)
    }

    /// Flips the forwarding policy and resets the session.
    ///
    /// # Returns
    ///
    /// The new forwarding setting.
    pub fn toggle_forwarding(&mut self) -> bool {
        self.cpu.forwarding = !self.cpu.forwarding;
        info!(forwarding = self.cpu.forwarding, "forwarding toggled");
        self.reset();
        self.cpu.forwarding
    }

    /// Returns `true` if the loaded program has finished (or the session halted).
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns `true` if a non-empty program is loaded.
    pub fn is_loaded(&self) -> bool {
        !self.cpu.program.is_empty()
    }

    /// Current forwarding policy.
    pub const fn forwarding(&self) -> bool {
        self.cpu.forwarding
    }

    /// Register file snapshot.
    pub const fn registers(&self) -> &Gpr {
        &self.cpu.regs
    }

    /// Data memory snapshot.
    pub const fn memory(&self) -> &DataMemory {
        &self.cpu.dmem
    }

    /// Statistics so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// In-flight instructions, oldest first.
    pub const fn roster(&self) -> &Roster {
        &self.pipeline.roster
    }

    /// The cycle diagram.
    pub const fn diagram(&self) -> &CycleDiagram {
        &self.diagram
    }

    fn ensure_runnable(&self) -> SimResult<()> {
        if self.cpu.program.is_empty() {
            Err(SimError::ProgramNotLoaded)
        } else if self.complete {
            Err(SimError::ProgramAlreadyComplete)
        } else {
            Ok(())
        }
    }

    fn check_cycle_limit(&self) -> SimResult<()> {
        if self.cpu.stats.cycles >= self.max_cycles {
            warn!(limit = self.max_cycles, "cycle limit reached");
            return Err(SimError::CycleLimitExceeded(self.max_cycles));
        }
        Ok(())
    }
}
