use pipesim_core::config::Config;
use pipesim_core::core::Cpu;
use pipesim_core::core::arch::Program;
use pipesim_core::sim::diagram::DiagramRow;
use pipesim_core::{SimError, Simulator};
use tracing_subscriber::EnvFilter;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            sim: Simulator::new(config),
        }
    }

    /// Starts with forwarding enabled or disabled.
    pub fn forwarding(enabled: bool) -> Self {
        let mut config = Config::default();
        config.pipeline.forwarding = enabled;
        Self::with_config(&config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Load a program and reset the session.
    pub fn load_program(mut self, program: Program) -> Self {
        self.sim.load(program);
        self
    }

    /// Write a data memory word (after loading, since loading clears memory).
    pub fn set_mem(&mut self, addr: i64, val: i64) {
        self.sim
            .cpu
            .dmem
            .write(addr, val)
            .expect("test address inside data memory");
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: i64) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> i64 {
        self.sim.cpu.regs.read(reg)
    }

    /// Read a data memory word.
    pub fn get_mem(&self, addr: i64) -> i64 {
        self.sim.cpu.dmem.read(addr).expect("test address inside data memory")
    }

    /// Run the program to completion and return the ticks taken.
    pub fn run(&mut self) -> u64 {
        self.sim.run_to_end().expect("program runs to completion")
    }

    /// Run the program to completion, returning any error.
    pub fn try_run(&mut self) -> Result<u64, SimError> {
        self.sim.run_to_end()
    }

    /// Step `n` ticks.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.sim.step().expect("step succeeds");
        }
    }

    pub fn cycles(&self) -> u64 {
        self.sim.stats().cycles
    }

    pub fn stalls(&self) -> u64 {
        self.sim.stats().stall_cycles
    }

    /// The diagram row of the instruction with sequence number `seq`.
    pub fn row(&self, seq: u64) -> &DiagramRow {
        self.sim.diagram().row(seq).expect("instruction was admitted")
    }

    /// The diagram row of instruction `seq` as labels, e.g. `["IF", "Stall", "ID"]`.
    pub fn row_labels(&self, seq: u64) -> Vec<String> {
        self.row(seq).cells.iter().map(ToString::to_string).collect()
    }
}
