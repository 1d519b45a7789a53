use pipesim_core::config::Config;
use pipesim_core::core::Cpu;
use pipesim_core::core::pipeline::Stage;
use pipesim_core::core::pipeline::roster::InFlight;
use pipesim_core::isa::Instruction;

pub mod decode;
pub mod execute;
pub mod fetch;
pub mod memory;

/// A CPU in its reset state with the given forwarding policy.
pub fn cpu(forwarding: bool) -> Cpu {
    let mut config = Config::default();
    config.pipeline.forwarding = forwarding;
    Cpu::new(&config)
}

/// An in-flight record for `inst` at `pc` about to run `stage`.
pub const fn slot(seq: u64, pc: i64, inst: Instruction, stage: Stage) -> InFlight {
    InFlight {
        seq,
        pc,
        inst,
        stage,
    }
}
