//! Pipeline Engine Tests.
//!
//! Drives `Pipeline::tick` directly against a CPU to check admission order,
//! sequence numbering, and the per-tick report.

use pipesim_core::config::Config;
use pipesim_core::core::pipeline::{Pipeline, Stage, StageCell};
use pipesim_core::core::Cpu;
use pipesim_core::SimError;

use crate::common::builder::program::ProgramBuilder;

fn setup(program: ProgramBuilder) -> (Cpu, Pipeline) {
    let mut cpu = Cpu::new(&Config::default());
    cpu.load_program(program.build());
    (cpu, Pipeline::new())
}

#[test]
fn first_tick_admits_and_fetches() {
    let (mut cpu, mut pipeline) = setup(ProgramBuilder::new().add(3, 1, 2));

    let report = pipeline.tick(&mut cpu).unwrap();

    assert_eq!(report.cycle, 1);
    assert_eq!(report.admitted, Some(1));
    assert_eq!(report.cells.len(), 1);
    assert_eq!(report.cells[0].cell, StageCell::Ran(Stage::Fetch));
    assert_eq!(pipeline.roster.get(0).map(|e| e.stage), Some(Stage::Decode));
    assert_eq!(cpu.pc, 4);
}

#[test]
fn sequence_numbers_increase_from_one() {
    let (mut cpu, mut pipeline) = setup(ProgramBuilder::new().nop().nop().nop());

    let admitted: Vec<_> = (0..3)
        .map(|_| pipeline.tick(&mut cpu).unwrap().admitted)
        .collect();

    assert_eq!(admitted, [Some(1), Some(2), Some(3)]);
    let seqs: Vec<u64> = pipeline.roster.iter().map(|e| e.seq).collect();
    assert_eq!(seqs, [1, 2, 3]);
}

#[test]
fn oldest_instruction_is_processed_first() {
    let (mut cpu, mut pipeline) = setup(ProgramBuilder::new().nop().nop().nop());
    let _ = pipeline.tick(&mut cpu).unwrap();
    let _ = pipeline.tick(&mut cpu).unwrap();

    let report = pipeline.tick(&mut cpu).unwrap();

    let cells: Vec<_> = report.cells.iter().map(|c| (c.seq, c.cell)).collect();
    assert_eq!(
        cells,
        [
            (1, StageCell::Ran(Stage::Execute)),
            (2, StageCell::Ran(Stage::Decode)),
            (3, StageCell::Ran(Stage::Fetch)),
        ]
    );
}

#[test]
fn single_instruction_retires_on_fifth_tick() {
    let (mut cpu, mut pipeline) = setup(ProgramBuilder::new().add(3, 1, 2));

    for _ in 0..4 {
        let report = pipeline.tick(&mut cpu).unwrap();
        assert!(report.retired.is_empty());
    }
    let report = pipeline.tick(&mut cpu).unwrap();

    assert_eq!(report.retired, [1]);
    assert!(pipeline.is_drained());
    assert_eq!(cpu.regs.read(3), 3);
    assert_eq!(cpu.stats.cycles, 5);
}

#[test]
fn stalled_tick_admits_nothing_and_counts_one_stall() {
    let (mut cpu, mut pipeline) =
        setup(ProgramBuilder::new().lw(3, 0, 1).add(4, 3, 2).nop());
    let _ = pipeline.tick(&mut cpu).unwrap();
    let _ = pipeline.tick(&mut cpu).unwrap();

    let report = pipeline.tick(&mut cpu).unwrap();

    assert!(report.stalled);
    assert_eq!(report.admitted, None);
    assert!(report.cells.iter().any(|c| c.seq == 2 && c.cell == StageCell::Stall));
    assert_eq!(cpu.stats.stall_cycles, 1);
}

#[test]
fn no_admission_past_the_end_of_the_program() {
    let (mut cpu, mut pipeline) = setup(ProgramBuilder::new().nop());
    let _ = pipeline.tick(&mut cpu).unwrap();

    let report = pipeline.tick(&mut cpu).unwrap();

    assert_eq!(report.admitted, None);
    assert_eq!(pipeline.roster.len(), 1);
}

#[test]
fn stage_error_propagates() {
    let (mut cpu, mut pipeline) = setup(ProgramBuilder::new().lw(3, 5000, 0));

    let err = (0..4).find_map(|_| pipeline.tick(&mut cpu).err());

    assert!(matches!(
        err,
        Some(SimError::AddressOutOfRange { addr: 5000, .. })
    ));
}

#[test]
fn reset_restarts_numbering() {
    let (mut cpu, mut pipeline) = setup(ProgramBuilder::new().nop().nop());
    let _ = pipeline.tick(&mut cpu).unwrap();
    let _ = pipeline.tick(&mut cpu).unwrap();

    pipeline.reset();
    cpu.reset();

    assert!(pipeline.is_drained());
    assert_eq!(pipeline.tick(&mut cpu).unwrap().admitted, Some(1));
}
