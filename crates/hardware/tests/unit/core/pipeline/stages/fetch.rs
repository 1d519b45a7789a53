use pipesim_core::core::pipeline::signals::StageOutcome;
use pipesim_core::core::pipeline::stages::fetch_stage;
use pipesim_core::core::pipeline::{Stage, StallState};
use pipesim_core::isa::Instruction;
use rstest::rstest;

use super::{cpu, slot};

#[test]
fn sequential_fetch_advances_pc_by_four() {
    let mut cpu = cpu(false);
    let inst = Instruction::add(3, 1, 2);

    let outcome = fetch_stage(&mut cpu, &slot(1, 8, inst, Stage::Fetch));

    assert_eq!(outcome, StageOutcome::Advance);
    assert_eq!(cpu.pc, 12);
    assert_eq!(cpu.if_id.seq, 1);
    assert_eq!(cpu.if_id.pc, 8);
    assert_eq!(cpu.if_id.npc, 12);
    assert_eq!(cpu.if_id.inst, inst);
}

#[rstest]
#[case::taken(0, 0, 12, 12, 1)]
#[case::not_taken(1, 0, 12, 4, 0)]
#[case::taken_from_later_pc(0, 8, 4, 12, 1)]
fn branch_resolves_in_fetch(
    #[case] reg_value: i64,
    #[case] pc: i64,
    #[case] imm: i64,
    #[case] expected_pc: i64,
    #[case] taken: u64,
) {
    let mut cpu = cpu(false);
    cpu.regs.write(5, reg_value);

    let _ = fetch_stage(&mut cpu, &slot(1, pc, Instruction::beqz(5, imm), Stage::Fetch));

    assert_eq!(cpu.pc, expected_pc);
    assert_eq!(cpu.stats.branches_taken, taken);
}

#[test]
fn zero_offset_branch_targets_itself() {
    let mut cpu = cpu(false);
    let _ = fetch_stage(&mut cpu, &slot(1, 4, Instruction::beqz(0, 0), Stage::Fetch));
    assert_eq!(cpu.pc, 4);
}

#[test]
fn hazard_enters_stall_state() {
    let mut cpu = cpu(false);
    cpu.regs.set_pending(3, 1);

    let outcome = fetch_stage(&mut cpu, &slot(2, 4, Instruction::add(4, 3, 2), Stage::Fetch));

    assert_eq!(outcome, StageOutcome::Advance);
    assert!(matches!(
        cpu.stall,
        StallState::StalledInDecode { consumer: 2, .. }
    ));
}

#[test]
fn holds_while_stalled() {
    let mut cpu = cpu(false);
    cpu.regs.set_pending(3, 1);
    let _ = fetch_stage(&mut cpu, &slot(2, 4, Instruction::add(4, 3, 2), Stage::Fetch));
    let pc = cpu.pc;

    let outcome = fetch_stage(&mut cpu, &slot(3, 8, Instruction::nop(), Stage::Fetch));

    assert_eq!(outcome, StageOutcome::Hold);
    assert_eq!(cpu.pc, pc);
    assert_eq!(cpu.if_id.seq, 2);
}
