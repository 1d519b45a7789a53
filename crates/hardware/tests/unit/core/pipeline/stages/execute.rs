use pipesim_core::core::pipeline::latches::IdEx;
use pipesim_core::core::pipeline::signals::StageOutcome;
use pipesim_core::core::pipeline::stages::execute_stage;
use pipesim_core::core::pipeline::Stage;
use pipesim_core::isa::Instruction;
use rstest::rstest;

use super::{cpu, slot};

fn id_ex(seq: u64, inst: Instruction, alu_a: i64, alu_b: i64) -> IdEx {
    IdEx {
        seq,
        pc: 0,
        inst,
        alu_a,
        alu_b,
        imm: inst.imm,
    }
}

#[rstest]
#[case::add(Instruction::add(3, 1, 2), 5, 7, 12, 0)]
#[case::load_address(Instruction::load(3, 8, 1), 100, 0, 108, 0)]
#[case::store_address(Instruction::store(4, 1, 2), 10, 99, 14, 99)]
#[case::nop(Instruction::nop(), 5, 7, 0, 0)]
fn computes_alu_result(
    #[case] inst: Instruction,
    #[case] a: i64,
    #[case] b: i64,
    #[case] alu_out: i64,
    #[case] store_data: i64,
) {
    let mut cpu = cpu(false);
    cpu.id_ex = id_ex(1, inst, a, b);

    let outcome = execute_stage(&mut cpu, &slot(1, 0, inst, Stage::Execute));

    assert_eq!(outcome, StageOutcome::Advance);
    assert_eq!(cpu.ex_mem.alu_out, alu_out);
    assert_eq!(cpu.ex_mem.store_data, store_data);
}

#[test]
fn add_wraps_on_overflow() {
    let mut cpu = cpu(false);
    let inst = Instruction::add(3, 1, 2);
    cpu.id_ex = id_ex(1, inst, i64::MAX, 1);

    let _ = execute_stage(&mut cpu, &slot(1, 0, inst, Stage::Execute));

    assert_eq!(cpu.ex_mem.alu_out, i64::MIN);
}

#[test]
fn add_publishes_only_with_forwarding() {
    for forwarding in [false, true] {
        let mut cpu = cpu(forwarding);
        let inst = Instruction::add(3, 1, 2);
        cpu.id_ex = id_ex(1, inst, 1, 2);

        let _ = execute_stage(&mut cpu, &slot(1, 0, inst, Stage::Execute));

        let published = cpu.forward.get(3).map(|e| (e.value, e.producer));
        assert_eq!(published, forwarding.then_some((3, 1)));
    }
}

#[test]
fn load_does_not_publish_in_execute() {
    let mut cpu = cpu(true);
    let inst = Instruction::load(3, 0, 1);
    cpu.id_ex = id_ex(1, inst, 1, 0);

    let _ = execute_stage(&mut cpu, &slot(1, 0, inst, Stage::Execute));

    assert!(cpu.forward.is_empty());
}
