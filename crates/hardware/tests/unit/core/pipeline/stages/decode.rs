use pipesim_core::core::pipeline::latches::IfId;
use pipesim_core::core::pipeline::signals::StageOutcome;
use pipesim_core::core::pipeline::stages::{decode_stage, fetch_stage};
use pipesim_core::core::pipeline::Stage;
use pipesim_core::isa::Instruction;

use super::{cpu, slot};

fn fill_if_id(cpu: &mut pipesim_core::Cpu, seq: u64, pc: i64, inst: Instruction) {
    cpu.if_id = IfId {
        seq,
        pc,
        npc: pc + 4,
        inst,
    };
}

#[test]
fn add_reads_both_operands_and_marks_destination() {
    let mut cpu = cpu(false);
    let inst = Instruction::add(3, 1, 2);
    fill_if_id(&mut cpu, 1, 0, inst);

    let outcome = decode_stage(&mut cpu, &slot(1, 0, inst, Stage::Decode));

    assert_eq!(outcome, StageOutcome::Advance);
    assert_eq!((cpu.id_ex.alu_a, cpu.id_ex.alu_b), (1, 2));
    assert_eq!(cpu.id_ex.seq, 1);
    assert_eq!(cpu.regs.pending_owner(3), Some(1));
}

#[test]
fn load_reads_base_and_carries_immediate() {
    let mut cpu = cpu(false);
    cpu.regs.write(6, 100);
    let inst = Instruction::load(7, 12, 6);
    fill_if_id(&mut cpu, 4, 12, inst);

    let _ = decode_stage(&mut cpu, &slot(4, 12, inst, Stage::Decode));

    assert_eq!(cpu.id_ex.alu_a, 100);
    assert_eq!(cpu.id_ex.imm, 12);
    assert_eq!(cpu.regs.pending_owner(7), Some(4));
}

#[test]
fn store_reads_data_register_without_marking_pending() {
    let mut cpu = cpu(false);
    cpu.regs.write(9, 55);
    let inst = Instruction::store(3, 1, 9);
    fill_if_id(&mut cpu, 2, 4, inst);

    let _ = decode_stage(&mut cpu, &slot(2, 4, inst, Stage::Decode));

    assert_eq!((cpu.id_ex.alu_a, cpu.id_ex.alu_b), (1, 55));
    assert!(cpu.regs.iter().all(|(_, reg)| !reg.is_pending()));
}

#[test]
fn younger_writer_takes_ownership() {
    let mut cpu = cpu(false);
    cpu.regs.set_pending(3, 1);
    let inst = Instruction::add(3, 2, 2);
    fill_if_id(&mut cpu, 2, 4, inst);

    let _ = decode_stage(&mut cpu, &slot(2, 4, inst, Stage::Decode));

    assert_eq!(cpu.regs.pending_owner(3), Some(2));
}

#[test]
fn held_consumer_does_not_touch_id_ex() {
    let mut cpu = cpu(false);
    cpu.regs.set_pending(3, 1);
    let inst = Instruction::add(4, 3, 2);
    let _ = fetch_stage(&mut cpu, &slot(2, 4, inst, Stage::Fetch));

    let outcome = decode_stage(&mut cpu, &slot(2, 4, inst, Stage::Decode));

    assert_eq!(outcome, StageOutcome::Hold);
    assert_eq!(cpu.id_ex.seq, 0);
    assert!(!cpu.regs.is_pending(4));
}

#[test]
fn forwarded_operand_is_read_from_table() {
    let mut cpu = cpu(true);
    cpu.regs.set_pending(3, 1);
    cpu.publish(3, 30, 1);
    let inst = Instruction::add(4, 3, 3);
    fill_if_id(&mut cpu, 2, 4, inst);

    let _ = decode_stage(&mut cpu, &slot(2, 4, inst, Stage::Decode));

    assert_eq!((cpu.id_ex.alu_a, cpu.id_ex.alu_b), (30, 30));
    assert_eq!(cpu.stats.forwarded_values, 2);
}
