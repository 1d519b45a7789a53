use pipesim_core::SimError;
use pipesim_core::core::pipeline::latches::ExMem;
use pipesim_core::core::pipeline::signals::StageOutcome;
use pipesim_core::core::pipeline::stages::mem_stage;
use pipesim_core::core::pipeline::Stage;
use pipesim_core::isa::Instruction;

use super::{cpu, slot};

fn ex_mem(seq: u64, inst: Instruction, alu_out: i64, store_data: i64) -> ExMem {
    ExMem {
        seq,
        pc: 0,
        inst,
        alu_out,
        store_data,
    }
}

#[test]
fn load_reads_data_memory() {
    let mut cpu = cpu(false);
    cpu.dmem.write(7, 70).expect("in range");
    let inst = Instruction::load(3, 7, 0);
    cpu.ex_mem = ex_mem(1, inst, 7, 0);

    let outcome = mem_stage(&mut cpu, &slot(1, 0, inst, Stage::Memory)).expect("in range");

    assert_eq!(outcome, StageOutcome::Advance);
    assert_eq!(cpu.mem_wb.load_data, 70);
    assert!(cpu.forward.is_empty());
}

#[test]
fn store_writes_data_memory() {
    let mut cpu = cpu(false);
    let inst = Instruction::store(9, 0, 2);
    cpu.ex_mem = ex_mem(1, inst, 9, 2);

    let _ = mem_stage(&mut cpu, &slot(1, 0, inst, Stage::Memory)).expect("in range");

    assert_eq!(cpu.dmem.read(9).expect("in range"), 2);
}

#[test]
fn load_publishes_with_forwarding() {
    let mut cpu = cpu(true);
    cpu.dmem.write(1, 40).expect("in range");
    let inst = Instruction::load(3, 0, 1);
    cpu.ex_mem = ex_mem(2, inst, 1, 0);

    let _ = mem_stage(&mut cpu, &slot(2, 0, inst, Stage::Memory)).expect("in range");

    let entry = cpu.forward.get(3).expect("published");
    assert_eq!((entry.value, entry.producer), (40, 2));
}

#[test]
fn out_of_range_address_is_an_error() {
    let mut cpu = cpu(false);
    let inst = Instruction::load(3, 0, 1);
    cpu.ex_mem = ex_mem(1, inst, -1, 0);

    let err = mem_stage(&mut cpu, &slot(1, 0, inst, Stage::Memory)).unwrap_err();

    assert!(matches!(err, SimError::AddressOutOfRange { addr: -1, .. }));
}

#[test]
fn add_passes_through() {
    let mut cpu = cpu(false);
    let inst = Instruction::add(3, 1, 2);
    cpu.ex_mem = ex_mem(1, inst, 3, 0);

    let _ = mem_stage(&mut cpu, &slot(1, 0, inst, Stage::Memory)).expect("no access");

    assert_eq!(cpu.mem_wb.alu_out, 3);
    assert_eq!(cpu.mem_wb.seq, 1);
}
