//! General-Purpose Register Tests.
//!
//! Verifies the reset state and pending-owner bookkeeping as seen through the CPU.

use pipesim_core::config::Config;
use pipesim_core::core::Cpu;
use pipesim_core::core::arch::Gpr;

#[test]
fn cpu_starts_with_seeded_registers() {
    let cpu = Cpu::new(&Config::default());
    let values: Vec<i64> = cpu.regs.iter().map(|(_, r)| r.value).collect();
    let mut expected = vec![0; 32];
    expected[1] = 1;
    expected[2] = 2;
    assert_eq!(values, expected);
}

#[test]
fn reset_clears_pending_and_values() {
    let mut cpu = Cpu::new(&Config::default());
    cpu.regs.write(7, 99);
    cpu.regs.set_pending(7, 3);
    cpu.reset();
    assert_eq!(cpu.regs, Gpr::seeded());
}

#[test]
fn retire_write_respects_newer_owner() {
    let mut cpu = Cpu::new(&Config::default());
    cpu.regs.set_pending(5, 1);
    cpu.regs.set_pending(5, 2);
    cpu.retire_write(5, 10, 1);
    assert_eq!(cpu.regs.read(5), 10);
    assert_eq!(cpu.regs.pending_owner(5), Some(2));
    cpu.retire_write(5, 20, 2);
    assert_eq!(cpu.regs.read(5), 20);
    assert!(!cpu.regs.is_pending(5));
}
