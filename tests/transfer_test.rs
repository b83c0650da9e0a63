//! Tests for the register transfer instructions.

use nmos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(opcode: u8) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0x8000, opcode);
    CPU::new(memory)
}

#[test]
fn test_tax() {
    let mut cpu = setup_cpu(0xAA);
    cpu.set_a(0x80);
    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_tay_zero() {
    let mut cpu = setup_cpu(0xA8);
    cpu.set_y(0x12);
    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa() {
    let mut cpu = setup_cpu(0x8A);
    cpu.set_x(0x33);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x33);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_tya() {
    let mut cpu = setup_cpu(0x98);
    cpu.set_y(0xF0);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_updates_flags() {
    let mut cpu = setup_cpu(0xBA);
    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_leaves_flags() {
    let mut cpu = setup_cpu(0x9A);
    cpu.set_x(0x00);
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);
    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}
