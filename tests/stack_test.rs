//! Tests for PHA, PHP, PLA and PLP.

use nmos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_pha() {
    let mut cpu = setup_cpu(&[0x48]);
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x01FD), 0x42);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_php_pushes_break_and_unused() {
    let mut cpu = setup_cpu(&[0x08]);
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x01FD), 0b1011_0101);
    assert!(!cpu.flag_b(), "PHP does not change the live B flag");
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_pla_sets_flags() {
    let mut cpu = setup_cpu(&[0x68]);
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0x00);
    cpu.set_a(0x55);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_plp_restores_flags_but_not_break() {
    let mut cpu = setup_cpu(&[0x28]);
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0xFF);

    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_b());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_plp_keeps_live_break_flag() {
    let mut cpu = setup_cpu(&[0x28]);
    cpu.set_flag_b(true);
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0x00);

    cpu.step().unwrap();

    assert!(cpu.flag_b());
    assert_eq!(cpu.status(), 0x30);
}

#[test]
fn test_php_plp_round_trip() {
    // SEC; SED; PHP; CLC; CLD; PLP
    let mut cpu = setup_cpu(&[0x38, 0xF8, 0x08, 0x18, 0xD8, 0x28]);

    cpu.run_instructions(6).unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_d());
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_php_plp_restores_flags_despite_break_changes() {
    // SEC; SED; SEI; PHP; CLC; CLD; CLI; PLP
    let mut cpu = setup_cpu(&[0x38, 0xF8, 0x78, 0x08, 0x18, 0xD8, 0x58, 0x28]);
    cpu.set_flag_v(true);
    cpu.set_flag_n(true);

    cpu.run_instructions(4).unwrap();
    // The stacked copy has B set; the live flag is toggled before the pull
    assert_eq!(cpu.memory().peek(0x01FD) & 0x30, 0x30);
    cpu.set_flag_b(true);
    cpu.set_flag_v(false);
    cpu.run_instructions(4).unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_b(), "PLP leaves the live B flag alone");
    assert_eq!(cpu.status() & 0x20, 0x20);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_plp_keeps_clear_break_flag() {
    // PHP pushes B set; PLP must not copy it into the live flag
    let mut cpu = setup_cpu(&[0x08, 0x28]);
    cpu.set_flag_b(false);

    cpu.run_instructions(2).unwrap();

    assert!(!cpu.flag_b());
    assert_eq!(cpu.status() & 0x20, 0x20);
}

#[test]
fn test_push_wraps_stack_pointer() {
    let mut cpu = setup_cpu(&[0x48, 0x48]);
    cpu.set_sp(0x00);
    cpu.set_a(0x99);

    cpu.run_instructions(2).unwrap();

    assert_eq!(cpu.memory().peek(0x0100), 0x99);
    assert_eq!(cpu.memory().peek(0x01FF), 0x99);
    assert_eq!(cpu.sp(), 0xFE);
}

#[test]
fn test_pull_wraps_stack_pointer() {
    let mut cpu = setup_cpu(&[0x68]);
    cpu.set_sp(0xFF);
    cpu.memory_mut().write(0x0100, 0x81);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert_eq!(cpu.sp(), 0x00);
    assert!(cpu.flag_n());
}

#[test]
fn test_stack_contents_view() {
    let mut cpu = setup_cpu(&[0xA9, 0x11, 0x48, 0xA9, 0x22, 0x48]);
    cpu.set_sp(0xFF);

    cpu.run_instructions(4).unwrap();

    assert_eq!(cpu.stack_contents(), vec![0x22, 0x11]);
}
