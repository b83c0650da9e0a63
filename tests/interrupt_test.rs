//! Tests for IRQ, NMI and reset servicing between instructions.

use nmos6502::{
    Device, FlatMemory, InterruptDevice, MappedMemory, MemoryBus, PendingSignals, CPU,
};

/// Helper function to create a CPU with reset 0x8000, NMI 0xA000, IRQ 0x9000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0xA0);
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_irq_masked_until_cli() {
    // NOP; CLI; NOP
    let mut cpu = setup_cpu(&[0xEA, 0x58, 0xEA]);
    cpu.request_irq();

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8001, "I is set after reset, so IRQ waits");
    assert!(cpu.pending_signals().irq);

    cpu.step().unwrap(); // CLI, then the IRQ is taken
    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());
    assert!(!cpu.pending_signals().irq);
    assert_eq!(cpu.cycles(), 2 + 2 + 7);

    // Return address is the instruction after CLI
    assert_eq!(cpu.memory().peek(0x01FD), 0x80);
    assert_eq!(cpu.memory().peek(0x01FC), 0x02);
}

#[test]
fn test_irq_frame_has_break_clear() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);
    cpu.request_irq();

    cpu.step().unwrap();

    let pushed = cpu.memory().peek(0x01FB);
    assert_eq!(pushed, 0x21); // U | C
    assert_eq!(cpu.sp(), 0xFA);
}

#[test]
fn test_irq_then_rti_resumes() {
    let mut cpu = setup_cpu(&[0xEA, 0xE8]);
    cpu.memory_mut().write(0x9000, 0x40); // RTI
    cpu.set_flag_i(false);
    cpu.request_irq();

    cpu.step().unwrap(); // NOP + IRQ entry
    cpu.step().unwrap(); // RTI
    assert_eq!(cpu.pc(), 0x8001);
    assert!(!cpu.flag_i());

    cpu.step().unwrap(); // INX
    assert_eq!(cpu.x(), 1);
}

#[test]
fn test_nmi_ignores_interrupt_disable() {
    let mut cpu = setup_cpu(&[0xEA]);
    assert!(cpu.flag_i());
    cpu.request_nmi();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.cycles(), 2 + 7);
    assert!(!cpu.pending_signals().nmi);
}

#[test]
fn test_nmi_before_irq() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_flag_i(false);
    cpu.request_irq();
    cpu.request_nmi();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0xA000);
    assert!(cpu.pending_signals().irq);
}

#[test]
fn test_reset_request() {
    let mut cpu = setup_cpu(&[0xA9, 0x42]);
    cpu.set_x(0x10);
    cpu.set_flag_d(true);
    cpu.request_nmi();
    cpu.request_reset();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), 0x24);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.pending_signals(), PendingSignals::default());
}

#[test]
fn test_direct_reset() {
    let mut cpu = setup_cpu(&[0xA9, 0x42]);
    cpu.step().unwrap();
    cpu.set_sp(0x10);

    cpu.reset();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_i());
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_run_for_cycles_counts_interrupt_entry() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.memory_mut().load(0xA000, &[0xEA; 8]);
    cpu.request_nmi();

    let consumed = cpu.run_for_cycles(9).unwrap();

    assert_eq!(consumed, 9);
    assert_eq!(cpu.pc(), 0xA000);
}

/// Timer-style device: writing offset 0 raises IRQ, writing offset 1 acknowledges it.
struct IrqLatch {
    pending: bool,
}

impl InterruptDevice for IrqLatch {
    fn has_interrupt(&self) -> bool {
        self.pending
    }
}

impl Device for IrqLatch {
    fn peek(&self, _offset: u16) -> u8 {
        self.pending as u8
    }

    fn write(&mut self, offset: u16, _value: u8) {
        self.pending = offset == 0;
    }

    fn size(&self) -> u16 {
        2
    }

    fn as_interrupt_device(&self) -> Option<&dyn InterruptDevice> {
        Some(self)
    }
}

#[test]
fn test_device_irq_line_is_level_sensitive() {
    let mut memory = MappedMemory::new();
    memory
        .add_device(0xD000, Box::new(IrqLatch { pending: false }))
        .unwrap();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    // CLI; STA $D000; INX; INX
    memory.load(0x8000, &[0x58, 0x8D, 0x00, 0xD0, 0xE8, 0xE8]);
    // Handler: INY; STA $D001 (acknowledge); RTI
    memory.load(0x9000, &[0xC8, 0x8D, 0x01, 0xD0, 0x40]);

    let mut cpu = CPU::new(memory);
    assert!(!cpu.memory().irq_active());

    cpu.step().unwrap(); // CLI
    cpu.step().unwrap(); // STA raises the line, IRQ taken right after
    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.memory().irq_active());

    cpu.run_instructions(3).unwrap(); // INY; STA ack; RTI
    assert_eq!(cpu.pc(), 0x8004);
    assert!(!cpu.memory().irq_active());
    assert_eq!(cpu.y(), 1);

    cpu.run_instructions(2).unwrap();
    assert_eq!(cpu.x(), 2);
    assert_eq!(cpu.y(), 1, "handler ran exactly once");
}

#[test]
fn test_device_irq_held_while_masked() {
    let mut memory = MappedMemory::new();
    memory
        .add_device(0xD000, Box::new(IrqLatch { pending: true }))
        .unwrap();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.load(0x8000, &[0xEA, 0xEA, 0x58, 0xEA]);

    let mut cpu = CPU::new(memory);
    cpu.run_instructions(2).unwrap();
    assert_eq!(cpu.pc(), 0x8002);

    cpu.step().unwrap(); // CLI
    assert_eq!(cpu.pc(), 0x9000);
}
