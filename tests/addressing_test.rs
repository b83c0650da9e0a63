//! Addressing-mode behaviour observed from the bus: wraparound, indirection
//! and the dummy read issued when an indexed address crosses a page.

use nmos6502::{MemoryBus, CPU};

/// Flat 64KB bus that records every `read` it receives.
struct RecordingBus {
    data: Box<[u8; 65536]>,
    reads: Vec<u16>,
}

impl RecordingBus {
    fn new(program: &[u8]) -> Self {
        let mut data = Box::new([0u8; 65536]);
        data[0xFFFC] = 0x00;
        data[0xFFFD] = 0x80;
        data[0x8000..0x8000 + program.len()].copy_from_slice(program);
        Self {
            data,
            reads: Vec::new(),
        }
    }
}

impl MemoryBus for RecordingBus {
    fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn read(&mut self, addr: u16) -> u8 {
        self.reads.push(addr);
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

fn setup_cpu(program: &[u8]) -> CPU<RecordingBus> {
    let mut cpu = CPU::new(RecordingBus::new(program));
    cpu.memory_mut().reads.clear();
    cpu
}

#[test]
fn test_absolute_x_page_cross_dummy_read() {
    let mut cpu = setup_cpu(&[0xBD, 0xF0, 0x20]); // LDA $20F0,X
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x2110, 0x5A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(
        cpu.memory().reads,
        vec![0x8000, 0x8001, 0x8002, 0x2010, 0x2110]
    );
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_absolute_x_same_page_no_dummy_read() {
    let mut cpu = setup_cpu(&[0xBD, 0x00, 0x20]);
    cpu.set_x(0x20);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().reads, vec![0x8000, 0x8001, 0x8002, 0x2020]);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_absolute_y_page_cross_dummy_read() {
    let mut cpu = setup_cpu(&[0xB9, 0xFF, 0x30]); // LDA $30FF,Y
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert!(cpu.memory().reads.ends_with(&[0x3000, 0x3100]));
}

#[test]
fn test_indirect_y_page_cross_dummy_read() {
    let mut cpu = setup_cpu(&[0xB1, 0x40]); // LDA ($40),Y
    cpu.memory_mut().write(0x0040, 0xF0);
    cpu.memory_mut().write(0x0041, 0x12);
    cpu.memory_mut().write(0x1300, 0x77);
    cpu.set_y(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(
        cpu.memory().reads,
        vec![0x8000, 0x8001, 0x0040, 0x0041, 0x1200, 0x1300]
    );
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_indirect_y_pointer_wraps_zero_page() {
    let mut cpu = setup_cpu(&[0xB1, 0xFF]);
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x40);
    cpu.memory_mut().write(0x0100, 0xEE);
    cpu.memory_mut().write(0x4005, 0x66);
    cpu.set_y(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
    assert!(!cpu.memory().reads.contains(&0x0100));
}

#[test]
fn test_indirect_x_wraps_zero_page() {
    let mut cpu = setup_cpu(&[0xA1, 0xFE]); // LDA ($FE,X)
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x00FF, 0x34);
    cpu.memory_mut().write(0x0000, 0x12);
    cpu.memory_mut().write(0x1234, 0xAB);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAB);
    assert_eq!(cpu.memory().reads, vec![0x8000, 0x8001, 0x00FF, 0x0000, 0x1234]);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_zero_page_x_stays_in_zero_page() {
    let mut cpu = setup_cpu(&[0xB5, 0xF0]); // LDA $F0,X
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x0010, 0x31);
    cpu.memory_mut().write(0x0110, 0x99);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x31);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_zero_page_y_stays_in_zero_page() {
    let mut cpu = setup_cpu(&[0xB6, 0x80]); // LDX $80,Y
    cpu.set_y(0x90);
    cpu.memory_mut().write(0x0010, 0x44);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x44);
}

#[test]
fn test_absolute_x_wraps_address_space() {
    let mut cpu = setup_cpu(&[0xBD, 0xFF, 0xFF]); // LDA $FFFF,X
    cpu.set_x(0x02);
    cpu.memory_mut().write(0x0001, 0x3C);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x3C);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_store_does_not_pay_page_cross_penalty_but_reads_bus() {
    let mut cpu = setup_cpu(&[0x9D, 0xF0, 0x20]); // STA $20F0,X
    cpu.set_x(0x20);
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x2110), 0x42);
    assert!(cpu.memory().reads.contains(&0x2010));
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_peek_observers_do_not_touch_bus() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.memory_mut().reads.clear();

    let _ = cpu.stack_contents();
    let _ = cpu.memory().peek(0x1234);

    assert!(cpu.memory().reads.is_empty());
}
