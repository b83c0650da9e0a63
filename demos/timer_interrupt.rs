//! Timer interrupt example
//!
//! Maps an interval timer into a [`MappedMemory`] bus and lets its
//! level-sensitive IRQ drive a small interrupt service routine.
//!
//! # Timer registers (base 0xD000)
//!
//! ```text
//! 0xD000: STATUS  (read)   bit 7 = interrupt pending
//! 0xD001: CONTROL (write)  bit 7 = acknowledge, bit 0 = enable
//! ```
//!
//! The bus has no clock of its own, so the host loop advances the timer by
//! the cycles each instruction consumed. Run with `RUST_LOG=nmos6502=debug`
//! to see every IRQ entry.

use std::cell::RefCell;
use std::rc::Rc;

use nmos6502::{Device, InterruptDevice, MappedMemory, MemoryBus, CPU};
use tracing_subscriber::EnvFilter;

/// Cycles between timer interrupts.
const TIMER_PERIOD: u64 = 500;

/// Number of interrupts to service before stopping.
const TARGET_INTERRUPTS: u8 = 5;

#[derive(Default)]
struct TimerState {
    enabled: bool,
    pending: bool,
    elapsed: u64,
}

impl TimerState {
    fn advance(&mut self, cycles: u64) {
        if !self.enabled {
            return;
        }
        self.elapsed += cycles;
        if self.elapsed >= TIMER_PERIOD {
            self.elapsed -= TIMER_PERIOD;
            self.pending = true;
        }
    }
}

/// Bus-side view of the shared timer.
struct Timer(Rc<RefCell<TimerState>>);

impl InterruptDevice for Timer {
    fn has_interrupt(&self) -> bool {
        self.0.borrow().pending
    }
}

impl Device for Timer {
    fn peek(&self, offset: u16) -> u8 {
        match offset {
            0 if self.0.borrow().pending => 0x80,
            _ => 0x00,
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        if offset != 1 {
            return;
        }
        let mut state = self.0.borrow_mut();
        if value & 0x80 != 0 {
            state.pending = false;
        }
        state.enabled = value & 0x01 != 0;
    }

    fn size(&self) -> u16 {
        2
    }

    fn as_interrupt_device(&self) -> Option<&dyn InterruptDevice> {
        Some(self)
    }
}

/// ```text
/// 8000  A9 01     LDA #$01      ; enable timer
/// 8002  8D 01 D0  STA $D001
/// 8005  58        CLI
/// 8006  EE 00 02  INC $0200     ; main loop counter
/// 8009  4C 06 80  JMP $8006
///
/// 9000  48        PHA           ; ISR
/// 9001  EE 01 02  INC $0201
/// 9004  A9 81     LDA #$81      ; acknowledge, keep enabled
/// 9006  8D 01 D0  STA $D001
/// 9009  68        PLA
/// 900A  40        RTI
/// ```
const MAIN: [u8; 12] = [
    0xA9, 0x01, 0x8D, 0x01, 0xD0, 0x58, 0xEE, 0x00, 0x02, 0x4C, 0x06, 0x80,
];
const ISR: [u8; 11] = [
    0x48, 0xEE, 0x01, 0x02, 0xA9, 0x81, 0x8D, 0x01, 0xD0, 0x68, 0x40,
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let timer = Rc::new(RefCell::new(TimerState::default()));

    let mut memory = MappedMemory::new();
    if let Err(e) = memory.add_device(0xD000, Box::new(Timer(Rc::clone(&timer)))) {
        eprintln!("Failed to map timer: {}", e);
        std::process::exit(1);
    }
    memory.load(0xFFFC, &[0x00, 0x80, 0x00, 0x90]); // reset, IRQ
    memory.load(0x8000, &MAIN);
    memory.load(0x9000, &ISR);

    let mut cpu = CPU::new(memory);

    while cpu.memory().peek(0x0201) < TARGET_INTERRUPTS {
        let before = cpu.cycles();
        if let Err(e) = cpu.step() {
            eprintln!("Execution error: {}", e);
            std::process::exit(1);
        }
        timer.borrow_mut().advance(cpu.cycles() - before);
    }

    println!(
        "Serviced {} timer interrupts in {} cycles",
        cpu.memory().peek(0x0201),
        cpu.cycles()
    );
    println!(
        "Main loop iterations (low byte): {}",
        cpu.memory().peek(0x0200)
    );
}
