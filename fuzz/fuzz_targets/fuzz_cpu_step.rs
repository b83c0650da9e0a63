//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary CPU state, memory image and signal pattern, then
//! executes a short burst of instructions. Any panic is a bug: every opcode,
//! register and memory combination must execute cleanly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmos6502::{CpuConfig, FlatMemory, IllegalOpcodePolicy, MemoryBus, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    /// Packed NV-BDIZC status byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction stream at PC
    code: [u8; 32],
    /// Zero page contents (pointers for indirect modes)
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Reset, IRQ and NMI vectors
    vectors: [u8; 6],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Interrupt requests raised before each step
    signals: Vec<u8>,
    /// Report undocumented opcodes as errors instead of skipping them
    strict: bool,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0xFFFA, &input.memory.vectors);
    memory.load(input.cpu_state.pc, &input.memory.code);

    let config = CpuConfig {
        illegal_opcodes: if input.strict {
            IllegalOpcodePolicy::Error
        } else {
            IllegalOpcodePolicy::Nop
        },
        ..CpuConfig::default()
    };
    let mut cpu = CPU::with_config(memory, config);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_status(input.cpu_state.status);

    for &signal in input.signals.iter().take(16) {
        if signal & 0x01 != 0 {
            cpu.request_irq();
        }
        if signal & 0x02 != 0 {
            cpu.request_nmi();
        }
        if signal & 0x04 != 0 {
            cpu.request_reset();
        }

        let before = cpu.cycles();
        // Errors are allowed in strict mode; panics never are
        let _ = cpu.step();

        // Every instruction costs at least two cycles; only a reset rewinds the counter
        if signal & 0x04 == 0 {
            assert!(cpu.cycles() >= before + 2);
        }
        assert_eq!(cpu.status() & 0x20, 0x20);
    }
});
