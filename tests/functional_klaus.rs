//! Klaus Dormann's 6502 Functional Test
//!
//! Runs the functional test suite from
//! https://github.com/Klaus2m5/6502_65C02_functional_tests against the engine.
//! The image exercises every documented opcode and addressing mode, including
//! decimal mode.
//!
//! ## How the Test Works
//!
//! 1. Load the 64KB binary image (code and data) into flat memory
//! 2. Start at the entry point ($0400)
//! 3. Run with a [`TrapDetector`] until an instruction jumps to itself
//! 4. The run succeeds if that happens at the success address ($3469)
//!
//! Any other trap address identifies the failing test in the assembler
//! listing. The image is not shipped with the crate; place it at
//! `tests/fixtures/6502_functional_test.bin` or point `KLAUS_TEST_BIN` at it.

use std::path::PathBuf;

use nmos6502::{
    CpuConfig, ExecutionHook, FlatMemory, HookAction, InstructionLimit, MemoryBus, StopReason,
    TrapDetector, CPU,
};

/// Success address - where PC ends up when all tests pass
const SUCCESS_ADDRESS: u16 = 0x3469;

/// Entry point for the functional test
const ENTRY_POINT: u16 = 0x0400;

/// Upper bound on instructions; a passing run needs about 30 million
const MAX_INSTRUCTIONS: u64 = 100_000_000;

fn image_path() -> PathBuf {
    std::env::var_os("KLAUS_TEST_BIN")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/6502_functional_test.bin"))
}

/// Load the 64KB binary test image into flat memory
fn load_test_binary() -> FlatMemory {
    let path = image_path();
    let image = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read test binary {}: {}", path.display(), e));
    assert_eq!(image.len(), 65536, "test binary must be exactly 64KB");

    let mut memory = FlatMemory::new();
    memory.load(0x0000, &image);
    memory
}

/// Trap detection bounded by an instruction count.
struct Harness {
    traps: TrapDetector,
    limit: InstructionLimit,
}

impl ExecutionHook for Harness {
    fn after_instruction(&mut self, pc_before: u16, state: &nmos6502::CpuSnapshot) -> HookAction {
        match self.traps.after_instruction(pc_before, state) {
            HookAction::Continue => self.limit.after_instruction(pc_before, state),
            stop => stop,
        }
    }
}

fn format_cpu_state(cpu: &CPU<FlatMemory>) -> String {
    format!(
        "PC:${:04X} A:${:02X} X:${:02X} Y:${:02X} SP:${:02X} P:${:02X} Cycles:{}",
        cpu.pc(),
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.status(),
        cpu.cycles()
    )
}

#[test]
#[ignore = "needs the external 64KB test image - run with --ignored"]
fn klaus_6502_functional_test() {
    let memory = load_test_binary();
    let mut cpu = CPU::with_config(memory, CpuConfig::default());
    cpu.set_pc(ENTRY_POINT);

    let mut harness = Harness {
        traps: TrapDetector::with_success(SUCCESS_ADDRESS),
        limit: InstructionLimit::new(MAX_INSTRUCTIONS),
    };
    let reason = cpu
        .run(&mut harness)
        .unwrap_or_else(|e| panic!("{} ({})", e, format_cpu_state(&cpu)));

    match reason {
        StopReason::Success { pc } => assert_eq!(pc, SUCCESS_ADDRESS),
        StopReason::Trap { pc } => {
            let context: Vec<String> = (pc.saturating_sub(5)..=pc.saturating_add(5))
                .map(|addr| format!("${:04X}:{:02X}", addr, cpu.memory().peek(addr)))
                .collect();
            panic!(
                "trapped at ${:04X}, see the listing for that address\n{}\n{}",
                pc,
                format_cpu_state(&cpu),
                context.join(" ")
            );
        }
        other => panic!("run ended early: {:?} ({})", other, format_cpu_state(&cpu)),
    }
}

#[test]
#[ignore = "needs the external 64KB test image - run with --ignored"]
fn klaus_image_layout() {
    let memory = load_test_binary();

    // CLD at the entry point, JMP * at the success address
    assert_eq!(memory.peek(ENTRY_POINT), 0xD8);
    assert_eq!(memory.peek(SUCCESS_ADDRESS), 0x4C);
    assert_eq!(memory.peek(SUCCESS_ADDRESS + 1), 0x69);
    assert_eq!(memory.peek(SUCCESS_ADDRESS + 2), 0x34);
}
