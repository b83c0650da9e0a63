//! Simple program example
//!
//! Loads a short routine into flat RAM, runs it to its `JMP *` trap and
//! prints the resulting CPU state. Set `RUST_LOG=nmos6502=trace` to see one
//! trace event per executed instruction.

use nmos6502::{FlatMemory, MemoryBus, StopReason, TrapDetector, CPU, OPCODE_TABLE};
use tracing_subscriber::EnvFilter;

/// Sums 10 + 9 + ... + 1 into $0200.
///
/// ```text
/// 8000  A9 00     LDA #$00
/// 8002  A2 0A     LDX #$0A
/// 8004  18  loop: CLC
/// 8005  86 10     STX $10
/// 8007  65 10     ADC $10
/// 8009  CA        DEX
/// 800A  D0 F8     BNE loop
/// 800C  8D 00 02  STA $0200
/// 800F  4C 0F 80  JMP *
/// ```
const PROGRAM: [u8; 18] = [
    0xA9, 0x00, 0xA2, 0x0A, 0x18, 0x86, 0x10, 0x65, 0x10, 0xCA, 0xD0, 0xF8, 0x8D, 0x00, 0x02,
    0x4C, 0x0F, 0x80,
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &PROGRAM);

    let mut cpu = CPU::new(memory);
    println!("Listing:");
    let mut addr = 0x8000u16;
    while addr < 0x8000 + PROGRAM.len() as u16 {
        let metadata = &OPCODE_TABLE[cpu.memory().peek(addr) as usize];
        println!("  ${:04X}  {}", addr, metadata.mnemonic);
        addr += metadata.size_bytes as u16;
    }

    let mut hook = TrapDetector::with_success(0x800F);
    match cpu.run(&mut hook) {
        Ok(StopReason::Success { pc }) => println!("\nReached ${:04X}", pc),
        Ok(other) => println!("\nStopped early: {:?}", other),
        Err(e) => {
            eprintln!("Execution error: {}", e);
            std::process::exit(1);
        }
    }

    let state = cpu.snapshot();
    println!("Sum: {}", cpu.memory().peek(0x0200));
    println!(
        "A:${:02X} X:${:02X} Y:${:02X} SP:${:02X} P:{:08b} cycles:{}",
        state.a, state.x, state.y, state.sp, state.status, state.cycles
    );
    println!("Stack: {:02X?}", cpu.stack_contents());
}
