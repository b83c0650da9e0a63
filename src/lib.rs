//! # NMOS 6502 Execution Engine
//!
//! An instruction-atomic NMOS 6502 CPU core designed for modularity, clarity, and
//! WebAssembly portability.
//!
//! The engine fetches opcodes through a [`MemoryBus`], decodes them with a
//! 256-entry opcode table, executes them with bit-exact register, flag and
//! memory effects (including decimal-mode arithmetic and the documented NMOS
//! quirks), and accumulates a cycle count that can pace real-time execution.
//!
//! ## Quick Start
//!
//! ```rust
//! use nmos6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$10; STA $20; LDA $20
//! memory.load(0x8000, &[0xA9, 0x10, 0x85, 0x20, 0xA5, 0x20]);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.run_instructions(3).unwrap();
//!
//! assert_eq!(cpu.a(), 0x10);
//! assert_eq!(cpu.memory().peek(0x0020), 0x10);
//! assert_eq!(cpu.cycles(), 2 + 3 + 3);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait;
//!   peripherals plug in through [`MappedMemory`] and the [`Device`] trait
//! - **Instruction atomicity**: interrupts and stop requests are only observed
//!   between instructions, so state is never half-updated
//! - **Table-driven design**: all opcode metadata lives in [`OPCODE_TABLE`]
//! - **Observers get copies**: trace and UI code receive [`CpuSnapshot`] values
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (trace per instruction, debug on
//! interrupts and run-loop stops, warn on undocumented opcodes). It never
//! installs a subscriber.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod hooks;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod snapshot;
pub mod stack;
pub mod timing;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

use thiserror::Error;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::{ConfigError, CpuConfig, IllegalOpcodePolicy};
pub use cpu::CPU;
pub use devices::{Device, DeviceError, InterruptDevice, MappedMemory, RomDevice};
pub use hooks::{
    ExecutionHook, HookAction, InstructionLimit, NoHook, StopHandle, StopReason, TrapDetector,
};
pub use interrupts::{Interrupt, PendingSignals};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use snapshot::CpuSnapshot;
pub use timing::Throttle;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// An undocumented opcode was executed under [`IllegalOpcodePolicy::Error`].
    ///
    /// The instruction has already retired as a NOP of its real length.
    #[error("illegal opcode 0x{opcode:02X} at 0x{pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}
