//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::cpu::{FLAG_B, FLAG_U};
use crate::opcodes::lookup;
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Stack operation:
/// 1. Write accumulator value to 0x0100 | SP
/// 2. Decrement SP (wraps from 0x00 to 0xFF)
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.memory().peek(0x01FD), 0x42);
/// assert_eq!(cpu.sp(), 0xFC);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.push(cpu.a);
    cpu.retire(lookup(opcode), false);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has the Break bit and bit 5 set, whatever the
/// live B flag holds.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.push(cpu.status() | FLAG_B | FLAG_U);
    cpu.retire(lookup(opcode), false);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.pull();
    cpu.update_zn(cpu.a);
    cpu.retire(lookup(opcode), false);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag except B is loaded from the pulled byte; B and bit 5 are not
/// real flip-flops and keep their current values.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let status = cpu.pull();
    cpu.load_status(status);
    cpu.retire(lookup(opcode), false);
}
