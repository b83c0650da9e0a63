//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//! - CLV: Clear Overflow Flag
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! A CLI takes effect for the interrupt poll that follows it, so an IRQ that
//! was pending behind a set I flag is taken right after the CLI retires.

use crate::opcodes::lookup;
use crate::{MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// Flags affected:
/// - C: Set to 0
/// - All other flags: Unchanged
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x18); // CLC
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag_c(true);
///
/// cpu.step().unwrap();
///
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x8001);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_c = false;
    cpu.retire(lookup(opcode), false);
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_c = true;
    cpu.retire(lookup(opcode), false);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_i = false;
    cpu.retire(lookup(opcode), false);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_i = true;
    cpu.retire(lookup(opcode), false);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_d = false;
    cpu.retire(lookup(opcode), false);
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// Subsequent ADC and SBC instructions operate on BCD digits.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_d = true;
    cpu.retire(lookup(opcode), false);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching "set overflow" instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_v = false;
    cpu.retire(lookup(opcode), false);
}
