//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads pay the extra cycle when an indexed operand crosses a page. Stores
//! never do: the table already charges them the fixed worst case.

use crate::opcodes::lookup;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a = value;
    cpu.update_zn(value);

    cpu.retire(metadata, page_crossed);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.x = value;
    cpu.update_zn(value);

    cpu.retire(metadata, page_crossed);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.y = value;
    cpu.update_zn(value);

    cpu.retire(metadata, page_crossed);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let addr = cpu.effective_address(metadata.addressing_mode);

    cpu.memory.write(addr, cpu.a);

    cpu.retire(metadata, false);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let addr = cpu.effective_address(metadata.addressing_mode);

    cpu.memory.write(addr, cpu.x);

    cpu.retire(metadata, false);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let addr = cpu.effective_address(metadata.addressing_mode);

    cpu.memory.write(addr, cpu.y);

    cpu.retire(metadata, false);
}
