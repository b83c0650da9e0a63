//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Memory read-modify-write
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap modulo 256 and update only Z and N. The carry flag is untouched.

use crate::opcodes::lookup;
use crate::{MemoryBus, CPU};

fn modify_memory<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, delta: i8) {
    let metadata = lookup(opcode);

    let addr = cpu.effective_address(metadata.addressing_mode);
    let result = cpu.memory.read(addr).wrapping_add_signed(delta);
    cpu.memory.write(addr, result);

    cpu.update_zn(result);
    cpu.retire(metadata, false);
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    modify_memory(cpu, opcode, 1);
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    modify_memory(cpu, opcode, -1);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
    cpu.retire(lookup(opcode), false);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
    cpu.retire(lookup(opcode), false);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
    cpu.retire(lookup(opcode), false);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
    cpu.retire(lookup(opcode), false);
}
