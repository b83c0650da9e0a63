//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates either on the accumulator or, as a read-modify-write, on
//! memory. Memory forms never take a page-crossing penalty; their table
//! cycle counts already include the worst case.

use crate::{AddressingMode, MemoryBus, CPU};
use crate::opcodes::lookup;

/// Applies `op` to the accumulator or the addressed memory byte.
///
/// `op` receives the old value and the incoming carry and returns the new
/// value and the outgoing carry. Z and N are set from the new value.
fn shift_with<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, op: fn(u8, bool) -> (u8, bool)) {
    let metadata = lookup(opcode);

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let (result, carry) = op(cpu.a, cpu.flag_c);
        cpu.flag_c = carry;
        cpu.a = result;
        result
    } else {
        // Memory mode: read, shift, write back
        let addr = cpu.effective_address(metadata.addressing_mode);
        let value = cpu.memory.read(addr);
        let (result, carry) = op(value, cpu.flag_c);
        cpu.flag_c = carry;
        cpu.memory.write(addr, result);
        result
    };

    cpu.update_zn(result);
    cpu.retire(metadata, false);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_with(cpu, opcode, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N is always
/// cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_with(cpu, opcode, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 leaves into the carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_with(cpu, opcode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 leaves into the carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_with(cpu, opcode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}
