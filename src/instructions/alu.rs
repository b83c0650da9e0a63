//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! ADC and SBC honour the Decimal flag. In decimal mode each nibble is a BCD
//! digit and the result is corrected nibble by nibble. ADC computes Zero,
//! Negative and Overflow from the corrected sum; SBC computes them from the
//! binary difference, as the NMOS part does.

use crate::opcodes::lookup;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Flags affected:
/// - C: Set if the (binary or BCD) sum exceeds its range
/// - Z, N: From the stored result
/// - V: Set when both inputs share a sign that the result does not
///
/// Cycle timing: base cycles, +1 if an indexed operand crosses a page
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    if cpu.flag_d {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }

    cpu.retire(metadata, page_crossed);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry (the borrow) from the
/// accumulator. Carry is "not borrow": set when no borrow occurred.
///
/// In binary mode SBC is exactly ADC with the operand's bits inverted.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    if cpu.flag_d {
        subtract_decimal(cpu, value);
    } else {
        add_binary(cpu, !value);
    }

    cpu.retire(metadata, page_crossed);
}

fn add_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flag_c as u16;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    // Overflow: operands agree in sign, result disagrees
    cpu.flag_v = (!(a ^ value) & (a ^ result) & 0x80) != 0;
    cpu.a = result;
    cpu.update_zn(result);
}

fn add_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + cpu.flag_c as u16;
    if lo > 0x09 {
        lo += 0x06;
    }

    let mut hi = (a >> 4) as u16 + (value >> 4) as u16 + (lo > 0x0F) as u16;
    if hi > 0x09 {
        hi += 0x06;
    }

    let result = ((hi << 4) as u8) | (lo as u8 & 0x0F);

    cpu.flag_c = hi > 0x0F;
    cpu.flag_v = (!(a ^ value) & (a ^ result) & 0x80) != 0;
    cpu.a = result;
    cpu.update_zn(result);
}

fn subtract_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let borrow = !cpu.flag_c as i16;

    // Flags come from the binary difference; only A gets the corrected digits
    let difference = a as i16 - value as i16 - borrow;
    let binary = difference as u8;

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }

    cpu.flag_c = difference >= 0;
    cpu.flag_v = ((a ^ value) & (a ^ binary) & 0x80) != 0;
    cpu.update_zn(binary);
    cpu.a = (((hi & 0x0F) << 4) | (lo & 0x0F)) as u8;
}

/// Executes the AND (Logical AND) instruction.
///
/// A = A & M. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a &= value;
    cpu.update_zn(cpu.a);

    cpu.retire(metadata, page_crossed);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// A = A | M. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a |= value;
    cpu.update_zn(cpu.a);

    cpu.retire(metadata, page_crossed);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// A = A ^ M. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a ^= value;
    cpu.update_zn(cpu.a);

    cpu.retire(metadata, page_crossed);
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Computes A - M without storing it:
/// - C: Set if A >= M (no borrow)
/// - Z: Set if A == M
/// - N: Bit 7 of the 8-bit difference
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let register = cpu.a;
    compare(cpu, register, value);

    cpu.retire(metadata, page_crossed);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let register = cpu.x;
    compare(cpu, register, value);

    cpu.retire(metadata, page_crossed);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let register = cpu.y;
    compare(cpu, register, value);

    cpu.retire(metadata, page_crossed);
}

fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.update_zn(register.wrapping_sub(value));
}

/// Executes the BIT (Bit Test) instruction.
///
/// - Z: Set if A & M is zero (the AND result is discarded)
/// - N: Bit 7 of M itself
/// - V: Bit 6 of M itself
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_n = (value & 0x80) != 0;
    cpu.flag_v = (value & 0x40) != 0;

    cpu.retire(metadata, page_crossed);
}
