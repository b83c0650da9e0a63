//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry Clear / Set
//! - BNE / BEQ: Branch on Zero Clear / Set
//! - BPL / BMI: Branch on Negative Clear / Set
//! - BVC / BVS: Branch on Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the address after the 2-byte instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::Operand;
use crate::opcodes::lookup;
use crate::{MemoryBus, CPU};

/// Shared branch body. No flags are affected.
fn branch_if<M: MemoryBus>(condition: bool, cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);

    let (target, page_crossed) = match cpu.resolve_operand(metadata.addressing_mode) {
        Operand::Branch {
            target,
            page_crossed,
        } => (target, page_crossed),
        _ => (cpu.pc.wrapping_add(metadata.size_bytes as u16), false),
    };

    if condition {
        cpu.cycles += metadata.base_cycles as u64 + 1 + page_crossed as u64;
        cpu.pc = target;
    } else {
        cpu.retire(metadata, false);
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(!cpu.flag_c, cpu, opcode);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu.flag_c, cpu, opcode);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu.flag_z, cpu, opcode);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(!cpu.flag_z, cpu, opcode);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu.flag_n, cpu, opcode);
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(!cpu.flag_n, cpu, opcode);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(!cpu.flag_v, cpu, opcode);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu.flag_v, cpu, opcode);
}
