//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! BRK is a software interrupt that:
//! 1. Pushes the opcode address + 2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from the IRQ vector
//!
//! JSR pushes the address of its own last byte, so RTS adds one to the pulled
//! address to land on the next instruction.

use crate::cpu::{FLAG_B, FLAG_U};
use crate::opcodes::lookup;
use crate::{MemoryBus, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// The byte after the opcode is a padding byte that the return address
/// skips; RTI from the handler resumes at the opcode address + 2.
///
/// Cycle timing: 7 cycles (fixed)
///
/// Flags affected:
/// - B: Set in the pushed status byte only
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);

    let return_address = cpu.pc.wrapping_add(2);
    let status = cpu.status() | FLAG_B | FLAG_U;
    let vector = cpu.config.irq_vector;
    cpu.push_interrupt_frame(return_address, status, vector);

    tracing::debug!(
        pc = format_args!("{:04X}", return_address.wrapping_sub(2)),
        handler = format_args!("{:04X}", cpu.pc),
        "brk"
    );

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// The indirect form reproduces the NMOS page-wrap bug: JMP ($10FF) reads
/// its target from $10FF and $1000, not $1100.
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);

    cpu.pc = cpu.effective_address(metadata.addressing_mode);
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC+2 (the address of the operand's high byte), then jumps.
///
/// Cycle timing: 6 cycles
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);

    let target = cpu.effective_address(metadata.addressing_mode);
    cpu.push_word(cpu.pc.wrapping_add(2));
    cpu.pc = target;

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and adds one.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);

    cpu.pc = cpu.pull_word().wrapping_add(1);
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status (B keeps its live value), then the exact return address.
/// No +1 adjustment, unlike RTS.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = lookup(opcode);

    let status = cpu.pull();
    cpu.load_status(status);
    cpu.pc = cpu.pull_word();

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.retire(lookup(opcode), false);
}
