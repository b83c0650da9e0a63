//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All update Z and N from the copied value except TXS, which leaves the
//! flags alone.

use crate::opcodes::lookup;
use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// Copies the current contents of the accumulator into the X register
/// and sets the zero and negative flags as appropriate.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
    cpu.retire(lookup(opcode), false);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
    cpu.retire(lookup(opcode), false);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
    cpu.retire(lookup(opcode), false);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
    cpu.retire(lookup(opcode), false);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
    cpu.retire(lookup(opcode), false);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, no flags are affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.sp = cpu.x;
    cpu.retire(lookup(opcode), false);
}
