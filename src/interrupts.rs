//! # Interrupt Signals and Entry Sequences
//!
//! Three signals can redirect execution between instructions. They are
//! sampled once per completed instruction in fixed priority order:
//!
//! 1. **Reset** - reinitializes registers and reloads PC from the reset
//!    vector. The stack is not touched.
//! 2. **NMI** - pushes PC and status, jumps through the NMI vector. Not
//!    masked by the I flag.
//! 3. **IRQ** - same entry sequence through the IRQ vector, only honored
//!    while the I flag is clear. The request is either the latched
//!    [`CPU::request_irq`] flag or the bus's level-sensitive IRQ line.
//!
//! Latched requests are cleared the moment their entry sequence begins. A
//! masked IRQ request stays pending until I is cleared.

use crate::memory::{read_word, MemoryBus};
use crate::cpu::{FLAG_B, FLAG_U};
use crate::CPU;

/// Cycles consumed by an IRQ/NMI entry sequence (and by BRK).
pub const INTERRUPT_CYCLES: u64 = 7;

/// Signals set by the surrounding system and consumed by the dispatcher.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingSignals {
    pub irq: bool,
    pub nmi: bool,
    pub reset: bool,
}

/// Interrupt kinds, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Reset,
    Nmi,
    Irq,
}

impl<M: MemoryBus> CPU<M> {
    /// Latches an interrupt request.
    pub fn request_irq(&mut self) {
        self.signals.irq = true;
    }

    /// Latches a non-maskable interrupt request.
    pub fn request_nmi(&mut self) {
        self.signals.nmi = true;
    }

    /// Latches a reset request, serviced after the current instruction.
    pub fn request_reset(&mut self) {
        self.signals.reset = true;
    }

    /// Currently latched requests.
    pub fn pending_signals(&self) -> PendingSignals {
        self.signals
    }

    /// Performs a hard reset immediately.
    ///
    /// A, X and Y are zeroed, SP is 0xFD, only the I flag is set, the cycle
    /// counter restarts at 0, and PC is loaded from the reset vector. Any
    /// latched requests are dropped.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.cycles = 0;
        self.signals = PendingSignals::default();
        self.pc = read_word(&mut self.memory, self.config.reset_vector);
        tracing::debug!(pc = self.pc, "cpu reset");
    }

    /// Services the highest-priority pending interrupt, if any.
    ///
    /// Called by the dispatcher after every instruction.
    pub(crate) fn poll_interrupts(&mut self) -> Option<Interrupt> {
        if self.signals.reset {
            self.reset();
            return Some(Interrupt::Reset);
        }

        if self.signals.nmi {
            self.signals.nmi = false;
            self.enter_interrupt(self.config.nmi_vector);
            tracing::debug!(pc = self.pc, "nmi entry");
            return Some(Interrupt::Nmi);
        }

        if !self.flag_i && (self.signals.irq || self.memory.irq_active()) {
            self.signals.irq = false;
            self.enter_interrupt(self.config.irq_vector);
            tracing::debug!(pc = self.pc, "irq entry");
            return Some(Interrupt::Irq);
        }

        None
    }

    /// Hardware interrupt entry: return address, then status with B clear.
    fn enter_interrupt(&mut self, vector: u16) {
        let status = (self.status() & !FLAG_B) | FLAG_U;
        self.push_interrupt_frame(self.pc, status, vector);
        self.cycles += INTERRUPT_CYCLES;
    }

    /// Pushes `return_addr` and `status`, sets I, and loads PC from `vector`.
    ///
    /// Shared by hardware interrupts and BRK, which differ only in the
    /// pushed Break bit and the return address.
    pub(crate) fn push_interrupt_frame(&mut self, return_addr: u16, status: u8, vector: u16) {
        self.push_word(return_addr);
        self.push(status);
        self.flag_i = true;
        self.pc = read_word(&mut self.memory, vector);
    }
}
