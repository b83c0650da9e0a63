//! Interrupt support for memory-mapped devices.
//!
//! The 6502 has a single active-low IRQ line shared among all devices. The
//! line is level-sensitive: it stays asserted while ANY device has an
//! unacknowledged request, and the interrupt service routine clears each
//! source by touching that device's registers before returning via RTI.
//!
//! [`crate::MappedMemory`] ORs together every registered device that exposes
//! this trait (through [`crate::Device::as_interrupt_device`]) and reports
//! the result through [`crate::MemoryBus::irq_active`], which the CPU samples
//! after each instruction.
//!
//! # Example
//!
//! ```rust
//! use nmos6502::{Device, InterruptDevice};
//!
//! struct Timer {
//!     interrupt_pending: bool,
//! }
//!
//! impl InterruptDevice for Timer {
//!     fn has_interrupt(&self) -> bool {
//!         self.interrupt_pending
//!     }
//! }
//!
//! impl Device for Timer {
//!     fn peek(&self, _offset: u16) -> u8 {
//!         if self.interrupt_pending { 0x80 } else { 0x00 }
//!     }
//!
//!     fn write(&mut self, _offset: u16, value: u8) {
//!         // Writing bit 7 acknowledges the interrupt
//!         if value & 0x80 != 0 {
//!             self.interrupt_pending = false;
//!         }
//!     }
//!
//!     fn size(&self) -> u16 {
//!         1
//!     }
//!
//!     fn as_interrupt_device(&self) -> Option<&dyn InterruptDevice> {
//!         Some(self)
//!     }
//! }
//! ```

/// Trait for devices that can signal interrupt requests to the CPU.
///
/// # Contract
///
/// - returns `true` while the device has an unacknowledged request
/// - never modifies device state (it is polled after every instruction)
pub trait InterruptDevice {
    /// Check if device has a pending interrupt request.
    fn has_interrupt(&self) -> bool;
}
