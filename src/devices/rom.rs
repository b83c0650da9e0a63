//! ROM device implementation.
//!
//! Provides a read-only window via the Device trait.

use super::{Device, DeviceError};

/// Read-only memory device.
///
/// Writes are silently ignored, matching typical ROM hardware behavior.
/// Mapping a ROM over the vector area is the usual way to pin the reset,
/// IRQ and NMI vectors of a test system.
///
/// # Examples
///
/// ```rust
/// use nmos6502::{RomDevice, Device};
///
/// let mut rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]).unwrap();
///
/// assert_eq!(rom.peek(0), 0xEA);
///
/// rom.write(0, 0xFF);
/// assert_eq!(rom.peek(0), 0xEA);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// Creates a ROM window holding `data`.
    ///
    /// A window's size is a `u16`, so an image can hold at most 65535 bytes.
    /// Longer images are rejected with [`DeviceError::ImageTooLarge`] rather
    /// than losing their last bytes, which usually hold the vectors.
    pub fn new(data: Vec<u8>) -> Result<Self, DeviceError> {
        if data.len() > u16::MAX as usize {
            return Err(DeviceError::ImageTooLarge { len: data.len() });
        }
        Ok(Self { data })
    }
}

impl Device for RomDevice {
    fn peek(&self, offset: u16) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, _offset: u16, _value: u8) {
        // Writes to ROM are ignored
    }

    fn size(&self) -> u16 {
        self.data.len() as u16
    }
}
