//! Memory-mapped device support.
//!
//! A 6502 system is a flat 64KB address space in which a handful of windows
//! belong to peripheral chips. [`MappedMemory`] models exactly that: a plain
//! 64KB RAM array with device windows layered on top. Accesses that fall
//! inside a registered window are routed to the device (with an offset
//! relative to the window base); everything else falls through to the array.
//!
//! # Example
//!
//! ```rust
//! use nmos6502::{CPU, MappedMemory, MemoryBus, RomDevice};
//!
//! let mut memory = MappedMemory::new();
//!
//! // 16KB ROM at 0xC000-0xFFFF containing the reset vector
//! let mut rom = vec![0xEA; 0x4000];
//! rom[0x3FFC] = 0x00;
//! rom[0x3FFD] = 0xC0;
//! memory.add_device(0xC000, Box::new(RomDevice::new(rom).unwrap())).unwrap();
//!
//! let cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0xC000);
//! ```

use thiserror::Error;

use crate::MemoryBus;

pub mod interrupts;
pub mod rom;

pub use interrupts::InterruptDevice;
pub use rom::RomDevice;

/// Abstract interface for memory-mapped hardware devices.
///
/// The memory mapper calls these methods with offset-based addressing
/// (0 to size-1) so a device is independent of where it is mapped.
///
/// # Examples
///
/// ```rust
/// use nmos6502::Device;
///
/// /// A latch that counts how many times it has been read.
/// struct ReadCounter {
///     reads: u8,
/// }
///
/// impl Device for ReadCounter {
///     fn peek(&self, _offset: u16) -> u8 {
///         self.reads
///     }
///
///     fn read(&mut self, offset: u16) -> u8 {
///         let value = self.peek(offset);
///         self.reads = self.reads.wrapping_add(1);
///         value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.reads = value;
///     }
///
///     fn size(&self) -> u16 {
///         1
///     }
/// }
/// ```
pub trait Device {
    /// Side-effect-free view of the register at `offset`.
    fn peek(&self, offset: u16) -> u8;

    /// Bus read of the register at `offset`. May mutate device state.
    fn read(&mut self, offset: u16) -> u8 {
        self.peek(offset)
    }

    /// Write byte to device at offset relative to device base address.
    fn write(&mut self, offset: u16, value: u8);

    /// Size of the device's address window in bytes.
    fn size(&self) -> u16;

    /// Returns the device's interrupt interface if it can assert IRQ.
    fn as_interrupt_device(&self) -> Option<&dyn InterruptDevice> {
        None
    }
}

/// Internal mapping of a device to a base address.
struct DeviceMapping {
    base_addr: u16,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    /// Offset of `addr` inside this window, if it falls in it.
    fn offset_of(&self, addr: u16) -> Option<u16> {
        let (end_addr, overflow) = self.base_addr.overflowing_add(self.device.size());

        // On overflow the window extends to 0xFFFF inclusive
        let in_range = if overflow {
            addr >= self.base_addr
        } else {
            addr >= self.base_addr && addr < end_addr
        };

        in_range.then(|| addr - self.base_addr)
    }
}

/// Error returned when device registration fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// Address range overlaps with an existing device.
    #[error(
        "device window 0x{new_base:04X}+{new_size} overlaps existing device at 0x{existing_base:04X}+{existing_size}"
    )]
    Overlap {
        /// Base address of the new device
        new_base: u16,
        /// Size of the new device
        new_size: u16,
        /// Base address of the conflicting existing device
        existing_base: u16,
        /// Size of the conflicting existing device
        existing_size: u16,
    },

    /// A ROM image does not fit in a device window.
    #[error("ROM image of {len} bytes exceeds the 65535-byte window limit")]
    ImageTooLarge { len: usize },
}

/// 64KB RAM with device windows layered over it.
///
/// # Address Routing
///
/// 1. Iterate through registered devices
/// 2. If the address falls within a device window, call the device with
///    `addr - base_addr`
/// 3. Otherwise access the backing RAM array
///
/// ```rust
/// use nmos6502::{MappedMemory, MemoryBus, RomDevice};
///
/// let mut memory = MappedMemory::new();
/// memory.add_device(0xD000, Box::new(RomDevice::new(vec![0x55; 16]).unwrap())).unwrap();
///
/// memory.write(0x1234, 0x42);
/// assert_eq!(memory.read(0x1234), 0x42); // plain RAM
///
/// memory.write(0xD000, 0x00);
/// assert_eq!(memory.read(0xD000), 0x55); // ROM window ignores writes
/// ```
pub struct MappedMemory {
    ram: Box<[u8; 65536]>,
    devices: Vec<DeviceMapping>,
}

impl MappedMemory {
    /// Creates a mapper with zeroed RAM and no devices.
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 65536]),
            devices: Vec::new(),
        }
    }

    /// Register a device at the specified base address.
    ///
    /// The device occupies `base_addr` to `base_addr + device.size() - 1`.
    /// Registration fails if that window overlaps any existing device.
    ///
    /// ```rust
    /// use nmos6502::{MappedMemory, RomDevice};
    ///
    /// let mut memory = MappedMemory::new();
    /// memory.add_device(0xC000, Box::new(RomDevice::new(vec![0; 0x1000]).unwrap())).unwrap();
    ///
    /// let result = memory.add_device(0xC800, Box::new(RomDevice::new(vec![0; 16]).unwrap()));
    /// assert!(result.is_err());
    /// ```
    pub fn add_device(
        &mut self,
        base_addr: u16,
        device: Box<dyn Device>,
    ) -> Result<(), DeviceError> {
        let new_size = device.size();
        let new_end = base_addr as u32 + new_size as u32;

        for mapping in &self.devices {
            let existing_size = mapping.device.size();
            let existing_end = mapping.base_addr as u32 + existing_size as u32;

            // Half-open ranges [base, end) overlap iff each starts before the other ends
            if (base_addr as u32) < existing_end && new_end > mapping.base_addr as u32 {
                return Err(DeviceError::Overlap {
                    new_base: base_addr,
                    new_size,
                    existing_base: mapping.base_addr,
                    existing_size,
                });
            }
        }

        tracing::debug!(base = base_addr, size = new_size, "device mapped");
        self.devices.push(DeviceMapping { base_addr, device });
        Ok(())
    }

    /// Copies `bytes` into the backing RAM starting at `base`, bypassing
    /// device windows. Addresses wrap modulo 65536.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        let mut addr = base;
        for &byte in bytes {
            self.ram[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    fn find_device(&mut self, addr: u16) -> Option<(&mut (dyn Device + 'static), u16)> {
        self.devices.iter_mut().find_map(|mapping| {
            mapping
                .offset_of(addr)
                .map(|offset| (mapping.device.as_mut(), offset))
        })
    }

    fn find_device_immut(&self, addr: u16) -> Option<(&dyn Device, u16)> {
        self.devices.iter().find_map(|mapping| {
            mapping
                .offset_of(addr)
                .map(|offset| (mapping.device.as_ref(), offset))
        })
    }
}

impl Default for MappedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MappedMemory {
    fn peek(&self, addr: u16) -> u8 {
        match self.find_device_immut(addr) {
            Some((device, offset)) => device.peek(offset),
            None => self.ram[addr as usize],
        }
    }

    fn read(&mut self, addr: u16) -> u8 {
        match self.find_device(addr) {
            Some((device, offset)) => device.read(offset),
            None => self.ram[addr as usize],
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match self.find_device(addr) {
            Some((device, offset)) => device.write(offset, value),
            None => self.ram[addr as usize] = value,
        }
    }

    fn irq_active(&self) -> bool {
        self.devices.iter().any(|mapping| {
            mapping
                .device
                .as_interrupt_device()
                .is_some_and(|device| device.has_interrupt())
        })
    }
}
