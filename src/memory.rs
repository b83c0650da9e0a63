//! # Memory Bus Abstraction
//!
//! Every byte the CPU touches goes through the `MemoryBus` trait. Plain RAM
//! implementations simply index an array; memory-mapped systems (see
//! [`crate::devices::MappedMemory`]) intercept specific address windows and
//! route them to peripheral handlers.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - All addresses are 16-bit and wrap modulo 65536
//! - Reads may have side effects on I/O registers, so the CPU's bus read
//!   takes `&mut self`; observers use the side-effect-free `peek`

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `peek(&self)`: side-effect-free view, used by debuggers and snapshots
/// - `read(&mut self)`: the CPU's bus read; defaults to `peek`, but devices
///   behind the bus may react to it (status registers that clear on read)
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use nmos6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// assert_eq!(mem.peek(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nmos6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn peek(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Returns the byte at `addr` without triggering any device side effect.
    ///
    /// This method must never panic.
    fn peek(&self, addr: u16) -> u8;

    /// Reads a byte from the specified 16-bit address on behalf of the CPU.
    ///
    /// Every operand fetch, pointer fetch, stack pull and dummy read goes
    /// through here. The default forwards to [`MemoryBus::peek`].
    fn read(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only,
    /// implementations may ignore the write (matching 6502 hardware behavior).
    fn write(&mut self, addr: u16, value: u8);

    /// Checks if the IRQ (Interrupt Request) line is active.
    ///
    /// The IRQ line on the 6502 is **level-sensitive** and **shared** among
    /// all devices: it stays asserted until every device has been
    /// acknowledged. The CPU samples it after each instruction, in addition
    /// to its own latched IRQ request.
    ///
    /// Returns `false` by default (no interrupt-capable devices).
    ///
    /// ```
    /// use nmos6502::{MemoryBus, FlatMemory};
    ///
    /// let mem = FlatMemory::new();
    /// assert!(!mem.irq_active());
    /// ```
    fn irq_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to a single contiguous RAM array
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.load(0x8000, &[0xEA]); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `base`.
    ///
    /// Addresses wrap modulo 65536, so a load that runs past 0xFFFF
    /// continues at 0x0000.
    ///
    /// ```
    /// use nmos6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFF, &[0x11, 0x22]);
    /// assert_eq!(mem.peek(0xFFFF), 0x11);
    /// assert_eq!(mem.peek(0x0000), 0x22);
    /// ```
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        let mut addr = base;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the whole 64KB image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Reads a little-endian 16-bit word through the bus.
///
/// The high byte comes from `addr + 1` with full 16-bit wraparound.
pub(crate) fn read_word<M: MemoryBus>(memory: &mut M, addr: u16) -> u16 {
    let lo = memory.read(addr) as u16;
    let hi = memory.read(addr.wrapping_add(1)) as u16;
    (hi << 8) | lo
}
