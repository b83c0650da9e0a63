//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns an instruction's operand bytes into either an
//! immediate value or an effective address.
//!
//! ## Quirks reproduced
//!
//! - Zero page indexed modes wrap within page zero and never carry into page 1
//! - Pointer fetches for `(zp,X)` and `(zp),Y` wrap within page zero
//! - `JMP ($xxFF)` fetches the high byte from `$xx00` (page-wrap bug)
//! - Absolute indexed and `(zp),Y` accesses that cross a page perform a dummy
//!   read at the partially-corrected address before the real access

use crate::memory::MemoryBus;
use crate::CPU;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X. May incur +1 cycle if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y. May incur +1 cycle if a page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y. May incur +1 cycle if a page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implicit instructions).
    None,
    /// The accumulator itself is the operand.
    Accumulator,
    /// Constant byte from the instruction stream.
    Immediate(u8),
    /// Effective address, with whether indexing crossed a page.
    Address { addr: u16, page_crossed: bool },
    /// Branch target (PC after the instruction plus the signed offset).
    Branch { target: u16, page_crossed: bool },
}

/// Returns true when `a` and `b` lie in different 256-byte pages.
#[inline]
pub(crate) fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` for the instruction at the current PC.
    ///
    /// Operand bytes are fetched from PC+1 and PC+2. Indirection and dummy
    /// reads go through the memory bus, so peripherals observe them.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.operand_byte()),
            AddressingMode::ZeroPage => Operand::Address {
                addr: self.operand_byte() as u16,
                page_crossed: false,
            },
            AddressingMode::ZeroPageX => Operand::Address {
                addr: self.operand_byte().wrapping_add(self.x) as u16,
                page_crossed: false,
            },
            AddressingMode::ZeroPageY => Operand::Address {
                addr: self.operand_byte().wrapping_add(self.y) as u16,
                page_crossed: false,
            },
            AddressingMode::Relative => {
                let offset = self.operand_byte() as i8;
                let next = self.pc.wrapping_add(2);
                let target = next.wrapping_add_signed(offset as i16);
                Operand::Branch {
                    target,
                    page_crossed: crosses_page(next, target),
                }
            }
            AddressingMode::Absolute => Operand::Address {
                addr: self.operand_word(),
                page_crossed: false,
            },
            AddressingMode::AbsoluteX => {
                let base = self.operand_word();
                self.indexed(base, self.x)
            }
            AddressingMode::AbsoluteY => {
                let base = self.operand_word();
                self.indexed(base, self.y)
            }
            AddressingMode::Indirect => {
                let ptr = self.operand_word();
                let lo = self.memory.read(ptr) as u16;
                // High byte never leaves the pointer's page
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read(hi_addr) as u16;
                Operand::Address {
                    addr: (hi << 8) | lo,
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectX => {
                let zp = self.operand_byte().wrapping_add(self.x);
                Operand::Address {
                    addr: self.zero_page_pointer(zp),
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectY => {
                let zp = self.operand_byte();
                let base = self.zero_page_pointer(zp);
                self.indexed(base, self.y)
            }
        }
    }

    /// Reads the operand value for a read-type instruction.
    ///
    /// Returns `(value, page_crossed)`. Immediate operands come from the
    /// instruction stream and the accumulator mode yields A.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> (u8, bool) {
        match self.resolve_operand(mode) {
            Operand::Immediate(value) => (value, false),
            Operand::Accumulator => (self.a, false),
            Operand::Address { addr, page_crossed } => (self.memory.read(addr), page_crossed),
            Operand::None | Operand::Branch { .. } => (0, false),
        }
    }

    /// Computes the effective address for a store or read-modify-write.
    ///
    /// Modes without an address (implicit, accumulator, immediate) resolve to
    /// the operand byte's own location so a misrouted opcode never panics.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode) -> u16 {
        match self.resolve_operand(mode) {
            Operand::Address { addr, .. } => addr,
            Operand::Branch { target, .. } => target,
            Operand::None | Operand::Accumulator | Operand::Immediate(_) => self.pc.wrapping_add(1),
        }
    }

    fn operand_byte(&mut self) -> u8 {
        self.memory.read(self.pc.wrapping_add(1))
    }

    fn operand_word(&mut self) -> u16 {
        let lo = self.memory.read(self.pc.wrapping_add(1)) as u16;
        let hi = self.memory.read(self.pc.wrapping_add(2)) as u16;
        (hi << 8) | lo
    }

    /// Fetches a 16-bit pointer from zero page, wrapping 0xFF -> 0x00.
    fn zero_page_pointer(&mut self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Adds an index register to a 16-bit base with full-width wraparound.
    ///
    /// On a page crossing the bus sees a dummy read at the address whose low
    /// byte has been corrected but whose high byte has not.
    fn indexed(&mut self, base: u16, index: u8) -> Operand {
        let addr = base.wrapping_add(index as u16);
        let page_crossed = crosses_page(base, addr);
        if page_crossed {
            let uncorrected = (base & 0xFF00) | (addr & 0x00FF);
            self.memory.read(uncorrected);
        }
        Operand::Address { addr, page_crossed }
    }
}
