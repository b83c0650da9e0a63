//! # Opcode Metadata Table
//!
//! The 256-entry table keyed by opcode byte is the single source of truth for
//! decoding. Each entry holds the mnemonic tag, addressing mode, base cycle
//! cost and instruction length; the dispatcher is one table lookup followed
//! by an exhaustive match over [`Mnemonic`].
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - Tagged [`Mnemonic::Illegal`], carrying the
//!   addressing mode, length and base cycles of their real encoding so they
//!   can be skipped over as multi-byte no-ops

use std::fmt;

use crate::addressing::AddressingMode;

/// Instruction mnemonic tag, one per documented 6502 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode.
    Illegal,
}

impl Mnemonic {
    /// Three-letter assembler name, `"???"` for undocumented opcodes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Illegal => "???",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use nmos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(lda_imm.official);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic tag.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page-crossing and branch-taken penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands), 1 to 3.
    pub size_bytes: u8,

    /// False for undocumented opcodes.
    pub official: bool,
}

const fn official(
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        official: true,
    }
}

const fn illegal(addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: Mnemonic::Illegal,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        official: false,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// ```
/// use nmos6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic.as_str(), "???");
/// assert!(!illegal.official);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    /* 0x00 */ official(Mnemonic::Brk, AddressingMode::Implicit, 7),
    /* 0x01 */ official(Mnemonic::Ora, AddressingMode::IndirectX, 6),
    /* 0x02 */ illegal(AddressingMode::Implicit, 2),
    /* 0x03 */ illegal(AddressingMode::IndirectX, 8),
    /* 0x04 */ illegal(AddressingMode::ZeroPage, 3),
    /* 0x05 */ official(Mnemonic::Ora, AddressingMode::ZeroPage, 3),
    /* 0x06 */ official(Mnemonic::Asl, AddressingMode::ZeroPage, 5),
    /* 0x07 */ illegal(AddressingMode::ZeroPage, 5),
    /* 0x08 */ official(Mnemonic::Php, AddressingMode::Implicit, 3),
    /* 0x09 */ official(Mnemonic::Ora, AddressingMode::Immediate, 2),
    /* 0x0A */ official(Mnemonic::Asl, AddressingMode::Accumulator, 2),
    /* 0x0B */ illegal(AddressingMode::Immediate, 2),
    /* 0x0C */ illegal(AddressingMode::Absolute, 4),
    /* 0x0D */ official(Mnemonic::Ora, AddressingMode::Absolute, 4),
    /* 0x0E */ official(Mnemonic::Asl, AddressingMode::Absolute, 6),
    /* 0x0F */ illegal(AddressingMode::Absolute, 6),
    /* 0x10 */ official(Mnemonic::Bpl, AddressingMode::Relative, 2),
    /* 0x11 */ official(Mnemonic::Ora, AddressingMode::IndirectY, 5),
    /* 0x12 */ illegal(AddressingMode::Implicit, 2),
    /* 0x13 */ illegal(AddressingMode::IndirectY, 8),
    /* 0x14 */ illegal(AddressingMode::ZeroPageX, 4),
    /* 0x15 */ official(Mnemonic::Ora, AddressingMode::ZeroPageX, 4),
    /* 0x16 */ official(Mnemonic::Asl, AddressingMode::ZeroPageX, 6),
    /* 0x17 */ illegal(AddressingMode::ZeroPageX, 6),
    /* 0x18 */ official(Mnemonic::Clc, AddressingMode::Implicit, 2),
    /* 0x19 */ official(Mnemonic::Ora, AddressingMode::AbsoluteY, 4),
    /* 0x1A */ illegal(AddressingMode::Implicit, 2),
    /* 0x1B */ illegal(AddressingMode::AbsoluteY, 7),
    /* 0x1C */ illegal(AddressingMode::AbsoluteX, 4),
    /* 0x1D */ official(Mnemonic::Ora, AddressingMode::AbsoluteX, 4),
    /* 0x1E */ official(Mnemonic::Asl, AddressingMode::AbsoluteX, 7),
    /* 0x1F */ illegal(AddressingMode::AbsoluteX, 7),
    /* 0x20 */ official(Mnemonic::Jsr, AddressingMode::Absolute, 6),
    /* 0x21 */ official(Mnemonic::And, AddressingMode::IndirectX, 6),
    /* 0x22 */ illegal(AddressingMode::Implicit, 2),
    /* 0x23 */ illegal(AddressingMode::IndirectX, 8),
    /* 0x24 */ official(Mnemonic::Bit, AddressingMode::ZeroPage, 3),
    /* 0x25 */ official(Mnemonic::And, AddressingMode::ZeroPage, 3),
    /* 0x26 */ official(Mnemonic::Rol, AddressingMode::ZeroPage, 5),
    /* 0x27 */ illegal(AddressingMode::ZeroPage, 5),
    /* 0x28 */ official(Mnemonic::Plp, AddressingMode::Implicit, 4),
    /* 0x29 */ official(Mnemonic::And, AddressingMode::Immediate, 2),
    /* 0x2A */ official(Mnemonic::Rol, AddressingMode::Accumulator, 2),
    /* 0x2B */ illegal(AddressingMode::Immediate, 2),
    /* 0x2C */ official(Mnemonic::Bit, AddressingMode::Absolute, 4),
    /* 0x2D */ official(Mnemonic::And, AddressingMode::Absolute, 4),
    /* 0x2E */ official(Mnemonic::Rol, AddressingMode::Absolute, 6),
    /* 0x2F */ illegal(AddressingMode::Absolute, 6),
    /* 0x30 */ official(Mnemonic::Bmi, AddressingMode::Relative, 2),
    /* 0x31 */ official(Mnemonic::And, AddressingMode::IndirectY, 5),
    /* 0x32 */ illegal(AddressingMode::Implicit, 2),
    /* 0x33 */ illegal(AddressingMode::IndirectY, 8),
    /* 0x34 */ illegal(AddressingMode::ZeroPageX, 4),
    /* 0x35 */ official(Mnemonic::And, AddressingMode::ZeroPageX, 4),
    /* 0x36 */ official(Mnemonic::Rol, AddressingMode::ZeroPageX, 6),
    /* 0x37 */ illegal(AddressingMode::ZeroPageX, 6),
    /* 0x38 */ official(Mnemonic::Sec, AddressingMode::Implicit, 2),
    /* 0x39 */ official(Mnemonic::And, AddressingMode::AbsoluteY, 4),
    /* 0x3A */ illegal(AddressingMode::Implicit, 2),
    /* 0x3B */ illegal(AddressingMode::AbsoluteY, 7),
    /* 0x3C */ illegal(AddressingMode::AbsoluteX, 4),
    /* 0x3D */ official(Mnemonic::And, AddressingMode::AbsoluteX, 4),
    /* 0x3E */ official(Mnemonic::Rol, AddressingMode::AbsoluteX, 7),
    /* 0x3F */ illegal(AddressingMode::AbsoluteX, 7),
    /* 0x40 */ official(Mnemonic::Rti, AddressingMode::Implicit, 6),
    /* 0x41 */ official(Mnemonic::Eor, AddressingMode::IndirectX, 6),
    /* 0x42 */ illegal(AddressingMode::Implicit, 2),
    /* 0x43 */ illegal(AddressingMode::IndirectX, 8),
    /* 0x44 */ illegal(AddressingMode::ZeroPage, 3),
    /* 0x45 */ official(Mnemonic::Eor, AddressingMode::ZeroPage, 3),
    /* 0x46 */ official(Mnemonic::Lsr, AddressingMode::ZeroPage, 5),
    /* 0x47 */ illegal(AddressingMode::ZeroPage, 5),
    /* 0x48 */ official(Mnemonic::Pha, AddressingMode::Implicit, 3),
    /* 0x49 */ official(Mnemonic::Eor, AddressingMode::Immediate, 2),
    /* 0x4A */ official(Mnemonic::Lsr, AddressingMode::Accumulator, 2),
    /* 0x4B */ illegal(AddressingMode::Immediate, 2),
    /* 0x4C */ official(Mnemonic::Jmp, AddressingMode::Absolute, 3),
    /* 0x4D */ official(Mnemonic::Eor, AddressingMode::Absolute, 4),
    /* 0x4E */ official(Mnemonic::Lsr, AddressingMode::Absolute, 6),
    /* 0x4F */ illegal(AddressingMode::Absolute, 6),
    /* 0x50 */ official(Mnemonic::Bvc, AddressingMode::Relative, 2),
    /* 0x51 */ official(Mnemonic::Eor, AddressingMode::IndirectY, 5),
    /* 0x52 */ illegal(AddressingMode::Implicit, 2),
    /* 0x53 */ illegal(AddressingMode::IndirectY, 8),
    /* 0x54 */ illegal(AddressingMode::ZeroPageX, 4),
    /* 0x55 */ official(Mnemonic::Eor, AddressingMode::ZeroPageX, 4),
    /* 0x56 */ official(Mnemonic::Lsr, AddressingMode::ZeroPageX, 6),
    /* 0x57 */ illegal(AddressingMode::ZeroPageX, 6),
    /* 0x58 */ official(Mnemonic::Cli, AddressingMode::Implicit, 2),
    /* 0x59 */ official(Mnemonic::Eor, AddressingMode::AbsoluteY, 4),
    /* 0x5A */ illegal(AddressingMode::Implicit, 2),
    /* 0x5B */ illegal(AddressingMode::AbsoluteY, 7),
    /* 0x5C */ illegal(AddressingMode::AbsoluteX, 4),
    /* 0x5D */ official(Mnemonic::Eor, AddressingMode::AbsoluteX, 4),
    /* 0x5E */ official(Mnemonic::Lsr, AddressingMode::AbsoluteX, 7),
    /* 0x5F */ illegal(AddressingMode::AbsoluteX, 7),
    /* 0x60 */ official(Mnemonic::Rts, AddressingMode::Implicit, 6),
    /* 0x61 */ official(Mnemonic::Adc, AddressingMode::IndirectX, 6),
    /* 0x62 */ illegal(AddressingMode::Implicit, 2),
    /* 0x63 */ illegal(AddressingMode::IndirectX, 8),
    /* 0x64 */ illegal(AddressingMode::ZeroPage, 3),
    /* 0x65 */ official(Mnemonic::Adc, AddressingMode::ZeroPage, 3),
    /* 0x66 */ official(Mnemonic::Ror, AddressingMode::ZeroPage, 5),
    /* 0x67 */ illegal(AddressingMode::ZeroPage, 5),
    /* 0x68 */ official(Mnemonic::Pla, AddressingMode::Implicit, 4),
    /* 0x69 */ official(Mnemonic::Adc, AddressingMode::Immediate, 2),
    /* 0x6A */ official(Mnemonic::Ror, AddressingMode::Accumulator, 2),
    /* 0x6B */ illegal(AddressingMode::Immediate, 2),
    /* 0x6C */ official(Mnemonic::Jmp, AddressingMode::Indirect, 5),
    /* 0x6D */ official(Mnemonic::Adc, AddressingMode::Absolute, 4),
    /* 0x6E */ official(Mnemonic::Ror, AddressingMode::Absolute, 6),
    /* 0x6F */ illegal(AddressingMode::Absolute, 6),
    /* 0x70 */ official(Mnemonic::Bvs, AddressingMode::Relative, 2),
    /* 0x71 */ official(Mnemonic::Adc, AddressingMode::IndirectY, 5),
    /* 0x72 */ illegal(AddressingMode::Implicit, 2),
    /* 0x73 */ illegal(AddressingMode::IndirectY, 8),
    /* 0x74 */ illegal(AddressingMode::ZeroPageX, 4),
    /* 0x75 */ official(Mnemonic::Adc, AddressingMode::ZeroPageX, 4),
    /* 0x76 */ official(Mnemonic::Ror, AddressingMode::ZeroPageX, 6),
    /* 0x77 */ illegal(AddressingMode::ZeroPageX, 6),
    /* 0x78 */ official(Mnemonic::Sei, AddressingMode::Implicit, 2),
    /* 0x79 */ official(Mnemonic::Adc, AddressingMode::AbsoluteY, 4),
    /* 0x7A */ illegal(AddressingMode::Implicit, 2),
    /* 0x7B */ illegal(AddressingMode::AbsoluteY, 7),
    /* 0x7C */ illegal(AddressingMode::AbsoluteX, 4),
    /* 0x7D */ official(Mnemonic::Adc, AddressingMode::AbsoluteX, 4),
    /* 0x7E */ official(Mnemonic::Ror, AddressingMode::AbsoluteX, 7),
    /* 0x7F */ illegal(AddressingMode::AbsoluteX, 7),
    /* 0x80 */ illegal(AddressingMode::Immediate, 2),
    /* 0x81 */ official(Mnemonic::Sta, AddressingMode::IndirectX, 6),
    /* 0x82 */ illegal(AddressingMode::Immediate, 2),
    /* 0x83 */ illegal(AddressingMode::IndirectX, 6),
    /* 0x84 */ official(Mnemonic::Sty, AddressingMode::ZeroPage, 3),
    /* 0x85 */ official(Mnemonic::Sta, AddressingMode::ZeroPage, 3),
    /* 0x86 */ official(Mnemonic::Stx, AddressingMode::ZeroPage, 3),
    /* 0x87 */ illegal(AddressingMode::ZeroPage, 3),
    /* 0x88 */ official(Mnemonic::Dey, AddressingMode::Implicit, 2),
    /* 0x89 */ illegal(AddressingMode::Immediate, 2),
    /* 0x8A */ official(Mnemonic::Txa, AddressingMode::Implicit, 2),
    /* 0x8B */ illegal(AddressingMode::Immediate, 2),
    /* 0x8C */ official(Mnemonic::Sty, AddressingMode::Absolute, 4),
    /* 0x8D */ official(Mnemonic::Sta, AddressingMode::Absolute, 4),
    /* 0x8E */ official(Mnemonic::Stx, AddressingMode::Absolute, 4),
    /* 0x8F */ illegal(AddressingMode::Absolute, 4),
    /* 0x90 */ official(Mnemonic::Bcc, AddressingMode::Relative, 2),
    /* 0x91 */ official(Mnemonic::Sta, AddressingMode::IndirectY, 6),
    /* 0x92 */ illegal(AddressingMode::Implicit, 2),
    /* 0x93 */ illegal(AddressingMode::IndirectY, 6),
    /* 0x94 */ official(Mnemonic::Sty, AddressingMode::ZeroPageX, 4),
    /* 0x95 */ official(Mnemonic::Sta, AddressingMode::ZeroPageX, 4),
    /* 0x96 */ official(Mnemonic::Stx, AddressingMode::ZeroPageY, 4),
    /* 0x97 */ illegal(AddressingMode::ZeroPageY, 4),
    /* 0x98 */ official(Mnemonic::Tya, AddressingMode::Implicit, 2),
    /* 0x99 */ official(Mnemonic::Sta, AddressingMode::AbsoluteY, 5),
    /* 0x9A */ official(Mnemonic::Txs, AddressingMode::Implicit, 2),
    /* 0x9B */ illegal(AddressingMode::AbsoluteY, 5),
    /* 0x9C */ illegal(AddressingMode::AbsoluteX, 5),
    /* 0x9D */ official(Mnemonic::Sta, AddressingMode::AbsoluteX, 5),
    /* 0x9E */ illegal(AddressingMode::AbsoluteY, 5),
    /* 0x9F */ illegal(AddressingMode::AbsoluteY, 5),
    /* 0xA0 */ official(Mnemonic::Ldy, AddressingMode::Immediate, 2),
    /* 0xA1 */ official(Mnemonic::Lda, AddressingMode::IndirectX, 6),
    /* 0xA2 */ official(Mnemonic::Ldx, AddressingMode::Immediate, 2),
    /* 0xA3 */ illegal(AddressingMode::IndirectX, 6),
    /* 0xA4 */ official(Mnemonic::Ldy, AddressingMode::ZeroPage, 3),
    /* 0xA5 */ official(Mnemonic::Lda, AddressingMode::ZeroPage, 3),
    /* 0xA6 */ official(Mnemonic::Ldx, AddressingMode::ZeroPage, 3),
    /* 0xA7 */ illegal(AddressingMode::ZeroPage, 3),
    /* 0xA8 */ official(Mnemonic::Tay, AddressingMode::Implicit, 2),
    /* 0xA9 */ official(Mnemonic::Lda, AddressingMode::Immediate, 2),
    /* 0xAA */ official(Mnemonic::Tax, AddressingMode::Implicit, 2),
    /* 0xAB */ illegal(AddressingMode::Immediate, 2),
    /* 0xAC */ official(Mnemonic::Ldy, AddressingMode::Absolute, 4),
    /* 0xAD */ official(Mnemonic::Lda, AddressingMode::Absolute, 4),
    /* 0xAE */ official(Mnemonic::Ldx, AddressingMode::Absolute, 4),
    /* 0xAF */ illegal(AddressingMode::Absolute, 4),
    /* 0xB0 */ official(Mnemonic::Bcs, AddressingMode::Relative, 2),
    /* 0xB1 */ official(Mnemonic::Lda, AddressingMode::IndirectY, 5),
    /* 0xB2 */ illegal(AddressingMode::Implicit, 2),
    /* 0xB3 */ illegal(AddressingMode::IndirectY, 5),
    /* 0xB4 */ official(Mnemonic::Ldy, AddressingMode::ZeroPageX, 4),
    /* 0xB5 */ official(Mnemonic::Lda, AddressingMode::ZeroPageX, 4),
    /* 0xB6 */ official(Mnemonic::Ldx, AddressingMode::ZeroPageY, 4),
    /* 0xB7 */ illegal(AddressingMode::ZeroPageY, 4),
    /* 0xB8 */ official(Mnemonic::Clv, AddressingMode::Implicit, 2),
    /* 0xB9 */ official(Mnemonic::Lda, AddressingMode::AbsoluteY, 4),
    /* 0xBA */ official(Mnemonic::Tsx, AddressingMode::Implicit, 2),
    /* 0xBB */ illegal(AddressingMode::AbsoluteY, 4),
    /* 0xBC */ official(Mnemonic::Ldy, AddressingMode::AbsoluteX, 4),
    /* 0xBD */ official(Mnemonic::Lda, AddressingMode::AbsoluteX, 4),
    /* 0xBE */ official(Mnemonic::Ldx, AddressingMode::AbsoluteY, 4),
    /* 0xBF */ illegal(AddressingMode::AbsoluteY, 4),
    /* 0xC0 */ official(Mnemonic::Cpy, AddressingMode::Immediate, 2),
    /* 0xC1 */ official(Mnemonic::Cmp, AddressingMode::IndirectX, 6),
    /* 0xC2 */ illegal(AddressingMode::Immediate, 2),
    /* 0xC3 */ illegal(AddressingMode::IndirectX, 8),
    /* 0xC4 */ official(Mnemonic::Cpy, AddressingMode::ZeroPage, 3),
    /* 0xC5 */ official(Mnemonic::Cmp, AddressingMode::ZeroPage, 3),
    /* 0xC6 */ official(Mnemonic::Dec, AddressingMode::ZeroPage, 5),
    /* 0xC7 */ illegal(AddressingMode::ZeroPage, 5),
    /* 0xC8 */ official(Mnemonic::Iny, AddressingMode::Implicit, 2),
    /* 0xC9 */ official(Mnemonic::Cmp, AddressingMode::Immediate, 2),
    /* 0xCA */ official(Mnemonic::Dex, AddressingMode::Implicit, 2),
    /* 0xCB */ illegal(AddressingMode::Immediate, 2),
    /* 0xCC */ official(Mnemonic::Cpy, AddressingMode::Absolute, 4),
    /* 0xCD */ official(Mnemonic::Cmp, AddressingMode::Absolute, 4),
    /* 0xCE */ official(Mnemonic::Dec, AddressingMode::Absolute, 6),
    /* 0xCF */ illegal(AddressingMode::Absolute, 6),
    /* 0xD0 */ official(Mnemonic::Bne, AddressingMode::Relative, 2),
    /* 0xD1 */ official(Mnemonic::Cmp, AddressingMode::IndirectY, 5),
    /* 0xD2 */ illegal(AddressingMode::Implicit, 2),
    /* 0xD3 */ illegal(AddressingMode::IndirectY, 8),
    /* 0xD4 */ illegal(AddressingMode::ZeroPageX, 4),
    /* 0xD5 */ official(Mnemonic::Cmp, AddressingMode::ZeroPageX, 4),
    /* 0xD6 */ official(Mnemonic::Dec, AddressingMode::ZeroPageX, 6),
    /* 0xD7 */ illegal(AddressingMode::ZeroPageX, 6),
    /* 0xD8 */ official(Mnemonic::Cld, AddressingMode::Implicit, 2),
    /* 0xD9 */ official(Mnemonic::Cmp, AddressingMode::AbsoluteY, 4),
    /* 0xDA */ illegal(AddressingMode::Implicit, 2),
    /* 0xDB */ illegal(AddressingMode::AbsoluteY, 7),
    /* 0xDC */ illegal(AddressingMode::AbsoluteX, 4),
    /* 0xDD */ official(Mnemonic::Cmp, AddressingMode::AbsoluteX, 4),
    /* 0xDE */ official(Mnemonic::Dec, AddressingMode::AbsoluteX, 7),
    /* 0xDF */ illegal(AddressingMode::AbsoluteX, 7),
    /* 0xE0 */ official(Mnemonic::Cpx, AddressingMode::Immediate, 2),
    /* 0xE1 */ official(Mnemonic::Sbc, AddressingMode::IndirectX, 6),
    /* 0xE2 */ illegal(AddressingMode::Immediate, 2),
    /* 0xE3 */ illegal(AddressingMode::IndirectX, 8),
    /* 0xE4 */ official(Mnemonic::Cpx, AddressingMode::ZeroPage, 3),
    /* 0xE5 */ official(Mnemonic::Sbc, AddressingMode::ZeroPage, 3),
    /* 0xE6 */ official(Mnemonic::Inc, AddressingMode::ZeroPage, 5),
    /* 0xE7 */ illegal(AddressingMode::ZeroPage, 5),
    /* 0xE8 */ official(Mnemonic::Inx, AddressingMode::Implicit, 2),
    /* 0xE9 */ official(Mnemonic::Sbc, AddressingMode::Immediate, 2),
    /* 0xEA */ official(Mnemonic::Nop, AddressingMode::Implicit, 2),
    /* 0xEB */ illegal(AddressingMode::Immediate, 2),
    /* 0xEC */ official(Mnemonic::Cpx, AddressingMode::Absolute, 4),
    /* 0xED */ official(Mnemonic::Sbc, AddressingMode::Absolute, 4),
    /* 0xEE */ official(Mnemonic::Inc, AddressingMode::Absolute, 6),
    /* 0xEF */ illegal(AddressingMode::Absolute, 6),
    /* 0xF0 */ official(Mnemonic::Beq, AddressingMode::Relative, 2),
    /* 0xF1 */ official(Mnemonic::Sbc, AddressingMode::IndirectY, 5),
    /* 0xF2 */ illegal(AddressingMode::Implicit, 2),
    /* 0xF3 */ illegal(AddressingMode::IndirectY, 8),
    /* 0xF4 */ illegal(AddressingMode::ZeroPageX, 4),
    /* 0xF5 */ official(Mnemonic::Sbc, AddressingMode::ZeroPageX, 4),
    /* 0xF6 */ official(Mnemonic::Inc, AddressingMode::ZeroPageX, 6),
    /* 0xF7 */ illegal(AddressingMode::ZeroPageX, 6),
    /* 0xF8 */ official(Mnemonic::Sed, AddressingMode::Implicit, 2),
    /* 0xF9 */ official(Mnemonic::Sbc, AddressingMode::AbsoluteY, 4),
    /* 0xFA */ illegal(AddressingMode::Implicit, 2),
    /* 0xFB */ illegal(AddressingMode::AbsoluteY, 7),
    /* 0xFC */ illegal(AddressingMode::AbsoluteX, 4),
    /* 0xFD */ official(Mnemonic::Sbc, AddressingMode::AbsoluteX, 4),
    /* 0xFE */ official(Mnemonic::Inc, AddressingMode::AbsoluteX, 7),
    /* 0xFF */ illegal(AddressingMode::AbsoluteX, 7),
];

/// Looks up the metadata for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    static TABLE: [OpcodeMetadata; 256] = OPCODE_TABLE;
    &TABLE[opcode as usize]
}
