//! Read-only CPU state copies for observers.
//!
//! Trace printers, UI refresh loops and save-state code never borrow the live
//! CPU; they receive a [`CpuSnapshot`] by value.

use serde::{Deserialize, Serialize};

use crate::cpu::{FLAG_B, FLAG_C, FLAG_D, FLAG_I, FLAG_N, FLAG_U, FLAG_V, FLAG_Z};

/// Register, flag and cycle state at an instruction boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuSnapshot {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    /// Packed status byte (NV-BDIZC), bit 5 always set.
    pub status: u8,
    pub cycles: u64,
}

impl CpuSnapshot {
    pub fn flag_n(&self) -> bool {
        self.status & FLAG_N != 0
    }

    pub fn flag_v(&self) -> bool {
        self.status & FLAG_V != 0
    }

    pub fn flag_b(&self) -> bool {
        self.status & FLAG_B != 0
    }

    pub fn flag_d(&self) -> bool {
        self.status & FLAG_D != 0
    }

    pub fn flag_i(&self) -> bool {
        self.status & FLAG_I != 0
    }

    pub fn flag_z(&self) -> bool {
        self.status & FLAG_Z != 0
    }

    pub fn flag_c(&self) -> bool {
        self.status & FLAG_C != 0
    }

    /// Full stack address SP points at.
    pub fn stack_address(&self) -> u16 {
        crate::stack::STACK_BASE | self.sp as u16
    }

    /// True if the unused status bit is set, which it always is.
    pub fn unused_bit(&self) -> bool {
        self.status & FLAG_U != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_accessors() {
        let snapshot = CpuSnapshot {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0x8000,
            status: 0b1010_0101,
            cycles: 0,
        };
        assert!(snapshot.flag_n());
        assert!(!snapshot.flag_v());
        assert!(snapshot.unused_bit());
        assert!(!snapshot.flag_b());
        assert!(!snapshot.flag_d());
        assert!(snapshot.flag_i());
        assert!(!snapshot.flag_z());
        assert!(snapshot.flag_c());
        assert_eq!(snapshot.stack_address(), 0x01FD);
    }

    #[test]
    fn test_serializes_to_json() {
        let snapshot = CpuSnapshot {
            a: 0x10,
            x: 0x20,
            y: 0x30,
            sp: 0xFF,
            pc: 0x1234,
            status: 0x24,
            cycles: 99,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: CpuSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
