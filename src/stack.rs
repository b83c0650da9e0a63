//! # Stack Machine
//!
//! The 6502 stack is the fixed page 0x0100-0x01FF and grows downward. The
//! stack pointer is an 8-bit offset into that page: a push writes at
//! `0x0100 | SP` then decrements SP, a pull increments SP then reads. SP wraps
//! 0x00 <-> 0xFF silently; there is no overflow or underflow detection.

use crate::memory::MemoryBus;
use crate::CPU;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

impl<M: MemoryBus> CPU<M> {
    /// Pushes one byte and decrements SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP and pulls one byte.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a 16-bit word high byte first, so it sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a 16-bit word low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    /// Bytes currently on the stack, from the most recently pushed (SP+1)
    /// up to 0x01FF. Read with `peek`, so devices are not disturbed.
    pub fn stack_contents(&self) -> Vec<u8> {
        (self.sp as u16 + 1..=0xFF)
            .map(|offset| self.memory.peek(STACK_BASE | offset))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        CPU::new(memory)
    }

    #[test]
    fn test_push_pull_round_trip() {
        let mut cpu = setup_cpu();
        cpu.push(0x42);
        assert_eq!(cpu.sp(), 0xFC);
        assert_eq!(cpu.memory().peek(0x01FD), 0x42);
        assert_eq!(cpu.pull(), 0x42);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_push_wraps_sp() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);
        cpu.push(0x11);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().peek(0x0100), 0x11);
    }

    #[test]
    fn test_pull_wraps_sp() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0xFF);
        cpu.memory_mut().write(0x0100, 0x77);
        assert_eq!(cpu.pull(), 0x77);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_word_order() {
        let mut cpu = setup_cpu();
        cpu.push_word(0xABCD);
        assert_eq!(cpu.memory().peek(0x01FD), 0xAB);
        assert_eq!(cpu.memory().peek(0x01FC), 0xCD);
        assert_eq!(cpu.pull_word(), 0xABCD);
    }

    #[test]
    fn test_stack_contents() {
        let mut cpu = setup_cpu();
        assert_eq!(cpu.stack_contents().len(), 2); // 0x01FE, 0x01FF
        cpu.push(0x01);
        cpu.push(0x02);
        let contents = cpu.stack_contents();
        assert_eq!(&contents[..2], &[0x02, 0x01]);

        cpu.set_sp(0xFF);
        assert!(cpu.stack_contents().is_empty());
    }
}
