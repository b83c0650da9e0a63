//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! Execution is instruction-atomic. Every entry point below runs whole
//! instructions and samples interrupt signals after each one:
//! - `step()`: Execute one instruction
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted
//! - `run_instructions()`: Execute a fixed number of instructions
//! - `run()`: Execute until a hook or a [`StopHandle`] ends the run

use crate::config::{CpuConfig, IllegalOpcodePolicy};
use crate::hooks::{ExecutionHook, HookAction, StopHandle, StopReason};
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::interrupts::PendingSignals;
use crate::memory::read_word;
use crate::opcodes::{lookup, Mnemonic, OpcodeMetadata};
use crate::snapshot::CpuSnapshot;
use crate::timing::Throttle;
use crate::{ExecutionError, MemoryBus};

/// Negative flag mask.
pub const FLAG_N: u8 = 0b1000_0000;
/// Overflow flag mask.
pub const FLAG_V: u8 = 0b0100_0000;
/// Unused bit, always reads as 1.
pub const FLAG_U: u8 = 0b0010_0000;
/// Break bit. Only meaningful in status bytes pushed to the stack.
pub const FLAG_B: u8 = 0b0001_0000;
/// Decimal mode flag mask.
pub const FLAG_D: u8 = 0b0000_1000;
/// Interrupt disable flag mask.
pub const FLAG_I: u8 = 0b0000_0100;
/// Zero flag mask.
pub const FLAG_Z: u8 = 0b0000_0010;
/// Carry flag mask.
pub const FLAG_C: u8 = 0b0000_0001;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, and cycle counter. It is generic over the memory implementation via the
/// `MemoryBus` trait and owns its bus exclusively.
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) flag_n: bool,
    pub(crate) flag_v: bool,

    /// Break flag. Never changed by execution; PLP and RTI leave it alone.
    pub(crate) flag_b: bool,

    pub(crate) flag_d: bool,
    pub(crate) flag_i: bool,
    pub(crate) flag_z: bool,
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed since the last reset
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    pub(crate) config: CpuConfig,
    pub(crate) signals: PendingSignals,
    stop: StopHandle,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and the default configuration.
    ///
    /// The CPU is initialized to the 6502 power-on reset state:
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - Stack pointer (SP) is set to 0xFD
    /// - Status register has Interrupt Disable flag set (I = true)
    /// - All other registers (A, X, Y) are zeroed
    /// - Cycle counter is reset to 0
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU using `config` for vector locations and opcode policy.
    ///
    /// ```
    /// use nmos6502::{CpuConfig, CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0400, 0x00);
    /// mem.write(0x0401, 0xC0);
    ///
    /// let config = CpuConfig { reset_vector: 0x0400, ..CpuConfig::default() };
    /// let cpu = CPU::with_config(mem, config);
    /// assert_eq!(cpu.pc(), 0xC000);
    /// ```
    pub fn with_config(mut memory: M, config: CpuConfig) -> Self {
        let pc = read_word(&mut memory, config.reset_vector);
        tracing::debug!(pc, reset_vector = config.reset_vector, "cpu created");

        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            memory,
            config,
            signals: PendingSignals::default(),
            stop: StopHandle::new(),
        }
    }

    /// Executes one instruction, then services any pending interrupt.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up instruction metadata in opcode table
    /// 3. Execute, charging base cycles plus any page-cross or branch penalty
    /// 4. Poll reset, NMI and IRQ in that order
    ///
    /// Undocumented opcodes always retire as NOPs of their real length. Under
    /// [`IllegalOpcodePolicy::Error`] the step then reports
    /// [`ExecutionError::IllegalOpcode`]; the CPU is left in a consistent state
    /// and may be stepped again.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP instruction
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let pc = self.pc;
        let opcode = self.memory.read(pc);
        let metadata = lookup(opcode);

        tracing::trace!(
            pc = format_args!("{:04X}", pc),
            opcode = format_args!("{:02X}", opcode),
            mnemonic = %metadata.mnemonic,
            a = self.a,
            x = self.x,
            y = self.y,
            sp = self.sp,
            p = self.status(),
            cycles = self.cycles,
        );

        let result = self.execute(opcode, metadata);
        self.poll_interrupts();
        result
    }

    fn execute(&mut self, opcode: u8, metadata: &OpcodeMetadata) -> Result<(), ExecutionError> {
        match metadata.mnemonic {
            Mnemonic::Adc => alu::execute_adc(self, opcode),
            Mnemonic::And => alu::execute_and(self, opcode),
            Mnemonic::Bit => alu::execute_bit(self, opcode),
            Mnemonic::Cmp => alu::execute_cmp(self, opcode),
            Mnemonic::Cpx => alu::execute_cpx(self, opcode),
            Mnemonic::Cpy => alu::execute_cpy(self, opcode),
            Mnemonic::Eor => alu::execute_eor(self, opcode),
            Mnemonic::Ora => alu::execute_ora(self, opcode),
            Mnemonic::Sbc => alu::execute_sbc(self, opcode),

            Mnemonic::Bcc => branches::execute_bcc(self, opcode),
            Mnemonic::Bcs => branches::execute_bcs(self, opcode),
            Mnemonic::Beq => branches::execute_beq(self, opcode),
            Mnemonic::Bmi => branches::execute_bmi(self, opcode),
            Mnemonic::Bne => branches::execute_bne(self, opcode),
            Mnemonic::Bpl => branches::execute_bpl(self, opcode),
            Mnemonic::Bvc => branches::execute_bvc(self, opcode),
            Mnemonic::Bvs => branches::execute_bvs(self, opcode),

            Mnemonic::Brk => control::execute_brk(self, opcode),
            Mnemonic::Jmp => control::execute_jmp(self, opcode),
            Mnemonic::Jsr => control::execute_jsr(self, opcode),
            Mnemonic::Nop => control::execute_nop(self, opcode),
            Mnemonic::Rti => control::execute_rti(self, opcode),
            Mnemonic::Rts => control::execute_rts(self, opcode),

            Mnemonic::Clc => flags::execute_clc(self, opcode),
            Mnemonic::Cld => flags::execute_cld(self, opcode),
            Mnemonic::Cli => flags::execute_cli(self, opcode),
            Mnemonic::Clv => flags::execute_clv(self, opcode),
            Mnemonic::Sec => flags::execute_sec(self, opcode),
            Mnemonic::Sed => flags::execute_sed(self, opcode),
            Mnemonic::Sei => flags::execute_sei(self, opcode),

            Mnemonic::Dec => inc_dec::execute_dec(self, opcode),
            Mnemonic::Dex => inc_dec::execute_dex(self, opcode),
            Mnemonic::Dey => inc_dec::execute_dey(self, opcode),
            Mnemonic::Inc => inc_dec::execute_inc(self, opcode),
            Mnemonic::Inx => inc_dec::execute_inx(self, opcode),
            Mnemonic::Iny => inc_dec::execute_iny(self, opcode),

            Mnemonic::Lda => load_store::execute_lda(self, opcode),
            Mnemonic::Ldx => load_store::execute_ldx(self, opcode),
            Mnemonic::Ldy => load_store::execute_ldy(self, opcode),
            Mnemonic::Sta => load_store::execute_sta(self, opcode),
            Mnemonic::Stx => load_store::execute_stx(self, opcode),
            Mnemonic::Sty => load_store::execute_sty(self, opcode),

            Mnemonic::Asl => shifts::execute_asl(self, opcode),
            Mnemonic::Lsr => shifts::execute_lsr(self, opcode),
            Mnemonic::Rol => shifts::execute_rol(self, opcode),
            Mnemonic::Ror => shifts::execute_ror(self, opcode),

            Mnemonic::Pha => stack::execute_pha(self, opcode),
            Mnemonic::Php => stack::execute_php(self, opcode),
            Mnemonic::Pla => stack::execute_pla(self, opcode),
            Mnemonic::Plp => stack::execute_plp(self, opcode),

            Mnemonic::Tax => transfer::execute_tax(self, opcode),
            Mnemonic::Tay => transfer::execute_tay(self, opcode),
            Mnemonic::Tsx => transfer::execute_tsx(self, opcode),
            Mnemonic::Txa => transfer::execute_txa(self, opcode),
            Mnemonic::Txs => transfer::execute_txs(self, opcode),
            Mnemonic::Tya => transfer::execute_tya(self, opcode),

            Mnemonic::Illegal => return self.execute_illegal(opcode, metadata),
        }

        Ok(())
    }

    /// Skips an undocumented opcode and its operand bytes.
    fn execute_illegal(&mut self, opcode: u8, metadata: &OpcodeMetadata) -> Result<(), ExecutionError> {
        let pc = self.pc;
        self.retire(metadata, false);

        tracing::warn!(
            opcode = format_args!("{:02X}", opcode),
            pc = format_args!("{:04X}", pc),
            "undocumented opcode executed as NOP"
        );

        match self.config.illegal_opcodes {
            IllegalOpcodePolicy::Nop => Ok(()),
            IllegalOpcodePolicy::Error => Err(ExecutionError::IllegalOpcode { opcode, pc }),
        }
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes whole instructions while the cycles consumed are below the
    /// budget and returns the actual number consumed. The last instruction may
    /// overshoot the budget by a few cycles; a zero budget executes nothing.
    ///
    /// Interrupt entry cycles count against the budget. A reset during the
    /// call restarts the cycle counter, so consumption is tracked per step.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP, 2 cycles
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(9).unwrap(), 10);
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let mut consumed = 0u64;

        while consumed < cycle_budget {
            let before = self.cycles;
            self.step()?;
            consumed += self.cycles.saturating_sub(before);
            if self.cycles < before {
                // Reset restarted the counter mid-step
                consumed += self.cycles;
            }
        }

        Ok(consumed)
    }

    /// Executes exactly `count` instructions unless one of them fails.
    ///
    /// Returns the number of cycles consumed.
    pub fn run_instructions(&mut self, count: u64) -> Result<u64, ExecutionError> {
        let mut consumed = 0u64;

        for _ in 0..count {
            let before = self.cycles;
            self.step()?;
            consumed += if self.cycles < before {
                self.cycles
            } else {
                self.cycles - before
            };
        }

        Ok(consumed)
    }

    /// Runs until `hook` or the CPU's [`StopHandle`] ends the run.
    ///
    /// The stop handle is checked before every instruction, the hook after
    /// every instruction (including any interrupt entry that followed it).
    /// When `clock_hz` is configured the loop is paced against the wall clock
    /// with a [`Throttle`].
    ///
    /// A raised stop handle stays raised until [`StopHandle::reset`] is
    /// called, so a second `run` returns immediately.
    pub fn run<H: ExecutionHook>(&mut self, hook: &mut H) -> Result<StopReason, ExecutionError> {
        let mut throttle = self.config.clock_hz.map(|hz| Throttle::new(hz, self.cycles));
        tracing::debug!(pc = self.pc, clock_hz = ?self.config.clock_hz, "run started");

        loop {
            if self.stop.is_stopped() {
                tracing::debug!(pc = self.pc, "run stopped by handle");
                return Ok(StopReason::StopRequested);
            }

            let pc_before = self.pc;
            let cycles_before = self.cycles;
            self.step()?;

            if let Some(throttle) = throttle.as_mut() {
                if self.cycles < cycles_before {
                    throttle.resync(self.cycles);
                }
                throttle.pace(self.cycles);
            }

            if let HookAction::Stop(reason) = hook.after_instruction(pc_before, &self.snapshot()) {
                tracing::debug!(?reason, pc = self.pc, cycles = self.cycles, "run stopped by hook");
                return Ok(reason);
            }
        }
    }

    /// Handle that ends a [`CPU::run`] from another thread or a callback.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    // ========== Shared Instruction Helpers ==========

    /// Sets Z and N from `value`.
    #[inline]
    pub(crate) fn update_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Charges base cycles (plus one on a page cross) and steps PC past the instruction.
    #[inline]
    pub(crate) fn retire(&mut self, metadata: &OpcodeMetadata, page_crossed: bool) {
        self.cycles += metadata.base_cycles as u64 + page_crossed as u64;
        self.pc = self.pc.wrapping_add(metadata.size_bytes as u16);
    }

    // ========== State Access ==========

    /// Copies registers, flags and the cycle counter.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.status(),
            cycles: self.cycles,
        }
    }

    /// Restores registers, flags and the cycle counter from a snapshot.
    ///
    /// Memory and pending signals are not part of a snapshot and are left as they are.
    pub fn restore(&mut self, snapshot: &CpuSnapshot) {
        self.a = snapshot.a;
        self.x = snapshot.x;
        self.y = snapshot.y;
        self.sp = snapshot.sp;
        self.pc = snapshot.pc;
        self.set_status(snapshot.status);
        self.cycles = snapshot.cycles;
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus, e.g. to load a program or poke a device.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.status(), 0b0010_0100);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status = FLAG_U;

        if self.flag_n {
            status |= FLAG_N;
        }
        if self.flag_v {
            status |= FLAG_V;
        }
        if self.flag_b {
            status |= FLAG_B;
        }
        if self.flag_d {
            status |= FLAG_D;
        }
        if self.flag_i {
            status |= FLAG_I;
        }
        if self.flag_z {
            status |= FLAG_Z;
        }
        if self.flag_c {
            status |= FLAG_C;
        }

        status
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets every flag, including B, from a packed status byte. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        self.load_status(value);
        self.flag_b = value & FLAG_B != 0;
    }

    /// Sets every flag except B from a status byte pulled off the stack.
    pub(crate) fn load_status(&mut self, value: u8) {
        self.flag_n = value & FLAG_N != 0;
        self.flag_v = value & FLAG_V != 0;
        self.flag_d = value & FLAG_D != 0;
        self.flag_i = value & FLAG_I != 0;
        self.flag_z = value & FLAG_Z != 0;
        self.flag_c = value & FLAG_C != 0;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Resets the cycle counter, e.g. before timing a code fragment.
    pub fn set_cycles(&mut self, value: u64) {
        self.cycles = value;
    }
}
