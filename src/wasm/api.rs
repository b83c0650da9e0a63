//! WASM API for the 6502 engine.
//!
//! Provides JavaScript-callable interfaces for CPU control, interrupt
//! signalling and state inspection. The emulator owns a flat 64K memory;
//! programs are loaded as raw bytes.

use wasm_bindgen::prelude::*;

use crate::{CpuConfig, FlatMemory, MemoryBus, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator with zeroed memory and the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Create an emulator from a JSON `CpuConfig`.
    pub fn with_config_json(json: &str) -> Result<Emulator, JsError> {
        let config = CpuConfig::from_json_str(json)?;
        Ok(Emulator {
            cpu: CPU::with_config(FlatMemory::new(), config),
        })
    }

    /// Load a program, point the reset vector at it and set PC.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        let reset_vector = self.cpu.config().reset_vector;
        let memory = self.cpu.memory_mut();
        memory.load(start_addr, program);
        memory.write(reset_vector, start_addr as u8);
        memory.write(reset_vector.wrapping_add(1), (start_addr >> 8) as u8);
        self.cpu.set_pc(start_addr);
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step()?;
        Ok(())
    }

    /// Execute whole instructions for a cycle budget and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        let consumed = self.cpu.run_for_cycles(cycles as u64)?;
        Ok(consumed as u32)
    }

    /// Hard reset, keeping memory contents
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    pub fn request_irq(&mut self) {
        self.cpu.request_irq();
    }

    pub fn request_nmi(&mut self) {
        self.cpu.request_nmi();
    }

    pub fn request_reset(&mut self) {
        self.cpu.request_reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    /// Registers, flags and cycles as a JSON object.
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.cpu.snapshot())?)
    }

    // Memory access methods

    /// Read a single byte from memory without side effects
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().peek(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy a 256-byte page out of memory (for efficient display)
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[start..start + 256])
    }

    /// The live stack bytes, most recently pushed first
    pub fn stack_contents(&self) -> Vec<u8> {
        self.cpu.stack_contents()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
