//! WebAssembly bindings for the nmos6502 engine.
//!
//! This module provides JavaScript-callable interfaces to the 6502 CPU,
//! enabling browser front ends to drive execution and display state.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator;
