//! # CPU Configuration
//!
//! Vector locations, the undocumented-opcode policy and the optional
//! real-time clock rate. The defaults describe a stock NMOS 6502; test ROMs
//! that relocate their vectors override individual fields.
//!
//! Configurations deserialize from JSON with every field optional:
//!
//! ```
//! use nmos6502::{CpuConfig, IllegalOpcodePolicy};
//!
//! let config = CpuConfig::from_json_str(r#"{ "irq_vector": 65520, "illegal_opcodes": "error" }"#).unwrap();
//! assert_eq!(config.irq_vector, 0xFFF0);
//! assert_eq!(config.reset_vector, 0xFFFC);
//! assert_eq!(config.illegal_opcodes, IllegalOpcodePolicy::Error);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard NMI vector location.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Standard reset vector location.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Standard IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// What the dispatcher does with an undocumented opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IllegalOpcodePolicy {
    /// Skip the opcode and its operand bytes, charging its base cycles.
    #[default]
    Nop,
    /// Retire it like `Nop`, then report `ExecutionError::IllegalOpcode`.
    Error,
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("clock rate must be non-zero")]
    InvalidClockRate,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Address of the little-endian reset vector.
    pub reset_vector: u16,

    /// Address of the little-endian IRQ/BRK vector.
    pub irq_vector: u16,

    /// Address of the little-endian NMI vector.
    pub nmi_vector: u16,

    /// Handling of undocumented opcodes.
    pub illegal_opcodes: IllegalOpcodePolicy,

    /// Target clock rate in Hz for `CPU::run`; `None` runs unthrottled.
    pub clock_hz: Option<u32>,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_vector: RESET_VECTOR,
            irq_vector: IRQ_VECTOR,
            nmi_vector: NMI_VECTOR,
            illegal_opcodes: IllegalOpcodePolicy::Nop,
            clock_hz: None,
        }
    }
}

impl CpuConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CpuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_hz == Some(0) {
            return Err(ConfigError::InvalidClockRate);
        }
        Ok(())
    }
}
