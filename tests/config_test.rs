//! Tests for loading engine configuration and applying it to a CPU.

use std::fs;

use nmos6502::{ConfigError, CpuConfig, FlatMemory, IllegalOpcodePolicy, MemoryBus, CPU};

#[test]
fn test_from_json_str_overrides_fields() {
    let config = CpuConfig::from_json_str(
        r#"{
            "reset_vector": 1024,
            "nmi_vector": 65528,
            "illegal_opcodes": "error",
            "clock_hz": 1000000
        }"#,
    )
    .unwrap();

    assert_eq!(config.reset_vector, 0x0400);
    assert_eq!(config.nmi_vector, 0xFFF8);
    assert_eq!(config.irq_vector, 0xFFFE);
    assert_eq!(config.illegal_opcodes, IllegalOpcodePolicy::Error);
    assert_eq!(config.clock_hz, Some(1_000_000));
}

#[test]
fn test_unknown_policy_rejected() {
    let err = CpuConfig::from_json_str(r#"{ "illegal_opcodes": "halt" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_zero_clock_rejected() {
    let err = CpuConfig::from_json_str(r#"{ "clock_hz": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidClockRate));
    assert_eq!(err.to_string(), "clock rate must be non-zero");
}

#[test]
fn test_from_json_file() {
    let path = std::env::temp_dir().join(format!("nmos6502-config-{}.json", std::process::id()));
    fs::write(&path, r#"{ "irq_vector": 65520 }"#).unwrap();

    let config = CpuConfig::from_json_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.irq_vector, 0xFFF0);
}

#[test]
fn test_from_missing_file() {
    let path = std::env::temp_dir().join("nmos6502-config-does-not-exist.json");
    let err = CpuConfig::from_json_file(path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_configured_vectors_drive_the_cpu() {
    let mut memory = FlatMemory::new();
    memory.write(0x0400, 0x00);
    memory.write(0x0401, 0xC0);
    memory.write(0x0402, 0x00);
    memory.write(0x0403, 0xD0);
    memory.write(0xC000, 0xEA);

    let config = CpuConfig {
        reset_vector: 0x0400,
        nmi_vector: 0x0402,
        ..CpuConfig::default()
    };
    let mut cpu = CPU::with_config(memory, config.clone());
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.config(), &config);

    cpu.request_nmi();
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0xD000);

    cpu.reset();
    assert_eq!(cpu.pc(), 0xC000);
}
