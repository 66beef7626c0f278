//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and file loading.

use std::io::Write;

use ls8_core::common::error::ConfigError;
use ls8_core::config::*;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_instructions, None);
    assert_eq!(config.machine.initial_sp, 0xF4);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let config: Config = serde_json::from_str(r#"{ "general": { "trace_instructions": true } }"#)
        .unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_instructions, None);
    assert_eq!(config.machine.initial_sp, 0xF4);
}

#[test]
fn test_machine_initial_sp_override() {
    let config: Config = serde_json::from_str(r#"{ "machine": { "initial_sp": 128 } }"#).unwrap();
    assert_eq!(config.machine.initial_sp, 128);
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<Config, _> = serde_json::from_str(r#"{ "general": { "trace": true } }"#);
    assert!(result.is_err());
}

#[test]
fn test_initial_sp_must_fit_in_a_byte() {
    let result: Result<Config, _> = serde_json::from_str(r#"{ "machine": { "initial_sp": 300 } }"#);
    assert!(result.is_err());
}

#[test]
fn test_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "general": { "max_instructions": 50 } }"#)
        .unwrap();
    file.flush().unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.general.max_instructions, Some(50));
}

#[test]
fn test_from_json_file_missing() {
    let err = Config::from_json_file("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_from_json_file_malformed() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    file.flush().unwrap();

    let err = Config::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}
