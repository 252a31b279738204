//! # Configuration Tests
//!
//! Defaults and JSON deserialization of `RegistryConfig`.

use pretty_assertions::assert_eq;
use regspace_core::{Family, RegistryConfig};

#[test]
fn test_config_default() {
    let config = RegistryConfig::default();
    assert_eq!(config.families, Family::enabled().to_vec());
}

#[test]
fn test_config_empty_object_uses_defaults() {
    let config = RegistryConfig::from_json("{}").unwrap();
    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn test_config_families_by_label() {
    let config = RegistryConfig::from_json(r#"{"families": ["X86_64", "AARCH64"]}"#).unwrap();
    assert_eq!(config.families, vec![Family::X86_64, Family::Aarch64]);
}

#[test]
fn test_config_only() {
    let config = RegistryConfig::only([Family::Arm32]);
    assert_eq!(config.families, vec![Family::Arm32]);
}

#[test]
fn test_config_rejects_unknown_label() {
    let err = RegistryConfig::from_json(r#"{"families": ["MIPS"]}"#).unwrap_err();
    assert!(err.to_string().contains("family not supported: MIPS"), "{err}");
}

#[test]
fn test_config_rejects_lowercase_label() {
    assert!(RegistryConfig::from_json(r#"{"families": ["x86_64"]}"#).is_err());
}

#[cfg(not(feature = "riscv"))]
#[test]
fn test_config_rejects_compiled_out_label() {
    assert!(RegistryConfig::from_json(r#"{"families": ["RV64"]}"#).is_err());
}

#[cfg(feature = "riscv")]
#[test]
fn test_config_accepts_riscv_labels() {
    let config = RegistryConfig::from_json(r#"{"families": ["RV64", "RV32"]}"#).unwrap();
    assert_eq!(config.families, vec![Family::Rv64, Family::Rv32]);
}

#[test]
fn test_config_rejects_unknown_key() {
    assert!(RegistryConfig::from_json(r#"{"families": [], "trace": true}"#).is_err());
}

#[test]
fn test_config_rejects_malformed_json() {
    assert!(RegistryConfig::from_json("{families:").is_err());
}
