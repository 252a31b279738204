//! # Registry Tests
//!
//! Lifecycle states, lookups across the built-in families, and the error reported for
//! each kind of failed query.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use regspace_core::isa::x86::{self, X86Descriptor};
use regspace_core::isa::{Layout, RegisterKind};
use regspace_core::namespace;
use regspace_core::registry::assemble_family;
use regspace_core::table::DescriptorTable;
use regspace_core::{
    Family, NativeEnumeration, RawIdResolver, RegId, Registry, RegistryConfig, RegistryError,
    RegistryState, TableError,
};
use rstest::{fixture, rstest};

use crate::common::{X86_FIXTURE, X86_FIXTURE_NAMES, init_tracing, resolver_for};

#[fixture]
fn registry() -> Registry {
    init_tracing();
    Registry::build_default().unwrap()
}

#[test]
fn test_new_registry_is_empty() {
    let registry = Registry::new();
    assert_eq!(registry.state(), RegistryState::Empty);
    assert!(registry.is_empty());
    assert_eq!(registry.families().count(), 0);
}

#[rstest]
#[case("X86_64", "AH")]
#[case("X86", "EAX")]
#[case("MIPS", "R0")]
#[case("", "")]
fn test_empty_registry_reports_not_initialized(#[case] label: &str, #[case] name: &str) {
    let registry = Registry::new();
    assert_eq!(registry.lookup(label, name), Err(RegistryError::NotInitialized));
    assert_eq!(registry.namespace(label).unwrap_err(), RegistryError::NotInitialized);
}

#[rstest]
fn test_default_build_registers_every_family(registry: Registry) {
    assert_eq!(registry.state(), RegistryState::Populated);
    assert_eq!(registry.families().collect::<Vec<_>>(), Family::enabled().to_vec());
    assert!(registry.iter().all(|ns| !ns.is_empty()));
}

#[rstest]
#[case(Family::X86, "EAX")]
#[case(Family::X86_64, "RAX")]
#[case(Family::Aarch64, "X0")]
#[case(Family::Aarch64, "SCTLR_EL1")]
#[case(Family::Arm32, "R0")]
#[case(Family::Arm32, "FPSCR")]
fn test_known_register_resolves(registry: Registry, #[case] family: Family, #[case] name: &str) {
    let id = registry.lookup(family.label(), name).unwrap();
    assert_ne!(id, RegId::INVALID);
    assert_eq!(registry.get(family).unwrap().get(name), Some(id));
}

#[rstest]
fn test_ah_zmm1_nonexistent(registry: Registry) {
    let ah = registry.lookup("X86_64", "AH").unwrap();
    assert_eq!(registry.lookup("X86", "AH"), Ok(ah));
    assert!(registry.lookup("X86_64", "ZMM1").is_ok());
    assert_eq!(
        registry.lookup("X86_64", "NONEXISTENT"),
        Err(RegistryError::UnknownRegister {
            family: Family::X86_64,
            name: "NONEXISTENT".to_string(),
        })
    );
}

#[rstest]
#[case("R8")]
#[case("RAX")]
#[case("R15D")]
#[case("SPL")]
#[case("XMM8")]
#[case("ZMM31")]
#[case("CR8")]
#[case("EFER")]
fn test_64_bit_only_registers_absent_from_x86(registry: Registry, #[case] name: &str) {
    assert!(registry.lookup("X86_64", name).is_ok());
    let err = registry.lookup("X86", name).unwrap_err();
    assert_eq!(err.to_string(), format!("unknown register name: X86.{name}"));
}

#[rstest]
fn test_x86_is_subset_of_x86_64_with_same_ids(registry: Registry) {
    let legacy = registry.get(Family::X86).unwrap();
    let long = registry.get(Family::X86_64).unwrap();
    assert!(legacy.len() < long.len());
    for (name, id) in legacy.iter() {
        assert_eq!(long.get(name), Some(id), "{name}");
    }
}

#[rstest]
fn test_x86_64_takes_every_x86_record(registry: Registry) {
    let long = registry.get(Family::X86_64).unwrap();
    assert_eq!(long.len(), x86::table().len());
    let available = x86::table().iter().filter(|d| d.legacy_available).count();
    assert_eq!(registry.get(Family::X86).unwrap().len(), available);
}

#[rstest]
fn test_ids_unique_within_namespace(registry: Registry) {
    for ns in registry.iter() {
        let ids: HashSet<RegId> = ns.iter().map(|(_, id)| id).collect();
        assert_eq!(ids.len(), ns.len(), "{}", ns.label());
    }
}

#[rstest]
fn test_entry_metadata(registry: Registry) {
    let x86_64 = registry.get(Family::X86_64).unwrap();
    assert_eq!(x86_64.entry("AH").unwrap().layout, Layout::new(15, 8, "RAX"));
    assert_eq!(x86_64.entry("ZF").unwrap().kind, RegisterKind::Pseudo);

    let aarch64 = registry.get(Family::Aarch64).unwrap();
    assert_eq!(aarch64.entry("MIDR_EL1").unwrap().kind, RegisterKind::System);
    assert!(!aarch64.entry("MIDR_EL1").unwrap().mutable);
}

#[rstest]
#[case("MIPS")]
#[case("x86_64")]
#[case("X86-64")]
#[case("")]
fn test_unknown_family_not_supported(registry: Registry, #[case] label: &str) {
    assert_eq!(
        registry.lookup(label, "AH"),
        Err(RegistryError::FamilyNotSupported(label.to_string()))
    );
}

#[cfg(not(feature = "riscv"))]
#[rstest]
fn test_riscv_not_supported_without_feature(registry: Registry) {
    let err = registry.lookup("RV64", "SP").unwrap_err();
    assert_eq!(err.to_string(), "family not supported: RV64");
}

#[cfg(feature = "riscv")]
#[rstest]
fn test_riscv_families_registered(registry: Registry) {
    assert!(registry.lookup("RV64", "SP").is_ok());
    assert!(registry.lookup("RV32", "MSTATUS").is_ok());
    let rv32 = registry.get(Family::Rv32).unwrap();
    assert_eq!(rv32.entry("SP").unwrap().layout.width(), 32);
}

#[rstest]
fn test_reset_returns_to_empty(mut registry: Registry) {
    registry.reset();
    assert_eq!(registry.state(), RegistryState::Empty);
    assert_eq!(registry.lookup("X86_64", "AH"), Err(RegistryError::NotInitialized));
}

#[test]
fn test_rebuild_after_reset_matches_first_build() {
    let first = Registry::build_default().unwrap();

    let mut rebuilt = Registry::build_default().unwrap();
    rebuilt.reset();
    assert_eq!(rebuilt.state(), RegistryState::Empty);
    for &family in Family::enabled() {
        rebuilt
            .register(assemble_family(family, NativeEnumeration::shared()).unwrap())
            .unwrap();
    }

    assert_eq!(rebuilt.state(), RegistryState::Populated);
    assert_eq!(first, rebuilt);
    assert_eq!(first, Registry::build_default().unwrap());
}

#[test]
fn test_config_subset() {
    let config = RegistryConfig::only([Family::X86_64, Family::X86_64]);
    let registry = Registry::build(&config, NativeEnumeration::shared()).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.lookup("X86", "EAX"),
        Err(RegistryError::FamilyNotSupported("X86".to_string()))
    );
    assert!(registry.lookup("X86_64", "EAX").is_ok());
}

#[test]
fn test_empty_config_still_populates() {
    let mut registry = Registry::build(&RegistryConfig::only([]), NativeEnumeration::shared())
        .unwrap();
    assert_eq!(registry.state(), RegistryState::Populated);
    assert!(registry.is_empty());
    assert_eq!(
        registry.lookup("X86", "AH"),
        Err(RegistryError::FamilyNotSupported("X86".to_string()))
    );

    registry.reset();
    assert_eq!(registry.state(), RegistryState::Empty);
    assert_eq!(registry.lookup("X86", "AH"), Err(RegistryError::NotInitialized));
}

#[test]
fn test_register_populates_new_registry() {
    let mut registry = Registry::new();
    registry
        .register(assemble_family(Family::Arm32, NativeEnumeration::shared()).unwrap())
        .unwrap();
    assert_eq!(registry.state(), RegistryState::Populated);
    assert!(registry.lookup("ARM32", "R0").is_ok());
}

#[test]
fn test_register_rejects_second_namespace_for_family() {
    let resolver = NativeEnumeration::shared();
    let mut registry = Registry::new();
    registry
        .register(assemble_family(Family::Arm32, resolver).unwrap())
        .unwrap();

    let err = registry
        .register(assemble_family(Family::Arm32, resolver).unwrap())
        .unwrap_err();
    assert!(matches!(err, TableError::DuplicateFamily(Family::Arm32)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_register_custom_namespace() {
    let table = DescriptorTable::<X86Descriptor>::from_json(X86_FIXTURE).unwrap();
    let resolver = resolver_for(&X86_FIXTURE_NAMES);
    let mut registry = Registry::new();
    registry
        .register(namespace::assemble(Family::X86, &table, &resolver).unwrap())
        .unwrap();

    assert_eq!(registry.lookup("X86", "AH"), Ok(RegId::new(3)));
    assert_eq!(
        registry.lookup("X86_64", "AH"),
        Err(RegistryError::FamilyNotSupported("X86_64".to_string()))
    );
}

#[test]
fn test_failed_build_yields_no_registry() {
    let resolver = |family: Family, name: &str| -> Option<RegId> {
        if family == Family::Arm32 && name == "PC" {
            None
        } else {
            NativeEnumeration::shared().raw_id_of(family, name)
        }
    };
    let result = Registry::build(&RegistryConfig::default(), &resolver);
    match result {
        Err(TableError::Unresolved { family, name }) => {
            assert_eq!(family, Family::Arm32);
            assert_eq!(name, "PC");
        }
        other => panic!("expected unresolved name, got {other:?}"),
    }
}
