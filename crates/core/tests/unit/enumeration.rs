//! # Native Enumeration Tests
//!
//! Block layout of the reference enumeration and the resolver seam.

use regspace_core::isa::{aarch64, arm32, x86};
use regspace_core::{Family, NativeEnumeration, RawIdResolver, RegId};

use crate::common::resolver_for;

#[test]
fn test_first_block_follows_invalid_id() {
    let enumeration = NativeEnumeration::new();
    let x86 = enumeration.block(Family::X86).unwrap();
    assert_eq!(*x86.start(), RegId::INVALID.raw() + 1);
}

#[test]
fn test_x86_families_share_a_block() {
    let enumeration = NativeEnumeration::new();
    assert_eq!(
        enumeration.block(Family::X86),
        enumeration.block(Family::X86_64)
    );
    for name in ["EAX", "AH", "ZMM1", "EFLAGS", "ZF"] {
        assert_eq!(
            enumeration.raw_id_of(Family::X86, name),
            enumeration.raw_id_of(Family::X86_64, name),
            "{name}"
        );
    }
}

#[test]
fn test_blocks_are_disjoint_and_in_table_order() {
    let enumeration = NativeEnumeration::new();
    let x86 = enumeration.block(Family::X86).unwrap();
    let aarch64 = enumeration.block(Family::Aarch64).unwrap();
    let arm32 = enumeration.block(Family::Arm32).unwrap();

    assert_eq!(*aarch64.start(), x86.end() + 1);
    assert_eq!(*arm32.start(), aarch64.end() + 1);
}

#[test]
fn test_block_sizes_match_tables() {
    let enumeration = NativeEnumeration::new();
    let len = |family| enumeration.block(family).map_or(0, |block| block.count());

    assert_eq!(len(Family::X86), x86::table().len());
    assert_eq!(len(Family::Aarch64), aarch64::table().len());
    assert_eq!(len(Family::Arm32), arm32::table().len());
}

#[cfg(not(feature = "riscv"))]
#[test]
fn test_end_counts_every_identifier() {
    let enumeration = NativeEnumeration::new();
    let total = x86::table().len() + aarch64::table().len() + arm32::table().len();
    assert_eq!(enumeration.end() as usize, total + 1);
}

#[cfg(feature = "riscv")]
#[test]
fn test_riscv_families_own_separate_blocks() {
    use regspace_core::isa::riscv;

    let enumeration = NativeEnumeration::new();
    let rv64 = enumeration.block(Family::Rv64).unwrap();
    let rv32 = enumeration.block(Family::Rv32).unwrap();
    assert_eq!(rv64.clone().count(), riscv::table().len());
    assert_eq!(*rv32.start(), rv64.end() + 1);
    assert_ne!(
        enumeration.raw_id_of(Family::Rv64, "SP"),
        enumeration.raw_id_of(Family::Rv32, "SP")
    );
}

#[test]
fn test_invalid_id_never_assigned() {
    let enumeration = NativeEnumeration::new();
    for descriptor in x86::table().iter() {
        let id = enumeration.raw_id_of(Family::X86_64, &descriptor.name).unwrap();
        assert_ne!(id, RegId::INVALID);
    }
}

#[test]
fn test_unknown_name_does_not_resolve() {
    let enumeration = NativeEnumeration::shared();
    assert_eq!(enumeration.raw_id_of(Family::X86_64, "NONEXISTENT"), None);
    assert_eq!(enumeration.raw_id_of(Family::Arm32, "RAX"), None);
}

#[test]
fn test_closure_resolver() {
    let resolver = resolver_for(&["A", "B"]);
    assert_eq!(resolver.raw_id_of(Family::Arm32, "B"), Some(RegId::new(2)));
    assert_eq!(resolver.raw_id_of(Family::Arm32, "C"), None);
}
