//! # Descriptor Table Tests
//!
//! Section merging, JSON loading and structural validation.

use pretty_assertions::assert_eq;
use regspace_core::TableError;
use regspace_core::isa::arm32::Arm32Descriptor;
use regspace_core::isa::x86::X86Descriptor;
use regspace_core::isa::{Isa, RegisterKind};
use regspace_core::table::DescriptorTable;

use crate::common::{X86_FIXTURE, X86_FIXTURE_NAMES};

static CORE: [Arm32Descriptor; 2] = [
    Arm32Descriptor::new("R0", "r0", (31, 0, "R0"), true),
    Arm32Descriptor::new("R1", "r1", (31, 0, "R1"), true),
];

static FLAGS: [Arm32Descriptor; 1] =
    [Arm32Descriptor::pseudo("C", "c", (29, 29, "APSR"), true)];

static CLASHING: [Arm32Descriptor; 1] =
    [Arm32Descriptor::pseudo("R1", "r1", (0, 0, "APSR"), true)];

#[test]
fn test_sections_merge_in_order() {
    let table = DescriptorTable::from_sections(&[&CORE[..], &FLAGS[..]]);
    let names: Vec<&str> = table.iter().map(|d| &*d.name).collect();
    assert_eq!(names, vec!["R0", "R1", "C"]);
    assert_eq!(table.len(), 3);
    assert!(!table.is_empty());
    table.validate().unwrap();
}

#[test]
fn test_duplicate_across_sections_rejected() {
    let table = DescriptorTable::from_sections(&[&CORE[..], &CLASHING[..]]);
    match table.validate() {
        Err(TableError::DuplicateDescriptor { isa, name }) => {
            assert_eq!(isa, Isa::Arm32);
            assert_eq!(name, "R1");
        }
        other => panic!("expected duplicate descriptor, got {other:?}"),
    }
}

#[test]
fn test_table_can_be_enumerated_repeatedly() {
    let table = DescriptorTable::from_sections(&[&CORE[..], &FLAGS[..]]);
    let first: Vec<_> = table.iter().cloned().collect();
    let second: Vec<_> = table.iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
fn test_json_table_loads_in_order() {
    let table = DescriptorTable::<X86Descriptor>::from_json(X86_FIXTURE).unwrap();
    let names: Vec<&str> = table.iter().map(|d| &*d.name).collect();
    assert_eq!(names, X86_FIXTURE_NAMES.to_vec());

    let zf = table.get("ZF").unwrap();
    assert_eq!(zf.kind, RegisterKind::Pseudo);
    assert_eq!(table.get("AH").unwrap().kind, RegisterKind::Architectural);
    assert!(!table.get("R8").unwrap().legacy_available);
}

#[test]
fn test_json_missing_field_is_malformed() {
    let json = r#"[{"name": "RAX", "lower_name": "rax",
        "x86_64": {"upper": 63, "lower": 0, "parent": "RAX"},
        "x86_avail": false}]"#;
    let err = DescriptorTable::<X86Descriptor>::from_json(json).unwrap_err();
    assert!(matches!(err, TableError::Malformed { isa: Isa::X86, .. }), "{err}");
    assert!(err.to_string().contains("malformed x86 descriptor table"));
}

#[test]
fn test_json_wrong_type_is_malformed() {
    let json = r#"[{"name": "R0", "lower_name": "r0",
        "layout": {"upper": "high", "lower": 0, "parent": "R0"}, "mutable": true}]"#;
    let err = DescriptorTable::<Arm32Descriptor>::from_json(json).unwrap_err();
    assert!(matches!(err, TableError::Malformed { isa: Isa::Arm32, .. }));
}

#[test]
fn test_json_empty_name_is_missing_field() {
    let json = r#"[
        {"name": "R0", "lower_name": "r0",
         "layout": {"upper": 31, "lower": 0, "parent": "R0"}, "mutable": true},
        {"name": "", "lower_name": "r1",
         "layout": {"upper": 31, "lower": 0, "parent": "R1"}, "mutable": true}
    ]"#;
    match DescriptorTable::<Arm32Descriptor>::from_json(json) {
        Err(TableError::MissingField { isa, index, field }) => {
            assert_eq!(isa, Isa::Arm32);
            assert_eq!(index, 1);
            assert_eq!(field, "name");
        }
        other => panic!("expected missing field, got {other:?}"),
    }
}

#[test]
fn test_json_empty_parent_is_missing_field() {
    let json = r#"[{"name": "EAX", "lower_name": "eax",
        "x86_64": {"upper": 31, "lower": 0, "parent": "RAX"},
        "x86": {"upper": 31, "lower": 0, "parent": ""},
        "x86_avail": true}]"#;
    let err = DescriptorTable::<X86Descriptor>::from_json(json).unwrap_err();
    assert!(
        matches!(err, TableError::MissingField { field: "x86.parent", .. }),
        "{err}"
    );
}

#[test]
fn test_json_duplicate_names_rejected() {
    let json = r#"[
        {"name": "R0", "lower_name": "r0",
         "layout": {"upper": 31, "lower": 0, "parent": "R0"}, "mutable": true},
        {"name": "R0", "lower_name": "r0",
         "layout": {"upper": 31, "lower": 0, "parent": "R0"}, "mutable": false}
    ]"#;
    let err = DescriptorTable::<Arm32Descriptor>::from_json(json).unwrap_err();
    assert_eq!(err.to_string(), "duplicate descriptor R0 in arm32 table");
}

#[test]
fn test_json_empty_table() {
    let table = DescriptorTable::<Arm32Descriptor>::from_json("[]").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.get("R0"), None);
}

#[test]
fn test_json_inverted_range_rejected() {
    let json = r#"[{"name": "R0", "lower_name": "r0",
        "layout": {"upper": 0, "lower": 31, "parent": "R0"}, "mutable": true}]"#;
    match DescriptorTable::<Arm32Descriptor>::from_json(json) {
        Err(TableError::InvertedRange { isa, name, upper, lower }) => {
            assert_eq!(isa, Isa::Arm32);
            assert_eq!(name, "R0");
            assert_eq!((upper, lower), (0, 31));
        }
        other => panic!("expected inverted range, got {other:?}"),
    }
}

#[test]
fn test_json_inverted_legacy_view_rejected() {
    let json = r#"[{"name": "EAX", "lower_name": "eax",
        "x86_64": {"upper": 31, "lower": 0, "parent": "RAX"},
        "x86": {"upper": 0, "lower": 31, "parent": "EAX"},
        "x86_avail": true}]"#;
    let err = DescriptorTable::<X86Descriptor>::from_json(json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "x86 descriptor EAX has inverted bit range [0..31]"
    );
}

#[test]
fn test_json_single_bit_range_accepted() {
    let json = r#"[{"name": "C", "lower_name": "c",
        "layout": {"upper": 29, "lower": 29, "parent": "APSR"}, "mutable": true}]"#;
    let table = DescriptorTable::<Arm32Descriptor>::from_json(json).unwrap();
    assert_eq!(table.get("C").unwrap().layout.width(), 1);
}
