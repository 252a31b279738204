//! # Namespace Tests
//!
//! Assembly of per-family namespaces from a small x86 table, builder duplicate
//! handling, and resolver interaction.

use pretty_assertions::assert_eq;
use regspace_core::isa::x86::X86Descriptor;
use regspace_core::isa::{Family, Layout, RegisterKind};
use regspace_core::namespace::{self, Entry, Namespace, NamespaceBuilder};
use regspace_core::table::DescriptorTable;
use regspace_core::{RegId, RegistryError, TableError};

use crate::common::mocks::MockResolver;
use crate::common::{X86_FIXTURE, X86_FIXTURE_NAMES, init_tracing, resolver_for};

fn fixture() -> DescriptorTable<X86Descriptor> {
    DescriptorTable::from_json(X86_FIXTURE).unwrap()
}

fn assemble(family: Family) -> Namespace {
    init_tracing();
    namespace::assemble(family, &fixture(), &resolver_for(&X86_FIXTURE_NAMES)).unwrap()
}

#[test]
fn test_x86_64_takes_whole_table() {
    let ns = assemble(Family::X86_64);
    assert_eq!(ns.family(), Family::X86_64);
    assert_eq!(ns.label(), "X86_64");
    assert_eq!(ns.names().collect::<Vec<_>>(), X86_FIXTURE_NAMES.to_vec());
    assert_eq!(ns.get("R8"), Some(RegId::new(4)));
}

#[test]
fn test_x86_takes_flagged_subset() {
    let ns = assemble(Family::X86);
    assert_eq!(ns.names().collect::<Vec<_>>(), vec!["EAX", "AH", "ZF"]);
    assert!(!ns.contains("RAX"));
    assert!(ns.contains("AH"));
    assert_eq!(
        ns.lookup("R8"),
        Err(RegistryError::UnknownRegister {
            family: Family::X86,
            name: "R8".to_string(),
        })
    );
}

#[test]
fn test_iter_yields_pairs_in_table_order() {
    let ns = assemble(Family::X86);
    assert_eq!(
        ns.iter().collect::<Vec<_>>(),
        vec![
            ("EAX", RegId::new(2)),
            ("AH", RegId::new(3)),
            ("ZF", RegId::new(5)),
        ]
    );
    assert_eq!(ns.len(), 3);
    assert!(!ns.is_empty());
}

#[test]
fn test_entry_metadata_follows_family() {
    let legacy = assemble(Family::X86);
    let long = assemble(Family::X86_64);

    let ah = legacy.entry("AH").unwrap();
    assert_eq!(
        ah,
        &Entry {
            id: RegId::new(3),
            kind: RegisterKind::Architectural,
            layout: Layout::new(15, 8, "EAX"),
            mutable: true,
        }
    );
    assert_eq!(long.entry("AH").unwrap().layout, Layout::new(15, 8, "RAX"));
    assert_eq!(long.entry("AH").unwrap().id, ah.id);
    assert_eq!(long.entry("ZF").unwrap().kind, RegisterKind::Pseudo);
}

#[test]
fn test_assembly_is_repeatable() {
    assert_eq!(assemble(Family::X86), assemble(Family::X86));
}

#[test]
fn test_builder_rejects_duplicate_name() {
    let entry = Entry {
        id: RegId::new(1),
        kind: RegisterKind::Architectural,
        layout: Layout::new(31, 0, "R0"),
        mutable: true,
    };
    let mut builder = NamespaceBuilder::new(Family::Arm32);
    builder.insert("R0", entry.clone()).unwrap();

    match builder.insert("R0", Entry { id: RegId::new(9), ..entry }) {
        Err(TableError::DuplicateName { family, name }) => {
            assert_eq!(family, Family::Arm32);
            assert_eq!(name, "R0");
        }
        other => panic!("expected duplicate name, got {other:?}"),
    }

    let ns = builder.finish();
    assert_eq!(ns.get("R0"), Some(RegId::new(1)));
    assert_eq!(ns.len(), 1);
}

#[test]
fn test_duplicate_survivors_abort_build() {
    let records = [
        X86Descriptor::new("AX", "ax", (15, 0, "RAX"), (15, 0, "EAX"), true),
        X86Descriptor::new("AX", "ax", (15, 0, "RAX"), (15, 0, "EAX"), true),
    ];
    let err = namespace::build(Family::X86_64, records.iter(), &resolver_for(&["AX"]))
        .unwrap_err();
    assert_eq!(err.to_string(), "duplicate register name AX in X86_64");
}

#[test]
fn test_unresolvable_name_aborts_build() {
    let resolver = resolver_for(&["RAX", "EAX"]);
    match namespace::assemble(Family::X86_64, &fixture(), &resolver) {
        Err(TableError::Unresolved { family, name }) => {
            assert_eq!(family, Family::X86_64);
            assert_eq!(name, "AH");
        }
        other => panic!("expected unresolved name, got {other:?}"),
    }
}

#[test]
fn test_empty_name_aborts_before_resolution() {
    let bad = X86Descriptor::new("", "ax", (15, 0, "RAX"), (15, 0, "EAX"), true);
    let mut resolver = MockResolver::new();
    let _ = resolver.expect_raw_id_of().never();

    let err = namespace::build(Family::X86_64, [&bad], &resolver).unwrap_err();
    assert!(
        matches!(err, TableError::MissingField { index: 0, field: "name", .. }),
        "{err}"
    );
}

#[test]
fn test_resolver_asked_once_per_survivor() {
    let mut resolver = MockResolver::new();
    let _ = resolver
        .expect_raw_id_of()
        .times(3)
        .returning(|family, name| {
            assert_eq!(family, Family::X86);
            X86_FIXTURE_NAMES
                .iter()
                .position(|candidate| *candidate == name)
                .and_then(|index| u32::try_from(index + 100).ok())
                .map(RegId::new)
        });

    let ns = namespace::assemble(Family::X86, &fixture(), &resolver).unwrap();
    assert_eq!(ns.get("EAX"), Some(RegId::new(101)));
    assert_eq!(ns.get("ZF"), Some(RegId::new(104)));
}

static LONG_MODE: [X86Descriptor; 1] =
    [X86Descriptor::new("CR8", "cr8", (63, 0, "CR8"), (31, 0, "CR8"), false)];

static CLASHING: [X86Descriptor; 1] =
    [X86Descriptor::pseudo("CR8", "cr8", (0, 0, "CR8"), (0, 0, "CR8"), true)];

#[test]
fn test_collision_hidden_by_filter_still_rejected() {
    let table = DescriptorTable::from_sections(&[&LONG_MODE[..], &CLASHING[..]]);
    let err = namespace::assemble(Family::X86, &table, &resolver_for(&["CR8"])).unwrap_err();
    assert!(
        matches!(err, TableError::DuplicateDescriptor { ref name, .. } if name == "CR8"),
        "{err}"
    );
}

#[test]
fn test_inverted_range_aborts_build() {
    let bad = X86Descriptor::new("AX", "ax", (15, 0, "RAX"), (0, 15, "EAX"), true);
    let resolver = resolver_for(&["AX"]);

    assert!(namespace::build(Family::X86_64, [&bad], &resolver).is_ok());
    match namespace::build(Family::X86, [&bad], &resolver) {
        Err(TableError::InvertedRange { name, upper, lower, .. }) => {
            assert_eq!(name, "AX");
            assert_eq!((upper, lower), (0, 15));
        }
        other => panic!("expected inverted range, got {other:?}"),
    }
}
