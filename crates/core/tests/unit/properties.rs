//! # Lookup Properties
//!
//! Generated labels and names against the default registry.

use std::sync::LazyLock;

use proptest::prelude::*;
use regspace_core::isa::x86;
use regspace_core::{Family, NativeEnumeration, RawIdResolver, Registry, RegistryError};

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry::build_default().unwrap());

fn is_label(label: &str) -> bool {
    Family::enabled().iter().any(|family| family.label() == label)
}

proptest! {
    #[test]
    fn prop_unknown_label_not_supported(label in "[A-Za-z0-9_]{0,10}") {
        prop_assume!(!is_label(&label));
        prop_assert_eq!(
            REGISTRY.lookup(&label, "AH"),
            Err(RegistryError::FamilyNotSupported(label.clone()))
        );
    }

    #[test]
    fn prop_unknown_name_reports_family(name in "[A-Z][A-Z0-9_]{0,12}") {
        prop_assume!(x86::table().get(&name).is_none());
        prop_assert_eq!(
            REGISTRY.lookup("X86_64", &name),
            Err(RegistryError::UnknownRegister { family: Family::X86_64, name: name.clone() })
        );
    }

    #[test]
    fn prop_every_x86_record_matches_enumeration(index in 0..x86::table().len()) {
        let descriptor = x86::table().iter().nth(index).unwrap();
        let expected = NativeEnumeration::shared().raw_id_of(Family::X86_64, &descriptor.name);
        prop_assert_eq!(REGISTRY.lookup("X86_64", &descriptor.name).ok(), expected);
        if descriptor.legacy_available {
            prop_assert_eq!(REGISTRY.lookup("X86", &descriptor.name).ok(), expected);
        } else {
            prop_assert!(REGISTRY.lookup("X86", &descriptor.name).is_err());
        }
    }

    #[test]
    fn prop_lookup_is_pure(
        family in proptest::sample::select(Family::enabled()),
        name in "[A-Z0-9_]{1,8}",
    ) {
        let first = REGISTRY.lookup(family.label(), &name);
        let second = REGISTRY.lookup(family.label(), &name);
        prop_assert_eq!(first, second);
    }
}
