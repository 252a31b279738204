//! # Availability Filter Tests
//!
//! Predicate sets, per-family inclusion policy and descriptor admission.

use regspace_core::Family;
use regspace_core::availability::{
    Availability, AvailabilityFilter, Inclusion, InclusionPolicy, Variants,
};
use regspace_core::isa::x86::X86Descriptor;
use rstest::rstest;

fn r8() -> X86Descriptor {
    X86Descriptor::new("R8", "r8", (63, 0, "R8"), (63, 0, "R8"), false)
}

fn ah() -> X86Descriptor {
    X86Descriptor::new("AH", "ah", (15, 8, "RAX"), (15, 8, "EAX"), true)
}

#[test]
fn test_everywhere_is_addressable_in_every_family() {
    let availability = Availability::everywhere();
    for &family in Family::enabled() {
        assert!(availability.is_addressable_in(family), "{family}");
    }
}

#[test]
fn test_only_restricts_to_named_variants() {
    let availability = Availability::only(Variants::X86_64);
    assert!(availability.is_addressable_in(Family::X86_64));
    assert!(!availability.is_addressable_in(Family::X86));
    assert!(!availability.is_addressable_in(Family::Aarch64));
    assert_eq!(availability.variants(), Variants::X86_64);
}

#[rstest]
#[case(Family::X86, InclusionPolicy::Conditional)]
#[case(Family::X86_64, InclusionPolicy::Unconditional)]
#[case(Family::Aarch64, InclusionPolicy::Unconditional)]
#[case(Family::Arm32, InclusionPolicy::Unconditional)]
fn test_family_policy(#[case] family: Family, #[case] policy: InclusionPolicy) {
    let filter = AvailabilityFilter::for_family(family);
    assert_eq!(filter.family(), family);
    assert_eq!(filter.policy(), policy);
}

#[test]
fn test_unconditional_ignores_predicates() {
    let filter = AvailabilityFilter::with_policy(Family::X86, InclusionPolicy::Unconditional);
    assert_eq!(
        filter.evaluate(Availability::only(Variants::X86_64)),
        Inclusion::Included
    );
    assert!(filter.admits(&r8()));
}

#[test]
fn test_conditional_honours_predicates() {
    let filter = AvailabilityFilter::with_policy(Family::X86, InclusionPolicy::Conditional);
    assert_eq!(
        filter.evaluate(Availability::only(Variants::X86_64)),
        Inclusion::Excluded
    );
    assert_eq!(
        filter.evaluate(Availability::only(Variants::X86 | Variants::X86_64)),
        Inclusion::Included
    );
}

#[test]
fn test_x86_excludes_64_bit_only_registers() {
    let legacy = AvailabilityFilter::for_family(Family::X86);
    let long = AvailabilityFilter::for_family(Family::X86_64);

    assert!(!legacy.admits(&r8()));
    assert!(long.admits(&r8()));
    assert!(legacy.admits(&ah()));
    assert!(long.admits(&ah()));
}
