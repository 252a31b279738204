//! Availability predicates and the per-family inclusion filter.
//!
//! A descriptor states in which ISA variants its encoding is addressable. Whether that
//! statement matters depends on the family being built:
//! 1. **Unconditional** families take every descriptor of their table.
//! 2. **Conditional** families take a descriptor only if it is addressable in them.
//!
//! This lets one physical table serve two variants where one variant addresses a subset
//! of the other's registers (the x86 table serves both `X86_64` and `X86`).

use bitflags::bitflags;

use crate::isa::{Descriptor, Family};

bitflags! {
    /// Set of ISA variants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Variants: u8 {
        /// 32-bit x86.
        const X86 = 1 << 0;
        /// x86-64.
        const X86_64 = 1 << 1;
        /// AArch64.
        const AARCH64 = 1 << 2;
        /// ARM32.
        const ARM32 = 1 << 3;
        /// RV64.
        const RV64 = 1 << 4;
        /// RV32.
        const RV32 = 1 << 5;
    }
}

/// Predicate set carried by a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Availability {
    variants: Variants,
}

impl Availability {
    /// Addressable in every variant.
    pub const fn everywhere() -> Self {
        Self {
            variants: Variants::all(),
        }
    }

    /// Addressable only in the given variants.
    pub const fn only(variants: Variants) -> Self {
        Self { variants }
    }

    /// Whether the encoding exists in `family`.
    pub const fn is_addressable_in(self, family: Family) -> bool {
        self.variants.contains(family.variant())
    }

    /// The raw variant set.
    pub const fn variants(self) -> Variants {
        self.variants
    }
}

/// How a family interprets descriptor predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InclusionPolicy {
    /// Predicates are ignored; every descriptor is taken.
    Unconditional,
    /// A descriptor is taken only if addressable in the family.
    Conditional,
}

/// Outcome of filtering one descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inclusion {
    /// The descriptor contributes an entry.
    Included,
    /// The descriptor is suppressed for this family.
    Excluded,
}

/// Availability filter bound to one family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvailabilityFilter {
    family: Family,
    policy: InclusionPolicy,
}

impl AvailabilityFilter {
    /// Filter using the family's own policy.
    pub const fn for_family(family: Family) -> Self {
        Self::with_policy(family, family.inclusion_policy())
    }

    /// Filter with an explicit policy.
    pub const fn with_policy(family: Family, policy: InclusionPolicy) -> Self {
        Self { family, policy }
    }

    /// Family the filter evaluates against.
    pub const fn family(&self) -> Family {
        self.family
    }

    /// Policy in force.
    pub const fn policy(&self) -> InclusionPolicy {
        self.policy
    }

    /// Evaluates a predicate set.
    pub const fn evaluate(&self, availability: Availability) -> Inclusion {
        match self.policy {
            InclusionPolicy::Unconditional => Inclusion::Included,
            InclusionPolicy::Conditional => {
                if availability.is_addressable_in(self.family) {
                    Inclusion::Included
                } else {
                    Inclusion::Excluded
                }
            }
        }
    }

    /// Whether `descriptor` survives the filter.
    pub fn admits<D: Descriptor>(&self, descriptor: &D) -> bool {
        self.evaluate(descriptor.availability()) == Inclusion::Included
    }
}
