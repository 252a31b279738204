//! ISA families and their register descriptor schemas.
//!
//! This module defines what a descriptor is and which families exist. It provides:
//! 1. **Families:** the labels a registry is keyed by (`X86`, `X86_64`, `AARCH64`, `ARM32`,
//!    and `RV64`/`RV32` with the `riscv` feature).
//! 2. **Tables:** one descriptor table per ISA. Families that are variants of one ISA share
//!    its table (`X86` and `X86_64` both read the x86 table).
//! 3. **Schema:** the `Descriptor` trait every per-ISA record type implements, plus the
//!    layout and kind metadata records carry.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::availability::{Availability, InclusionPolicy, Variants};
use crate::common::RegistryError;

/// AArch64 descriptor table.
pub mod aarch64;

/// ARM32 descriptor table.
pub mod arm32;

/// RISC-V descriptor table shared by RV64 and RV32.
#[cfg(feature = "riscv")]
pub mod riscv;

/// x86 descriptor table shared by X86 and X86_64.
pub mod x86;

#[cfg(not(feature = "riscv"))]
const ENABLED: &[Family] = &[Family::X86, Family::X86_64, Family::Aarch64, Family::Arm32];

#[cfg(feature = "riscv")]
const ENABLED: &[Family] = &[
    Family::X86,
    Family::X86_64,
    Family::Aarch64,
    Family::Arm32,
    Family::Rv64,
    Family::Rv32,
];

/// A namespace label: one ISA or one variant of an ISA.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Family {
    /// 32-bit x86.
    X86,
    /// x86-64.
    X86_64,
    /// 64-bit ARM.
    Aarch64,
    /// 32-bit ARM.
    Arm32,
    /// 64-bit RISC-V.
    #[cfg(feature = "riscv")]
    Rv64,
    /// 32-bit RISC-V.
    #[cfg(feature = "riscv")]
    Rv32,
}

impl Family {
    /// Families compiled into this build, in registry order.
    pub const fn enabled() -> &'static [Self] {
        ENABLED
    }

    /// Label used as the namespace key and the host attribute name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::X86 => "X86",
            Self::X86_64 => "X86_64",
            Self::Aarch64 => "AARCH64",
            Self::Arm32 => "ARM32",
            #[cfg(feature = "riscv")]
            Self::Rv64 => "RV64",
            #[cfg(feature = "riscv")]
            Self::Rv32 => "RV32",
        }
    }

    /// Descriptor table this family reads.
    pub const fn isa(self) -> Isa {
        match self {
            Self::X86 | Self::X86_64 => Isa::X86,
            Self::Aarch64 => Isa::Aarch64,
            Self::Arm32 => Isa::Arm32,
            #[cfg(feature = "riscv")]
            Self::Rv64 | Self::Rv32 => Isa::Riscv,
        }
    }

    /// Family whose identifier block this family resolves through.
    ///
    /// `X86` and `X86_64` draw from one encoding space, so a register present in both
    /// carries the same identifier in both. Every other family owns its block.
    pub const fn encoding_space(self) -> Self {
        match self {
            Self::X86_64 => Self::X86,
            other => other,
        }
    }

    /// How the availability filter treats this family's predicates.
    ///
    /// Only the 32-bit x86 namespace honours the per-register availability flag; every
    /// other family takes its whole table.
    pub const fn inclusion_policy(self) -> InclusionPolicy {
        match self {
            Self::X86 => InclusionPolicy::Conditional,
            _ => InclusionPolicy::Unconditional,
        }
    }

    /// Availability bit naming this family.
    pub const fn variant(self) -> Variants {
        match self {
            Self::X86 => Variants::X86,
            Self::X86_64 => Variants::X86_64,
            Self::Aarch64 => Variants::AARCH64,
            Self::Arm32 => Variants::ARM32,
            #[cfg(feature = "riscv")]
            Self::Rv64 => Variants::RV64,
            #[cfg(feature = "riscv")]
            Self::Rv32 => Variants::RV32,
        }
    }

    /// Register width in bits for XLEN-sized registers of this family.
    pub const fn native_width(self) -> u32 {
        match self {
            Self::X86 | Self::Arm32 => 32,
            Self::X86_64 | Self::Aarch64 => 64,
            #[cfg(feature = "riscv")]
            Self::Rv64 => 64,
            #[cfg(feature = "riscv")]
            Self::Rv32 => 32,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Family {
    type Err = RegistryError;

    /// Parses a label as the host spells it. Labels of families compiled out of this
    /// build are unsupported, exactly like labels that never existed.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        ENABLED
            .iter()
            .copied()
            .find(|family| family.label() == label)
            .ok_or_else(|| RegistryError::FamilyNotSupported(label.to_string()))
    }
}

impl TryFrom<String> for Family {
    type Error = RegistryError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Identity of a descriptor table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Isa {
    /// x86 / x86-64.
    X86,
    /// AArch64.
    Aarch64,
    /// ARM32.
    Arm32,
    /// RISC-V (both XLENs).
    #[cfg(feature = "riscv")]
    Riscv,
}

impl fmt::Display for Isa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X86 => "x86",
            Self::Aarch64 => "aarch64",
            Self::Arm32 => "arm32",
            #[cfg(feature = "riscv")]
            Self::Riscv => "riscv",
        })
    }
}

/// Which section of a table a descriptor came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterKind {
    /// Register the disassembler knows about.
    #[default]
    Architectural,
    /// Register the disassembler does not model (individual flag bits and the like).
    Pseudo,
    /// System or privileged register.
    System,
}

impl fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Architectural => "architectural",
            Self::Pseudo => "pseudo",
            Self::System => "system",
        })
    }
}

/// Bit range a register occupies inside its parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Layout {
    /// Highest bit, inclusive.
    pub upper: u32,
    /// Lowest bit, inclusive.
    pub lower: u32,
    /// Name of the enclosing register (the register itself for full-width registers).
    pub parent: Cow<'static, str>,
}

impl Layout {
    /// Builds a layout over a static parent name.
    pub const fn new(upper: u32, lower: u32, parent: &'static str) -> Self {
        Self {
            upper,
            lower,
            parent: Cow::Borrowed(parent),
        }
    }

    /// Number of bits covered, saturating at `u32::MAX`.
    pub const fn width(&self) -> u32 {
        self.upper.saturating_sub(self.lower).saturating_add(1)
    }

    /// Whether the upper bit is below the lower bit.
    pub const fn is_inverted(&self) -> bool {
        self.upper < self.lower
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bv[{}..{}] of {}", self.upper, self.lower, self.parent)
    }
}

/// One record of a per-ISA descriptor table.
///
/// Record types differ per ISA in field count and meaning; this trait is the common view
/// the filter and the builder need.
pub trait Descriptor {
    /// Table this schema belongs to.
    const ISA: Isa;

    /// Canonical name token (the namespace key).
    fn name(&self) -> &str;

    /// Section of the table the record belongs to.
    fn kind(&self) -> RegisterKind;

    /// Variants in which this register encoding is addressable.
    fn availability(&self) -> Availability;

    /// Bit layout of the register as seen from `family`.
    fn layout(&self, family: Family) -> Layout;

    /// Whether the register may be written.
    fn is_mutable(&self) -> bool {
        true
    }

    /// Name of the first required field that is empty, if any.
    fn missing_field(&self) -> Option<&'static str> {
        if self.name().is_empty() {
            Some("name")
        } else {
            None
        }
    }
}
