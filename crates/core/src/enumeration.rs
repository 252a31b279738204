//! Raw identifier resolution.
//!
//! Identifiers belong to the native register enumeration; the builder only asks for
//! them. This module provides:
//! 1. **The seam:** `RawIdResolver`, the `rawIdOf(family, name)` function the builder
//!    consumes. Closures implement it, so tests and hosts can supply any numbering.
//! 2. **A reference enumeration:** `NativeEnumeration`, which lays identifiers out the
//!    way the native core does, from the same tables the namespaces are built from.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use crate::common::RegId;
use crate::isa::{self, Descriptor, Family};
use crate::table::DescriptorTable;

/// Source of raw register identifiers.
pub trait RawIdResolver {
    /// Identifier of `name` within `family`, or `None` if the enumeration has no such
    /// register.
    fn raw_id_of(&self, family: Family, name: &str) -> Option<RegId>;
}

impl<F> RawIdResolver for F
where
    F: Fn(Family, &str) -> Option<RegId>,
{
    fn raw_id_of(&self, family: Family, name: &str) -> Option<RegId> {
        self(family, name)
    }
}

/// Contiguous run of identifiers owned by one encoding space.
#[derive(Debug)]
struct Block {
    first: u32,
    ids: HashMap<String, RegId>,
}

/// Reference layout of the native register enumeration.
///
/// Identifier 0 is reserved as invalid. After it come one block per encoding space, in
/// table order: x86, AArch64, ARM32, then RV64 and RV32 when the `riscv` feature is on.
/// `X86_64` has no block of its own; it resolves through the x86 block, which is what
/// keeps identifiers stable between the two x86 namespaces.
#[derive(Debug)]
pub struct NativeEnumeration {
    blocks: HashMap<Family, Block>,
    next: u32,
}

impl NativeEnumeration {
    /// Lays out every encoding space compiled into this build.
    pub fn new() -> Self {
        let mut enumeration = Self {
            blocks: HashMap::new(),
            next: RegId::INVALID.raw() + 1,
        };
        enumeration.push_block(Family::X86, isa::x86::table());
        enumeration.push_block(Family::Aarch64, isa::aarch64::table());
        enumeration.push_block(Family::Arm32, isa::arm32::table());
        #[cfg(feature = "riscv")]
        {
            enumeration.push_block(Family::Rv64, isa::riscv::table());
            enumeration.push_block(Family::Rv32, isa::riscv::table());
        }
        enumeration
    }

    /// Process-wide instance, laid out on first use.
    pub fn shared() -> &'static Self {
        static SHARED: LazyLock<NativeEnumeration> = LazyLock::new(NativeEnumeration::new);
        &SHARED
    }

    fn push_block<D: Descriptor + Clone>(&mut self, space: Family, table: &DescriptorTable<D>) {
        let first = self.next;
        let mut ids = HashMap::with_capacity(table.len());
        for descriptor in table.iter() {
            let _ = ids
                .entry(descriptor.name().to_string())
                .or_insert_with(|| RegId::new(self.next));
            self.next += 1;
        }
        let _ = self.blocks.insert(space, Block { first, ids });
    }

    /// Identifier range owned by the encoding space `family` resolves through.
    pub fn block(&self, family: Family) -> Option<RangeInclusive<u32>> {
        let block = self.blocks.get(&family.encoding_space())?;
        let len = u32::try_from(block.ids.len()).ok()?;
        Some(block.first..=block.first + len.saturating_sub(1))
    }

    /// One past the highest identifier handed out.
    pub const fn end(&self) -> u32 {
        self.next
    }
}

impl Default for NativeEnumeration {
    fn default() -> Self {
        Self::new()
    }
}

impl RawIdResolver for NativeEnumeration {
    fn raw_id_of(&self, family: Family, name: &str) -> Option<RegId> {
        self.blocks
            .get(&family.encoding_space())?
            .ids
            .get(name)
            .copied()
    }
}
