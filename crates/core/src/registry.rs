//! The registry: every family's namespace under its label.
//!
//! A registry is either `Empty` or `Populated`. It is built once by `Registry::build`,
//! queried read-only afterwards, and emptied only by an explicit `reset` ahead of a fresh
//! build. Lookups in the `Empty` state always report `NotInitialized`, whatever the
//! label.

use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;

use crate::common::{RegId, RegistryError, TableError};
use crate::config::RegistryConfig;
use crate::enumeration::{NativeEnumeration, RawIdResolver};
use crate::isa::{self, Family, Isa};
use crate::namespace::{Namespace, assemble};

/// Observable registry state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistryState {
    /// Initial, and after `reset`.
    #[default]
    Empty,
    /// Built or registered into, even if no family was selected.
    Populated,
}

/// Aggregate of per-family namespaces.
///
/// Once populated a registry is immutable and may be read from any number of threads.
/// `register` and `reset` take `&mut self`; mutating a registry that other threads read
/// through shared handles is the caller's business to prevent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    namespaces: IndexMap<Family, Namespace>,
    state: RegistryState,
}

impl Registry {
    /// Creates a registry in the `Empty` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every family `config` selects.
    ///
    /// # Arguments
    ///
    /// * `config` - Families to build.
    /// * `resolver` - Source of raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns the first `TableError`. Nothing is returned in that case, so a registry
    /// with only some of its namespaces can never escape.
    pub fn build<R>(config: &RegistryConfig, resolver: &R) -> Result<Self, TableError>
    where
        R: RawIdResolver + ?Sized,
    {
        let mut registry = Self::new();
        for &family in &config.families {
            if registry.namespaces.contains_key(&family) {
                continue;
            }
            registry.register(assemble_family(family, resolver)?)?;
        }
        registry.state = RegistryState::Populated;
        tracing::info!(
            families = registry.len(),
            registers = registry.iter().map(Namespace::len).sum::<usize>(),
            "register registry populated"
        );
        Ok(registry)
    }

    /// Builds every compiled-in family against the reference enumeration.
    ///
    /// # Errors
    ///
    /// Returns a `TableError` if a built-in table is defective.
    pub fn build_default() -> Result<Self, TableError> {
        Self::build(&RegistryConfig::default(), NativeEnumeration::shared())
    }

    /// Adds a completed namespace under its family label.
    ///
    /// # Errors
    ///
    /// Returns `TableError::DuplicateFamily` if the family is already registered; the
    /// registered namespace is kept.
    pub fn register(&mut self, namespace: Namespace) -> Result<(), TableError> {
        match self.namespaces.entry(namespace.family()) {
            MapEntry::Occupied(slot) => Err(TableError::DuplicateFamily(*slot.key())),
            MapEntry::Vacant(slot) => {
                let _ = slot.insert(namespace);
                self.state = RegistryState::Populated;
                Ok(())
            }
        }
    }

    /// Drops every namespace, returning the registry to `Empty`.
    pub fn reset(&mut self) {
        self.namespaces.clear();
        self.state = RegistryState::Empty;
    }

    /// Current state.
    pub const fn state(&self) -> RegistryState {
        self.state
    }

    /// Namespace registered under `label`.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` in the `Empty` state, and `FamilyNotSupported` for a label
    /// that is unknown, compiled out, or simply not built.
    pub fn namespace(&self, label: &str) -> Result<&Namespace, RegistryError> {
        if self.state == RegistryState::Empty {
            return Err(RegistryError::NotInitialized);
        }
        let family: Family = label.parse()?;
        self.namespaces
            .get(&family)
            .ok_or_else(|| RegistryError::FamilyNotSupported(label.to_string()))
    }

    /// Identifier of `name` in the family labelled `label`.
    ///
    /// # Errors
    ///
    /// Everything `namespace` reports, plus `UnknownRegister` for a name the family does
    /// not have.
    pub fn lookup(&self, label: &str, name: &str) -> Result<RegId, RegistryError> {
        self.namespace(label)?.lookup(name)
    }

    /// Namespace of `family`, if registered.
    pub fn get(&self, family: Family) -> Option<&Namespace> {
        self.namespaces.get(&family)
    }

    /// Families registered, in insertion order.
    pub fn families(&self) -> impl Iterator<Item = Family> + '_ {
        self.namespaces.keys().copied()
    }

    /// Namespaces, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> + '_ {
        self.namespaces.values()
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether no namespace is registered.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Builds one family's namespace from its built-in table.
///
/// # Errors
///
/// Returns the first `TableError` met.
pub fn assemble_family<R>(family: Family, resolver: &R) -> Result<Namespace, TableError>
where
    R: RawIdResolver + ?Sized,
{
    match family.isa() {
        Isa::X86 => assemble(family, isa::x86::table(), resolver),
        Isa::Aarch64 => assemble(family, isa::aarch64::table(), resolver),
        Isa::Arm32 => assemble(family, isa::arm32::table(), resolver),
        #[cfg(feature = "riscv")]
        Isa::Riscv => assemble(family, isa::riscv::table(), resolver),
    }
}
