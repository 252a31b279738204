//! Per-family namespaces and the builder that assembles them.
//!
//! A namespace is a closed `name -> identifier` mapping for one family. It is produced in
//! one pass over a filtered descriptor sequence and never changes afterwards; rebuilding
//! means constructing a new one.

use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;

use crate::availability::AvailabilityFilter;
use crate::common::{RegId, RegistryError, TableError};
use crate::enumeration::RawIdResolver;
use crate::isa::{Descriptor, Family, Layout, RegisterKind};
use crate::table::DescriptorTable;

/// One resolved register of a namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Identifier supplied by the native enumeration.
    pub id: RegId,
    /// Section of the table the register came from.
    pub kind: RegisterKind,
    /// Bit layout as seen from this namespace's family.
    pub layout: Layout,
    /// Whether the register may be written.
    pub mutable: bool,
}

/// Immutable register namespace of one family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    family: Family,
    entries: IndexMap<String, Entry>,
}

impl Namespace {
    /// Family the namespace belongs to.
    pub const fn family(&self) -> Family {
        self.family
    }

    /// Family label (`"X86_64"`, ...).
    pub const fn label(&self) -> &'static str {
        self.family.label()
    }

    /// Identifier of `name`, if present.
    pub fn get(&self, name: &str) -> Option<RegId> {
        self.entries.get(name).map(|entry| entry.id)
    }

    /// Identifier of `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownRegister` if the namespace has no such name.
    pub fn lookup(&self, name: &str) -> Result<RegId, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::UnknownRegister {
            family: self.family,
            name: name.to_string(),
        })
    }

    /// Full entry of `name`, if present.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Whether `name` is a member.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// `(name, identifier)` pairs in descriptor order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RegId)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.id))
    }

    /// Member names in descriptor order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the namespace has no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates entries for one family, rejecting duplicates.
#[derive(Debug)]
pub struct NamespaceBuilder {
    family: Family,
    entries: IndexMap<String, Entry>,
}

impl NamespaceBuilder {
    /// Starts an empty namespace for `family`.
    pub fn new(family: Family) -> Self {
        Self {
            family,
            entries: IndexMap::new(),
        }
    }

    /// Adds one entry.
    ///
    /// # Errors
    ///
    /// Returns `TableError::DuplicateName` if `name` is already present. The existing
    /// entry is left untouched.
    pub fn insert(&mut self, name: &str, entry: Entry) -> Result<(), TableError> {
        match self.entries.entry(name.to_string()) {
            MapEntry::Occupied(_) => Err(TableError::DuplicateName {
                family: self.family,
                name: name.to_string(),
            }),
            MapEntry::Vacant(slot) => {
                let _ = slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Resolves and adds one descriptor.
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingField` for a record with an empty required field,
    /// `TableError::InvertedRange` for a bit range with its bits swapped,
    /// `TableError::Unresolved` if the resolver has no identifier for it, and
    /// `TableError::DuplicateName` for a repeated name.
    pub fn push<D, R>(
        &mut self,
        index: usize,
        descriptor: &D,
        resolver: &R,
    ) -> Result<(), TableError>
    where
        D: Descriptor,
        R: RawIdResolver + ?Sized,
    {
        if let Some(field) = descriptor.missing_field() {
            return Err(TableError::MissingField {
                isa: D::ISA,
                index,
                field,
            });
        }
        let name = descriptor.name();
        let layout = descriptor.layout(self.family);
        if layout.is_inverted() {
            return Err(TableError::InvertedRange {
                isa: D::ISA,
                name: name.to_string(),
                upper: layout.upper,
                lower: layout.lower,
            });
        }
        let id = resolver
            .raw_id_of(self.family, name)
            .ok_or_else(|| TableError::Unresolved {
                family: self.family,
                name: name.to_string(),
            })?;
        self.insert(
            name,
            Entry {
                id,
                kind: descriptor.kind(),
                layout,
                mutable: descriptor.is_mutable(),
            },
        )
    }

    /// Seals the namespace.
    pub fn finish(self) -> Namespace {
        Namespace {
            family: self.family,
            entries: self.entries,
        }
    }
}

/// Builds a namespace from an already filtered descriptor sequence.
///
/// # Arguments
///
/// * `family` - Namespace label.
/// * `descriptors` - Survivors of the availability filter, in table order.
/// * `resolver` - Source of raw identifiers.
///
/// # Errors
///
/// Returns the first `TableError` met; no namespace is produced in that case.
pub fn build<'a, D, I, R>(
    family: Family,
    descriptors: I,
    resolver: &R,
) -> Result<Namespace, TableError>
where
    D: Descriptor + 'a,
    I: IntoIterator<Item = &'a D>,
    R: RawIdResolver + ?Sized,
{
    let mut builder = NamespaceBuilder::new(family);
    for (index, descriptor) in descriptors.into_iter().enumerate() {
        builder.push(index, descriptor, resolver)?;
    }
    Ok(builder.finish())
}

/// Validates `table`, filters it for `family` and builds the namespace from the
/// survivors.
///
/// # Errors
///
/// Returns the first `TableError` met. Name collisions anywhere in the table are
/// reported even when the filter would drop one side.
pub fn assemble<D, R>(
    family: Family,
    table: &DescriptorTable<D>,
    resolver: &R,
) -> Result<Namespace, TableError>
where
    D: Descriptor + Clone,
    R: RawIdResolver + ?Sized,
{
    table.validate()?;
    let filter = AvailabilityFilter::for_family(family);
    let namespace = build(
        family,
        table.iter().filter(|descriptor| filter.admits(*descriptor)),
        resolver,
    )?;
    tracing::debug!(
        family = %family,
        admitted = namespace.len(),
        excluded = table.len().saturating_sub(namespace.len()),
        "namespace assembled"
    );
    Ok(namespace)
}
