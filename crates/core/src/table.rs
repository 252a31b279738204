//! Descriptor tables.
//!
//! A table is an ordered run of sections (architectural, pseudo and system registers for
//! instance), merged into one flat sequence in first-seen order. Built-in tables borrow
//! static sections; tables loaded from JSON own their records. Either way the table is
//! produced once and can be enumerated any number of times.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::common::TableError;
use crate::isa::{Descriptor, Family};

/// Ordered collection of descriptors for one ISA.
#[derive(Clone, Debug)]
pub struct DescriptorTable<D: Clone + 'static> {
    sections: Vec<Cow<'static, [D]>>,
}

impl<D: Descriptor + Clone + 'static> DescriptorTable<D> {
    /// Table over static sections, merged in the order given.
    ///
    /// No validation happens here; `validate` or the namespace builder catches defects.
    pub fn from_sections(sections: &[&'static [D]]) -> Self {
        Self {
            sections: sections.iter().map(|section| Cow::Borrowed(*section)).collect(),
        }
    }

    /// Table over owned records, validated.
    ///
    /// # Errors
    ///
    /// Returns a `TableError` if a record misses a required field, has an inverted bit
    /// range, or shares its name with another record.
    pub fn from_records(records: Vec<D>) -> Result<Self, TableError> {
        let table = Self {
            sections: vec![Cow::Owned(records)],
        };
        table.validate()?;
        Ok(table)
    }

    /// Loads a table from a JSON array of records in this ISA's schema.
    ///
    /// # Arguments
    ///
    /// * `json` - Serialized records, e.g. `[{"name": "R0", "lower_name": "r0", ...}]`.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Malformed` if the text does not decode into the schema (a
    /// required field absent, a wrong type), or any error `validate` reports.
    pub fn from_json(json: &str) -> Result<Self, TableError>
    where
        D: DeserializeOwned,
    {
        let records: Vec<D> = serde_json::from_str(json)
            .map_err(|source| TableError::Malformed { isa: D::ISA, source })?;
        Self::from_records(records)
    }

    /// Checks every record for empty required fields and inverted bit ranges, and the
    /// table for name collisions across sections.
    ///
    /// # Errors
    ///
    /// Returns the first defect found, in table order.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for (index, descriptor) in self.iter().enumerate() {
            if let Some(field) = descriptor.missing_field() {
                return Err(TableError::MissingField {
                    isa: D::ISA,
                    index,
                    field,
                });
            }
            for &family in Family::enabled().iter().filter(|family| family.isa() == D::ISA) {
                let layout = descriptor.layout(family);
                if layout.is_inverted() {
                    return Err(TableError::InvertedRange {
                        isa: D::ISA,
                        name: descriptor.name().to_string(),
                        upper: layout.upper,
                        lower: layout.lower,
                    });
                }
            }
            if !seen.insert(descriptor.name()) {
                return Err(TableError::DuplicateDescriptor {
                    isa: D::ISA,
                    name: descriptor.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// All records, sections concatenated in order.
    pub fn iter(&self) -> impl Iterator<Item = &D> + '_ {
        self.sections.iter().flat_map(|section| section.iter())
    }

    /// Total record count.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|section| section.len()).sum()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds a record by name.
    pub fn get(&self, name: &str) -> Option<&D> {
        self.iter().find(|descriptor| descriptor.name() == name)
    }
}
