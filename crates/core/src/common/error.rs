//! Lookup errors and table defects.
//!
//! Two kinds of failure exist:
//! 1. **Lookup errors:** caller-supplied labels or names that do not resolve. These are
//!    ordinary, recoverable conditions.
//! 2. **Table defects:** structural problems found while loading a descriptor table or
//!    assembling a namespace. A registry is never built from a table that produced one.

use thiserror::Error;

use crate::isa::{Family, Isa};

/// Recoverable failure returned by registry and namespace lookups.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry has not been populated (or was reset and not rebuilt).
    #[error("registry not initialized")]
    NotInitialized,

    /// The label does not name a family present in this build.
    ///
    /// Holds the label exactly as the caller supplied it.
    #[error("family not supported: {0}")]
    FamilyNotSupported(String),

    /// The family exists but has no register with this name.
    #[error("unknown register name: {family}.{name}")]
    UnknownRegister {
        /// Family that was searched.
        family: Family,
        /// Name that was not found.
        name: String,
    },
}

/// Defect in a descriptor table or in the namespace assembled from it.
#[derive(Debug, Error)]
pub enum TableError {
    /// Two surviving descriptors of one family share a name.
    #[error("duplicate register name {name} in {family}")]
    DuplicateName {
        /// Family being assembled.
        family: Family,
        /// The colliding name.
        name: String,
    },

    /// Two records of one table share a name, whichever sections they sit in.
    #[error("duplicate descriptor {name} in {isa} table")]
    DuplicateDescriptor {
        /// Table being validated.
        isa: Isa,
        /// The colliding name.
        name: String,
    },

    /// A descriptor lacks a field every record of its schema must carry.
    #[error("{isa} descriptor #{index} is missing required field `{field}`")]
    MissingField {
        /// Table the record came from.
        isa: Isa,
        /// Position of the record in the sequence being processed.
        index: usize,
        /// Name of the empty or absent field.
        field: &'static str,
    },

    /// A record's bit range has its upper bit below its lower bit.
    #[error("{isa} descriptor {name} has inverted bit range [{upper}..{lower}]")]
    InvertedRange {
        /// Table the record came from.
        isa: Isa,
        /// Name of the offending record.
        name: String,
        /// Declared upper bit.
        upper: u32,
        /// Declared lower bit.
        lower: u32,
    },

    /// The serialized table could not be decoded into the family schema.
    #[error("malformed {isa} descriptor table: {source}")]
    Malformed {
        /// Table being loaded.
        isa: Isa,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The native enumeration has no identifier for a surviving descriptor.
    #[error("no raw id for {family}.{name}")]
    Unresolved {
        /// Family being assembled.
        family: Family,
        /// Descriptor name the resolver rejected.
        name: String,
    },

    /// A namespace for this family is already registered.
    #[error("family {0} registered twice")]
    DuplicateFamily(Family),
}
