//! Per-architecture register namespaces.
//!
//! This crate turns static register descriptor tables into closed `name -> identifier`
//! namespaces, one per ISA family, with the following:
//! 1. **Tables:** Descriptor records for x86, AArch64, ARM32 and (with `riscv`) RISC-V,
//!    compiled in or loaded from JSON.
//! 2. **Filtering:** Availability tags and per-family inclusion policy.
//! 3. **Namespaces:** Immutable per-family maps built in one pass, duplicates rejected.
//! 4. **Registry:** Family-keyed aggregate with an explicit empty/populated lifecycle,
//!    plus a process-wide instance for hosts that want one.

/// Register availability tags and the per-family filter.
pub mod availability;
/// Shared types (identifiers, errors).
pub mod common;
/// Registry build configuration.
pub mod config;
/// Raw identifier resolution and the reference native enumeration.
pub mod enumeration;
/// Process-wide registry instance.
pub mod global;
/// ISA families and per-ISA descriptor tables.
pub mod isa;
/// Per-family namespaces and their builder.
pub mod namespace;
/// Family-keyed aggregate of namespaces.
pub mod registry;
/// Validated collections of descriptor records.
pub mod table;

/// Identifier type carried by every namespace entry.
pub use crate::common::RegId;
/// Error types; `RegistryError` for lookups, `TableError` for defective tables.
pub use crate::common::{RegistryError, TableError};
/// Build configuration; use `RegistryConfig::default()` or deserialize from JSON.
pub use crate::config::RegistryConfig;
/// Identifier source consumed by the builder.
pub use crate::enumeration::{NativeEnumeration, RawIdResolver};
/// Namespace labels.
pub use crate::isa::Family;
/// A single family's namespace.
pub use crate::namespace::Namespace;
/// The aggregate; construct with `Registry::build`.
pub use crate::registry::{Registry, RegistryState};
