//! # Unit Components
//!
//! Tests for each layer of the registry, from availability predicates up to the
//! process-wide instance.

/// Availability predicates and the inclusion filter.
pub mod availability;

/// Registry configuration defaults and JSON parsing.
pub mod config;

/// Reference native enumeration.
pub mod enumeration;



/// Namespace builder and namespace queries.
pub mod namespace;

/// Lookup properties over generated labels and names.
pub mod properties;

/// Registry lifecycle, lookups and error reporting.
pub mod registry;

/// Descriptor tables: static sections, JSON loading, validation.
pub mod table;
