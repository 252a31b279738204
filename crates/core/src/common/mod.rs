//! Types shared across the registry.
//!
//! 1. **Identifiers:** the `RegId` newtype wrapping raw enumeration values.
//! 2. **Error Handling:** lookup errors and table defects.

/// Error types for lookups and table assembly.
pub mod error;

/// Opaque register identifier.
pub mod id;

pub use error::{RegistryError, TableError};
pub use id::RegId;
