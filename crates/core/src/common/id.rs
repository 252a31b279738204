//! Opaque register identifiers.
//!
//! Identifiers are assigned by the native register enumeration and are only carried
//! here. Numbering may be sparse; nothing in this crate assumes a dense range.

use std::fmt;

/// Raw register identifier as produced by the native enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegId(u32);

impl RegId {
    /// Identifier the native enumeration reserves for "no register".
    pub const INVALID: Self = Self(0);

    /// Wraps a raw identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the underlying integer.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for RegId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<RegId> for u32 {
    fn from(id: RegId) -> Self {
        id.0
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
