//! Registry configuration.
//!
//! Selects which of the compiled-in families a registry is built with. Supplied as JSON
//! (the Python bindings convert their dicts through `json.dumps`), or use
//! `RegistryConfig::default()` for every compiled-in family.

use serde::Deserialize;

use crate::isa::Family;

/// Build-time selection for a `Registry`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Families to build, by label. Defaults to every family compiled into this build.
    /// A label that is unknown or compiled out fails deserialization. Repeats are built
    /// once.
    #[serde(default = "RegistryConfig::default_families")]
    pub families: Vec<Family>,
}

impl RegistryConfig {
    /// Every compiled-in family, in registry order.
    fn default_families() -> Vec<Family> {
        Family::enabled().to_vec()
    }

    /// Configuration building exactly `families`.
    pub fn only(families: impl IntoIterator<Item = Family>) -> Self {
        Self {
            families: families.into_iter().collect(),
        }
    }

    /// Parses a JSON configuration object, e.g. `{"families": ["X86_64", "AARCH64"]}`.
    ///
    /// # Errors
    ///
    /// Returns the decoder error for malformed JSON, unknown keys, and unsupported
    /// family labels.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            families: Self::default_families(),
        }
    }
}
