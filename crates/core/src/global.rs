//! Process-wide registry instance.
//!
//! The registry lives behind an `ArcSwap`, so readers take a lock-free snapshot and
//! always observe either the empty registry or a completely built one. Writers replace
//! the whole registry in one store.
//!
//! Initialization treats a table defect as fatal: the defect is logged and the call
//! panics, leaving the instance empty rather than partially populated.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::common::{RegId, RegistryError};
use crate::config::RegistryConfig;
use crate::enumeration::{NativeEnumeration, RawIdResolver};
use crate::registry::{Registry, RegistryState};

static CURRENT: LazyLock<ArcSwap<Registry>> =
    LazyLock::new(|| ArcSwap::from_pointee(Registry::new()));

/// Builds the families `config` selects and installs the result.
///
/// Any previously installed registry is cleared before the build starts.
///
/// # Panics
///
/// Panics if a built-in descriptor table is defective.
pub fn initialize(config: &RegistryConfig) -> Arc<Registry> {
    initialize_with(config, NativeEnumeration::shared())
}

/// Same as `initialize`, resolving identifiers through `resolver`.
///
/// # Panics
///
/// Panics if a descriptor table is defective or `resolver` cannot resolve a surviving
/// descriptor.
pub fn initialize_with<R>(config: &RegistryConfig, resolver: &R) -> Arc<Registry>
where
    R: RawIdResolver + ?Sized,
{
    reset();
    match Registry::build(config, resolver) {
        Ok(registry) => install(registry),
        Err(defect) => {
            tracing::error!(%defect, "register table defect, registry left empty");
            panic!("register table defect: {defect}");
        }
    }
}

/// Installs an already built registry, replacing the current one.
pub fn install(registry: Registry) -> Arc<Registry> {
    let registry = Arc::new(registry);
    CURRENT.store(Arc::clone(&registry));
    registry
}

/// Empties the instance.
pub fn reset() {
    let previous = CURRENT.swap(Arc::new(Registry::new()));
    if previous.state() == RegistryState::Populated {
        tracing::info!(families = previous.len(), "register registry reset");
    }
}

/// Current registry.
pub fn snapshot() -> Arc<Registry> {
    CURRENT.load_full()
}

/// Current state.
pub fn state() -> RegistryState {
    CURRENT.load().state()
}

/// Looks `name` up in the family labelled `label` of the current registry.
///
/// # Errors
///
/// See `Registry::lookup`.
pub fn lookup(label: &str, name: &str) -> Result<RegId, RegistryError> {
    CURRENT.load().lookup(label, name)
}
