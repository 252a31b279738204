//! Python bindings for the register namespaces.
//!
//! This crate exposes the process-wide registry to Python via PyO3. It provides:
//! 1. **Attribute access:** `REG.<FAMILY>.<NAME>` through `PyRegistry` and `PyNamespace`.
//! 2. **Lifecycle:** `init_registry` and `reset_registry`.
//! 3. **Utilities:** Family listing, per-register metadata, logging setup, version string.

use pyo3::prelude::*;
use regspace_core::{RegistryConfig, global};

/// Python dict to `RegistryConfig` conversion and exception mapping.
pub mod conversion;
/// `REG` root object and per-family namespace objects.
pub mod namespace;
/// Module-level functions.
pub mod utils;

/// Registers all classes and functions onto the given Python module.
///
/// Also builds the default registry, so `REG` is usable as soon as the module is
/// imported.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_registry_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<namespace::PyRegistry>()?;
    m.add_class::<namespace::PyNamespace>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_registry, m)?)?;
    m.add_function(wrap_pyfunction!(utils::reset_registry, m)?)?;
    m.add_function(wrap_pyfunction!(utils::enabled_families, m)?)?;
    m.add_function(wrap_pyfunction!(utils::register_info, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    let _ = global::initialize(&RegistryConfig::default());
    m.add("REG", namespace::PyRegistry)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_registry_module(m)?;
    Ok(())
}
