//! Module-level functions exposed to Python.
//!
//! Registry lifecycle (`init_registry`, `reset_registry`), introspection
//! (`enabled_families`, `register_info`), logging setup and the version string.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use regspace_core::{Family, RegistryConfig, RegistryError, global};
use tracing_subscriber::EnvFilter;

use crate::conversion::{py_dict_to_config, registry_error_to_py};

/// Returns the package version string.
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Builds and installs the registry.
///
/// # Arguments
///
/// * `config` - Optional dict such as `{"families": ["X86_64"]}`; every compiled-in
///   family when omitted.
///
/// # Returns
///
/// Labels of the families now registered.
#[pyfunction]
#[pyo3(signature = (config=None))]
pub fn init_registry(
    py: Python<'_>,
    config: Option<&Bound<'_, PyAny>>,
) -> PyResult<Vec<&'static str>> {
    let config = match config {
        Some(dict) => py_dict_to_config(py, dict)?,
        None => RegistryConfig::default(),
    };
    let registry = global::initialize(&config);
    Ok(registry.families().map(Family::label).collect())
}

/// Empties the registry. Lookups raise `RuntimeError` until `init_registry` runs again.
#[pyfunction]
pub fn reset_registry() {
    global::reset();
}

/// Labels of every family compiled into this build.
#[pyfunction]
pub fn enabled_families() -> Vec<&'static str> {
    Family::enabled().iter().map(|family| family.label()).collect()
}

/// Describes one register.
///
/// # Returns
///
/// A dict with `id`, `kind`, `width`, `upper`, `lower`, `parent` and `mutable`.
#[pyfunction]
pub fn register_info<'py>(
    py: Python<'py>,
    family: &str,
    name: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let registry = global::snapshot();
    let namespace = registry
        .namespace(family)
        .map_err(|e| registry_error_to_py(&e))?;
    let entry = namespace.entry(name).ok_or_else(|| {
        registry_error_to_py(&RegistryError::UnknownRegister {
            family: namespace.family(),
            name: name.to_string(),
        })
    })?;

    let d = PyDict::new(py);
    d.set_item("id", entry.id.raw())?;
    d.set_item("kind", entry.kind.to_string())?;
    d.set_item("width", entry.layout.width())?;
    d.set_item("upper", entry.layout.upper)?;
    d.set_item("lower", entry.layout.lower)?;
    d.set_item("parent", &*entry.layout.parent)?;
    d.set_item("mutable", entry.mutable)?;
    Ok(d)
}

/// Installs a `tracing` fmt subscriber for the registry's log output.
///
/// # Arguments
///
/// * `filter` - `EnvFilter` directive such as `"regspace_core=debug"`. Falls back to
///   `RUST_LOG`, then to `info`.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> PyResult<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| PyValueError::new_err(format!("Invalid log filter: {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| PyRuntimeError::new_err(format!("Logging already initialized: {e}")))
}
