//! Python to Rust configuration and error conversion.
//!
//! Converts Python dicts into the core `RegistryConfig` via JSON serialization, so the
//! same schema is accepted from Python and from JSON files, and maps registry lookup
//! errors onto Python exception types.

use pyo3::exceptions::{PyAttributeError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use regspace_core::{RegistryConfig, RegistryError};

/// Converts a Python dict to a `RegistryConfig`.
///
/// The dict is serialized to JSON and then deserialized, so keys must match the Rust
/// structure (`families`).
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A Python dict such as `{"families": ["X86_64", "AARCH64"]}`.
///
/// # Returns
///
/// The deserialized `RegistryConfig`, or a `ValueError` if the dict is invalid.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<RegistryConfig> {
    let json = py.import("json")?;
    let dumps = json.getattr("dumps")?;
    let json_str: String = dumps.call1((dict,))?.extract()?;

    RegistryConfig::from_json(&json_str)
        .map_err(|e| PyValueError::new_err(format!("Invalid config: {e}")))
}

/// Maps a lookup error to the Python exception attribute access should raise.
///
/// Missing families and names raise `AttributeError`, so `hasattr` and `getattr` with a
/// default behave as expected; querying an uninitialized registry raises `RuntimeError`.
pub fn registry_error_to_py(err: &RegistryError) -> PyErr {
    match err {
        RegistryError::NotInitialized => PyRuntimeError::new_err(err.to_string()),
        RegistryError::FamilyNotSupported(_) | RegistryError::UnknownRegister { .. } => {
            PyAttributeError::new_err(err.to_string())
        }
    }
}

/// Exception class a failed attribute lookup maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeFailure {
    /// `AttributeError`.
    Missing,
    /// `RuntimeError`.
    Uninitialized,
}

/// Classifies a failed `REG` attribute lookup.
///
/// Underscore names are never registers; they come from introspection (`_repr_html_`,
/// `__wrapped__`) and must stay `AttributeError` even before initialization.
pub fn classify_attribute_failure(attribute: &str, err: &RegistryError) -> AttributeFailure {
    match err {
        RegistryError::NotInitialized if !attribute.starts_with('_') => {
            AttributeFailure::Uninitialized
        }
        _ => AttributeFailure::Missing,
    }
}

/// Maps a failed `REG` attribute lookup to a Python exception.
pub fn attribute_error_to_py(attribute: &str, err: &RegistryError) -> PyErr {
    match classify_attribute_failure(attribute, err) {
        AttributeFailure::Missing => PyAttributeError::new_err(err.to_string()),
        AttributeFailure::Uninitialized => PyRuntimeError::new_err(err.to_string()),
    }
}
