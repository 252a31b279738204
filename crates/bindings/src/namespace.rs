//! Attribute-style registry access.
//!
//! `REG` is a `PyRegistry`; `REG.X86_64` yields a `PyNamespace`; `REG.X86_64.AH` yields
//! the raw identifier as an `int`. Both objects read the process-wide registry on every
//! access, so a later `reset_registry` or `init_registry` is seen immediately.

use pyo3::prelude::*;
use regspace_core::{Family, global};

use crate::conversion::attribute_error_to_py;

/// Python-exposed root object: one attribute per registered family.
#[pyclass(frozen, name = "Registry")]
#[derive(Debug, Default)]
pub struct PyRegistry;

#[pymethods]
impl PyRegistry {
    fn __getattr__(&self, label: &str) -> PyResult<PyNamespace> {
        let registry = global::snapshot();
        let namespace = registry
            .namespace(label)
            .map_err(|e| attribute_error_to_py(label, &e))?;
        Ok(PyNamespace {
            family: namespace.family(),
        })
    }

    fn __dir__(&self) -> Vec<&'static str> {
        global::snapshot().families().map(Family::label).collect()
    }

    fn __repr__(&self) -> String {
        let labels: Vec<&str> = global::snapshot().families().map(Family::label).collect();
        format!("<REG [{}]>", labels.join(", "))
    }
}

/// Python-exposed namespace of one family.
#[pyclass(frozen, name = "Namespace")]
#[derive(Debug, Clone, Copy)]
pub struct PyNamespace {
    family: Family,
}

#[pymethods]
impl PyNamespace {
    fn __getattr__(&self, name: &str) -> PyResult<u32> {
        global::lookup(self.family.label(), name)
            .map(u32::from)
            .map_err(|e| attribute_error_to_py(name, &e))
    }

    fn __dir__(&self) -> Vec<String> {
        global::snapshot()
            .get(self.family)
            .map(|namespace| namespace.names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn __len__(&self) -> usize {
        global::snapshot().get(self.family).map_or(0, |namespace| namespace.len())
    }

    fn __repr__(&self) -> String {
        format!("<REG.{}: {} registers>", self.family, self.__len__())
    }

    /// Family label of this namespace.
    #[getter]
    fn label(&self) -> &'static str {
        self.family.label()
    }
}
