//! Library errors -> Python exceptions.

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// Every failure here is a bad argument from the caller.
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(format!("DynGillEpi: {err}"))
}
