//! Python bindings for DynGill.
//!
//! The native extension is named `DynGillEpi` and keeps the names of
//! the established Python interface: `SIS_Poisson_homogeneous` returns
//! an `SI_result`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(non_snake_case)]

use pyo3::prelude::*;

mod error;
mod result;
mod simulate;

/// The native `DynGillEpi` extension module.
#[pymodule]
fn DynGillEpi(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<result::SiResult>()?;
    m.add_function(wrap_pyfunction!(simulate::sis_poisson_homogeneous, m)?)?;
    Ok(())
}
