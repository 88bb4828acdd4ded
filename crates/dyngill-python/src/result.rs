//! `SI_result`: the ensemble returned to Python.

use dyngill_sis::SisResult;
use numpy::{PyArray1, PyArray2};
use pyo3::prelude::*;

use crate::error::value_error;

/// Result of `SIS_Poisson_homogeneous`.
///
/// `I` and `SI` are `(runs, frames)` arrays; `hist` holds the infected
/// count at the end of each run; `true_t`, `true_I` and `true_SI` are
/// per-run event trajectories.
#[pyclass(name = "SI_result", frozen)]
pub(crate) struct SiResult {
    i: Vec<Vec<usize>>,
    si: Vec<Vec<usize>>,
    hist: Vec<usize>,
    true_t: Vec<Vec<f64>>,
    true_i: Vec<Vec<usize>>,
    true_si: Vec<Vec<usize>>,
    seed: u64,
    infection_events: u64,
    recovery_events: u64,
    total_us: u64,
}

impl From<SisResult> for SiResult {
    fn from(result: SisResult) -> Self {
        let trajectories = result.trajectories();
        Self {
            i: result.i().to_vec(),
            si: result.si().to_vec(),
            hist: result.hist().to_vec(),
            true_t: trajectories.iter().map(|tr| tr.t.clone()).collect(),
            true_i: trajectories.iter().map(|tr| tr.i.clone()).collect(),
            true_si: trajectories.iter().map(|tr| tr.si.clone()).collect(),
            seed: result.seed(),
            infection_events: result.metrics().infection_events,
            recovery_events: result.metrics().recovery_events,
            total_us: result.metrics().total_us,
        }
    }
}

#[pymethods]
impl SiResult {
    /// Infected count per run and frame.
    #[getter(I)]
    fn i<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<usize>>> {
        PyArray2::from_vec2(py, &self.i).map_err(value_error)
    }

    /// SI-link count per run and frame.
    #[getter(SI)]
    fn si<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<usize>>> {
        PyArray2::from_vec2(py, &self.si).map_err(value_error)
    }

    /// Infected count at the end of each run.
    #[getter]
    fn hist<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<usize>> {
        PyArray1::from_slice(py, &self.hist)
    }

    /// Event times per run, in units of Δt.
    #[getter]
    fn true_t(&self) -> Vec<Vec<f64>> {
        self.true_t.clone()
    }

    /// Infected count after each event, per run.
    #[getter(true_I)]
    fn true_i(&self) -> Vec<Vec<usize>> {
        self.true_i.clone()
    }

    /// SI-link count after each event, per run.
    #[getter(true_SI)]
    fn true_si(&self) -> Vec<Vec<usize>> {
        self.true_si.clone()
    }

    /// Seed the ensemble ran with. Pass it back to reproduce a
    /// clock-seeded call.
    #[getter]
    fn seed(&self) -> u64 {
        self.seed
    }

    /// `(infection_events, recovery_events, total_us)` for the ensemble.
    fn metrics(&self) -> (u64, u64, u64) {
        (self.infection_events, self.recovery_events, self.total_us)
    }

    fn __repr__(&self) -> String {
        let frames = self.i.first().map_or(0, Vec::len);
        format!(
            "SI_result(runs={}, frames={}, seed={})",
            self.i.len(),
            frames,
            self.seed
        )
    }
}
