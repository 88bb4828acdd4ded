//! `SIS_Poisson_homogeneous` entry point.

use dyngill_core::TemporalNetwork;
use dyngill_sis::{SisConfig, SisPoissonHomogeneous};
use pyo3::prelude::*;

use crate::error::value_error;
use crate::result::SiResult;

/// Simulate a homogeneous Poissonian SIS process on a temporal network.
///
/// `list_of_contact_lists[t]` holds the `(i, j)` contacts active in
/// slice `t`. Rates are per contact (β) or per infected node (μ) and
/// per Δt. `T_simulation = 0` runs one pass over the network; `seed = 0`
/// draws a seed from the clock (read it back from `SI_result.seed`).
/// The GIL is released while the ensemble runs.
#[pyfunction]
#[pyo3(
    name = "SIS_Poisson_homogeneous",
    signature = (
        N,
        list_of_contact_lists,
        infection_rate_per_dt,
        recovery_rate_per_dt,
        T_simulation = 0,
        output_time_resolution_in_dt = 1,
        number_of_simulations = 1,
        initial_number_of_infected = 1,
        seed = 0,
        t_infection_start = 0,
        verbose = false,
    )
)]
#[allow(clippy::too_many_arguments)]
pub(crate) fn sis_poisson_homogeneous(
    py: Python<'_>,
    N: u32,
    list_of_contact_lists: Vec<Vec<(u32, u32)>>,
    infection_rate_per_dt: f64,
    recovery_rate_per_dt: f64,
    T_simulation: usize,
    output_time_resolution_in_dt: usize,
    number_of_simulations: usize,
    initial_number_of_infected: u32,
    seed: u64,
    t_infection_start: usize,
    verbose: bool,
) -> PyResult<SiResult> {
    let network = TemporalNetwork::from_pairs(N, list_of_contact_lists).map_err(value_error)?;
    let config = SisConfig::builder()
        .node_count(N)
        .infection_rate(infection_rate_per_dt)
        .recovery_rate(recovery_rate_per_dt)
        .t_simulation(T_simulation)
        .output_time_resolution(output_time_resolution_in_dt)
        .number_of_simulations(number_of_simulations)
        .initial_number_of_infected(initial_number_of_infected)
        .seed(seed)
        .t_infection_start(t_infection_start)
        .verbose(verbose)
        .build()
        .map_err(value_error)?;

    let simulator = SisPoissonHomogeneous::new(config);
    let result = py
        .detach(|| simulator.run(&network))
        .map_err(value_error)?;
    Ok(SiResult::from(result))
}
