//! Benchmark profiles for DynGill.
//!
//! - [`reference_network`] / [`reference_config`]: the demonstration
//!   setup (N = 10, 10 slices, 100 runs of 100 Δt)
//! - [`stress_network`] / [`stress_config`]: N = 2000 over 50 slices,
//!   mean degree 4, 20 runs of 500 Δt

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dyngill_core::TemporalNetwork;
use dyngill_graph::{default_edge_probability, random_temporal_network};
use dyngill_sis::SisConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Population of the reference profile.
pub const REFERENCE_NODES: u32 = 10;
/// Population of the stress profile.
pub const STRESS_NODES: u32 = 2000;

fn network(n: u32, p: f64, slices: usize, seed: u64) -> TemporalNetwork {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_temporal_network(n, p, slices, &mut rng).expect("profile parameters are valid")
}

/// Ten independent G(10, 2/9) slices.
pub fn reference_network(seed: u64) -> TemporalNetwork {
    network(
        REFERENCE_NODES,
        default_edge_probability(REFERENCE_NODES),
        10,
        seed,
    )
}

/// β = 10, μ = 1, three initially infected, 100 runs of 100 Δt.
pub fn reference_config(seed: u64) -> SisConfig {
    SisConfig::builder()
        .node_count(REFERENCE_NODES)
        .infection_rate(10.0)
        .recovery_rate(1.0)
        .t_simulation(100)
        .number_of_simulations(100)
        .initial_number_of_infected(3)
        .seed(seed)
        .build()
        .expect("reference profile is valid")
}

/// Fifty independent G(2000, 4/1999) slices.
pub fn stress_network(seed: u64) -> TemporalNetwork {
    network(
        STRESS_NODES,
        4.0 / f64::from(STRESS_NODES - 1),
        50,
        seed,
    )
}

/// β = 0.5, μ = 0.5, twenty initially infected, 20 runs of 500 Δt.
pub fn stress_config(seed: u64) -> SisConfig {
    SisConfig::builder()
        .node_count(STRESS_NODES)
        .infection_rate(0.5)
        .recovery_rate(0.5)
        .t_simulation(500)
        .output_time_resolution(5)
        .number_of_simulations(20)
        .initial_number_of_infected(20)
        .seed(seed)
        .build()
        .expect("stress profile is valid")
}
