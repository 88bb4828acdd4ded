//! Error types for simulation configuration and execution.

use thiserror::Error;

/// Errors detected by [`SisConfigBuilder::build`](crate::SisConfigBuilder::build).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A required setting was never provided.
    #[error("{name} is required")]
    Missing {
        /// Name of the missing setting.
        name: &'static str,
    },
    /// The population is empty.
    #[error("node_count must be at least 1")]
    NoNodes,
    /// A rate is NaN, infinite or negative.
    #[error("{name} must be finite and >= 0, got {value}")]
    InvalidRate {
        /// Which rate.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `output_time_resolution` is zero.
    #[error("output_time_resolution must be at least 1")]
    ZeroResolution,
    /// `number_of_simulations` is zero.
    #[error("number_of_simulations must be at least 1")]
    NoSimulations,
    /// The initial number of infected nodes is zero or exceeds the population.
    #[error("initial_number_of_infected must be in [1, {node_count}], got {value}")]
    InvalidInitialInfected {
        /// The rejected value.
        value: u32,
        /// Population size.
        node_count: u32,
    },
}

/// Errors from [`SisPoissonHomogeneous::run`](crate::SisPoissonHomogeneous::run).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The contact network has no time slices.
    #[error("contact network has no time slices")]
    EmptyNetwork,
    /// The network and the configuration disagree on the population size.
    #[error("network has {network} nodes but the simulation is configured for {config}")]
    PopulationMismatch {
        /// Population size of the configuration.
        config: u32,
        /// Population size of the network.
        network: u32,
    },
    /// `t_infection_start` points past the last slice.
    #[error("t_infection_start {start} is beyond the network's {slices} slices")]
    StartSliceOutOfRange {
        /// Requested start slice.
        start: usize,
        /// Number of slices in the network.
        slices: usize,
    },
}
