//! Simulation configuration and its validating builder.
//!
//! [`SisConfig`] holds the scalar parameters of one ensemble of SIS
//! runs. It can only be obtained from [`SisConfigBuilder::build`], so a
//! config in hand is always internally consistent; whether it fits a
//! particular network is checked when the simulation starts.

use crate::ConfigError;

/// Validated parameters of an SIS ensemble.
///
/// Rates are per slice duration `Δt`; times are counted in slices.
#[derive(Clone, Debug, PartialEq)]
pub struct SisConfig {
    node_count: u32,
    infection_rate: f64,
    recovery_rate: f64,
    t_simulation: usize,
    output_time_resolution: usize,
    number_of_simulations: usize,
    initial_number_of_infected: u32,
    seed: u64,
    t_infection_start: usize,
    verbose: bool,
}

/// Builder for [`SisConfig`].
///
/// Required: `node_count`, `infection_rate`, `recovery_rate`.
/// Everything else defaults to a single run of one pass over the
/// network, one initially infected node, clock-derived seed, output at
/// every slice.
#[derive(Clone, Debug)]
pub struct SisConfigBuilder {
    node_count: Option<u32>,
    infection_rate: Option<f64>,
    recovery_rate: Option<f64>,
    t_simulation: usize,
    output_time_resolution: usize,
    number_of_simulations: usize,
    initial_number_of_infected: u32,
    seed: u64,
    t_infection_start: usize,
    verbose: bool,
}

impl SisConfig {
    /// Create a new builder.
    pub fn builder() -> SisConfigBuilder {
        SisConfigBuilder {
            node_count: None,
            infection_rate: None,
            recovery_rate: None,
            t_simulation: 0,
            output_time_resolution: 1,
            number_of_simulations: 1,
            initial_number_of_infected: 1,
            seed: 0,
            t_infection_start: 0,
            verbose: false,
        }
    }

    /// Population size `N`.
    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    /// Transmission rate β per SI contact and `Δt`.
    pub fn infection_rate(&self) -> f64 {
        self.infection_rate
    }

    /// Recovery rate μ per infected node and `Δt`.
    pub fn recovery_rate(&self) -> f64 {
        self.recovery_rate
    }

    /// Requested simulated time in slices; `0` means one pass over the network.
    pub fn t_simulation(&self) -> usize {
        self.t_simulation
    }

    /// Number of slices between two recorded frames.
    pub fn output_time_resolution(&self) -> usize {
        self.output_time_resolution
    }

    /// Number of independent runs in the ensemble.
    pub fn number_of_simulations(&self) -> usize {
        self.number_of_simulations
    }

    /// Number of nodes infected at the start of every run.
    pub fn initial_number_of_infected(&self) -> u32 {
        self.initial_number_of_infected
    }

    /// RNG seed; `0` asks for a clock-derived seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Slice at which the first pass over the network starts.
    pub fn t_infection_start(&self) -> usize {
        self.t_infection_start
    }

    /// Whether per-run and per-event diagnostics are logged.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Simulated time for a network with `slice_count` slices.
    ///
    /// An explicit `t_simulation` wins; `0` resolves to `slice_count`.
    pub fn effective_t_simulation(&self, slice_count: usize) -> usize {
        if self.t_simulation == 0 {
            slice_count
        } else {
            self.t_simulation
        }
    }

    /// Number of recorded frames per run for a network with
    /// `slice_count` slices: `T_simulation / output_time_resolution`.
    pub fn number_of_frames(&self, slice_count: usize) -> usize {
        self.effective_t_simulation(slice_count) / self.output_time_resolution
    }
}

impl SisConfigBuilder {
    /// Set the population size `N` (required).
    pub fn node_count(mut self, n: u32) -> Self {
        self.node_count = Some(n);
        self
    }

    /// Set the transmission rate β per SI contact and `Δt` (required).
    pub fn infection_rate(mut self, beta: f64) -> Self {
        self.infection_rate = Some(beta);
        self
    }

    /// Set the recovery rate μ per infected node and `Δt` (required).
    pub fn recovery_rate(mut self, mu: f64) -> Self {
        self.recovery_rate = Some(mu);
        self
    }

    /// Set the simulated time in slices (default: 0, one pass over the network).
    ///
    /// Longer than the network, the contact sequence repeats from slice 0.
    pub fn t_simulation(mut self, t: usize) -> Self {
        self.t_simulation = t;
        self
    }

    /// Record a frame every `res` slices (default: 1). Must be >= 1.
    pub fn output_time_resolution(mut self, res: usize) -> Self {
        self.output_time_resolution = res;
        self
    }

    /// Set the ensemble size (default: 1). Must be >= 1.
    pub fn number_of_simulations(mut self, n: usize) -> Self {
        self.number_of_simulations = n;
        self
    }

    /// Set how many distinct random nodes start infected (default: 1).
    pub fn initial_number_of_infected(mut self, n: u32) -> Self {
        self.initial_number_of_infected = n;
        self
    }

    /// Set the RNG seed (default: 0, derive from the system clock).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Start the first pass over the network at slice `t` (default: 0).
    pub fn t_infection_start(mut self, t: usize) -> Self {
        self.t_infection_start = t;
        self
    }

    /// Log per-run progress and per-event detail (default: false).
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the config, validating all settings.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `node_count`, `infection_rate` or `recovery_rate` is not set
    /// - `node_count` is zero
    /// - a rate is NaN, infinite or negative
    /// - `output_time_resolution` or `number_of_simulations` is zero
    /// - `initial_number_of_infected` is zero or larger than `node_count`
    pub fn build(self) -> Result<SisConfig, ConfigError> {
        let node_count = self
            .node_count
            .ok_or(ConfigError::Missing { name: "node_count" })?;
        let infection_rate = self.infection_rate.ok_or(ConfigError::Missing {
            name: "infection_rate",
        })?;
        let recovery_rate = self.recovery_rate.ok_or(ConfigError::Missing {
            name: "recovery_rate",
        })?;

        if node_count == 0 {
            return Err(ConfigError::NoNodes);
        }
        check_rate("infection_rate", infection_rate)?;
        check_rate("recovery_rate", recovery_rate)?;
        if self.output_time_resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if self.number_of_simulations == 0 {
            return Err(ConfigError::NoSimulations);
        }
        if self.initial_number_of_infected == 0 || self.initial_number_of_infected > node_count {
            return Err(ConfigError::InvalidInitialInfected {
                value: self.initial_number_of_infected,
                node_count,
            });
        }

        Ok(SisConfig {
            node_count,
            infection_rate,
            recovery_rate,
            t_simulation: self.t_simulation,
            output_time_resolution: self.output_time_resolution,
            number_of_simulations: self.number_of_simulations,
            initial_number_of_infected: self.initial_number_of_infected,
            seed: self.seed,
            t_infection_start: self.t_infection_start,
            verbose: self.verbose,
        })
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate { name, value })
    }
}
