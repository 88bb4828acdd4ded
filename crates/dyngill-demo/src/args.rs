//! Command-line flags for `sis-demo`.

use std::path::PathBuf;

use clap::Parser;
use dyngill_graph::default_edge_probability;
use dyngill_sis::{ConfigError, SisConfig};

/// Population used when neither `--nodes` nor `--network` is given.
pub const DEFAULT_NODES: u32 = 10;

/// Run an SIS ensemble on a random temporal network and plot the
/// mean number of infected nodes and SI links with standard errors.
#[derive(Parser, Debug, Clone)]
#[command(name = "sis-demo", version, about)]
pub struct DemoArgs {
    /// Number of nodes [default: 10, or inferred from --network]
    #[arg(long)]
    pub nodes: Option<u32>,

    /// Number of time slices in the generated network
    #[arg(long, default_value_t = 10)]
    pub slices: usize,

    /// Edge probability per slice [default: 2/(N-1)]
    #[arg(long)]
    pub edge_probability: Option<f64>,

    /// Number of independent runs
    #[arg(long, default_value_t = 100)]
    pub runs: usize,

    /// Simulated duration in units of Δt (0 = one pass over the network)
    #[arg(long, default_value_t = 100)]
    pub steps: usize,

    /// Record every n-th slice
    #[arg(long, default_value_t = 1)]
    pub resolution: usize,

    /// Infection rate β per SI contact and Δt
    #[arg(long, default_value_t = 10.0)]
    pub infection_rate: f64,

    /// Recovery rate μ per infected node and Δt
    #[arg(long, default_value_t = 1.0)]
    pub recovery_rate: f64,

    /// Number of nodes infected at the start of every run
    #[arg(long, default_value_t = 3)]
    pub initial_infected: u32,

    /// Simulation seed (0 = derive from the clock)
    #[arg(long, default_value_t = 324345)]
    pub seed: u64,

    /// Network seed [default: --seed]
    #[arg(long)]
    pub graph_seed: Option<u64>,

    /// Slice at which the first pass starts
    #[arg(long, default_value_t = 0)]
    pub start_slice: usize,

    /// Load the temporal network from a `t i j` edge-list file
    #[arg(long)]
    pub network: Option<PathBuf>,

    /// Write the summary table (TSV) to this file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip the plot window
    #[arg(long)]
    pub no_plot: bool,

    /// Log simulator progress
    #[arg(long, short)]
    pub verbose: bool,
}

impl DemoArgs {
    /// Population for a generated network.
    pub fn generated_nodes(&self) -> u32 {
        self.nodes.unwrap_or(DEFAULT_NODES)
    }

    /// Edge probability for a generated network.
    pub fn edge_probability_for(&self, n: u32) -> f64 {
        self.edge_probability
            .unwrap_or_else(|| default_edge_probability(n))
    }

    /// Seed for network generation.
    pub fn network_seed(&self) -> u64 {
        self.graph_seed.unwrap_or(self.seed)
    }

    /// Simulator configuration for a population of `node_count`.
    pub fn sis_config(&self, node_count: u32) -> Result<SisConfig, ConfigError> {
        SisConfig::builder()
            .node_count(node_count)
            .infection_rate(self.infection_rate)
            .recovery_rate(self.recovery_rate)
            .t_simulation(self.steps)
            .output_time_resolution(self.resolution)
            .number_of_simulations(self.runs)
            .initial_number_of_infected(self.initial_infected)
            .seed(self.seed)
            .t_infection_start(self.start_slice)
            .verbose(self.verbose)
            .build()
    }
}
