//! Network → simulation → reduction.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use dyngill_core::TemporalNetwork;
use dyngill_graph::{io::load_edge_list, random_temporal_network};
use dyngill_obs::{final_size_histogram, write_summary_table, EnsembleSummary};
use dyngill_plot::{ErrorBarPlot, ErrorBarSeries};
use dyngill_sis::{SisPoissonHomogeneous, SisResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::DemoArgs;

/// Everything the demo produces before plotting.
#[derive(Debug)]
pub struct DemoOutcome {
    /// The network the ensemble ran on.
    pub network: TemporalNetwork,
    /// Raw simulator output.
    pub result: SisResult,
    /// Mean and standard error of the number of infected nodes.
    pub infected: EnsembleSummary,
    /// Mean and standard error of the number of SI links.
    pub si_links: EnsembleSummary,
    /// Runs per final infected count, `0..=N`.
    pub final_sizes: Vec<usize>,
    /// Output resolution in Δt.
    pub resolution: usize,
}

/// Build the network described by `args`.
///
/// Loads `--network` if given, otherwise draws `--slices` independent
/// G(N, p) graphs from a ChaCha8 stream seeded with the network seed.
pub fn build_network(args: &DemoArgs) -> Result<TemporalNetwork> {
    if let Some(path) = &args.network {
        let network = load_edge_list(path, args.nodes)
            .with_context(|| format!("loading network from {}", path.display()))?;
        info!(
            path = %path.display(),
            nodes = network.node_count(),
            slices = network.slice_count(),
            "loaded temporal network"
        );
        return Ok(network);
    }

    let n = args.generated_nodes();
    let p = args.edge_probability_for(n);
    let mut rng = ChaCha8Rng::seed_from_u64(args.network_seed());
    let network = random_temporal_network(n, p, args.slices, &mut rng)
        .context("generating random temporal network")?;
    info!(
        nodes = n,
        p,
        slices = network.slice_count(),
        contacts = network.contact_count(),
        "generated temporal network"
    );
    Ok(network)
}

/// Run the whole pipeline up to (not including) the plot.
pub fn run(args: &DemoArgs) -> Result<DemoOutcome> {
    let network = build_network(args)?;
    let config = args
        .sis_config(network.node_count())
        .context("invalid simulation settings")?;

    let result = SisPoissonHomogeneous::new(config)
        .run(&network)
        .context("running SIS ensemble")?;
    info!(
        runs = result.number_of_runs(),
        frames = result.number_of_frames(),
        seed = result.seed(),
        events = result.metrics().total_events(),
        elapsed_us = result.metrics().total_us,
        "ensemble finished"
    );

    let infected = EnsembleSummary::from_runs(result.i()).context("reducing infected counts")?;
    let si_links = EnsembleSummary::from_runs(result.si()).context("reducing SI-link counts")?;
    let final_sizes = final_size_histogram(result.hist(), network.node_count() as usize)
        .context("building final-size histogram")?;

    Ok(DemoOutcome {
        network,
        result,
        infected,
        si_links,
        final_sizes,
        resolution: args.resolution,
    })
}

impl DemoOutcome {
    /// Error-bar plot of both observables over time.
    pub fn plot(&self) -> ErrorBarPlot {
        ErrorBarPlot::new()
            .add_series(ErrorBarSeries::from_summary(
                "of infected",
                &self.infected,
                self.resolution,
            ))
            .add_series(ErrorBarSeries::from_summary(
                "of SI-links",
                &self.si_links,
                self.resolution,
            ))
    }

    /// Write the summary table as TSV to `path`.
    pub fn write_table(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        write_summary_table(
            BufWriter::new(file),
            self.resolution,
            &[("I", &self.infected), ("SI", &self.si_links)],
        )?;
        Ok(())
    }
}
