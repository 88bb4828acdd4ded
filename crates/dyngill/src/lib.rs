//! DynGill: temporal Gillespie simulation of SIS epidemics.
//!
//! This is the facade crate that re-exports the public API of the
//! DynGill sub-crates. Adding `dyngill` as a single dependency is enough
//! for most uses.
//!
//! # Quick start
//!
//! ```rust
//! use dyngill::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Ten independent G(10, 2/9) slices.
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let network = random_temporal_network(10, default_edge_probability(10), 10, &mut rng).unwrap();
//!
//! let config = SisConfig::builder()
//!     .node_count(10)
//!     .infection_rate(10.0)
//!     .recovery_rate(1.0)
//!     .t_simulation(100)
//!     .number_of_simulations(20)
//!     .initial_number_of_infected(3)
//!     .seed(324345)
//!     .build()
//!     .unwrap();
//!
//! let result = SisPoissonHomogeneous::new(config).run(&network).unwrap();
//! let infected = EnsembleSummary::from_runs(result.i()).unwrap();
//! assert_eq!(infected.len(), 100);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`network`] | `dyngill-core` | Node ids, contacts, slices, temporal networks |
//! | [`graph`] | `dyngill-graph` | G(n, p) generation and edge-list I/O |
//! | [`sis`] | `dyngill-sis` | The SIS simulator and its configuration |
//! | [`obs`] | `dyngill-obs` | Ensemble statistics and TSV export |
//! | `plot` | `dyngill-plot` | Error-bar plots (feature `plot`) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Temporal network types (`dyngill-core`).
pub use dyngill_core as network;

/// Network generation and file I/O (`dyngill-graph`).
pub use dyngill_graph as graph;

/// The temporal Gillespie SIS simulator (`dyngill-sis`).
pub use dyngill_sis as sis;

/// Reduction of ensembles to per-frame statistics (`dyngill-obs`).
pub use dyngill_obs as obs;

/// Error-bar plotting (`dyngill-plot`).
#[cfg(feature = "plot")]
pub use dyngill_plot as plot;

/// Common imports for typical DynGill usage.
pub mod prelude {
    // Network
    pub use dyngill_core::{Contact, ContactSlice, NetworkError, NodeId, TemporalNetwork};

    // Generation
    pub use dyngill_graph::{
        complete_graph, default_edge_probability, gnp_random_graph, random_temporal_network,
        GraphError,
    };

    // Simulation
    pub use dyngill_sis::{
        sis_poisson_homogeneous, ConfigError, EventTrajectory, SimError, SisConfig,
        SisPoissonHomogeneous, SisResult,
    };

    // Observation
    pub use dyngill_obs::{final_size_histogram, mean_trajectory, EnsembleSummary, ObsError};
}
