//! Temporal Gillespie simulation of SIS epidemics.
//!
//! Simulates a homogeneous, Poissonian SIS process on a time-sliced
//! contact network: every SI contact transmits at rate β per `Δt`,
//! every infected node recovers at rate μ per `Δt`, and the contact
//! structure changes from one slice to the next. Waiting times are
//! drawn once in normalised units and consumed slice by slice, so no
//! rejection sampling is needed when the network changes.
//!
//! The entry point is [`SisPoissonHomogeneous`], configured through
//! [`SisConfig::builder`]:
//!
//! ```
//! use dyngill_core::TemporalNetwork;
//! use dyngill_sis::{SisConfig, SisPoissonHomogeneous};
//!
//! let network = TemporalNetwork::from_pairs(3, [vec![(0, 1), (1, 2)]]).unwrap();
//! let config = SisConfig::builder()
//!     .node_count(3)
//!     .infection_rate(1.0)
//!     .recovery_rate(0.5)
//!     .t_simulation(20)
//!     .number_of_simulations(4)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = SisPoissonHomogeneous::new(config).run(&network).unwrap();
//! assert_eq!(result.number_of_runs(), 4);
//! assert_eq!(result.number_of_frames(), 20);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod result;
mod sampling;
pub mod simulator;

pub use config::{SisConfig, SisConfigBuilder};
pub use error::{ConfigError, SimError};
pub use metrics::SimulationMetrics;
pub use result::{EventTrajectory, SisResult};
pub use simulator::{sis_poisson_homogeneous, SisPoissonHomogeneous};
