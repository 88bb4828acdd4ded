//! Contact-network generation for DynGill simulations.
//!
//! - [`gnp_random_graph`]: Erdős–Rényi G(n, p) in O(n + m) by geometric
//!   skipping over the candidate pairs
//! - [`complete_graph`]: every pair in contact
//! - [`random_temporal_network`]: independent G(n, p) draws, one per slice
//! - [`io`]: tab-separated `t i j` edge lists
//!
//! All generators take the RNG by `&mut` so callers control seeding;
//! the same seed always yields the same network.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod gnp;
pub mod io;
pub mod temporal;

pub use error::GraphError;
pub use gnp::{complete_graph, default_edge_probability, gnp_random_graph};
pub use temporal::random_temporal_network;
