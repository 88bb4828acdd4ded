//! Observable reduction for DynGill ensembles.
//!
//! The simulator returns one trajectory per run. This crate collapses
//! them into per-frame statistics and writes them out:
//!
//! - [`EnsembleSummary`]: mean and standard error per frame
//! - [`mean_trajectory`]: mean only, valid for a single run
//! - [`final_size_histogram`]: distribution of end-of-run counts
//! - [`write_summary_table`]: tab-separated export

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ensemble;
pub mod error;
pub mod export;
pub mod histogram;

pub use ensemble::{mean_trajectory, EnsembleSummary, Sample};
pub use error::ObsError;
pub use export::write_summary_table;
pub use histogram::final_size_histogram;
