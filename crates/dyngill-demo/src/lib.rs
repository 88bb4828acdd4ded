//! The `sis-demo` pipeline as a library.
//!
//! Generate (or load) a temporal network, run an SIS ensemble on it,
//! reduce the per-run counts to means with standard errors, then export
//! and plot. Everything but the window lives here so it can be tested.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod logging;
pub mod pipeline;

pub use args::DemoArgs;
pub use pipeline::{run, DemoOutcome};
