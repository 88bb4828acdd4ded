//! Core types for the DynGill temporal-network epidemic simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data every other crate in the workspace exchanges: node ids,
//! undirected contacts, per-slice contact lists and the
//! [`TemporalNetwork`] that strings slices together in time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod contact;
pub mod error;
pub mod id;
pub mod network;

pub use contact::{Contact, ContactSlice};
pub use error::NetworkError;
pub use id::NodeId;
pub use network::TemporalNetwork;
