//! Error types for contact-network construction.

use thiserror::Error;

use crate::NodeId;

/// Errors detected while assembling or validating a [`TemporalNetwork`](crate::TemporalNetwork).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A contact references a node outside `[0, node_count)`.
    #[error("contact ({i}, {j}) in slice {slice} references a node outside [0, {node_count})")]
    NodeOutOfRange {
        /// Index of the offending slice.
        slice: usize,
        /// First endpoint of the contact.
        i: NodeId,
        /// Second endpoint of the contact.
        j: NodeId,
        /// Population size the network was declared with.
        node_count: u32,
    },
    /// The population is empty.
    #[error("network must contain at least one node")]
    NoNodes,
    /// A contact names a node id too large to size the population from.
    #[error("node id {node} leaves no room for a population size")]
    NodeIdTooLarge {
        /// The offending node id.
        node: NodeId,
    },
}
