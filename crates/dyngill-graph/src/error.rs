//! Error types for graph generation and edge-list I/O.

use dyngill_core::NetworkError;
use thiserror::Error;

/// Errors from random-graph generation or edge-list parsing.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The edge probability is NaN or infinite.
    #[error("edge probability must be finite, got {value}")]
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
    /// The assembled network failed validation.
    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),
    /// An edge-list line could not be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// Reading or writing the edge list failed.
    #[error("edge list I/O: {0}")]
    Io(#[from] std::io::Error),
}
