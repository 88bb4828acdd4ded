//! Error types for ensemble reduction and export.

use thiserror::Error;

/// Errors from reducing or exporting ensemble data.
#[derive(Debug, Error)]
pub enum ObsError {
    /// Not enough runs for the requested statistic.
    #[error("need at least {required} runs, got {got}")]
    TooFewRuns {
        /// Minimum number of runs.
        required: usize,
        /// Number of runs supplied.
        got: usize,
    },
    /// A run is shorter or longer than the first one.
    #[error("run {run} has {got} frames, expected {expected}")]
    RaggedRuns {
        /// Index of the offending run.
        run: usize,
        /// Length of run 0.
        expected: usize,
        /// Length of the offending run.
        got: usize,
    },
    /// A histogram value exceeds the declared maximum.
    #[error("value {value} exceeds histogram maximum {max}")]
    ValueOutOfRange {
        /// The offending value.
        value: usize,
        /// Largest admissible value.
        max: usize,
    },
    /// Columns passed to the exporter differ in length.
    #[error("column '{label}' has {got} rows, expected {expected}")]
    LengthMismatch {
        /// Label of the offending column.
        label: String,
        /// Length of the first column.
        expected: usize,
        /// Length of the offending column.
        got: usize,
    },
    /// The table writer rejected a record.
    #[error("export: {0}")]
    Csv(#[from] csv::Error),
    /// Writing the table failed.
    #[error("export I/O: {0}")]
    Io(#[from] std::io::Error),
}
