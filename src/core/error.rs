//! Error types for the benchmark runner

use thiserror::Error;

/// Errors raised by the runner itself.
///
/// Failures of the benchmarked computation are never wrapped in this type.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Fewer than two measured repetitions were requested
    #[error("Invalid configuration: repetitions must be greater than 1, got {repetitions}")]
    InvalidConfiguration { repetitions: usize },

    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for runner operations
pub type Result<T> = std::result::Result<T, BenchError>;
