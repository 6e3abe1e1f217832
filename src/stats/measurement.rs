//! Full measurement of one benchmarked computation
//!
//! Pairs the headline result with the raw per-repetition timings and a robust
//! summary of them.

use crate::core::BenchmarkResult;
use crate::stats::robust_statistics::RobustStatistics;

/// Measurement with all statistical data
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<O> {
    pub result: BenchmarkResult<O>,
    pub statistics: RobustStatistics,
    /// Elapsed milliseconds per measured repetition, warm-up runs excluded.
    pub raw_samples: Vec<f64>,
}

impl<O> Measurement<O> {
    pub fn repetitions(&self) -> usize {
        self.raw_samples.len()
    }
}
