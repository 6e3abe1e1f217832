//! Robust statistics over benchmark samples
//!
//! This module provides the plain population moments used by the runner and a
//! richer summary used when reporting a full measurement.

/// Arithmetic mean of the samples. Returns `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation of the samples around a precomputed mean.
///
/// Divides by `n`, not `n - 1`.
pub fn population_stddev(samples: &[f64], mean: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let variance = samples.iter()
        .map(|x| (x - mean).powi(2))
        .sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Robust statistics struct for reliable measurements
#[derive(Debug, Clone, PartialEq)]
pub struct RobustStatistics {
    pub mean: f64,
    pub median: f64,
    pub stdev: f64,
    pub mad: f64,              // Median Absolute Deviation
    pub p95: f64,
    pub p99: f64,
    pub min: f64,
    pub max: f64,
    pub outliers_removed: usize,
    pub confidence_interval_95: (f64, f64),
}

impl RobustStatistics {
    /// Summarize a set of samples. Returns `None` when there are none.
    ///
    /// Median, MAD, min and max describe the full sample set. Mean, stdev,
    /// percentiles and the confidence interval are computed after dropping
    /// outliers further than 3.5 MAD from the median. With a zero MAD no
    /// sample is treated as an outlier.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let median = Self::percentile(&sorted, 50.0);

        let mut deviations: Vec<f64> = sorted.iter()
            .map(|&x| (x - median).abs())
            .collect();
        deviations.sort_by(f64::total_cmp);
        let mad = Self::percentile(&deviations, 50.0);

        // |x - median| > k * MAD, k = 3.5 (~3 sigma). A zero MAD means at
        // least half the samples share one value; nothing is filtered then.
        let threshold = 3.5 * mad;
        let clean: Vec<f64> = if mad == 0.0 {
            sorted.clone()
        } else {
            sorted.iter()
                .filter(|&&x| (x - median).abs() <= threshold)
                .copied()
                .collect()
        };
        let outliers_removed = sorted.len() - clean.len();

        // clean always holds the median itself
        let clean_mean = mean(&clean).unwrap_or(median);
        let stdev = population_stddev(&clean, clean_mean);

        let p95 = Self::percentile(&clean, 95.0);
        let p99 = Self::percentile(&clean, 99.0);

        let se = stdev / (clean.len() as f64).sqrt();
        let ci_margin = 1.96 * se;

        Some(Self {
            mean: clean_mean,
            median,
            stdev,
            mad,
            p95,
            p99,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            outliers_removed,
            confidence_interval_95: (clean_mean - ci_margin, clean_mean + ci_margin),
        })
    }

    /// Nearest-rank percentile of sorted data
    fn percentile(sorted_data: &[f64], p: f64) -> f64 {
        if sorted_data.is_empty() {
            return 0.0;
        }
        let idx = (p / 100.0 * (sorted_data.len() - 1) as f64).round() as usize;
        sorted_data[idx.min(sorted_data.len() - 1)]
    }
}
