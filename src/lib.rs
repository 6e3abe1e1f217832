//! Micro-benchmarking library
//!
//! Measures a repeated computation: a fixed number of warm-up runs are
//! discarded, then the mean and population standard deviation of the measured
//! runs are reported together with the computed value.
//!
//! ```no_run
//! let result = perf_measures::measure(|| (1..=1000u64).sum::<u64>(), 10).unwrap();
//! println!("{}", result);
//!
//! perf_measures::report(|| (1..=20u64).product::<u64>(), 5).unwrap();
//! ```

pub mod config;
pub mod core;
pub mod export;
pub mod stats;
pub mod utils;
pub mod workloads;

pub use config::{ConfigError, SuiteConfig, WorkloadConfig};
pub use crate::core::{
    measure, report, report_to, run_suite, try_measure, BenchError, BenchmarkResult, BenchmarkRunner,
    Clock, SteppingClock, SuiteError, SystemClock, DEFAULT_REPETITIONS, WARMUP_RUNS,
};
pub use stats::{Measurement, RobustStatistics};
pub use workloads::Workload;

/// Library version
pub const VERSION: &str = "0.1.0";
