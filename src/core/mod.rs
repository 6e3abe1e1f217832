//! Benchmark runner, time sources and the command-line session built on them.

pub mod clock;
pub mod error;
pub mod runner;
pub mod suite;

pub use clock::{Clock, SteppingClock, SystemClock};
pub use error::BenchError;
pub use runner::{
    measure, report, report_to, try_measure, BenchmarkResult, BenchmarkRunner, DEFAULT_REPETITIONS,
    WARMUP_RUNS,
};
pub use suite::{run_suite, SuiteError};
