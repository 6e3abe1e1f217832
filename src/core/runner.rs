//! Benchmark runner
//!
//! Runs a computation a fixed number of warm-up times, then the requested
//! number of measured times, and summarizes the measured timings.

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{BenchError, Result};
use crate::stats::robust_statistics::{mean, population_stddev, RobustStatistics};
use crate::stats::Measurement;

/// Runs executed and discarded before measuring starts.
pub const WARMUP_RUNS: usize = 5;

/// Measured repetitions used when the caller has no preference.
pub const DEFAULT_REPETITIONS: usize = 5;

/// Outcome of a single benchmark invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult<O> {
    /// Value produced by the first measured (post warm-up) execution.
    pub value: O,
    pub mean_ms: f64,
    /// Population standard deviation of the measured timings.
    pub stddev_ms: f64,
}

impl<O: fmt::Display> fmt::Display for BenchmarkResult<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "function computes result: {} in {:?} ms on average with standard deviation {:?}",
            self.value, self.mean_ms, self.stddev_ms
        )
    }
}

/// Sequential benchmark runner with a validated repetition count.
#[derive(Debug, Clone)]
pub struct BenchmarkRunner<C = SystemClock> {
    repetitions: usize,
    clock: C,
}

impl BenchmarkRunner<SystemClock> {
    /// Create a runner timing with the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfiguration`] when `repetitions <= 1`.
    pub fn new(repetitions: usize) -> Result<Self> {
        if repetitions <= 1 {
            return Err(BenchError::InvalidConfiguration { repetitions });
        }
        Ok(Self { repetitions, clock: SystemClock })
    }
}

impl<C: Clock> BenchmarkRunner<C> {
    /// Swap the time source, keeping the repetition count.
    pub fn with_clock<D: Clock>(self, clock: D) -> BenchmarkRunner<D> {
        BenchmarkRunner { repetitions: self.repetitions, clock }
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Total number of times the computation is invoked per measurement.
    pub fn total_runs(&self) -> usize {
        WARMUP_RUNS + self.repetitions
    }

    /// Measure an infallible computation. Panics inside it unwind to the caller.
    pub fn measure<O, F>(&self, mut computation: F) -> BenchmarkResult<O>
    where
        F: FnMut() -> O,
    {
        self.measure_detailed(&mut computation).result
    }

    /// Measure a fallible computation.
    ///
    /// The first error aborts the remaining repetitions and is returned
    /// exactly as the computation produced it.
    pub fn try_measure<O, E, F>(&self, computation: F) -> std::result::Result<BenchmarkResult<O>, E>
    where
        F: FnMut() -> std::result::Result<O, E>,
    {
        self.try_measure_detailed(computation).map(|m| m.result)
    }

    /// Like [`measure`](Self::measure), keeping the raw samples and a robust summary.
    pub fn measure_detailed<O, F>(&self, mut computation: F) -> Measurement<O>
    where
        F: FnMut() -> O,
    {
        match self.try_measure_detailed(|| Ok::<O, Infallible>(computation())) {
            Ok(measurement) => measurement,
            Err(never) => match never {},
        }
    }

    pub fn try_measure_detailed<O, E, F>(&self, mut computation: F) -> std::result::Result<Measurement<O>, E>
    where
        F: FnMut() -> std::result::Result<O, E>,
    {
        for run in 0..WARMUP_RUNS {
            let (_, elapsed_ms) = self.time(&mut computation)?;
            debug!(run, elapsed_ms, "warm-up run");
        }

        let mut raw_samples = Vec::with_capacity(self.repetitions);
        let (value, first_ms) = self.time(&mut computation)?;
        debug!(run = WARMUP_RUNS, elapsed_ms = first_ms, "measured run");
        raw_samples.push(first_ms);

        for run in WARMUP_RUNS + 1..self.total_runs() {
            let (_, elapsed_ms) = self.time(&mut computation)?;
            debug!(run, elapsed_ms, "measured run");
            raw_samples.push(elapsed_ms);
        }

        let mean_ms = mean(&raw_samples).unwrap_or(first_ms);
        let stddev_ms = population_stddev(&raw_samples, mean_ms);
        if mean_ms == 0.0 {
            warn!("mean elapsed time is zero, the computation is below clock resolution");
        }
        info!(repetitions = self.repetitions, mean_ms, stddev_ms, "benchmark finished");

        let Some(statistics) = RobustStatistics::from_samples(&raw_samples) else {
            unreachable!("runner always records at least two samples");
        };

        Ok(Measurement {
            result: BenchmarkResult { value, mean_ms, stddev_ms },
            statistics,
            raw_samples,
        })
    }

    /// Measure and print the one-line summary to standard output.
    pub fn report<O, F>(&self, computation: F) -> Result<()>
    where
        O: fmt::Display,
        F: FnMut() -> O,
    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.report_to(&mut handle, computation)
    }

    /// Measure and write the one-line summary to `out`.
    pub fn report_to<O, F, W>(&self, out: &mut W, computation: F) -> Result<()>
    where
        O: fmt::Display,
        F: FnMut() -> O,
        W: Write,
    {
        let result = self.measure(computation);
        writeln!(out, "{}", result)?;
        Ok(())
    }

    fn time<O, E, F>(&self, computation: &mut F) -> std::result::Result<(O, f64), E>
    where
        F: FnMut() -> std::result::Result<O, E>,
    {
        let start = self.clock.mark();
        let value = computation()?;
        Ok((value, self.clock.elapsed_ms(&start)))
    }
}

/// Measure `computation` over `repetitions` measured runs using the system clock.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfiguration`] when `repetitions <= 1`. The
/// computation is not invoked in that case.
pub fn measure<O, F>(computation: F, repetitions: usize) -> Result<BenchmarkResult<O>>
where
    F: FnMut() -> O,
{
    Ok(BenchmarkRunner::new(repetitions)?.measure(computation))
}

/// Measure a fallible computation; its errors come back untouched.
///
/// Configuration errors are converted into the caller's error type.
pub fn try_measure<O, E, F>(computation: F, repetitions: usize) -> std::result::Result<BenchmarkResult<O>, E>
where
    F: FnMut() -> std::result::Result<O, E>,
    E: From<BenchError>,
{
    BenchmarkRunner::new(repetitions)?.try_measure(computation)
}

/// Measure `computation` and print the summary line to standard output.
pub fn report<O, F>(computation: F, repetitions: usize) -> Result<()>
where
    O: fmt::Display,
    F: FnMut() -> O,
{
    BenchmarkRunner::new(repetitions)?.report(computation)
}

/// Measure `computation` and write the summary line to `out`.
pub fn report_to<O, F, W>(out: &mut W, computation: F, repetitions: usize) -> Result<()>
where
    O: fmt::Display,
    F: FnMut() -> O,
    W: Write,
{
    BenchmarkRunner::new(repetitions)?.report_to(out, computation)
}
