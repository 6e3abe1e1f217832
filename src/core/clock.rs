//! Time sources for the benchmark runner

use std::cell::Cell;
use std::time::Instant;

/// Source of elapsed time between two readings.
pub trait Clock {
    type Mark;

    /// Take a reading.
    fn mark(&self) -> Self::Mark;

    /// Milliseconds elapsed since `start`.
    fn elapsed_ms(&self, start: &Self::Mark) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    type Mark = C::Mark;

    fn mark(&self) -> Self::Mark {
        (**self).mark()
    }

    fn elapsed_ms(&self, start: &Self::Mark) -> f64 {
        (**self).elapsed_ms(start)
    }
}

/// Monotonic wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Mark = Instant;

    fn mark(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_ms(&self, start: &Instant) -> f64 {
        start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Deterministic clock: every measured interval lasts exactly `step_ms`.
///
/// Counts how many intervals it has timed, which lets tests check how often
/// the runner started its timer.
#[derive(Debug, Default)]
pub struct SteppingClock {
    step_ms: f64,
    intervals: Cell<usize>,
}

impl SteppingClock {
    pub fn new(step_ms: f64) -> Self {
        Self { step_ms, intervals: Cell::new(0) }
    }

    pub fn intervals(&self) -> usize {
        self.intervals.get()
    }
}

impl Clock for SteppingClock {
    type Mark = ();

    fn mark(&self) {
        self.intervals.set(self.intervals.get() + 1);
    }

    fn elapsed_ms(&self, _start: &()) -> f64 {
        self.step_ms
    }
}
