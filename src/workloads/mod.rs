//! Built-in workloads for the command-line harness
//!
//! Each workload pairs a plain recursive formulation with an accumulator
//! (tail-recursive) or fold formulation of the same function, so the two can
//! be benchmarked side by side.

pub mod recursion;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named workload that maps an integer input to a `u128` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workload {
    FactorialNaive,
    FactorialTail,
    FibonacciNaive,
    FibonacciTail,
    SumFold,
    SumTail,
}

impl Workload {
    /// Get all workloads
    pub fn all() -> &'static [Workload] {
        &[
            Workload::FactorialNaive,
            Workload::FactorialTail,
            Workload::FibonacciNaive,
            Workload::FibonacciTail,
            Workload::SumFold,
            Workload::SumTail,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Workload::FactorialNaive => "factorial_naive",
            Workload::FactorialTail => "factorial_tail",
            Workload::FibonacciNaive => "fibonacci_naive",
            Workload::FibonacciTail => "fibonacci_tail",
            Workload::SumFold => "sum_fold",
            Workload::SumTail => "sum_tail",
        }
    }

    /// Largest accepted input: the result must fit in a `u128` and a single
    /// run must finish in well under a second.
    pub fn max_input(&self) -> u64 {
        match self {
            Workload::FactorialNaive | Workload::FactorialTail => 34,
            // exponential call tree
            Workload::FibonacciNaive => 40,
            Workload::FibonacciTail => 186,
            // linear loops
            Workload::SumFold | Workload::SumTail => 100_000_000,
        }
    }

    /// Input used when the configuration does not name one
    pub fn default_input(&self) -> u64 {
        match self {
            Workload::FactorialNaive | Workload::FactorialTail => 30,
            Workload::FibonacciNaive => 25,
            Workload::FibonacciTail => 90,
            Workload::SumFold | Workload::SumTail => 100_000,
        }
    }

    /// Run the workload once. Inputs above [`max_input`](Self::max_input) overflow.
    pub fn run(&self, n: u64) -> u128 {
        match self {
            Workload::FactorialNaive => recursion::factorial_naive(n),
            Workload::FactorialTail => recursion::factorial_tail(n),
            Workload::FibonacciNaive => recursion::fibonacci_naive(n),
            Workload::FibonacciTail => recursion::fibonacci_tail(n),
            Workload::SumFold => recursion::sum_fold(n),
            Workload::SumTail => recursion::sum_tail(n),
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Workload {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Workload::all()
            .iter()
            .copied()
            .find(|w| w.name() == s)
            .ok_or_else(|| format!("unknown workload '{}'", s))
    }
}
