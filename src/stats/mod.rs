//! Statistics over benchmark timings

pub mod measurement;
pub mod robust_statistics;

pub use measurement::Measurement;
pub use robust_statistics::{mean, population_stddev, RobustStatistics};
