//! Harness configuration
//!
//! The command-line harness reads a JSON file such as:
//!
//! ```json
//! {
//!   "Repetitions": 10,
//!   "Workloads": [
//!     { "Name": "factorial_tail", "Input": 30 },
//!     { "Name": "sum_fold" }
//!   ],
//!   "CsvOutput": "results.csv"
//! }
//! ```
//!
//! Every field is optional. A missing file yields [`SuiteConfig::default`].

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::DEFAULT_REPETITIONS;
use crate::workloads::Workload;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for one benchmarking session.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuiteConfig {
    /// Measured repetitions per workload, warm-up runs not included.
    #[serde(default = "default_repetitions", deserialize_with = "validate_repetitions")]
    pub repetitions: usize,

    #[serde(default = "default_workloads")]
    pub workloads: Vec<WorkloadConfig>,

    /// Write one CSV row per workload here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_output: Option<PathBuf>,

    /// Write a JSON array of workload records here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_output: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub show_system_info: bool,
}

/// One workload entry. Input falls back to the workload's default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkloadConfig {
    pub name: Workload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<u64>,
}

impl WorkloadConfig {
    pub fn new(name: Workload) -> Self {
        Self { name, input: None }
    }

    pub fn with_input(mut self, input: u64) -> Self {
        self.input = Some(input);
        self
    }

    pub fn input(&self) -> u64 {
        self.input.unwrap_or_else(|| self.name.default_input())
    }
}

fn default_repetitions() -> usize {
    DEFAULT_REPETITIONS
}

fn default_workloads() -> Vec<WorkloadConfig> {
    Workload::all().iter().copied().map(WorkloadConfig::new).collect()
}

fn default_true() -> bool {
    true
}

fn validate_repetitions<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    if value > 1 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("Repetitions must be greater than 1"))
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            repetitions: default_repetitions(),
            workloads: default_workloads(),
            csv_output: None,
            json_output: None,
            show_system_info: true,
        }
    }
}

impl SuiteConfig {
    /// Loads and validates configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, isn't valid JSON, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Like [`load`](Self::load), falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parses and validates configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks constraints serde alone can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repetitions <= 1 {
            return Err(ConfigError::Invalid(format!(
                "repetitions must be greater than 1, got {}",
                self.repetitions
            )));
        }
        if self.workloads.is_empty() {
            return Err(ConfigError::Invalid("no workloads configured".to_string()));
        }
        for workload in &self.workloads {
            let input = workload.input();
            if input > workload.name.max_input() {
                return Err(ConfigError::Invalid(format!(
                    "input {} for {} exceeds maximum {}",
                    input,
                    workload.name,
                    workload.name.max_input()
                )));
            }
        }
        Ok(())
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_workloads(mut self, workloads: Vec<WorkloadConfig>) -> Self {
        self.workloads = workloads;
        self
    }

    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_output = Some(path.into());
        self
    }

    pub fn with_json_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_output = Some(path.into());
        self
    }

    pub fn with_system_info(mut self, show: bool) -> Self {
        self.show_system_info = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_uses_defaults() {
        let config = SuiteConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SuiteConfig::default());
        assert_eq!(config.repetitions, 5);
        assert_eq!(config.workloads.len(), Workload::all().len());
    }

    #[test]
    fn parses_workloads_and_outputs() {
        let config = SuiteConfig::from_json_str(r#"{
            "Repetitions": 12,
            "Workloads": [
                { "Name": "factorial_tail", "Input": 20 },
                { "Name": "sum_fold" }
            ],
            "CsvOutput": "out.csv",
            "ShowSystemInfo": false
        }"#).unwrap();

        assert_eq!(config.repetitions, 12);
        assert_eq!(config.workloads[0], WorkloadConfig::new(Workload::FactorialTail).with_input(20));
        assert_eq!(config.workloads[1].input(), Workload::SumFold.default_input());
        assert_eq!(config.csv_output, Some(PathBuf::from("out.csv")));
        assert_eq!(config.json_output, None);
        assert!(!config.show_system_info);
    }

    #[test]
    fn rejects_single_repetition() {
        let err = SuiteConfig::from_json_str(r#"{ "Repetitions": 1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("greater than 1"));
    }

    #[test]
    fn rejects_unknown_workload() {
        let err = SuiteConfig::from_json_str(r#"{ "Workloads": [{ "Name": "quicksort" }] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_overflowing_input() {
        let err = SuiteConfig::from_json_str(r#"{ "Workloads": [{ "Name": "factorial_naive", "Input": 35 }] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_inputs_too_slow_to_finish() {
        for (name, input) in [("fibonacci_naive", 41), ("fibonacci_naive", 186), ("sum_fold", 100_000_001)] {
            let json = format!(r#"{{ "Workloads": [{{ "Name": "{}", "Input": {} }}] }}"#, name, input);
            let err = SuiteConfig::from_json_str(&json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{} {}", name, input);
        }
        assert!(SuiteConfig::from_json_str(r#"{ "Workloads": [{ "Name": "fibonacci_naive", "Input": 40 }] }"#).is_ok());
        assert!(SuiteConfig::from_json_str(r#"{ "Workloads": [{ "Name": "fibonacci_tail", "Input": 186 }] }"#).is_ok());
    }

    #[test]
    fn rejects_empty_workload_list() {
        let err = SuiteConfig::from_json_str(r#"{ "Workloads": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SuiteConfig::load_or_default(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, SuiteConfig::default());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "Repetitions": 3 }}"#).unwrap();
        let config = SuiteConfig::load(file.path()).unwrap();
        assert_eq!(config.repetitions, 3);
    }

    #[test]
    fn builder_output_validates() {
        let config = SuiteConfig::default()
            .with_repetitions(0)
            .with_workloads(vec![WorkloadConfig::new(Workload::SumTail)]);
        assert!(config.validate().is_err());
        assert!(config.with_repetitions(2).validate().is_ok());
    }
}
