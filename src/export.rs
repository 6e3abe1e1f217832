//! Result export to CSV and JSON

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::stats::Measurement;
use crate::workloads::Workload;

/// One benchmarked workload, flattened for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkloadRecord {
    pub workload: String,
    pub input: u64,
    pub repetitions: usize,
    pub value: String,
    pub mean_ms: f64,
    pub stddev_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub outliers_removed: usize,
}

impl WorkloadRecord {
    pub fn new(workload: Workload, input: u64, measurement: &Measurement<u128>) -> Self {
        let stats = &measurement.statistics;
        Self {
            workload: workload.name().to_string(),
            input,
            repetitions: measurement.repetitions(),
            value: measurement.result.value.to_string(),
            mean_ms: measurement.result.mean_ms,
            stddev_ms: measurement.result.stddev_ms,
            median_ms: stats.median,
            p95_ms: stats.p95,
            p99_ms: stats.p99,
            min_ms: stats.min,
            max_ms: stats.max,
            outliers_removed: stats.outliers_removed,
        }
    }
}

/// Write records as CSV with a header row.
pub fn write_csv(path: impl AsRef<Path>, records: &[WorkloadRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records as a pretty-printed JSON array.
pub fn write_json(path: impl AsRef<Path>, records: &[WorkloadRecord]) -> Result<(), serde_json::Error> {
    let file = File::create(path).map_err(serde_json::Error::io)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, mean_ms: f64) -> WorkloadRecord {
        WorkloadRecord {
            workload: name.to_string(),
            input: 10,
            repetitions: 5,
            value: "3628800".to_string(),
            mean_ms,
            stddev_ms: 0.0,
            median_ms: mean_ms,
            p95_ms: mean_ms,
            p99_ms: mean_ms,
            min_ms: mean_ms,
            max_ms: mean_ms,
            outliers_removed: 0,
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let records = vec![record("factorial_naive", 1.5), record("factorial_tail", 0.5)];
        write_csv(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("Workload,Input,Repetitions,Value,MeanMs,StddevMs,MedianMs,P95Ms,P99Ms,MinMs,MaxMs,OutliersRemoved")
        );
        assert_eq!(lines.count(), 2);

        let read: Vec<WorkloadRecord> = csv::Reader::from_path(&path)
            .unwrap()
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn json_is_an_array_of_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        write_json(&path, &[record("sum_fold", 2.0)]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["Workload"], "sum_fold");
        assert_eq!(array[0]["MeanMs"], 2.0);
    }
}
