//! Command-line benchmarking session
//!
//! Runs every configured workload through the benchmark runner, prints the
//! per-workload report line and a summary table, then exports the records.

use std::hint::black_box;
use std::io;

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, SuiteConfig, WorkloadConfig};
use crate::core::clock::Clock;
use crate::core::error::BenchError;
use crate::core::runner::{BenchmarkRunner, WARMUP_RUNS};
use crate::export::{write_csv, write_json, WorkloadRecord};
use crate::utils::helpers::{format_ms, section_heading, title_block};
use crate::utils::system_info::SystemSummary;

/// Anything that can stop a session
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error(transparent)]
    Bench(#[from] BenchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid progress template: {0}")]
    Template(#[from] indicatif::style::TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Run a full session as described by `config`.
pub fn run_suite(config: &SuiteConfig) -> Result<Vec<WorkloadRecord>, SuiteError> {
    config.validate()?;
    let runner = BenchmarkRunner::new(config.repetitions)?;

    println!("\n{}\n", title_block("Performance Measures"));

    if config.show_system_info {
        println!("{}", section_heading("System Information"));
        println!("{}\n", SystemSummary::detect());
    }

    println!("{}", section_heading("Benchmarks"));
    println!(
        "{} workloads, {} warm-up + {} measured runs each\n",
        config.workloads.len(),
        WARMUP_RUNS,
        config.repetitions
    );

    let pb = ProgressBar::new(config.workloads.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} workloads {wide_msg}")?
            .progress_chars("##-"),
    );
    let records = run_workloads(&runner, &config.workloads, &pb);
    pb.finish_with_message("done");

    println!("\n{}", section_heading("Results"));
    println!("{}", summary_table(&records));

    if let Some(path) = &config.csv_output {
        write_csv(path, &records)?;
        println!("{} {}", "✅ CSV written to".green(), path.display());
    }
    if let Some(path) = &config.json_output {
        write_json(path, &records)?;
        println!("{} {}", "✅ JSON written to".green(), path.display());
    }

    Ok(records)
}

/// Benchmark each workload in order, ticking `pb` once per workload.
pub fn run_workloads<C: Clock>(
    runner: &BenchmarkRunner<C>,
    workloads: &[WorkloadConfig],
    pb: &ProgressBar,
) -> Vec<WorkloadRecord> {
    let mut records = Vec::with_capacity(workloads.len());
    for entry in workloads {
        let workload = entry.name;
        let input = entry.input();
        pb.set_message(format!("{}({})", workload, input));
        info!(%workload, input, "benchmarking workload");

        let measurement = runner.measure_detailed(|| workload.run(black_box(input)));
        pb.suspend(|| println!("{:<16} {}", workload.name(), measurement.result));

        records.push(WorkloadRecord::new(workload, input, &measurement));
        pb.inc(1);
    }
    records
}

/// Summary table, one row per record.
pub fn summary_table(records: &[WorkloadRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Workload", "Input", "Mean (ms)", "StdDev (ms)", "Median (ms)", "P95 (ms)", "P99 (ms)", "Outliers",
        ]);

    for record in records {
        let numeric = |v: f64| Cell::new(format_ms(v)).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(&record.workload),
            Cell::new(record.input).set_alignment(CellAlignment::Right),
            numeric(record.mean_ms),
            numeric(record.stddev_ms),
            numeric(record.median_ms),
            numeric(record.p95_ms),
            numeric(record.p99_ms),
            Cell::new(record.outliers_removed).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::SteppingClock;
    use crate::workloads::Workload;

    #[test]
    fn records_follow_workload_order() {
        let runner = BenchmarkRunner::new(3).unwrap().with_clock(SteppingClock::new(0.25));
        let workloads = vec![
            WorkloadConfig::new(Workload::FactorialTail).with_input(10),
            WorkloadConfig::new(Workload::SumFold).with_input(100),
        ];
        let pb = ProgressBar::hidden();

        let records = run_workloads(&runner, &workloads, &pb);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].workload, "factorial_tail");
        assert_eq!(records[0].value, "3628800");
        assert_eq!(records[1].value, "5050");
        assert_eq!(records[1].repetitions, 3);
        assert_eq!(records[1].mean_ms, 0.25);
        assert_eq!(records[1].stddev_ms, 0.0);
        assert_eq!(pb.position(), 2);
    }

    #[test]
    fn table_has_row_per_record() {
        let runner = BenchmarkRunner::new(2).unwrap().with_clock(SteppingClock::new(1.0));
        let records = run_workloads(
            &runner,
            &[WorkloadConfig::new(Workload::SumTail).with_input(10)],
            &ProgressBar::hidden(),
        );
        let table = summary_table(&records);
        assert_eq!(table.row_iter().count(), 1);
        assert!(table.to_string().contains("sum_tail"));
    }

    #[test]
    fn invalid_config_fails_before_running() {
        let config = SuiteConfig::default().with_repetitions(1);
        assert!(matches!(run_suite(&config), Err(SuiteError::Config(ConfigError::Invalid(_)))));
    }
}
