//! Host description printed before a benchmarking session

use std::fmt;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// Snapshot of the machine the benchmarks run on.
#[derive(Debug, Clone)]
pub struct SystemSummary {
    pub os: String,
    pub cpu_brand: String,
    pub cpu_cores: usize,
    pub total_memory_gb: f64,
}

impl SystemSummary {
    pub fn detect() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_memory(MemoryRefreshKind::everything())
                .with_cpu(CpuRefreshKind::everything()),
        );

        let cpu_brand = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            os: os_info::get().to_string(),
            cpu_brand,
            cpu_cores: system.cpus().len(),
            total_memory_gb: system.total_memory() as f64 / (1024.0 * 1024.0 * 1024.0),
        }
    }
}

impl fmt::Display for SystemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OS:     {}", self.os)?;
        writeln!(f, "CPU:    {} ({} logical cores)", self.cpu_brand, self.cpu_cores)?;
        write!(f, "Memory: {:.1} GB", self.total_memory_gb)
    }
}
