// src/benchmark/results.rs

use std::path::Path;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::benchmark::system_info::SystemInfo;
use crate::config::BenchmarkConfig;
use crate::core::error::AppError;
use crate::integer_math::gcd::GcdAlgorithm;

/// Measurements for one engine over the whole operand corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmBenchmark {
    pub algorithm: GcdAlgorithm,
    pub operand_sets: usize,
    pub total_time_ms: u64,
    pub mean_time_ns: u64,
    /// Slowest single call as reported by the timed variant
    pub slowest_call_ms: u64,
    /// Sets rejected by validation (all-zero draws)
    pub rejected_sets: usize,
    /// Wrapping sum of all GCDs, to spot engines drifting apart across runs
    pub checksum: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
    pub settings: BenchmarkConfig,
    pub algorithm_benchmarks: Vec<AlgorithmBenchmark>,
    /// Both engines produced the same result for every operand set
    pub engines_agree: bool,
}

impl BenchmarkSuite {
    pub fn new(settings: BenchmarkConfig) -> Self {
        BenchmarkSuite {
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            settings,
            algorithm_benchmarks: Vec::new(),
            engines_agree: true,
        }
    }

    pub fn add_algorithm_benchmark(&mut self, result: AlgorithmBenchmark) {
        self.algorithm_benchmarks.push(result);
    }

    pub fn find(&self, algorithm: GcdAlgorithm) -> Option<&AlgorithmBenchmark> {
        self.algorithm_benchmarks.iter().find(|b| b.algorithm == algorithm)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let suite = serde_json::from_str(&json)?;
        Ok(suite)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(80));
        println!("GCD ENGINE BENCHMARK RESULTS");
        println!("{}", "=".repeat(80));
        println!("\nTimestamp: {}", self.timestamp);
        println!("{}", self.system_info.to_string_pretty());
        println!(
            "Corpus: {} sets of {} operands in [-{}, {}], seed {}",
            self.settings.iterations,
            self.settings.operand_count,
            self.settings.max_magnitude,
            self.settings.max_magnitude,
            self.settings.seed,
        );

        println!("\n{}", "-".repeat(80));
        println!("{:<12} {:>12} {:>15} {:>15} {:>10}", "Algorithm", "Total", "Mean/call", "Slowest call", "Rejected");
        println!("{}", "-".repeat(80));

        for bench in &self.algorithm_benchmarks {
            println!(
                "{:<12} {:>12} {:>15} {:>15} {:>10}",
                bench.algorithm.name(),
                format!("{} ms", bench.total_time_ms),
                Self::format_duration(bench.mean_time_ns),
                format!("{} ms", bench.slowest_call_ms),
                bench.rejected_sets,
            );
        }

        println!("\nEngines agree: {}", if self.engines_agree { "yes" } else { "NO" });
        println!("{}", "=".repeat(80));
    }

    pub fn format_duration(ns: u64) -> String {
        if ns < 1_000 {
            format!("{} ns", ns)
        } else if ns < 1_000_000 {
            format!("{:.2} µs", ns as f64 / 1_000.0)
        } else if ns < 1_000_000_000 {
            format!("{:.2} ms", ns as f64 / 1_000_000.0)
        } else {
            format!("{:.2} s", ns as f64 / 1_000_000_000.0)
        }
    }
}
