// src/benchmark_cli.rs
// CLI benchmark runner - separated to avoid polluting main.rs

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::benchmark::runner::BenchmarkRunner;
use crate::config::BenchmarkConfig;
use crate::core::error::AppError;

/// Runs the engine comparison and writes the JSON report.
///
/// Without an explicit `output` the report lands in `settings.output_dir`
/// as `gcd_benchmark_<timestamp>.json`. Returns the path written.
pub fn run_benchmarks(settings: BenchmarkConfig, output: Option<PathBuf>) -> Result<PathBuf, AppError> {
    println!("\n{}", "=".repeat(80));
    println!("GCD BENCHMARK SUITE");
    println!("{}", "=".repeat(80));

    let path = output.unwrap_or_else(|| default_report_path(&settings.output_dir));

    let mut runner = BenchmarkRunner::new(settings);
    runner.run_algorithm_benchmarks();
    runner.print_summary();

    runner.save_results(&path)?;
    info!("benchmark report written to {}", path.display());
    println!("\nResults saved to: {}", path.display());
    println!("Compare with a previous run using: gcd-calc compare <BASELINE> {}", path.display());

    Ok(path)
}

fn default_report_path(output_dir: &str) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    Path::new(output_dir).join(format!("gcd_benchmark_{}.json", timestamp))
}
