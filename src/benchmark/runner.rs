// src/benchmark/runner.rs

use std::path::Path;
use std::time::Instant;

use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::benchmark::results::{AlgorithmBenchmark, BenchmarkSuite};
use crate::config::BenchmarkConfig;
use crate::core::error::{AppError, GcdError};
use crate::integer_math::gcd::{GcdAlgorithm, GCD};

/// Runs both engines over one seeded operand corpus.
pub struct BenchmarkRunner {
    suite: BenchmarkSuite,
    operand_sets: Vec<Vec<i32>>,
}

impl BenchmarkRunner {
    pub fn new(mut settings: BenchmarkConfig) -> Self {
        if settings.operand_count < 2 {
            warn!("operand_count {} is below 2, using 2", settings.operand_count);
            settings.operand_count = 2;
        }
        if settings.max_magnitude < 1 {
            warn!("max_magnitude {} is below 1, using 1", settings.max_magnitude);
            settings.max_magnitude = 1;
        }

        let operand_sets = Self::generate_operand_sets(&settings);
        BenchmarkRunner {
            suite: BenchmarkSuite::new(settings),
            operand_sets,
        }
    }

    /// Operands never include i32::MIN because max_magnitude <= i32::MAX.
    fn generate_operand_sets(settings: &BenchmarkConfig) -> Vec<Vec<i32>> {
        let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
        let bound = settings.max_magnitude;

        (0..settings.iterations)
            .map(|_| {
                (0..settings.operand_count)
                    .map(|_| rng.random_range(-bound..=bound))
                    .collect()
            })
            .collect()
    }

    pub fn operand_sets(&self) -> &[Vec<i32>] {
        &self.operand_sets
    }

    pub fn run_algorithm_benchmarks(&mut self) {
        println!("\n{}", "=".repeat(80));
        println!("Running GCD engine benchmarks");
        println!("{}", "=".repeat(80));

        let mut outcomes = Vec::with_capacity(GcdAlgorithm::ALL.len());
        for algorithm in GcdAlgorithm::ALL {
            info!("benchmarking {} over {} operand sets", algorithm, self.operand_sets.len());
            let (result, gcds) = self.benchmark_algorithm(algorithm);
            println!("  {:<10} {} ms", algorithm.name(), result.total_time_ms);
            self.suite.add_algorithm_benchmark(result);
            outcomes.push(gcds);
        }

        self.suite.engines_agree = outcomes.windows(2).all(|pair| pair[0] == pair[1]);
        if !self.suite.engines_agree {
            warn!("euclidean and stein engines disagree on at least one operand set");
        }
    }

    /// Benchmark one engine, returning its measurements and per-set outcomes.
    pub fn benchmark_algorithm(&self, algorithm: GcdAlgorithm) -> (AlgorithmBenchmark, Vec<Result<i32, GcdError>>) {
        let mut outcomes = Vec::with_capacity(self.operand_sets.len());
        let mut slowest_call_ms = 0;

        let start = Instant::now();
        for operands in &self.operand_sets {
            let outcome = match operands.as_slice() {
                [a, b, rest @ ..] => GCD::find_gcd_timed(algorithm, *a, *b, rest),
                _ => Err(GcdError::TooFewOperands { count: operands.len() }),
            };
            if let Ok(timed) = &outcome {
                slowest_call_ms = slowest_call_ms.max(timed.elapsed_ms);
            }
            outcomes.push(outcome.map(|timed| timed.gcd));
        }
        let elapsed = start.elapsed();

        let calls = self.operand_sets.len().max(1) as u128;
        let result = AlgorithmBenchmark {
            algorithm,
            operand_sets: self.operand_sets.len(),
            total_time_ms: elapsed.as_millis() as u64,
            mean_time_ns: (elapsed.as_nanos() / calls) as u64,
            slowest_call_ms,
            rejected_sets: outcomes.iter().filter(|o| o.is_err()).count(),
            checksum: outcomes
                .iter()
                .filter_map(|o| o.as_ref().ok())
                .fold(0i64, |acc, &gcd| acc.wrapping_add(gcd as i64)),
        };

        (result, outcomes)
    }

    /// Save results to JSON file
    pub fn save_results<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        self.suite.save_to_file(path)
    }

    /// Print summary to console
    pub fn print_summary(&self) {
        self.suite.print_summary();
    }

    pub fn get_suite(&self) -> &BenchmarkSuite {
        &self.suite
    }
}

/// Compare two benchmark reports
pub fn compare_benchmarks<P: AsRef<Path>>(baseline_path: P, current_path: P) -> Result<(), AppError> {
    let baseline = BenchmarkSuite::load_from_file(baseline_path)?;
    let current = BenchmarkSuite::load_from_file(current_path)?;

    println!("\n{}", "=".repeat(80));
    println!("BENCHMARK COMPARISON");
    println!("{}", "=".repeat(80));
    println!("\nBaseline: {} ({})", baseline.timestamp, baseline.system_info.git.short());
    println!("Current:  {} ({})", current.timestamp, current.system_info.git.short());

    if baseline.settings.seed != current.settings.seed
        || baseline.settings.iterations != current.settings.iterations
    {
        warn!("reports were generated from different operand corpora");
    }

    println!("\n{}", "-".repeat(80));
    println!("{:<15} {:>15} {:>15} {:>15}", "Algorithm", "Baseline", "Current", "Speedup");
    println!("{}", "-".repeat(80));

    for current_bench in &current.algorithm_benchmarks {
        if let Some(baseline_bench) = baseline.find(current_bench.algorithm) {
            println!("{:<15} {:>15} {:>15} {:>15}",
                current_bench.algorithm.name(),
                BenchmarkSuite::format_duration(baseline_bench.mean_time_ns),
                BenchmarkSuite::format_duration(current_bench.mean_time_ns),
                speedup(baseline_bench.mean_time_ns, current_bench.mean_time_ns),
            );
        }
    }

    println!("{}", "=".repeat(80));
    Ok(())
}

fn speedup(baseline_ns: u64, current_ns: u64) -> String {
    if baseline_ns == 0 || current_ns == 0 {
        return "n/a".to_string();
    }
    let speedup = baseline_ns as f64 / current_ns as f64;
    if speedup >= 1.0 {
        format!("{:.2}x faster", speedup)
    } else {
        format!("{:.2}x slower", 1.0 / speedup)
    }
}
