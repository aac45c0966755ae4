// src/main.rs

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, error};

use gcd_calc::benchmark::compare_benchmarks;
use gcd_calc::benchmark_cli::run_benchmarks;
use gcd_calc::config::GcdConfig;
use gcd_calc::{AppError, GcdAlgorithm, GCD};

/// Greatest common divisor calculator (Euclidean and Stein engines)
#[derive(Parser)]
#[command(name = "gcd-calc")]
#[command(version = "0.1.0")]
#[command(about = "Compute the GCD of two or more integers", long_about = None)]
struct Cli {
    /// Configuration file (defaults to gcd.toml / gcd.yaml in the working directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the GCD of the given operands
    Compute {
        /// Engine to use: euclidean or stein
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Also report elapsed milliseconds
        #[arg(short, long)]
        timed: bool,

        /// Two or more operands
        #[arg(required = true, num_args = 2.., allow_negative_numbers = true)]
        operands: Vec<String>,
    },

    /// Benchmark both engines on a seeded operand corpus
    Bench {
        /// Operand sets to generate
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Operands per set
        #[arg(long)]
        operands: Option<usize>,

        /// Report file (defaults to a timestamped file in benchmark.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare two benchmark reports
    Compare {
        baseline: PathBuf,
        current: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str())).init();
    debug!("loaded configuration: {:?}", config);

    if let Err(e) = run(cli.command, config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GcdConfig, AppError> {
    let config = match path {
        Some(path) => GcdConfig::load_from_file(path)?,
        None => GcdConfig::load()?,
    };
    Ok(config)
}

fn run(command: Commands, config: GcdConfig) -> Result<(), AppError> {
    match command {
        Commands::Compute { algorithm, timed, operands } => {
            let algorithm = match algorithm {
                Some(name) => name.parse::<GcdAlgorithm>()?,
                None => config.algorithm,
            };
            let operands = parse_operands(&operands)?;
            compute(algorithm, timed || config.timed, &operands)
        }
        Commands::Bench { iterations, operands, output } => {
            let mut settings = config.benchmark;
            if let Some(iterations) = iterations {
                settings.iterations = iterations;
            }
            if let Some(operand_count) = operands {
                settings.operand_count = operand_count;
            }
            run_benchmarks(settings, output).map(|_| ())
        }
        Commands::Compare { baseline, current } => compare_benchmarks(baseline, current),
    }
}

fn compute(algorithm: GcdAlgorithm, timed: bool, operands: &[i32]) -> Result<(), AppError> {
    let (a, b, rest) = match operands {
        [a, b, rest @ ..] => (*a, *b, rest),
        _ => return Err(gcd_calc::GcdError::TooFewOperands { count: operands.len() }.into()),
    };

    if timed {
        let (gcd, elapsed_ms) = GCD::find_gcd_timed(algorithm, a, b, rest)?.into_parts();
        println!("{}", gcd);
        println!("elapsed: {} ms", elapsed_ms);
    } else {
        println!("{}", GCD::find_gcd(algorithm, a, b, rest)?);
    }
    Ok(())
}

fn parse_operands(raw: &[String]) -> Result<Vec<i32>, AppError> {
    raw.iter()
        .map(|s| s.trim().parse::<i32>().map_err(|_| AppError::InvalidOperand(s.clone())))
        .collect()
}
