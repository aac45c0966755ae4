// src/config/gcd_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

use crate::integer_math::gcd::GcdAlgorithm;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcdConfig {
    /// Engine used when none is given on the command line
    pub algorithm: GcdAlgorithm,

    /// Report elapsed time alongside results
    pub timed: bool,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Benchmark harness settings
    pub benchmark: BenchmarkConfig,
}

/// Settings for the engine comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Operand sets generated per run (default: 10_000)
    pub iterations: usize,

    /// Operands per set, at least two (default: 4)
    pub operand_count: usize,

    /// Operands are drawn from [-max_magnitude, max_magnitude]
    pub max_magnitude: i32,

    /// Seed for reproducible operand sets
    pub seed: u64,

    /// Directory the JSON report is written to
    pub output_dir: String,
}

impl Default for GcdConfig {
    fn default() -> Self {
        GcdConfig {
            algorithm: GcdAlgorithm::Euclidean,
            timed: false,
            log_level: "info".to_string(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            iterations: 10_000,
            operand_count: 4,
            max_magnitude: i32::MAX,
            seed: 42,
            output_dir: ".".to_string(),
        }
    }
}

impl GcdConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("gcd.toml").exists() {
            builder = builder.add_source(File::with_name("gcd.toml"));
        } else if Path::new("gcd.yaml").exists() {
            builder = builder.add_source(File::with_name("gcd.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = BenchmarkConfig::default();
        Config::builder()
            .set_default("algorithm", GcdAlgorithm::Euclidean.name())?
            .set_default("timed", false)?
            .set_default("log_level", "info")?
            .set_default("benchmark.iterations", defaults.iterations as u64)?
            .set_default("benchmark.operand_count", defaults.operand_count as u64)?
            .set_default("benchmark.max_magnitude", defaults.max_magnitude as i64)?
            .set_default("benchmark.seed", defaults.seed)?
            .set_default("benchmark.output_dir", defaults.output_dir)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. GCD_BENCHMARK__SEED=7
        let config = builder
            .add_source(
                Environment::with_prefix("GCD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
