// src/core/error.rs

use thiserror::Error;

/// Failure kinds of the GCD operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GcdError {
    /// gcd(0, 0, ..., 0) is undefined.
    #[error("all operands are zero, the GCD is undefined")]
    Domain,

    /// `i32::MIN` has no representable absolute value.
    #[error("operand at position {position} is i32::MIN, which has no representable absolute value")]
    Range { position: usize },

    /// Only reachable through the slice based helpers.
    #[error("at least two operands are required, got {count}")]
    TooFewOperands { count: usize },
}

/// Errors surfaced by the command line front-end and the benchmark harness.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Gcd(#[from] GcdError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Value `{0}` is not a valid operand.")]
    InvalidOperand(String),

    #[error("Unknown algorithm `{0}` (expected `euclidean` or `stein`).")]
    UnknownAlgorithm(String),
}
