// src/lib.rs

pub mod core;
pub mod config;
pub mod integer_math;
pub mod benchmark;
pub mod benchmark_cli;

pub use crate::core::error::{AppError, GcdError};
pub use crate::integer_math::euclidean::fold_gcd_euclidean;
pub use crate::integer_math::stein::fold_gcd_stein;
pub use crate::integer_math::gcd::{
    gcd_euclidean, gcd_euclidean3, gcd_euclidean3_timed, gcd_euclidean_many, gcd_euclidean_many_timed,
    gcd_euclidean_timed, gcd_stein, gcd_stein3, gcd_stein3_timed, gcd_stein_many, gcd_stein_many_timed,
    gcd_stein_timed, GcdAlgorithm, TimedGcd, GCD,
};
pub use crate::integer_math::validation::validate_operands;
