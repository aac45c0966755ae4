// src/integer_math/gcd.rs

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, GcdError};
use crate::integer_math::euclidean::fold_gcd_euclidean;
use crate::integer_math::stein::fold_gcd_stein;
use crate::integer_math::validation::validate_operands;

/// The pairwise engine used to reduce an operand set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GcdAlgorithm {
    /// Remainder reduction.
    #[default]
    Euclidean,
    /// Binary shift-and-subtract.
    Stein,
}

impl GcdAlgorithm {
    pub const ALL: [GcdAlgorithm; 2] = [GcdAlgorithm::Euclidean, GcdAlgorithm::Stein];

    /// Unvalidated pairwise step.
    pub fn fold(self, a: i32, b: i32) -> i32 {
        match self {
            GcdAlgorithm::Euclidean => fold_gcd_euclidean(a, b),
            GcdAlgorithm::Stein => fold_gcd_stein(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GcdAlgorithm::Euclidean => "euclidean",
            GcdAlgorithm::Stein => "stein",
        }
    }
}

impl fmt::Display for GcdAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GcdAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "euclid" => Ok(GcdAlgorithm::Euclidean),
            "stein" | "binary" => Ok(GcdAlgorithm::Stein),
            _ => Err(AppError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A GCD together with the wall-clock time spent validating and reducing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedGcd {
    pub gcd: i32,
    pub elapsed_ms: u64,
}

impl TimedGcd {
    pub fn into_parts(self) -> (i32, u64) {
        (self.gcd, self.elapsed_ms)
    }
}

pub struct GCD;

impl GCD {
    /// Validates, then folds `a`, `b` and `rest` left to right.
    pub fn find_gcd(algorithm: GcdAlgorithm, a: i32, b: i32, rest: &[i32]) -> Result<i32, GcdError> {
        validate_operands(a, b, rest)?;
        Ok(Self::reduce(algorithm, a, b, rest))
    }

    pub fn find_gcd_timed(algorithm: GcdAlgorithm, a: i32, b: i32, rest: &[i32]) -> Result<TimedGcd, GcdError> {
        let start = Instant::now();
        validate_operands(a, b, rest)?;
        let gcd = Self::reduce(algorithm, a, b, rest);
        let elapsed = start.elapsed();

        debug!("{} gcd of {} operands = {} in {:.3?}", algorithm, rest.len() + 2, gcd, elapsed);
        Ok(TimedGcd {
            gcd,
            elapsed_ms: elapsed.as_millis() as u64,
        })
    }

    /// Slice form: the first two entries are the fixed operands.
    pub fn find_gcd_slice(algorithm: GcdAlgorithm, operands: &[i32]) -> Result<i32, GcdError> {
        match operands {
            [a, b, rest @ ..] => Self::find_gcd(algorithm, *a, *b, rest),
            _ => Err(GcdError::TooFewOperands { count: operands.len() }),
        }
    }

    pub fn are_coprime(algorithm: GcdAlgorithm, operands: &[i32]) -> Result<bool, GcdError> {
        Self::find_gcd_slice(algorithm, operands).map(|gcd| gcd == 1)
    }

    fn reduce(algorithm: GcdAlgorithm, a: i32, b: i32, rest: &[i32]) -> i32 {
        rest.iter().fold(algorithm.fold(a, b), |acc, &x| algorithm.fold(acc, x))
    }
}

pub fn gcd_euclidean(a: i32, b: i32) -> Result<i32, GcdError> {
    GCD::find_gcd(GcdAlgorithm::Euclidean, a, b, &[])
}

pub fn gcd_euclidean3(a: i32, b: i32, c: i32) -> Result<i32, GcdError> {
    GCD::find_gcd(GcdAlgorithm::Euclidean, a, b, &[c])
}

pub fn gcd_euclidean_many(a: i32, b: i32, rest: &[i32]) -> Result<i32, GcdError> {
    GCD::find_gcd(GcdAlgorithm::Euclidean, a, b, rest)
}

pub fn gcd_stein(a: i32, b: i32) -> Result<i32, GcdError> {
    GCD::find_gcd(GcdAlgorithm::Stein, a, b, &[])
}

pub fn gcd_stein3(a: i32, b: i32, c: i32) -> Result<i32, GcdError> {
    GCD::find_gcd(GcdAlgorithm::Stein, a, b, &[c])
}

pub fn gcd_stein_many(a: i32, b: i32, rest: &[i32]) -> Result<i32, GcdError> {
    GCD::find_gcd(GcdAlgorithm::Stein, a, b, rest)
}

pub fn gcd_euclidean_timed(a: i32, b: i32) -> Result<TimedGcd, GcdError> {
    GCD::find_gcd_timed(GcdAlgorithm::Euclidean, a, b, &[])
}

pub fn gcd_euclidean3_timed(a: i32, b: i32, c: i32) -> Result<TimedGcd, GcdError> {
    GCD::find_gcd_timed(GcdAlgorithm::Euclidean, a, b, &[c])
}

pub fn gcd_euclidean_many_timed(a: i32, b: i32, rest: &[i32]) -> Result<TimedGcd, GcdError> {
    GCD::find_gcd_timed(GcdAlgorithm::Euclidean, a, b, rest)
}

pub fn gcd_stein_timed(a: i32, b: i32) -> Result<TimedGcd, GcdError> {
    GCD::find_gcd_timed(GcdAlgorithm::Stein, a, b, &[])
}

pub fn gcd_stein3_timed(a: i32, b: i32, c: i32) -> Result<TimedGcd, GcdError> {
    GCD::find_gcd_timed(GcdAlgorithm::Stein, a, b, &[c])
}

pub fn gcd_stein_many_timed(a: i32, b: i32, rest: &[i32]) -> Result<TimedGcd, GcdError> {
    GCD::find_gcd_timed(GcdAlgorithm::Stein, a, b, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert_eq!(gcd_euclidean(48, 18), Ok(6));
        assert_eq!(gcd_stein(48, 18), Ok(6));
        assert_eq!(gcd_euclidean(-48, 18), Ok(6));
        assert_eq!(gcd_euclidean3(17, 5, 3), Ok(1));
        assert_eq!(gcd_stein(0, 7), Ok(7));
        assert_eq!(gcd_euclidean(1, 1), Ok(1));
    }

    #[test]
    fn test_variadic_forms() {
        assert_eq!(gcd_euclidean_many(12, 18, &[]), Ok(6));
        assert_eq!(gcd_euclidean_many(12, 18, &[30, -42]), Ok(6));
        assert_eq!(gcd_stein_many(12, 18, &[30, -42]), Ok(6));
        assert_eq!(gcd_stein_many(0, 0, &[0, 9]), Ok(9));
        assert_eq!(gcd_stein3(-8, 12, 20), Ok(4));
    }

    #[test]
    fn test_errors() {
        assert_eq!(gcd_euclidean(0, 0), Err(GcdError::Domain));
        assert_eq!(gcd_euclidean_many(0, 0, &[0, 0, 0]), Err(GcdError::Domain));
        assert_eq!(gcd_stein3(0, 0, 0), Err(GcdError::Domain));
        assert_eq!(gcd_euclidean(i32::MIN, 0), Err(GcdError::Range { position: 0 }));
        assert_eq!(gcd_stein_many(4, 6, &[i32::MIN]), Err(GcdError::Range { position: 2 }));
    }

    #[test]
    fn test_timed_matches_untimed() {
        let timed = gcd_euclidean_many_timed(84, 36, &[60]).unwrap();
        assert_eq!(timed.gcd, 12);
        assert_eq!(gcd_stein_timed(48, 18).unwrap().into_parts().0, 6);
        assert_eq!(gcd_stein3_timed(0, 0, 0), Err(GcdError::Domain));
    }

    #[test]
    fn test_slice_helpers() {
        assert_eq!(GCD::find_gcd_slice(GcdAlgorithm::Stein, &[9, 6, 15]), Ok(3));
        assert_eq!(GCD::find_gcd_slice(GcdAlgorithm::Euclidean, &[9]), Err(GcdError::TooFewOperands { count: 1 }));
        assert_eq!(GCD::are_coprime(GcdAlgorithm::Euclidean, &[17, 5, 3]), Ok(true));
        assert_eq!(GCD::are_coprime(GcdAlgorithm::Stein, &[4, 6]), Ok(false));
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("Stein".parse::<GcdAlgorithm>().unwrap(), GcdAlgorithm::Stein);
        assert_eq!("euclidean".parse::<GcdAlgorithm>().unwrap(), GcdAlgorithm::Euclidean);
        assert!("fermat".parse::<GcdAlgorithm>().is_err());
        assert_eq!(GcdAlgorithm::Stein.to_string(), "stein");
        assert_eq!(serde_json::to_string(&GcdAlgorithm::Euclidean).unwrap(), "\"euclidean\"");
    }
}
