// src/integer_math/euclidean.rs

use log::trace;

/// Pairwise Euclidean GCD without validation.
///
/// Operands are expected inside the validated range (no `i32::MIN`). The
/// reduction runs in `i64`, so an unvalidated `i32::MIN` cannot overflow the
/// remainder step, but a result of 2^31 wraps when narrowed back.
pub fn fold_gcd_euclidean(a: i32, b: i32) -> i32 {
    let gcd = remainder_reduce(a as i64, b as i64);
    trace!("euclidean fold: gcd({}, {}) = {}", a, b, gcd);
    gcd as i32
}

/// gcd(a, b) = b == 0 ? a : gcd(b, a mod b)
///
/// Each level returns a non-negative value, the base case included.
fn remainder_reduce(a: i64, b: i64) -> i64 {
    let result = if b == 0 { a } else { remainder_reduce(b, a % b) };
    if result < 0 {
        -result
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(fold_gcd_euclidean(48, 18), 6);
        assert_eq!(fold_gcd_euclidean(18, 48), 6);
        assert_eq!(fold_gcd_euclidean(17, 5), 1);
        assert_eq!(fold_gcd_euclidean(1, 1), 1);
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(fold_gcd_euclidean(-48, 18), 6);
        assert_eq!(fold_gcd_euclidean(48, -18), 6);
        assert_eq!(fold_gcd_euclidean(-48, -18), 6);
    }

    #[test]
    fn test_zero_operand() {
        assert_eq!(fold_gcd_euclidean(-7, 0), 7);
        assert_eq!(fold_gcd_euclidean(0, -7), 7);
        // Unvalidated primitive: gcd(0, 0) folds to 0.
        assert_eq!(fold_gcd_euclidean(0, 0), 0);
    }

    #[test]
    fn test_extreme_operands() {
        assert_eq!(fold_gcd_euclidean(i32::MAX, -i32::MAX), i32::MAX);
        assert_eq!(fold_gcd_euclidean(i32::MAX, i32::MAX - 1), 1);
        assert_eq!(fold_gcd_euclidean(1 << 30, -(1 << 20)), 1 << 20);
    }

    #[test]
    fn test_each_level_is_non_negative() {
        assert_eq!(remainder_reduce(-5, 0), 5);
        assert_eq!(remainder_reduce(-12, -8), 4);
        assert_eq!(remainder_reduce(12, -8), 4);
    }
}
