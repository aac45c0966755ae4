// src/integer_math/stein.rs

use log::trace;

/// Pairwise binary (Stein) GCD without validation.
///
/// The shift-and-subtract recursion keeps the sign of its operands; the
/// absolute value is taken once here. Differences are formed in `i64` since
/// `|a - b|` of two in-range `i32` operands can exceed `i32::MAX`.
pub fn fold_gcd_stein(a: i32, b: i32) -> i32 {
    let gcd = binary_reduce(a as i64, b as i64).abs();
    trace!("stein fold: gcd({}, {}) = {}", a, b, gcd);
    gcd as i32
}

fn binary_reduce(a: i64, b: i64) -> i64 {
    if a == 0 {
        return b;
    }
    if b == 0 || a == b {
        return a;
    }
    if a == 1 || b == 1 {
        return 1;
    }

    match (a & 1 == 0, b & 1 == 0) {
        (true, true) => binary_reduce(a >> 1, b >> 1) << 1,
        (true, false) => binary_reduce(a >> 1, b),
        (false, true) => binary_reduce(a, b >> 1),
        (false, false) => binary_reduce(b, (a - b).abs()),
    }
}
