// src/integer_math/mod.rs

pub mod euclidean;
pub mod gcd;
pub mod stein;
pub mod validation;
