// src/core/mod.rs

pub mod error;
