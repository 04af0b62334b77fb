// src/greeks/mod.rs
pub mod analytic;
pub mod complex_step;
pub mod finite_diff;
