//! # cstep-greeks: Complex-Step Greeks for Black-Scholes
//!
//! A Rust library that computes delta and gamma of a European call option
//! under the Black-Scholes model with three independent numerical techniques
//! and cross-validates them across twelve orders of magnitude of step size.
//!
//! ## Key Features
//!
//! - **Analytic Reference**: closed-form delta and gamma with explicit
//!   degenerate-volatility limits and a log-space-stabilized gamma
//! - **Finite Differences**: classical forward-difference delta and a
//!   three-point gamma stencil, showcasing subtractive cancellation
//! - **Complex-Step Differentiation**: cancellation-free delta, plus two
//!   gamma estimators including the 45°-rotated two-sided variant
//! - **Stable Numerics**: erfc-based normal CDF, log1p log-moneyness near
//!   the money, intrinsic-value branch at zero total volatility
//! - **Validation Sweeps**: log-uniform step-size grids and CSV comparison
//!   tables for plotting error profiles
//!
//! ## Quick Start
//!
//! ```rust
//! use cstep_greeks::greeks::{analytic, complex_step};
//!
//! // At-the-money call: S = K = 100, sigma = 20%, T = 1y
//! let (s, k, r, q, sigma, t) = (100.0, 100.0, 0.0, 0.0, 0.20, 1.0);
//!
//! let delta_ref = analytic::bs_delta_analytic(s, k, r, q, sigma, t);
//! let delta_cs = complex_step::bs_delta_cs(s, k, r, q, sigma, t, 1e-8 * s);
//!
//! assert!((delta_cs - delta_ref).abs() < 1e-12);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Complex-step differentiation evaluates the pricer at a purely imaginary
//! displacement `S + ih` and reads off `Im C / h`, which approximates the
//! first derivative without subtracting nearly equal quantities. A second
//! perturbation direction rotated by 45° in the complex plane yields a
//! second-derivative estimator that needs no real-valued reference point.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod pricing;
pub mod greeks;
pub mod sweep;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{GreeksError, GreeksResult};
