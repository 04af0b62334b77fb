// src/math_utils.rs
//! Numerically careful building blocks shared by every pricer and Greek.
//!
//! The accuracy of the whole comparison rests on these primitives: the CDF
//! is computed from the complementary error function so tail values keep
//! full relative accuracy, and the log-moneyness switches to `log1p` when
//! the forward and the strike are nearly equal.

use statrs::function::erf;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Standard normal CDF Φ(z)
///
/// # Formula
/// ```text
/// Φ(z) = 0.5 * erfc(-z / √2)
/// ```
///
/// The erfc form stays accurate deep in the lower tail, where the naive
/// `0.5 * (1 + erf(z / √2))` loses relative precision.
pub fn norm_cdf(z: f64) -> f64 {
    0.5 * erf::erfc(-z * FRAC_1_SQRT_2)
}

/// Standard normal PDF φ(z)
///
/// # Formula
/// ```text
/// φ(z) = (1/√(2π)) * exp(-z²/2)
/// ```
pub fn norm_pdf(z: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * z * z).exp()
}

/// Forward price `F = S * exp((r - q) * T)`
pub fn forward_price(s: f64, r: f64, q: f64, t: f64) -> f64 {
    s * ((r - q) * t).exp()
}

/// Total volatility `σ√T`.
///
/// Negative maturities are a caller error but are clamped to zero so a
/// stray `T < 0` cannot push a NaN through `sqrt`.
pub fn total_vol(sigma: f64, t: f64) -> f64 {
    sigma * t.max(0.0).sqrt()
}

/// `ln(F/K)` with cancellation control near the money.
///
/// When `F` and `K` are within `1e-12` relative distance the direct
/// quotient `F/K` rounds to a value indistinguishable from 1 and the
/// logarithm loses every significant digit; `log1p((F-K)/K)` keeps them.
/// For `K <= 0` this falls back to the direct logarithm and inherits its
/// IEEE semantics (`-inf` at `K = 0`), never a panic.
pub fn log_moneyness(f: f64, k: f64) -> f64 {
    if k > 0.0 {
        let x = (f - k) / k;
        if x.abs() <= 1e-12 {
            x.ln_1p()
        } else {
            (f / k).ln()
        }
    } else {
        (f / k).ln()
    }
}

/// `d1 = (ln(F/K) + σ²T/2) / (σ√T)`
///
/// Produces `NaN`/`±inf` (never an error) when `sigma_t == 0`; callers
/// must branch on zero total volatility before calling this.
pub fn d1_calc(log_moneyness: f64, sigma: f64, t: f64, sigma_t: f64) -> f64 {
    (log_moneyness + 0.5 * sigma * sigma * t) / sigma_t
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
