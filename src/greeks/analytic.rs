// src/greeks/analytic.rs
//! Closed-form Black-Scholes delta and gamma.
//!
//! These are the reference values every numerical estimator in the sweep
//! is measured against, so the degenerate limits are handled explicitly
//! and gamma evaluates `φ(d₁)` in log space to dodge premature underflow.

use crate::math_utils::{d1_calc, forward_price, log_moneyness, norm_cdf, total_vol};
use std::f64::consts::PI;

/// Analytic Delta (∂C/∂S) for a European call
///
/// # Formula
/// ```text
/// Δ = e^(-qT) * Φ(d₁)
/// ```
///
/// # Degenerate limit
/// At zero total volatility the price is the kinked intrinsic payoff, so
/// delta is the discounted indicator of the forward finishing in the
/// money: `e^(-qT)` for `F > K`, `0` for `F < K`, and the sub-gradient
/// midpoint `0.5 * e^(-qT)` exactly at the kink.
///
/// # Interpretation
/// - Hedge ratio: shares held per option sold
/// - Range: [0, e^(-qT)] for calls
pub fn bs_delta_analytic(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let f = forward_price(s, r, q, t);
    let sigma_t = total_vol(sigma, t);
    if sigma_t == 0.0 {
        return if f > k {
            (-q * t).exp()
        } else if f < k {
            0.0
        } else {
            0.5 * (-q * t).exp()
        };
    }
    let ln_f_over_k = log_moneyness(f, k);
    let d1 = d1_calc(ln_f_over_k, sigma, t, sigma_t);
    (-q * t).exp() * norm_cdf(d1)
}

/// Analytic Gamma (∂²C/∂S²) for a European call
///
/// # Formula
/// ```text
/// Γ = e^(-qT) * φ(d₁) / (S * σ√T)
/// ```
///
/// `φ(d₁)` is evaluated in log space,
/// ```text
/// log φ(d₁) = -d₁²/2 - log √(2π)
/// ```
/// and exponentiated at the end, so deep in/out-of-the-money values do
/// not underflow before the division by `S * σ√T`.
///
/// # Degenerate limit
/// At zero total volatility the price is piecewise linear in `S` and the
/// second derivative is zero almost everywhere; gamma returns `0`.
pub fn bs_gamma_analytic(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let f = forward_price(s, r, q, t);
    let sigma_t = total_vol(sigma, t);
    if sigma_t == 0.0 {
        return 0.0;
    }
    let ln_f_over_k = log_moneyness(f, k);
    let d1 = d1_calc(ln_f_over_k, sigma, t, sigma_t);
    let log_sqrt_2pi = (2.0 * PI).sqrt().ln();
    let log_phi_d1 = -0.5 * d1 * d1 - log_sqrt_2pi;
    let phi_d1_stable = log_phi_d1.exp();
    (-q * t).exp() * phi_d1_stable / (s * sigma_t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_utils::norm_pdf;

    #[test]
    fn test_atm_delta() {
        // r = q = 0, S = K: d1 = σ√T/2 = 0.1, delta = Φ(0.1)
        let delta = bs_delta_analytic(100.0, 100.0, 0.0, 0.0, 0.20, 1.0);
        assert!((delta - 0.5398278372770290).abs() < 1e-13, "delta = {}", delta);
    }

    #[test]
    fn test_atm_gamma() {
        // gamma = φ(0.1) / (100 * 0.2)
        let gamma = bs_gamma_analytic(100.0, 100.0, 0.0, 0.0, 0.20, 1.0);
        let expected = norm_pdf(0.1) / 20.0;
        assert!((gamma - expected).abs() < 1e-15, "gamma = {}", gamma);
    }

    #[test]
    fn test_stable_gamma_matches_direct_formula_deep_otm() {
        // Far out of the money: d1 is large and negative, φ(d1) tiny
        let (s, k, r, q, sigma, t) = (100.0, 400.0, 0.0, 0.0, 0.10, 0.25);
        let gamma = bs_gamma_analytic(s, k, r, q, sigma, t);
        let f = forward_price(s, r, q, t);
        let sigma_t = total_vol(sigma, t);
        let d1 = d1_calc(log_moneyness(f, k), sigma, t, sigma_t);
        let direct = norm_pdf(d1) / (s * sigma_t);
        assert!(gamma > 0.0);
        assert!((gamma - direct).abs() <= 1e-15 * direct.abs().max(1.0));
    }

    #[test]
    fn test_degenerate_vol_delta_branches() {
        let qy = 0.02;
        let disc = (-qy * 1.0f64).exp();
        // F > K
        let itm = bs_delta_analytic(110.0, 100.0, 0.0, qy, 0.0, 1.0);
        assert!((itm - disc).abs() < 1e-15);
        // F < K
        let otm = bs_delta_analytic(90.0, 100.0, 0.0, qy, 0.0, 1.0);
        assert_eq!(otm, 0.0);
        // F = K: sub-gradient midpoint
        let atm = bs_delta_analytic(100.0, 100.0, 0.0, 0.0, 0.0, 1.0);
        assert!((atm - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_degenerate_vol_gamma_is_zero() {
        assert_eq!(bs_gamma_analytic(110.0, 100.0, 0.0, 0.0, 0.0, 1.0), 0.0);
        assert_eq!(bs_gamma_analytic(110.0, 100.0, 0.05, 0.0, 0.2, 0.0), 0.0);
    }
}
