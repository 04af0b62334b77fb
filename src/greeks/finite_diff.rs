// src/greeks/finite_diff.rs
//! Classical real-valued finite-difference Greeks.
//!
//! These estimators are deliberately the textbook stencils with no error
//! recovery: the sweep exists to observe where their truncation error
//! (large `h`) crosses their subtractive-cancellation error (small `h`).

use crate::pricing::real::bs_price_call;

/// Forward-difference Delta, first-order accurate in `h`
///
/// # Formula
/// ```text
/// Δ_fd(h) = [C(S+h) - C(S)] / h
/// ```
pub fn bs_delta_fd(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64, h: f64) -> f64 {
    let price_at_s_plus_h = bs_price_call(s + h, k, r, q, sigma, t);
    let price_at_s = bs_price_call(s, k, r, q, sigma, t);
    (price_at_s_plus_h - price_at_s) / h
}

/// Three-point forward Gamma stencil, accuracy `O(h)`
///
/// # Formula
/// ```text
/// Γ_fd(h) = [C(S+2h) - 2*C(S+h) + C(S)] / h²
/// ```
///
/// Increasingly corrupted as `h → 0`: the stencil subtracts nearly equal
/// prices and divides the rounding residue by `h²`.
pub fn bs_gamma_fd(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64, h: f64) -> f64 {
    let price_at_s_plus_2h = bs_price_call(s + 2.0 * h, k, r, q, sigma, t);
    let price_at_s_plus_h = bs_price_call(s + h, k, r, q, sigma, t);
    let price_at_s = bs_price_call(s, k, r, q, sigma, t);
    (price_at_s_plus_2h - 2.0 * price_at_s_plus_h + price_at_s) / (h * h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeks::analytic::{bs_delta_analytic, bs_gamma_analytic};

    #[test]
    fn test_fd_delta_converges_at_moderate_h() {
        let (s, k, r, q, sigma, t) = (100.0, 100.0, 0.0, 0.0, 0.20, 1.0);
        let reference = bs_delta_analytic(s, k, r, q, sigma, t);
        // Forward difference carries an O(h) bias ≈ gamma * h / 2
        let h = 1e-6 * s;
        let fd = bs_delta_fd(s, k, r, q, sigma, t, h);
        let bias = 0.5 * bs_gamma_analytic(s, k, r, q, sigma, t) * h;
        assert!((fd - reference).abs() < 10.0 * bias.max(1e-12));
    }

    #[test]
    fn test_fd_gamma_converges_at_moderate_h() {
        let (s, k, r, q, sigma, t) = (100.0, 100.0, 0.0, 0.0, 0.20, 1.0);
        let reference = bs_gamma_analytic(s, k, r, q, sigma, t);
        let fd = bs_gamma_fd(s, k, r, q, sigma, t, 1e-4 * s);
        assert!(
            (fd - reference).abs() / reference < 1e-3,
            "fd = {}, reference = {}",
            fd,
            reference
        );
    }
}
