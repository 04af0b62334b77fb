// src/pricing/real.rs
//! Real-valued Black-Scholes call pricer.

use crate::math_utils::{d1_calc, forward_price, log_moneyness, norm_cdf, total_vol};

/// Black-Scholes European call option price with continuous carry yield
///
/// # Formula
/// ```text
/// C(S,K,r,q,σ,T) = e^(-rT) * [F*Φ(d₁) - K*Φ(d₂)]
/// ```
///
/// Where:
/// ```text
/// F  = S * e^((r-q)T)
/// d₁ = [ln(F/K) + σ²T/2] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// # Degenerate branch
/// When the total volatility `σ√T` is zero (zero vol or zero maturity)
/// `d₁`/`d₂` would be `0/0`; the price collapses to the discounted
/// intrinsic value `e^(-rT) * max(F - K, 0)` and is returned directly.
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `q`: Dividend/carry yield
/// - `sigma`: Volatility
/// - `t`: Time to expiration
///
/// # Returns
/// Present value of the call option. Never panics; non-finite inputs
/// propagate non-finite outputs.
pub fn bs_price_call(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let df = (-r * t).exp();
    let f = forward_price(s, r, q, t);
    let sigma_t = total_vol(sigma, t);
    if sigma_t == 0.0 {
        return df * (f - k).max(0.0);
    }

    let ln_f_over_k = log_moneyness(f, k);
    let d1 = d1_calc(ln_f_over_k, sigma, t, sigma_t);
    let d2 = d1 - sigma_t;

    df * (f * norm_cdf(d1) - k * norm_cdf(d2))
}
