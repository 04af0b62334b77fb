// src/pricing/generic.rs
//! Scalar-polymorphic Black-Scholes call pricer.
//!
//! The same price formula as [`real`](crate::pricing::real), re-expressed
//! over any scalar type providing field arithmetic, `exp`/`ln`/`sqrt` and a
//! normal-CDF extension. Two domains are supported: plain `f64`, where the
//! extension is the ordinary CDF, and `Complex<f64>`, where it is the
//! first-order Taylor extension along the imaginary direction that
//! complex-step differentiation relies on.

use num_complex::Complex;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math_utils::{norm_cdf, norm_pdf};

/// Scalar domain the generic call pricer can evaluate over.
///
/// Implementors supply the arithmetic closure {`+`, `-`, `*`, `/`, unary
/// `-`, `exp`, `ln`, `sqrt`} plus [`norm_cdf_ext`](Self::norm_cdf_ext),
/// the domain's own normal CDF.
pub trait PriceScalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lift a real constant into the scalar domain.
    fn from_f64(x: f64) -> Self;

    fn exp(self) -> Self;

    fn ln(self) -> Self;

    fn sqrt(self) -> Self;

    /// Normal CDF in this scalar domain.
    ///
    /// For a real argument this must coincide with Φ; for an extended
    /// domain it supplies whatever extension the domain's differentiation
    /// scheme needs.
    fn norm_cdf_ext(self) -> Self;
}

impl PriceScalar for f64 {
    fn from_f64(x: f64) -> Self {
        x
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn norm_cdf_ext(self) -> Self {
        norm_cdf(self)
    }
}

impl PriceScalar for Complex<f64> {
    fn from_f64(x: f64) -> Self {
        Complex::new(x, 0.0)
    }

    fn exp(self) -> Self {
        self.exp()
    }

    fn ln(self) -> Self {
        self.ln()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    /// First-order Taylor extension of the normal CDF into the complex
    /// plane along the imaginary direction:
    ///
    /// ```text
    /// Φ_ext(z) = Φ(Re z) + i * Im(z) * φ(Re z)
    /// ```
    ///
    /// Valid only for the small imaginary displacements a complex-step
    /// perturbation produces. This is not a holomorphic continuation and
    /// must not be used for finite imaginary arguments.
    fn norm_cdf_ext(self) -> Self {
        Complex::new(norm_cdf(self.re), self.im * norm_pdf(self.re))
    }
}

/// Black-Scholes European call price over any [`PriceScalar`] domain.
///
/// Identical in structure to
/// [`bs_price_call`](crate::pricing::real::bs_price_call), with two
/// intentional asymmetries:
///
/// - no zero-total-volatility short-circuit, and
/// - the log-moneyness is always the direct `ln(F/K)` (no `log1p` branch).
///
/// # Preconditions
/// The effective total volatility `σ√T` must be nonzero in this domain;
/// with `σ√T = 0` the `d₁` division is `0/0` and the result is NaN, not
/// the intrinsic value. Complex-step callers satisfy this automatically
/// because the perturbation keeps the evaluation off the real axis.
pub fn bs_price_call_generic<T: PriceScalar>(s: T, k: T, r: T, q: T, sigma: T, t: T) -> T {
    let half = T::from_f64(0.5);

    let df = (-(r * t)).exp();
    let f = s * ((r - q) * t).exp();
    let sigma_t = sigma * t.sqrt();

    let ln_f_over_k = (f / k).ln();

    let d1 = (ln_f_over_k + half * sigma * sigma * t) / sigma_t;
    let d2 = d1 - sigma_t;

    df * (f * d1.norm_cdf_ext() - k * d2.norm_cdf_ext())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::real::bs_price_call;

    #[test]
    fn test_generic_f64_matches_real_pricer() {
        let cases = [
            (100.0, 100.0, 0.0, 0.0, 0.20, 1.0),
            (100.0, 100.0, 0.0, 0.0, 0.01, 1.0 / 365.0),
            (120.0, 100.0, 0.03, 0.01, 0.25, 2.0),
            (80.0, 100.0, 0.05, 0.0, 0.15, 0.5),
        ];
        for (s, k, r, q, sigma, t) in cases {
            let real = bs_price_call(s, k, r, q, sigma, t);
            let generic = bs_price_call_generic(s, k, r, q, sigma, t);
            let rel = (real - generic).abs() / real.abs();
            assert!(rel < 1e-12, "real = {}, generic = {}, rel = {}", real, generic, rel);
        }
    }

    #[test]
    fn test_generic_complex_real_axis_matches_real_pricer() {
        let (s, k, r, q, sigma, t) = (100.0, 100.0, 0.0, 0.0, 0.20, 1.0);
        let c = bs_price_call_generic(
            Complex::new(s, 0.0),
            Complex::new(k, 0.0),
            Complex::new(r, 0.0),
            Complex::new(q, 0.0),
            Complex::new(sigma, 0.0),
            Complex::new(t, 0.0),
        );
        let real = bs_price_call(s, k, r, q, sigma, t);
        assert!((c.re - real).abs() / real < 1e-12);
        assert_eq!(c.im, 0.0);
    }

    #[test]
    fn test_cdf_extension_degenerates_on_real_axis() {
        let z = Complex::new(0.3, 0.0);
        let ext = z.norm_cdf_ext();
        assert!((ext.re - crate::math_utils::norm_cdf(0.3)).abs() < 1e-15);
        assert_eq!(ext.im, 0.0);
    }
}
