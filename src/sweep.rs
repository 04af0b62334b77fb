// src/sweep.rs
//! Step-size sweep driving every estimator against the analytic reference.
//!
//! The analytic delta and gamma are step-size independent and computed
//! once per scenario; the finite-difference and complex-step estimators
//! are evaluated at each relative step of a log-uniform grid, scaled by
//! the spot into an absolute step.

use crate::error::validation::{validate_finite, validate_non_negative, validate_positive};
use crate::error::{GreeksError, GreeksResult};
use crate::greeks::analytic::{bs_delta_analytic, bs_gamma_analytic};
use crate::greeks::complex_step::{bs_delta_cs, bs_gamma_cs_45, bs_gamma_cs_real};
use crate::greeks::finite_diff::{bs_delta_fd, bs_gamma_fd};

/// Market and contract parameters for one validation scenario.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioParams {
    pub s: f64,
    pub k: f64,
    pub r: f64,
    pub q: f64,
    pub sigma: f64,
    pub t: f64,
}

impl ScenarioParams {
    /// Boundary validation for harness inputs.
    ///
    /// The numeric core itself never errors; this guards the sweep entry
    /// point. `s > 0` is required because relative steps scale with the
    /// spot and the log-moneyness needs a positive forward.
    pub fn validate(&self) -> GreeksResult<()> {
        validate_positive("s", self.s)?;
        validate_non_negative("k", self.k)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_non_negative("t", self.t)?;
        validate_finite("s", self.s)?;
        validate_finite("k", self.k)?;
        validate_finite("r", self.r)?;
        validate_finite("q", self.q)?;
        validate_finite("sigma", self.sigma)?;
        validate_finite("t", self.t)?;
        Ok(())
    }
}

/// Log-uniform grid of relative step sizes `h_rel = 10^x`,
/// `x ∈ [log_h_rel_min, log_h_rel_max]`.
#[derive(Debug, Clone, Copy)]
pub struct StepGrid {
    pub log_h_rel_min: f64,
    pub log_h_rel_max: f64,
    pub num_steps: usize,
}

impl Default for StepGrid {
    /// 24 points spanning `h_rel` from 1e-16 to 1e-4: wide enough to show
    /// both the truncation-dominated and the cancellation-dominated ends.
    fn default() -> Self {
        StepGrid {
            log_h_rel_min: -16.0,
            log_h_rel_max: -4.0,
            num_steps: 24,
        }
    }
}

impl StepGrid {
    pub fn validate(&self) -> GreeksResult<()> {
        if self.num_steps < 2 {
            return Err(GreeksError::InvalidConfiguration {
                field: "num_steps".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        if self.log_h_rel_min >= self.log_h_rel_max {
            return Err(GreeksError::InvalidConfiguration {
                field: "log_h_rel_min".to_string(),
                reason: "must be below log_h_rel_max".to_string(),
            });
        }
        Ok(())
    }

    /// The relative step sizes, in ascending order.
    pub fn h_rels(&self) -> Vec<f64> {
        let span = self.log_h_rel_max - self.log_h_rel_min;
        (0..self.num_steps)
            .map(|i| {
                let log_h =
                    self.log_h_rel_min + span * i as f64 / (self.num_steps - 1) as f64;
                10f64.powf(log_h)
            })
            .collect()
    }
}

/// One row of the comparison table: every estimate at one step size plus
/// absolute errors against the analytic reference.
#[derive(Debug, Clone, Copy)]
pub struct SweepRecord {
    pub h_rel: f64,
    pub h: f64,
    pub delta_analytic: f64,
    pub delta_fd: f64,
    pub delta_cs: f64,
    pub err_d_fd: f64,
    pub err_d_cs: f64,
    pub gamma_analytic: f64,
    pub gamma_fd: f64,
    pub gamma_cs_real: f64,
    pub gamma_cs_45: f64,
    pub err_g_fd: f64,
    pub err_g_cs_real: f64,
    pub err_g_cs_45: f64,
}

/// Run the full estimator comparison for one scenario.
///
/// Returns one record per grid point, ordered by ascending `h_rel`.
pub fn run_sweep(params: &ScenarioParams, grid: &StepGrid) -> GreeksResult<Vec<SweepRecord>> {
    params.validate()?;
    grid.validate()?;

    let ScenarioParams { s, k, r, q, sigma, t } = *params;

    let delta_analytic = bs_delta_analytic(s, k, r, q, sigma, t);
    let gamma_analytic = bs_gamma_analytic(s, k, r, q, sigma, t);

    let records = grid
        .h_rels()
        .into_iter()
        .map(|h_rel| {
            let h = h_rel * s;

            let delta_fd = bs_delta_fd(s, k, r, q, sigma, t, h);
            let delta_cs = bs_delta_cs(s, k, r, q, sigma, t, h);

            let gamma_fd = bs_gamma_fd(s, k, r, q, sigma, t, h);
            let gamma_cs_real = bs_gamma_cs_real(s, k, r, q, sigma, t, h);
            let gamma_cs_45 = bs_gamma_cs_45(s, k, r, q, sigma, t, h);

            SweepRecord {
                h_rel,
                h,
                delta_analytic,
                delta_fd,
                delta_cs,
                err_d_fd: (delta_fd - delta_analytic).abs(),
                err_d_cs: (delta_cs - delta_analytic).abs(),
                gamma_analytic,
                gamma_fd,
                gamma_cs_real,
                gamma_cs_45,
                err_g_fd: (gamma_fd - gamma_analytic).abs(),
                err_g_cs_real: (gamma_cs_real - gamma_analytic).abs(),
                err_g_cs_45: (gamma_cs_45 - gamma_analytic).abs(),
            }
        })
        .collect();

    Ok(records)
}
