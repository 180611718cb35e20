//! Normal distribution and numerical helpers for p-value computation.
//!
//! Provides the [`erf`] error function, the [`Normal`] distribution, and the
//! [`normal_two_tailed_p`] tail used by the t-test and the two-proportion
//! z-test.
//!
//! The tests in this crate use the standard normal tail as an approximation
//! of the exact Student-t tail. That is a deliberate simplification: for
//! moderate-to-large samples the two agree closely, but a consumer comparing
//! against an exact-t implementation will see small differences.

use core::f64::consts::SQRT_2;

use uplift_core::{Result, UpliftError};

/// Error function via Abramowitz & Stegun 7.1.26 (max error ~1.5e-7).
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + 0.3275911 * x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// Normal (Gaussian) distribution with parameters μ and σ.
///
/// Construct through [`Normal::new`] or [`Normal::standard`]; the fields are
/// private so a non-positive σ cannot be smuggled past validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Create a new Normal distribution. `sigma` must be positive.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if sigma <= 0.0 {
            return Err(UpliftError::InvalidInput(
                "Normal: sigma must be positive".into(),
            ));
        }
        Ok(Self { mu, sigma })
    }

    /// The standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Cumulative distribution function Φ((x − μ)/σ), computed via [`erf`].
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        0.5 * (1.0 + erf(z / SQRT_2))
    }
}

/// Two-tailed p-value under the standard normal: `2 · (1 − Φ(|z|))`.
pub fn normal_two_tailed_p(z: f64) -> f64 {
    2.0 * (1.0 - Normal::standard().cdf(z.abs()))
}

// ── Tests ──────────────────────────────────────────────────────────────────
