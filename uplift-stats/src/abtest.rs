//! Two-proportion A/B test analysis.
//!
//! Provides [`analyze_ab_test`], a two-proportion z-test over a control and
//! a treatment arm, reporting per-arm rates, relative lift, the z statistic,
//! a normal-approximation p-value, and a natural-language recommendation.

use uplift_core::{Result, Scored, Summarizable, UpliftError};

use crate::distribution::normal_two_tailed_p;
use crate::testing::validate_alpha;

/// A (successes, trials) observation for one experiment arm.
///
/// Construct through [`Proportion::new`]; the fields are private so an
/// observation with zero trials or more successes than trials cannot be
/// built without going through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proportion {
    successes: u64,
    trials: u64,
}

impl Proportion {
    /// Create a proportion observation. `trials` must be positive and
    /// `successes` must not exceed it.
    pub fn new(successes: u64, trials: u64) -> Result<Self> {
        let p = Self { successes, trials };
        p.check()?;
        Ok(p)
    }

    /// Number of successes (conversions, clicks, ...).
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Number of trials. Always positive.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Success rate, `successes / trials`.
    pub fn rate(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }

    fn check(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(UpliftError::InvalidInput(
                "Proportion: trials must be positive".into(),
            ));
        }
        if self.successes > self.trials {
            return Err(UpliftError::InvalidInput(format!(
                "Proportion: successes ({}) exceed trials ({})",
                self.successes, self.trials,
            )));
        }
        Ok(())
    }
}

/// Result of a two-proportion A/B test.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbTestAnalysis {
    /// Control-arm success rate.
    pub control_rate: f64,
    /// Treatment-arm success rate.
    pub treatment_rate: f64,
    /// Relative lift of treatment over control, in percent.
    pub lift_percent: f64,
    /// Two-proportion z statistic (0 when the standard error is zero).
    pub z_statistic: f64,
    /// Two-tailed p-value (normal approximation).
    pub p_value: f64,
    /// Whether `p_value < alpha`.
    pub significant: bool,
    /// Confidence level, `1 − alpha`.
    pub confidence_level: f64,
    /// Natural-language recommendation describing direction and verdict.
    pub recommendation: String,
}

impl Scored for AbTestAnalysis {
    fn score(&self) -> f64 {
        self.p_value
    }
}

impl Summarizable for AbTestAnalysis {
    fn summary(&self) -> String {
        format!(
            "control={:.4}, treatment={:.4}, lift={:.2}%, z={:.4}, p={:.6}, significant={}",
            self.control_rate,
            self.treatment_rate,
            self.lift_percent,
            self.z_statistic,
            self.p_value,
            self.significant,
        )
    }
}

/// Analyze an A/B test on conversion-style proportions.
///
/// Computes per-arm rates, the relative lift of treatment over control, the
/// pooled two-proportion z statistic, and a two-tailed normal-approximation
/// p-value (see [`crate::distribution`]).
///
/// A zero standard error yields `z = 0` by explicit convention. A zero
/// control rate makes the relative lift undefined and fails with
/// [`UpliftError::DegenerateStatistic`] rather than producing an infinity.
pub fn analyze_ab_test(
    control: Proportion,
    treatment: Proportion,
    alpha: f64,
) -> Result<AbTestAnalysis> {
    validate_alpha("analyze_ab_test", alpha)?;
    // Deserialized observations have not been through `new`; re-check so a
    // zero-trial arm cannot flow through as infinity/NaN.
    control.check()?;
    treatment.check()?;

    let control_rate = control.rate();
    let treatment_rate = treatment.rate();

    if control_rate == 0.0 {
        return Err(UpliftError::DegenerateStatistic(
            "analyze_ab_test: control rate is zero, relative lift is undefined".into(),
        ));
    }
    let lift_percent = (treatment_rate - control_rate) / control_rate * 100.0;

    // Sum in f64: u64 addition can overflow for counts near u64::MAX.
    let p_pool = (control.successes as f64 + treatment.successes as f64)
        / (control.trials as f64 + treatment.trials as f64);
    let se = (p_pool
        * (1.0 - p_pool)
        * (1.0 / control.trials as f64 + 1.0 / treatment.trials as f64))
        .sqrt();

    let z_statistic = if se > 0.0 {
        (treatment_rate - control_rate) / se
    } else {
        0.0
    };

    let p_value = normal_two_tailed_p(z_statistic);
    let significant = p_value < alpha;

    let recommendation = format!(
        "Treatment shows {:.1}% {} in conversion rate. {} at {}% confidence level.",
        lift_percent.abs(),
        if lift_percent > 0.0 { "increase" } else { "decrease" },
        if significant {
            "Statistically significant"
        } else {
            "Not statistically significant"
        },
        (1.0 - alpha) * 100.0,
    );

    Ok(AbTestAnalysis {
        control_rate,
        treatment_rate,
        lift_percent,
        z_statistic,
        p_value,
        significant,
        confidence_level: 1.0 - alpha,
        recommendation,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────
