//! Hypothesis testing.
//!
//! Provides the independent two-sample t-test ([`t_test_independent`]) and
//! the chi-square goodness-of-fit test ([`chi_square_test`]).
//!
//! Both return an immutable [`TestResult`] owned by the caller. P-values use
//! closed-form approximations (see [`crate::distribution`] and the notes on
//! [`chi_square_test`]) rather than exact tail distributions.

use uplift_core::{Result, Scored, Summarizable, UpliftError};

use crate::descriptive;
use crate::distribution::normal_two_tailed_p;

/// Result of a hypothesis test.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestResult {
    /// Name of the test performed.
    pub test_name: String,
    /// The test statistic (t, χ², etc.).
    pub statistic: f64,
    /// Two-tailed p-value.
    pub p_value: f64,
    /// Degrees of freedom, if applicable. Informational: the p-value
    /// approximations do not consume it.
    pub degrees_of_freedom: Option<f64>,
    /// Whether `p_value < alpha`.
    pub significant: bool,
    /// Confidence level, `1 − alpha`.
    pub confidence_level: f64,
    /// Human-readable interpretation of the outcome.
    pub interpretation: String,
}

impl Scored for TestResult {
    fn score(&self) -> f64 {
        self.p_value
    }
}

impl Summarizable for TestResult {
    fn summary(&self) -> String {
        match self.degrees_of_freedom {
            Some(df) => format!(
                "{}: statistic={:.4}, df={:.1}, p={:.6}, significant={}",
                self.test_name, self.statistic, df, self.p_value, self.significant,
            ),
            None => format!(
                "{}: statistic={:.4}, p={:.6}, significant={}",
                self.test_name, self.statistic, self.p_value, self.significant,
            ),
        }
    }
}

/// Validate a significance threshold: must lie strictly inside (0, 1).
pub(crate) fn validate_alpha(context: &str, alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(UpliftError::InvalidInput(format!(
            "{}: alpha must be in (0, 1), got {}",
            context, alpha,
        )));
    }
    Ok(())
}

// ── Independent two-sample t-test ──────────────────────────────────────────

/// Independent two-sample t-test with pooled variance.
///
/// Tests whether `group_a` and `group_b` have significantly different means
/// at significance threshold `alpha`. Each group must be non-empty and the
/// combined size must exceed 2.
///
/// The two-tailed p-value uses the standard normal tail in place of the
/// exact Student-t tail (see [`crate::distribution`]); the degrees of
/// freedom `n_a + n_b − 2` are reported but not consumed.
///
/// A zero pooled standard deviation (both groups constant at the same
/// spread) yields [`UpliftError::DegenerateStatistic`] rather than a NaN or
/// infinite statistic.
pub fn t_test_independent(group_a: &[f64], group_b: &[f64], alpha: f64) -> Result<TestResult> {
    validate_alpha("t_test_independent", alpha)?;
    if group_a.is_empty() || group_b.is_empty() {
        return Err(UpliftError::InvalidInput(
            "t_test_independent: both groups must be non-empty".into(),
        ));
    }

    let n_a = group_a.len();
    let n_b = group_b.len();
    if n_a + n_b <= 2 {
        return Err(UpliftError::InvalidInput(format!(
            "t_test_independent: combined size must exceed 2 (got {} + {})",
            n_a, n_b,
        )));
    }

    let n_a_f = n_a as f64;
    let n_b_f = n_b as f64;
    let mean_a = descriptive::mean(group_a);
    let mean_b = descriptive::mean(group_b);
    let var_a = descriptive::variance(group_a);
    let var_b = descriptive::variance(group_b);

    let pooled_var = ((n_a_f - 1.0) * var_a + (n_b_f - 1.0) * var_b) / (n_a_f + n_b_f - 2.0);
    let pooled_std = pooled_var.sqrt();
    if pooled_std == 0.0 {
        return Err(UpliftError::DegenerateStatistic(
            "t_test_independent: pooled standard deviation is zero".into(),
        ));
    }

    let t_stat = (mean_a - mean_b) / (pooled_std * (1.0 / n_a_f + 1.0 / n_b_f).sqrt());
    let df = n_a_f + n_b_f - 2.0;
    let p_value = normal_two_tailed_p(t_stat);
    let significant = p_value < alpha;

    let interpretation = format!(
        "Group A mean: {:.2}, Group B mean: {:.2}. {} difference detected (p={:.4}, α={}).",
        mean_a,
        mean_b,
        if significant { "Significant" } else { "No significant" },
        p_value,
        alpha,
    );

    Ok(TestResult {
        test_name: "Independent T-Test".into(),
        statistic: t_stat,
        p_value,
        degrees_of_freedom: Some(df),
        significant,
        confidence_level: 1.0 - alpha,
        interpretation,
    })
}

// ── Chi-square goodness-of-fit test ────────────────────────────────────────

/// Chi-square goodness-of-fit test.
///
/// Tests whether `observed` frequencies match `expected` frequencies, paired
/// by index. The statistic is `Σ (o − e)² / e` over indices where `e > 0`;
/// zero expected entries contribute nothing rather than an infinity.
///
/// The p-value is a coarse closed-form approximation, preserved for
/// compatibility with existing consumers: `exp(−χ²/2)` when the statistic is
/// below 10, and a fixed floor of 0.001 otherwise. It is not the exact
/// chi-square tail.
pub fn chi_square_test(observed: &[f64], expected: &[f64], alpha: f64) -> Result<TestResult> {
    validate_alpha("chi_square_test", alpha)?;
    if observed.len() != expected.len() {
        return Err(UpliftError::InvalidInput(format!(
            "chi_square_test: observed and expected must have same length ({} vs {})",
            observed.len(),
            expected.len(),
        )));
    }
    if observed.is_empty() {
        return Err(UpliftError::InvalidInput(
            "chi_square_test: count vectors must be non-empty".into(),
        ));
    }
    if !expected.iter().any(|&e| e > 0.0) {
        return Err(UpliftError::InvalidInput(
            "chi_square_test: at least one expected frequency must be positive".into(),
        ));
    }

    let chi_stat: f64 = observed
        .iter()
        .zip(expected)
        .filter(|(_, &e)| e > 0.0)
        .map(|(&o, &e)| (o - e).powi(2) / e)
        .sum();

    let df = (observed.len() - 1) as f64;
    let p_value = if chi_stat < 10.0 {
        (-chi_stat / 2.0).exp()
    } else {
        0.001
    };
    let significant = p_value < alpha;

    let interpretation = format!(
        "Chi-square statistic: {:.2} (df={}). {} difference between observed and expected frequencies (p={:.4}).",
        chi_stat,
        df,
        if significant { "Significant" } else { "No significant" },
        p_value,
    );

    Ok(TestResult {
        test_name: "Chi-Square Test".into(),
        statistic: chi_stat,
        p_value,
        degrees_of_freedom: Some(df),
        significant,
        confidence_level: 1.0 - alpha,
        interpretation,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────
