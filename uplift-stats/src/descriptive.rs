//! Descriptive statistics for numeric samples.
//!
//! These are the shared numeric primitives consumed by every test in the
//! crate: [`mean`], [`variance`] (sample variance, Bessel's correction), and
//! [`std_dev`].
//!
//! Degenerate inputs yield a defined zero rather than an error: `mean` of an
//! empty slice is 0.0, and `variance`/`std_dev` of fewer than two
//! observations are 0.0. The test functions in [`crate::testing`],
//! [`crate::resample`], and [`crate::abtest`] validate their inputs up front
//! and never rely on these zeros to mask bad data.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with Bessel's correction (n − 1 denominator).
///
/// Returns 0.0 when the sample has fewer than two observations.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    let ss: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    ss / (n - 1) as f64
}

/// Sample standard deviation (square root of [`variance`]).
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

// ── Tests ──────────────────────────────────────────────────────────────────
