//! Bootstrap resampling.
//!
//! Provides [`bootstrap_confidence_interval`], a percentile bootstrap for
//! the mean of a sample. The random source is injected by the caller so
//! tests can pin a seed; each call is otherwise independent and pure.

use rand::Rng;
use uplift_core::{Result, Summarizable, UpliftError};

use crate::descriptive;

/// Default number of bootstrap resamples.
pub const DEFAULT_BOOTSTRAP_ITERATIONS: usize = 1000;

/// Default confidence level for the interval.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// A bootstrap confidence interval for a sample mean.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BootstrapInterval {
    /// Lower percentile bound of the bootstrap-means distribution.
    pub lower: f64,
    /// Mean of the original sample.
    pub point_estimate: f64,
    /// Upper percentile bound of the bootstrap-means distribution.
    pub upper: f64,
}

impl Summarizable for BootstrapInterval {
    fn summary(&self) -> String {
        format!(
            "[{:.4}, {:.4}], point={:.4}",
            self.lower, self.upper, self.point_estimate,
        )
    }
}

/// Percentile bootstrap confidence interval for the mean of `data`.
///
/// Draws `n_iterations` resamples of the same size as `data`, each element
/// chosen independently and uniformly with replacement, records the mean of
/// each resample, sorts the means, and reads off the `(1 − confidence)/2`
/// and `(1 + confidence)/2` percentiles. The point estimate is the mean of
/// the original sample, not of the resamples.
///
/// Percentile indices are clamped into `[0, n_iterations − 1]`, so extreme
/// but valid inputs (confidence 1.0, very small iteration counts) stay in
/// range. A confidence outside `(0, 1]` fails with
/// [`UpliftError::IndexOutOfRange`] since it would place an index outside
/// the bootstrap-means vector.
pub fn bootstrap_confidence_interval<R: Rng + ?Sized>(
    data: &[f64],
    n_iterations: usize,
    confidence: f64,
    rng: &mut R,
) -> Result<BootstrapInterval> {
    if data.is_empty() {
        return Err(UpliftError::InvalidInput(
            "bootstrap_confidence_interval: data must not be empty".into(),
        ));
    }
    if n_iterations == 0 {
        return Err(UpliftError::InvalidInput(
            "bootstrap_confidence_interval: need at least one iteration".into(),
        ));
    }
    if !(confidence > 0.0 && confidence <= 1.0) {
        return Err(UpliftError::IndexOutOfRange(format!(
            "bootstrap_confidence_interval: confidence {} places percentile indices outside [0, {})",
            confidence, n_iterations,
        )));
    }

    let n = data.len();
    let mut bootstrap_means = Vec::with_capacity(n_iterations);
    let mut resample = vec![0.0; n];
    for _ in 0..n_iterations {
        for slot in resample.iter_mut() {
            *slot = data[rng.gen_range(0..n)];
        }
        bootstrap_means.push(descriptive::mean(&resample));
    }

    bootstrap_means.sort_by(|a, b| a.total_cmp(b));

    let lower_idx = (((1.0 - confidence) / 2.0 * n_iterations as f64) as usize)
        .min(n_iterations - 1);
    let upper_idx = (((1.0 + confidence) / 2.0 * n_iterations as f64) as usize)
        .min(n_iterations - 1);

    Ok(BootstrapInterval {
        lower: bootstrap_means[lower_idx],
        point_estimate: descriptive::mean(data),
        upper: bootstrap_means[upper_idx],
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOL: f64 = 1e-10;

    /// Deterministic roughly-normal sample (sum of uniforms), no test-time RNG.
    fn noisy_sample(n: usize, seed: u64) -> Vec<f64> {
        let mut state = seed;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 11) as f64 / (1u64 << 53) as f64
        };
        (0..n)
            .map(|_| (0..12).map(|_| next()).sum::<f64>() - 6.0)
            .collect()
    }

    #[test]
    fn constant_sample_degenerate_interval() {
        let data = [4.2; 30];
        for iterations in [1, 10, 1000] {
            let mut rng = StdRng::seed_from_u64(7);
            let ci =
                bootstrap_confidence_interval(&data, iterations, 0.95, &mut rng).unwrap();
            assert!((ci.lower - 4.2).abs() < TOL);
            assert!((ci.point_estimate - 4.2).abs() < TOL);
            assert!((ci.upper - 4.2).abs() < TOL);
        }
    }

    #[test]
    fn bounds_ordered_on_noisy_data() {
        let data = noisy_sample(200, 42);
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ci = bootstrap_confidence_interval(&data, 2000, 0.95, &mut rng).unwrap();
            assert!(ci.lower <= ci.point_estimate + 1e-9, "{:?}", ci);
            assert!(ci.point_estimate <= ci.upper + 1e-9, "{:?}", ci);
            assert!(ci.upper > ci.lower);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let data = noisy_sample(50, 9);
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);
        let a = bootstrap_confidence_interval(&data, 500, 0.9, &mut rng_a).unwrap();
        let b = bootstrap_confidence_interval(&data, 500, 0.9, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn full_confidence_clamps_indices() {
        // confidence = 1.0 would index at n_iterations without the clamp.
        let data = noisy_sample(20, 3);
        let mut rng = StdRng::seed_from_u64(5);
        let ci = bootstrap_confidence_interval(&data, 100, 1.0, &mut rng).unwrap();
        assert!(ci.lower <= ci.upper);
    }

    #[test]
    fn single_iteration_clamps_indices() {
        let data = [1.0, 2.0, 3.0];
        let mut rng = StdRng::seed_from_u64(5);
        let ci = bootstrap_confidence_interval(&data, 1, 0.95, &mut rng).unwrap();
        // One resample: both bounds are that resample's mean.
        assert!((ci.lower - ci.upper).abs() < TOL);
    }

    #[test]
    fn empty_data_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            bootstrap_confidence_interval(&[], 100, 0.95, &mut rng),
            Err(UpliftError::InvalidInput(_)),
        ));
    }

    #[test]
    fn zero_iterations_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            bootstrap_confidence_interval(&[1.0, 2.0], 0, 0.95, &mut rng),
            Err(UpliftError::InvalidInput(_)),
        ));
    }

    #[test]
    fn out_of_domain_confidence_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for confidence in [0.0, -0.5, 1.5] {
            assert!(matches!(
                bootstrap_confidence_interval(&[1.0, 2.0], 100, confidence, &mut rng),
                Err(UpliftError::IndexOutOfRange(_)),
            ));
        }
    }

    #[test]
    fn interval_summary() {
        let ci = BootstrapInterval {
            lower: 0.6,
            point_estimate: 0.65,
            upper: 0.7,
        };
        let s = ci.summary();
        assert!(s.contains("0.6000"));
        assert!(s.contains("point="));
    }
}
