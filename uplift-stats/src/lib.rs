//! Statistical hypothesis testing for the uplift experiment-analysis toolkit.
//!
//! The engine is a set of pure, stateless functions over in-memory numeric
//! data — callers supply samples, counts, and a significance threshold, and
//! receive immutable result records:
//!
//! - **Descriptive statistics** — [`descriptive`]: mean, sample variance,
//!   standard deviation
//! - **Hypothesis testing** — [`testing`]: independent two-sample t-test,
//!   chi-square goodness-of-fit test
//! - **Resampling** — [`resample`]: bootstrap confidence interval for a mean,
//!   with an injectable random source
//! - **A/B analysis** — [`abtest`]: two-proportion z-test with lift and a
//!   significance verdict
//! - **Distributions** — [`distribution`]: error function and normal CDF used
//!   for p-value approximation
//!
//! P-values are computed through a normal-approximation tail (and, for the
//! goodness-of-fit test, a deliberately coarse closed form) rather than exact
//! distribution tables; each function documents this where it applies.

pub mod abtest;
pub mod descriptive;
pub mod distribution;
pub mod resample;
pub mod testing;

/// Default significance threshold used by callers that have no opinion.
pub const DEFAULT_ALPHA: f64 = 0.05;
