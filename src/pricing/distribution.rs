//! Standard normal distribution primitives.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Standard normal cumulative distribution function Φ(x).
///
/// NaN propagates; ±∞ map to 1 and 0.
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    Normal::standard().cdf(x)
}

/// Standard normal probability density function φ(x).
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    Normal::standard().pdf(x)
}
