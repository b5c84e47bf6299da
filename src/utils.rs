//! Numeric helpers for building plot ranges and formatting results.

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
///
/// `n == 0` yields an empty vector and `n == 1` yields `[start]`.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Rounds `value` to `decimals` places, half away from zero.
///
/// Negative `decimals` round to tens, hundreds, and so on. A scale beyond
/// the range of `f64` returns `value` unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    if !factor.is_normal() {
        return value;
    }
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
