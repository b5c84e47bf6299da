//! Element-wise evaluation of the kernels along one varying input.
//!
//! The presentation layer plots price and Greeks against spot, volatility
//! or maturity. A sweep holds every input fixed except the one named by an
//! [`Axis`] and evaluates a [`Metric`] at each point.

use super::black_scholes::BlackScholes;
use super::types::OptionParams;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Input varied along a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Underlying spot price.
    Spot,
    /// Strike price.
    Strike,
    /// Time to expiry in years.
    TimeToExpiry,
    /// Volatility.
    Volatility,
    /// Risk-free rate.
    RiskFreeRate,
}

impl Axis {
    /// Applies `value` on this axis, returning the adjusted parameters and volatility.
    #[must_use]
    pub fn apply(&self, params: &OptionParams, vol: f64, value: f64) -> (OptionParams, f64) {
        match self {
            Axis::Spot => (params.with_spot(value), vol),
            Axis::Strike => (params.with_strike(value), vol),
            Axis::TimeToExpiry => (params.with_time_to_expiry(value), vol),
            Axis::Volatility => (*params, value),
            Axis::RiskFreeRate => (params.with_risk_free_rate(value), vol),
        }
    }
}

/// Quantity evaluated at each point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Option price.
    Price,
    /// Delta.
    Delta,
    /// Gamma.
    Gamma,
    /// Vega.
    Vega,
    /// Theta.
    Theta,
    /// Rho.
    Rho,
}

impl Metric {
    /// Evaluates this metric at a single point.
    #[must_use]
    pub fn evaluate(&self, params: &OptionParams, vol: f64) -> f64 {
        match self {
            Metric::Price => BlackScholes::price(params, vol),
            Metric::Delta => BlackScholes::delta(params, vol),
            Metric::Gamma => BlackScholes::gamma(params, vol),
            Metric::Vega => BlackScholes::vega(params, vol),
            Metric::Theta => BlackScholes::theta(params, vol),
            Metric::Rho => BlackScholes::rho(params, vol),
        }
    }
}

/// A metric sampled along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Varied input.
    pub axis: Axis,
    /// Evaluated quantity.
    pub metric: Metric,
    /// Input values, in caller order.
    pub x: Vec<f64>,
    /// Metric values, one per input value.
    pub y: Vec<f64>,
}

impl Curve {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true when the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Input value at which the metric is largest, ignoring NaN points.
    #[must_use]
    pub fn argmax(&self) -> Option<f64> {
        self.x
            .iter()
            .zip(&self.y)
            .filter(|(_, y)| !y.is_nan())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(x, _)| *x)
    }
}

/// d1/d2 at each value of `axis`.
#[must_use]
pub fn d1_d2_along(
    params: &OptionParams,
    vol: f64,
    axis: Axis,
    values: &[f64],
) -> Vec<(f64, f64)> {
    values
        .iter()
        .map(|&value| {
            let (params, vol) = axis.apply(params, vol, value);
            BlackScholes::d1_d2(&params, vol)
        })
        .collect()
}

/// Evaluates `metric` at each value of `axis`, everything else held at `params`/`vol`.
#[must_use]
pub fn evaluate(
    params: &OptionParams,
    vol: f64,
    axis: Axis,
    values: &[f64],
    metric: Metric,
) -> Curve {
    let y = values
        .iter()
        .map(|&value| {
            let (params, vol) = axis.apply(params, vol, value);
            metric.evaluate(&params, vol)
        })
        .collect();

    Curve {
        axis,
        metric,
        x: values.to_vec(),
        y,
    }
}

/// Delta, gamma and vega curves along one axis.
#[must_use]
pub fn greek_curves(params: &OptionParams, vol: f64, axis: Axis, values: &[f64]) -> Vec<Curve> {
    debug!("greek curves along {:?} over {} points", axis, values.len());
    [Metric::Delta, Metric::Gamma, Metric::Vega]
        .into_iter()
        .map(|metric| evaluate(params, vol, axis, values, metric))
        .collect()
}
