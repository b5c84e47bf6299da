//! Newton-Raphson solver for implied volatility calculation.
//!
//! Finds the volatility that makes the Black-Scholes price equal to an
//! observed price. The iteration starts from a fixed guess, applies no
//! bounds to the estimate and reports exhaustion explicitly as
//! [`ImpliedVolatility::NotConverged`].

use super::black_scholes::BlackScholes;
use super::error::PricingError;
use super::types::{OptionParams, OptionType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default convergence tolerance on the absolute price difference.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default starting volatility (20%).
pub const DEFAULT_INITIAL_GUESS: f64 = 0.2;

/// Added to vega in the Newton step so a vanishing vega cannot divide by zero.
pub const DEFAULT_VEGA_EPSILON: f64 = 1e-8;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum iterations before giving up.
    pub max_iterations: u32,
    /// Convergence tolerance for price difference.
    pub tolerance: f64,
    /// Initial volatility guess.
    pub initial_guess: f64,
    /// Stabilizer added to vega in the update denominator.
    pub vega_epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            initial_guess: DEFAULT_INITIAL_GUESS,
            vega_epsilon: DEFAULT_VEGA_EPSILON,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the initial volatility guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the vega stabilizer.
    #[must_use]
    pub fn with_vega_epsilon(mut self, vega_epsilon: f64) -> Self {
        self.vega_epsilon = vega_epsilon;
        self
    }
}

/// Outcome of an implied volatility solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImpliedVolatility {
    /// A volatility reproducing the target price within tolerance.
    Converged {
        /// The volatility whose price met the tolerance.
        volatility: f64,
        /// Iterations used, counting the converging one.
        iterations: u32,
    },
    /// The iteration cap was reached. No volatility is usable.
    NotConverged {
        /// Iterations attempted.
        iterations: u32,
    },
}

impl ImpliedVolatility {
    /// Returns the volatility if the solve converged.
    #[must_use]
    pub fn volatility(&self) -> Option<f64> {
        match self {
            ImpliedVolatility::Converged { volatility, .. } => Some(*volatility),
            ImpliedVolatility::NotConverged { .. } => None,
        }
    }

    /// Returns true if the solve converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, ImpliedVolatility::Converged { .. })
    }

    /// Number of iterations performed.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match self {
            ImpliedVolatility::Converged { iterations, .. }
            | ImpliedVolatility::NotConverged { iterations } => *iterations,
        }
    }

    /// Converts into a `Result` for callers that propagate with `?`.
    ///
    /// # Errors
    /// Returns [`PricingError::NotConverged`] when the solve was exhausted.
    pub fn into_result(self) -> Result<f64, PricingError> {
        match self {
            ImpliedVolatility::Converged { volatility, .. } => Ok(volatility),
            ImpliedVolatility::NotConverged { iterations } => {
                Err(PricingError::NotConverged { iterations })
            }
        }
    }
}

/// Solves for implied volatility using Newton-Raphson method.
///
/// Each iteration prices at the current estimate σ, computes vega and forms
/// σ' = σ - (price - target) / (vega + ε). Convergence is tested on the
/// price at σ, before the update, and that σ is what is returned.
///
/// Nothing keeps σ positive or bounded while iterating. A target price that
/// no volatility can reach (below intrinsic, above the spot for a call, ...)
/// sends the estimate wandering until the iteration cap, and the caller gets
/// [`ImpliedVolatility::NotConverged`] with no estimate attached. A match
/// found at a negative or non-finite σ is reported the same way.
///
/// # Arguments
/// - `params`: Option parameters (spot, strike, time, rate, type)
/// - `target_price`: Observed price to match
/// - `config`: Solver configuration
///
/// # Example
/// ```
/// use optionlab_rs::pricing::{BlackScholes, OptionParams, SolverConfig, solve_iv};
///
/// let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
/// let price = BlackScholes::price(&params, 0.3);
/// let iv = solve_iv(&params, price, &SolverConfig::default());
/// assert!((iv.volatility().unwrap() - 0.3).abs() < 1e-4);
/// ```
#[must_use]
pub fn solve_iv(
    params: &OptionParams,
    target_price: f64,
    config: &SolverConfig,
) -> ImpliedVolatility {
    let mut vol = config.initial_guess;

    for iteration in 0..config.max_iterations {
        let price = BlackScholes::price(params, vol);
        let vega = BlackScholes::vega(params, vol);
        let diff = price - target_price;

        if diff.abs() < config.tolerance {
            // A negative target is matched exactly at a negative σ.
            if !(vol.is_finite() && vol >= 0.0) {
                debug!(
                    "iv matched target {} at unusable volatility {} (K={}, T={})",
                    target_price, vol, params.strike, params.time_to_expiry
                );
                return ImpliedVolatility::NotConverged {
                    iterations: iteration + 1,
                };
            }
            debug!(
                "iv converged to {} after {} iterations (K={}, T={})",
                vol,
                iteration + 1,
                params.strike,
                params.time_to_expiry
            );
            return ImpliedVolatility::Converged {
                volatility: vol,
                iterations: iteration + 1,
            };
        }

        vol -= diff / (vega + config.vega_epsilon);
    }

    debug!(
        "iv did not converge after {} iterations (target={}, K={}, T={})",
        config.max_iterations, target_price, params.strike, params.time_to_expiry
    );
    ImpliedVolatility::NotConverged {
        iterations: config.max_iterations,
    }
}

/// Scalar convenience wrapper over [`solve_iv`] with default tolerance,
/// iteration cap and initial guess.
#[must_use]
pub fn implied_volatility(
    target_price: f64,
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    option_type: OptionType,
) -> ImpliedVolatility {
    let params = OptionParams::new(spot, strike, time_to_expiry, risk_free_rate, option_type);
    solve_iv(&params, target_price, &SolverConfig::default())
}
