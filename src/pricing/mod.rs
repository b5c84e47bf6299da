//! Black-Scholes pricing, Greeks and implied volatility.
//!
//! # Overview
//!
//! - [`BlackScholes`]: d1/d2, closed-form call/put prices and the five
//!   analytic Greeks.
//! - [`solve_iv`]: Newton-Raphson inversion of the price for volatility,
//!   returning an explicit [`ImpliedVolatility`] outcome.
//! - [`payoff_diagram`]: terminal payoff of a long or short position.
//! - [`curves`]: element-wise evaluation along spot, strike, maturity,
//!   volatility or rate.
//! - [`VolSmile`] / [`VolSurface`]: per-point inversion over strikes and
//!   a strike × maturity grid.
//!
//! # Numeric singularities
//!
//! Inputs are not validated. A zero time to expiry or zero volatility makes
//! the d1/d2 division singular, and NaN or infinite values propagate into
//! prices and Greeks instead of raising an error.
//!
//! # Example
//!
//! ```
//! use optionlab_rs::pricing::{BlackScholes, Greeks, OptionParams};
//!
//! let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
//! let price = BlackScholes::price(&params, 0.2);
//! let greeks = Greeks::compute(&params, 0.2);
//!
//! assert!((price - 10.4506).abs() < 1e-4);
//! assert!((greeks.delta - 0.6368).abs() < 1e-4);
//! ```

mod black_scholes;
pub mod curves;
mod distribution;
mod error;
mod greeks;
mod payoff;
mod solver;
mod surface;
mod types;

pub use black_scholes::BlackScholes;
pub use curves::{Axis, Curve, Metric};
pub use distribution::{norm_cdf, norm_pdf};
pub use error::PricingError;
pub use greeks::Greeks;
pub use payoff::{payoff_at, payoff_diagram};
pub use solver::{
    DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, DEFAULT_VEGA_EPSILON,
    ImpliedVolatility, SolverConfig, implied_volatility, solve_iv,
};
pub use surface::{VolSmile, VolSurface};
pub use types::{OptionParams, OptionType, Position};
