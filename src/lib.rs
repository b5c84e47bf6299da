//! # optionlab-rs
//!
//! Black-Scholes pricing, analytic Greeks and Newton-Raphson implied
//! volatility for European options, plus the numeric series an option
//! explorer plots: payoff diagrams, price/Greek curves, volatility smiles
//! and strike × maturity volatility surfaces.
//!
//! ## Modules
//!
//! - [`pricing`]: the kernels (d1/d2, price, Greeks, IV solver), payoff,
//!   sweeps, smile and surface.
//! - [`market`]: the trait a quote provider implements, with the
//!   default-spot fallback and a market-vs-model comparison.
//! - [`config`]: default explorer inputs, loadable from JSON.
//! - [`utils`]: range and rounding helpers.
//!
//! ## What this library does not do
//!
//! - American exercise, stochastic or local volatility, Monte Carlo
//! - Calibration beyond inverting one price at a time
//! - Persisting results
//!
//! ## Usage
//!
//! ```
//! use optionlab_rs::prelude::*;
//!
//! let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
//! let price = BlackScholes::price(&params, 0.2);
//!
//! match solve_iv(&params, price, &SolverConfig::default()) {
//!     ImpliedVolatility::Converged { volatility, .. } => assert!((volatility - 0.2).abs() < 1e-4),
//!     ImpliedVolatility::NotConverged { .. } => unreachable!(),
//! }
//! ```

pub mod config;
pub mod market;
pub mod pricing;
pub mod utils;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::config::ExplorerConfig;
    pub use crate::market::{
        ChainQuote, DEFAULT_SPOT, MarketDataError, MarketDataSource, PriceComparison,
        compare_with_market, resolve_spot,
    };
    pub use crate::pricing::curves::{d1_d2_along, evaluate, greek_curves};
    pub use crate::pricing::{
        Axis, BlackScholes, Curve, Greeks, ImpliedVolatility, Metric, OptionParams, OptionType,
        Position, PricingError, SolverConfig, VolSmile, VolSurface, implied_volatility,
        payoff_diagram, solve_iv,
    };
    pub use crate::utils::{linspace, round_to};
}
