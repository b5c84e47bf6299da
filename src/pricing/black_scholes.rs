//! Black-Scholes pricing kernel.
//!
//! Closed-form European option prices and the auxiliary d1/d2 terms shared
//! with the Greeks in [`super::greeks`].
//!
//! No input is guarded. With `time_to_expiry == 0` or `vol == 0` the d1/d2
//! division is singular and NaN or infinite values flow through every
//! downstream result; callers that need a finite answer must validate first.

use super::distribution::norm_cdf;
use super::types::{OptionParams, OptionType};
use tracing::trace;

/// Black-Scholes pricing model implementation.
///
/// Stateless; all methods are associated functions.
pub struct BlackScholes;

impl BlackScholes {
    /// Calculates the d1 parameter of the Black-Scholes formula.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    ///
    /// # Arguments
    /// - `spot`: Current underlying price (S)
    /// - `strike`: Option strike price (K)
    /// - `rate`: Risk-free interest rate (r)
    /// - `time`: Time to expiration in years (T)
    /// - `vol`: Volatility (σ)
    #[must_use]
    pub fn d1(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
        let sqrt_time = time.sqrt();
        ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * sqrt_time)
    }

    /// Calculates the d2 parameter of the Black-Scholes formula.
    ///
    /// d2 = d1 - σ√T
    #[must_use]
    pub fn d2(d1: f64, vol: f64, time: f64) -> f64 {
        d1 - vol * time.sqrt()
    }

    /// Calculates `(d1, d2)` for the given parameters and volatility.
    ///
    /// The option type does not enter either term.
    #[must_use]
    pub fn d1_d2(params: &OptionParams, vol: f64) -> (f64, f64) {
        let d1 = Self::d1(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.time_to_expiry,
            vol,
        );
        let d2 = Self::d2(d1, vol, params.time_to_expiry);
        (d1, d2)
    }

    /// Discount factor e^(-rT).
    #[must_use]
    pub fn discount(params: &OptionParams) -> f64 {
        (-params.risk_free_rate * params.time_to_expiry).exp()
    }

    /// Calculates the theoretical option price using Black-Scholes formula.
    ///
    /// For calls: C = S·N(d1) - K·e^(-rT)·N(d2)
    /// For puts:  P = K·e^(-rT)·N(-d2) - S·N(-d1)
    ///
    /// # Arguments
    /// - `params`: Option parameters (spot, strike, time, rate, type)
    /// - `vol`: Volatility (σ)
    ///
    /// # Returns
    /// Theoretical option price, or a non-finite value for singular inputs
    #[must_use]
    pub fn price(params: &OptionParams, vol: f64) -> f64 {
        let (d1, d2) = Self::d1_d2(params, vol);
        Self::price_from_d(params, d1, d2)
    }

    /// Prices from precomputed d1/d2, for callers that already hold them.
    #[must_use]
    pub fn price_from_d(params: &OptionParams, d1: f64, d2: f64) -> f64 {
        let discount = Self::discount(params);

        let price = match params.option_type {
            OptionType::Call => {
                params.spot * norm_cdf(d1) - params.strike * discount * norm_cdf(d2)
            }
            OptionType::Put => {
                params.strike * discount * norm_cdf(-d2) - params.spot * norm_cdf(-d1)
            }
        };
        trace!(
            "price {:?} S={} K={} d1={} d2={} -> {}",
            params.option_type, params.spot, params.strike, d1, d2, price
        );
        price
    }

    /// Prices an option whose type arrives as an untrusted string.
    ///
    /// # Errors
    /// Returns [`super::PricingError::InvalidOptionType`] for anything other
    /// than `call` or `put`.
    pub fn price_str(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        vol: f64,
        option_type: &str,
    ) -> Result<f64, super::PricingError> {
        let params =
            OptionParams::parse(spot, strike, time_to_expiry, risk_free_rate, option_type)?;
        Ok(Self::price(&params, vol))
    }
}
