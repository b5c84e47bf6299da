//! Analytic Black-Scholes Greeks.
//!
//! Each sensitivity is an independent closed-form function of the same
//! inputs as [`BlackScholes::price`]. [`Greeks::compute`] evaluates d1/d2
//! once and fills all five.

use super::black_scholes::BlackScholes;
use super::distribution::{norm_cdf, norm_pdf};
use super::types::{OptionParams, OptionType};
use serde::{Deserialize, Serialize};
use tracing::trace;

impl BlackScholes {
    /// Calculates delta (∂price/∂S) - sensitivity to underlying price.
    ///
    /// For calls: Δ = N(d1)
    /// For puts:  Δ = -N(-d1)
    #[must_use]
    pub fn delta(params: &OptionParams, vol: f64) -> f64 {
        let (d1, _) = Self::d1_d2(params, vol);
        Self::delta_from_d(params.option_type, d1)
    }

    /// Calculates gamma (∂²price/∂S²) - rate of change of delta.
    ///
    /// Γ = N'(d1) / (S · σ · √T), identical for calls and puts.
    #[must_use]
    pub fn gamma(params: &OptionParams, vol: f64) -> f64 {
        let (d1, _) = Self::d1_d2(params, vol);
        Self::gamma_from_d(params, vol, d1)
    }

    /// Calculates vega (∂price/∂σ) - sensitivity to volatility.
    ///
    /// Vega = S · N'(d1) · √T, identical for calls and puts.
    ///
    /// Expressed per unit of volatility (1.0 = 100 vol points), which is
    /// the derivative the implied volatility solver needs.
    #[must_use]
    pub fn vega(params: &OptionParams, vol: f64) -> f64 {
        let (d1, _) = Self::d1_d2(params, vol);
        Self::vega_from_d(params, d1)
    }

    /// Calculates theta - price change per year of elapsed calendar time.
    ///
    /// term1 = -S · N'(d1) · σ / (2√T)
    /// For calls: term1 - r·K·e^(-rT)·N(d2)
    /// For puts:  term1 + r·K·e^(-rT)·N(-d2)
    ///
    /// The value is annual, not daily. It measures the passage of time, so
    /// a long option typically has negative theta.
    #[must_use]
    pub fn theta(params: &OptionParams, vol: f64) -> f64 {
        let (d1, d2) = Self::d1_d2(params, vol);
        Self::theta_from_d(params, vol, d1, d2)
    }

    /// Calculates rho (∂price/∂r) - sensitivity to the risk-free rate.
    ///
    /// For calls: K·T·e^(-rT)·N(d2)
    /// For puts:  -K·T·e^(-rT)·N(-d2)
    #[must_use]
    pub fn rho(params: &OptionParams, vol: f64) -> f64 {
        let (_, d2) = Self::d1_d2(params, vol);
        Self::rho_from_d(params, d2)
    }

    fn delta_from_d(option_type: OptionType, d1: f64) -> f64 {
        match option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => -norm_cdf(-d1),
        }
    }

    fn gamma_from_d(params: &OptionParams, vol: f64, d1: f64) -> f64 {
        norm_pdf(d1) / (params.spot * vol * params.time_to_expiry.sqrt())
    }

    fn vega_from_d(params: &OptionParams, d1: f64) -> f64 {
        params.spot * norm_pdf(d1) * params.time_to_expiry.sqrt()
    }

    fn theta_from_d(params: &OptionParams, vol: f64, d1: f64, d2: f64) -> f64 {
        let term1 = -params.spot * norm_pdf(d1) * vol / (2.0 * params.time_to_expiry.sqrt());
        let carry = params.risk_free_rate * params.strike * Self::discount(params);

        match params.option_type {
            OptionType::Call => term1 - carry * norm_cdf(d2),
            OptionType::Put => term1 + carry * norm_cdf(-d2),
        }
    }

    fn rho_from_d(params: &OptionParams, d2: f64) -> f64 {
        let scaled = params.strike * params.time_to_expiry * Self::discount(params);

        match params.option_type {
            OptionType::Call => scaled * norm_cdf(d2),
            OptionType::Put => -scaled * norm_cdf(-d2),
        }
    }
}

/// First-order Black-Scholes sensitivities plus gamma.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS.
    pub delta: f64,
    /// Gamma: d²V/dS².
    pub gamma: f64,
    /// Vega: dV/dσ per unit volatility.
    pub vega: f64,
    /// Theta: dV/dt per year.
    pub theta: f64,
    /// Rho: dV/dr per unit rate.
    pub rho: f64,
}

impl Greeks {
    /// Computes all five Greeks from a single d1/d2 evaluation.
    #[must_use]
    pub fn compute(params: &OptionParams, vol: f64) -> Self {
        let (d1, d2) = BlackScholes::d1_d2(params, vol);

        let greeks = Self {
            delta: BlackScholes::delta_from_d(params.option_type, d1),
            gamma: BlackScholes::gamma_from_d(params, vol, d1),
            vega: BlackScholes::vega_from_d(params, d1),
            theta: BlackScholes::theta_from_d(params, vol, d1, d2),
            rho: BlackScholes::rho_from_d(params, d2),
        };
        trace!("greeks {:?} vol={}: {:?}", params, vol, greeks);
        greeks
    }

    /// Returns true when every sensitivity is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.vega.is_finite()
            && self.theta.is_finite()
            && self.rho.is_finite()
    }

    /// Rounds every field for display.
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        use crate::utils::round_to;
        Self {
            delta: round_to(self.delta, decimals),
            gamma: round_to(self.gamma, decimals),
            vega: round_to(self.vega, decimals),
            theta: round_to(self.theta, decimals),
            rho: round_to(self.rho, decimals),
        }
    }
}
