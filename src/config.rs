//! Default inputs and plot resolutions for an option explorer front end.

use crate::market::DEFAULT_SPOT;
use crate::pricing::{OptionParams, OptionType, Position, PricingError, SolverConfig};
use crate::utils::linspace;
use serde::{Deserialize, Serialize};

/// Parameters a dashboard starts from.
///
/// Missing JSON fields take their defaults, so a partial document such as
/// `{"strike": 110.0}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Ticker used to look up a live spot.
    pub ticker: String,
    /// Spot used when no live quote is available.
    pub default_spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Time to expiry in years.
    pub time_to_expiry: f64,
    /// Risk-free rate.
    pub risk_free_rate: f64,
    /// Volatility.
    pub volatility: f64,
    /// Call or put.
    pub option_type: OptionType,
    /// Long or short, for the payoff diagram.
    pub position: Position,
    /// Points per price/Greek curve.
    pub curve_points: usize,
    /// Strikes in the smile.
    pub smile_points: usize,
    /// Points per surface axis.
    pub surface_points: usize,
    /// Implied volatility solver settings.
    pub solver: SolverConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            default_spot: DEFAULT_SPOT,
            strike: 100.0,
            time_to_expiry: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
            option_type: OptionType::Call,
            position: Position::Long,
            curve_points: 100,
            smile_points: 50,
            surface_points: 25,
            solver: SolverConfig::default(),
        }
    }
}

impl ExplorerConfig {
    /// Parses a JSON document.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidConfig`] on malformed JSON or
    /// unrecognized enum values.
    pub fn from_json(data: &str) -> Result<Self, PricingError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidConfig`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PricingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Contract parameters at the given spot.
    #[must_use]
    pub fn params(&self, spot: f64) -> OptionParams {
        OptionParams::new(
            spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            self.option_type,
        )
    }

    /// Spot axis for payoff and Greek curves: 50% to 150% of spot.
    #[must_use]
    pub fn spot_range(&self, spot: f64) -> Vec<f64> {
        linspace(0.5 * spot, 1.5 * spot, self.curve_points)
    }

    /// Volatility axis: 10% to 60%.
    #[must_use]
    pub fn volatility_range(&self) -> Vec<f64> {
        linspace(0.1, 0.6, self.curve_points)
    }

    /// Maturity axis: 0.01 to 2 years.
    #[must_use]
    pub fn maturity_range(&self) -> Vec<f64> {
        linspace(0.01, 2.0, self.curve_points)
    }

    /// Smile strikes: 50% to 150% of spot.
    #[must_use]
    pub fn smile_strikes(&self, spot: f64) -> Vec<f64> {
        linspace(0.5 * spot, 1.5 * spot, self.smile_points)
    }

    /// Surface strikes: 80% to 120% of spot.
    #[must_use]
    pub fn surface_strikes(&self, spot: f64) -> Vec<f64> {
        linspace(0.8 * spot, 1.2 * spot, self.surface_points)
    }

    /// Surface maturities: 0.1 to 2 years.
    #[must_use]
    pub fn surface_maturities(&self) -> Vec<f64> {
        linspace(0.1, 2.0, self.surface_points)
    }
}
