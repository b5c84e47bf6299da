//! Market data seam between the pricing library and a quote provider.
//!
//! The library does not fetch quotes itself. A presentation layer
//! implements [`MarketDataSource`] for its provider; this module supplies
//! the fallback policy for a missing spot price and the market-vs-model
//! price comparison over an option chain.

mod error;

pub use error::MarketDataError;

use crate::pricing::{BlackScholes, OptionParams, OptionType};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Spot used when a provider cannot supply one.
pub const DEFAULT_SPOT: f64 = 100.0;

/// One traded strike of an option chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainQuote {
    /// Strike price.
    pub strike: f64,
    /// Last traded premium, if the contract traded.
    pub last_price: Option<f64>,
}

/// Observed premium next to the model price at the same strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceComparison {
    /// Strike price.
    pub strike: f64,
    /// Last traded premium.
    pub market_price: f64,
    /// Black-Scholes price at the configured volatility.
    pub model_price: f64,
}

impl PriceComparison {
    /// Market minus model.
    #[must_use]
    pub fn difference(&self) -> f64 {
        self.market_price - self.model_price
    }
}

/// Source of live quotes.
pub trait MarketDataSource {
    /// Latest trade price of the underlying.
    ///
    /// # Errors
    /// Returns a [`MarketDataError`] when the provider cannot answer.
    fn spot_price(&self, ticker: &str) -> Result<f64, MarketDataError>;

    /// Listed expiration dates, as the provider formats them.
    ///
    /// # Errors
    /// Returns a [`MarketDataError`] when the provider cannot answer.
    fn expirations(&self, ticker: &str) -> Result<Vec<String>, MarketDataError>;

    /// Call quotes for one expiration.
    ///
    /// # Errors
    /// Returns a [`MarketDataError`] when the provider cannot answer.
    fn option_chain(&self, ticker: &str, expiry: &str) -> Result<Vec<ChainQuote>, MarketDataError>;
}

/// Spot from `source`, or `default` when the provider fails.
///
/// A non-finite or non-positive quote counts as a failure. Failures are
/// logged at warn level and never propagated.
pub fn resolve_spot<S>(source: &S, ticker: &str, default: f64) -> f64
where
    S: MarketDataSource + ?Sized,
{
    match source.spot_price(ticker) {
        Ok(spot) if spot.is_finite() && spot > 0.0 => {
            debug!("spot for {}: {}", ticker, spot);
            spot
        }
        Ok(spot) => {
            warn!(
                "unusable spot {} for {}, falling back to {}",
                spot, ticker, default
            );
            default
        }
        Err(e) => {
            warn!("failed to fetch spot for {}: {}, falling back to {}", ticker, e, default);
            default
        }
    }
}

/// Pairs each traded strike with its model call price.
///
/// Chains carry call quotes, so the model side is always priced as a call
/// whatever `params.option_type` says. Quotes without a finite last price
/// are dropped. `params` supplies spot, maturity and rate; its strike is
/// replaced per quote.
#[must_use]
pub fn compare_with_market(
    chain: &[ChainQuote],
    params: &OptionParams,
    vol: f64,
) -> Vec<PriceComparison> {
    let params = params.with_option_type(OptionType::Call);
    chain
        .iter()
        .filter_map(|quote| {
            let market_price = quote.last_price.filter(|p| p.is_finite())?;
            Some(PriceComparison {
                strike: quote.strike,
                market_price,
                model_price: BlackScholes::price(&params.with_strike(quote.strike), vol),
            })
        })
        .collect()
}
