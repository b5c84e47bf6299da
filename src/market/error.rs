//! Error types for market data retrieval.

use std::fmt;

/// Failures reported by a [`super::MarketDataSource`].
///
/// These never reach the pricing kernels: callers fall back to defaults
/// through [`super::resolve_spot`] or skip the comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Transport-level failure talking to the provider.
    Network {
        /// Description of the failure.
        message: String,
    },

    /// Provider does not know the ticker.
    UnknownTicker {
        /// The requested ticker.
        ticker: String,
    },

    /// Provider answered without usable data.
    NoData {
        /// The requested ticker.
        ticker: String,
        /// What was missing.
        message: String,
    },
}

impl fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataError::Network { message } => {
                write!(f, "market data request failed: {message}")
            }
            MarketDataError::UnknownTicker { ticker } => {
                write!(f, "unknown ticker '{ticker}'")
            }
            MarketDataError::NoData { ticker, message } => {
                write!(f, "no market data for '{ticker}': {message}")
            }
        }
    }
}

impl std::error::Error for MarketDataError {}
