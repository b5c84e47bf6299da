//! Error types for option pricing and implied volatility.

use std::fmt;

/// Errors raised by the pricing library.
///
/// Numeric singularities (zero time to expiry, zero volatility) are not
/// errors: they surface as NaN or infinite values in the results.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Option type string was neither `call` nor `put`.
    InvalidOptionType {
        /// The rejected input.
        value: String,
    },

    /// Position string was neither `long` nor `short`.
    InvalidPosition {
        /// The rejected input.
        value: String,
    },

    /// Newton-Raphson solver did not converge within max iterations.
    NotConverged {
        /// Number of iterations attempted.
        iterations: u32,
    },

    /// Configuration could not be parsed or serialized.
    InvalidConfig {
        /// Description of the failure.
        message: String,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidOptionType { value } => {
                write!(f, "option type must be 'call' or 'put', got '{value}'")
            }
            PricingError::InvalidPosition { value } => {
                write!(f, "position must be 'long' or 'short', got '{value}'")
            }
            PricingError::NotConverged { iterations } => {
                write!(f, "solver did not converge after {iterations} iterations")
            }
            PricingError::InvalidConfig { message } => {
                write!(f, "invalid configuration: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}

impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        PricingError::InvalidConfig {
            message: err.to_string(),
        }
    }
}
