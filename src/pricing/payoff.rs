//! Terminal payoff of a single option position.

use super::types::{OptionType, Position};

/// Payoff at expiry for each underlying price in `prices`.
///
/// Intrinsic value `max(S - K, 0)` for calls or `max(K - S, 0)` for puts,
/// negated for a short position. The premium is not included. Output has
/// exactly one element per input price.
#[must_use]
pub fn payoff_diagram(
    prices: &[f64],
    strike: f64,
    option_type: OptionType,
    position: Position,
) -> Vec<f64> {
    prices
        .iter()
        .map(|&spot| payoff_at(spot, strike, option_type, position))
        .collect()
}

/// Payoff of one position at a single terminal price.
#[must_use]
pub fn payoff_at(spot: f64, strike: f64, option_type: OptionType, position: Position) -> f64 {
    position.sign() * option_type.intrinsic(spot, strike)
}
