//! Walks through everything an option dashboard renders for one contract
//!
//! This example shows how to:
//! 1. Load an `ExplorerConfig` from a JSON file (or fall back to defaults)
//! 2. Resolve the spot price through a `MarketDataSource` with fallback
//! 3. Print price, Greeks and the payoff at expiry
//! 4. Sweep Greeks along spot, solve an implied volatility smile and a coarse surface
//! 5. Compare a quoted chain against model prices
//!
//! Usage: `cargo run --bin option_explorer [config.json]`

use optionlab_rs::prelude::*;
use std::collections::HashMap;
use std::{env, fs};
use tracing::{error, info, warn};

/// Quote source backed by a fixed snapshot, for running without network access.
struct SnapshotQuotes {
    spots: HashMap<String, f64>,
    chain: Vec<ChainQuote>,
}

impl SnapshotQuotes {
    fn new(config: &ExplorerConfig) -> Self {
        let mut spots = HashMap::new();
        spots.insert("AAPL".to_string(), 102.5);

        // Quote each strike at the model price under a slightly skewed volatility.
        let base = config.params(102.5);
        let chain = config
            .smile_strikes(102.5)
            .into_iter()
            .step_by(5)
            .map(|strike| {
                let skew = 0.02 * ((100.0 - strike) / 50.0);
                let price = BlackScholes::price(&base.with_strike(strike), config.volatility + skew);
                ChainQuote {
                    strike,
                    last_price: price.is_finite().then(|| round_to(price, 2)),
                }
            })
            .collect();

        Self { spots, chain }
    }
}

impl MarketDataSource for SnapshotQuotes {
    fn spot_price(&self, ticker: &str) -> Result<f64, MarketDataError> {
        self.spots
            .get(ticker)
            .copied()
            .ok_or_else(|| MarketDataError::UnknownTicker {
                ticker: ticker.to_string(),
            })
    }

    fn expirations(&self, ticker: &str) -> Result<Vec<String>, MarketDataError> {
        if self.spots.contains_key(ticker) {
            Ok(vec!["snapshot".to_string()])
        } else {
            Err(MarketDataError::UnknownTicker {
                ticker: ticker.to_string(),
            })
        }
    }

    fn option_chain(&self, ticker: &str, _expiry: &str) -> Result<Vec<ChainQuote>, MarketDataError> {
        if self.spots.contains_key(ticker) {
            Ok(self.chain.clone())
        } else {
            Err(MarketDataError::NoData {
                ticker: ticker.to_string(),
                message: "snapshot has no chain for this ticker".to_string(),
            })
        }
    }
}

fn load_config() -> ExplorerConfig {
    let Some(path) = env::args().nth(1) else {
        return ExplorerConfig::default();
    };
    match fs::read_to_string(&path).map_err(|e| e.to_string()).and_then(|data| {
        ExplorerConfig::from_json(&data).map_err(|e| e.to_string())
    }) {
        Ok(config) => config,
        Err(e) => {
            warn!("Could not load {}: {}; using defaults", path, e);
            ExplorerConfig::default()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = load_config();
    let quotes = SnapshotQuotes::new(&config);
    let spot = resolve_spot(&quotes, &config.ticker, config.default_spot);
    let params = config.params(spot);
    let vol = config.volatility;

    info!(
        "{} {} spot={:.2} strike={:.2} T={:.2} r={:.3} vol={:.2}",
        config.ticker, params.option_type, spot, params.strike, params.time_to_expiry,
        params.risk_free_rate, vol
    );

    // Key metrics
    let price = BlackScholes::price(&params, vol);
    let greeks = Greeks::compute(&params, vol).rounded(4);
    info!("Option price: {:.4}", price);
    match serde_json::to_string(&greeks) {
        Ok(json) => info!("Greeks: {}", json),
        Err(e) => error!("Failed to serialize greeks: {}", e),
    }

    // Payoff at expiry
    let spots = config.spot_range(spot);
    let payoff = payoff_diagram(&spots, params.strike, params.option_type, config.position);
    if let (Some(first), Some(last)) = (payoff.first(), payoff.last()) {
        info!(
            "{} payoff: {:.2} at S={:.2}, {:.2} at S={:.2}",
            config.position,
            first,
            spots[0],
            last,
            spots[spots.len() - 1]
        );
    }

    // Greek sweeps
    for curve in greek_curves(&params, vol, Axis::Spot, &spots) {
        match curve.argmax() {
            Some(peak) => info!("{:?} peaks at S={:.2}", curve.metric, peak),
            None => warn!("{:?} curve has no finite points", curve.metric),
        }
    }

    // Implied volatility round trip and smile
    let iv = solve_iv(&params, price, &config.solver);
    match iv.volatility() {
        Some(sigma) => info!("Implied volatility: {:.4} ({} iterations)", sigma, iv.iterations()),
        None => warn!("Implied volatility did not converge"),
    }

    let smile = VolSmile::from_model_price(&params, vol, &config.smile_strikes(spot), &config.solver);
    info!(
        "Smile: {}/{} strikes converged",
        smile.converged_count(),
        smile.points.len()
    );

    let surface = VolSurface::from_model_price(
        &params,
        vol,
        &config.surface_strikes(spot),
        &config.surface_maturities(),
        &config.solver,
    );
    info!(
        "Surface: {}/{} cells converged",
        surface.converged_count(),
        surface.cells.len()
    );

    // Market vs model
    let chain = quotes
        .expirations(&config.ticker)
        .and_then(|expiries| match expiries.first() {
            Some(expiry) => quotes.option_chain(&config.ticker, expiry),
            None => Ok(Vec::new()),
        });
    match chain {
        Ok(chain) => {
            for row in compare_with_market(&chain, &params, vol) {
                info!(
                    "K={:>7.2} market={:>8.2} model={:>8.2} diff={:>+7.2}",
                    row.strike,
                    row.market_price,
                    row.model_price,
                    row.difference()
                );
            }
        }
        Err(e) => warn!("No option chain for {}: {}", config.ticker, e),
    }

    match config.to_json() {
        Ok(json) => info!("Effective configuration:\n{}", json),
        Err(e) => error!("Failed to serialize configuration: {}", e),
    }
}
