//! Implied volatility smile and surface built by per-point inversion.
//!
//! Every strike (smile) or (maturity, strike) cell (surface) is solved on
//! its own with [`solve_iv`]. Cells share nothing, so the surface is a
//! rayon parallel map over the flattened grid. A cell that fails to converge
//! is recorded as such and does not affect any other cell.

use super::black_scholes::BlackScholes;
use super::solver::{ImpliedVolatility, SolverConfig, solve_iv};
use super::types::OptionParams;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Implied volatility across strikes at one maturity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolSmile {
    /// Strike axis.
    pub strikes: Vec<f64>,
    /// Time to expiry shared by every point.
    pub time_to_expiry: f64,
    /// Solver outcome per strike.
    pub points: Vec<ImpliedVolatility>,
}

impl VolSmile {
    /// Inverts `target(strike)` at each strike.
    ///
    /// `params` supplies spot, maturity, rate and option type; its strike is
    /// replaced point by point.
    pub fn from_prices<F>(
        params: &OptionParams,
        strikes: &[f64],
        target: F,
        config: &SolverConfig,
    ) -> Self
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let points: Vec<ImpliedVolatility> = strikes
            .par_iter()
            .map(|&strike| solve_iv(&params.with_strike(strike), target(strike), config))
            .collect();

        let smile = Self {
            strikes: strikes.to_vec(),
            time_to_expiry: params.time_to_expiry,
            points,
        };
        debug!(
            "smile over {} strikes: {} converged",
            smile.strikes.len(),
            smile.converged_count()
        );
        smile
    }

    /// Inverts the same price at every strike.
    ///
    /// This is the dashboard's smile view: the model price at the base
    /// inputs is treated as if it were quoted at each strike.
    #[must_use]
    pub fn from_model_price(
        params: &OptionParams,
        vol: f64,
        strikes: &[f64],
        config: &SolverConfig,
    ) -> Self {
        let price = BlackScholes::price(params, vol);
        Self::from_prices(params, strikes, |_| price, config)
    }

    /// Converged volatilities, `None` where the solve failed.
    #[must_use]
    pub fn volatilities(&self) -> Vec<Option<f64>> {
        self.points.iter().map(ImpliedVolatility::volatility).collect()
    }

    /// Number of converged points.
    #[must_use]
    pub fn converged_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_converged()).count()
    }
}

/// Implied volatility over a maturity × strike grid.
///
/// Cells are stored maturity-major: `cells[t * strikes.len() + k]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolSurface {
    /// Strike axis.
    pub strikes: Vec<f64>,
    /// Maturity axis in years.
    pub maturities: Vec<f64>,
    /// Solver outcome per cell.
    pub cells: Vec<ImpliedVolatility>,
}

impl VolSurface {
    /// Inverts `target(strike, maturity)` at every grid cell in parallel.
    pub fn build<F>(
        params: &OptionParams,
        strikes: &[f64],
        maturities: &[f64],
        target: F,
        config: &SolverConfig,
    ) -> Self
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        let grid: Vec<(f64, f64)> = maturities
            .iter()
            .flat_map(|&t| strikes.iter().map(move |&k| (t, k)))
            .collect();

        let cells: Vec<ImpliedVolatility> = grid
            .par_iter()
            .map(|&(time, strike)| {
                let cell = params.with_strike(strike).with_time_to_expiry(time);
                solve_iv(&cell, target(strike, time), config)
            })
            .collect();

        let surface = Self {
            strikes: strikes.to_vec(),
            maturities: maturities.to_vec(),
            cells,
        };
        debug!(
            "surface {}x{}: {} of {} cells converged",
            surface.maturities.len(),
            surface.strikes.len(),
            surface.converged_count(),
            surface.cells.len()
        );
        surface
    }

    /// Inverts the model price at the base inputs in every cell.
    #[must_use]
    pub fn from_model_price(
        params: &OptionParams,
        vol: f64,
        strikes: &[f64],
        maturities: &[f64],
        config: &SolverConfig,
    ) -> Self {
        let price = BlackScholes::price(params, vol);
        Self::build(params, strikes, maturities, |_, _| price, config)
    }

    /// Solver outcome at maturity index `t` and strike index `k`.
    #[must_use]
    pub fn cell(&self, t: usize, k: usize) -> Option<&ImpliedVolatility> {
        if k >= self.strikes.len() {
            return None;
        }
        self.cells.get(t * self.strikes.len() + k)
    }

    /// Converged volatility at maturity index `t` and strike index `k`.
    #[must_use]
    pub fn volatility(&self, t: usize, k: usize) -> Option<f64> {
        self.cell(t, k).and_then(ImpliedVolatility::volatility)
    }

    /// Number of converged cells.
    #[must_use]
    pub fn converged_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_converged()).count()
    }

    /// Rows per maturity, columns per strike.
    #[must_use]
    pub fn to_matrix(&self) -> Vec<Vec<Option<f64>>> {
        if self.strikes.is_empty() {
            return vec![Vec::new(); self.maturities.len()];
        }
        self.cells
            .chunks(self.strikes.len())
            .map(|row| row.iter().map(ImpliedVolatility::volatility).collect())
            .collect()
    }
}
