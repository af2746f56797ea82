//! Option portfolio
//!
//! Ordered collection of positions. Insertion order is display order; the only
//! mutation is appending.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::curve::{sample_grid, PayoffCurve};
use super::option::OptionPosition;
use crate::config::RangeConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    options: Vec<OptionPosition>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position
    pub fn add(&mut self, option: OptionPosition) {
        tracing::info!("Added option #{}: {}", self.options.len() + 1, option);
        self.options.push(option);
    }

    /// Held positions in insertion order
    pub fn options(&self) -> &[OptionPosition] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Total P/L at the given underlying price
    pub fn payoff(&self, price: f64) -> f64 {
        self.options.iter().map(|o| o.payoff(price)).sum()
    }

    /// Lowest and highest strike held
    pub fn strike_bounds(&self) -> Option<(f64, f64)> {
        self.options.iter().map(|o| o.strike).fold(None, |acc, k| match acc {
            None => Some((k, k)),
            Some((lo, hi)) => Some((lo.min(k), hi.max(k))),
        })
    }

    /// Price grid for charting with the default heuristic
    pub fn price_range(&self) -> Vec<f64> {
        self.price_range_with(&RangeConfig::default())
    }

    /// Price grid for charting.
    ///
    /// Spans `[min strike * lower_factor, max strike * upper_factor]` so every
    /// kink of the curve is visible with margin on both sides. Falls back to
    /// `empty_bounds` when nothing is held.
    pub fn price_range_with(&self, config: &RangeConfig) -> Vec<f64> {
        match self.strike_bounds() {
            None => {
                let (lo, hi) = config.empty_bounds;
                sample_grid(lo, hi, config.empty_points)
            }
            Some((min_strike, max_strike)) => {
                let lo = min_strike * config.lower_factor;
                let hi = max_strike * config.upper_factor;
                tracing::debug!("Price range {} to {} over {} points", lo, hi, config.points);
                sample_grid(lo, hi, config.points)
            }
        }
    }

    /// Payoff sampled over the default price range
    pub fn payoff_curve(&self) -> PayoffCurve {
        self.payoff_curve_with(&RangeConfig::default())
    }

    pub fn payoff_curve_with(&self, config: &RangeConfig) -> PayoffCurve {
        PayoffCurve::sample(self.price_range_with(config), |p| self.payoff(p))
    }

    /// One numbered display line per position, in insertion order
    pub fn listing(&self) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}. {}", i + 1, o))
            .collect()
    }
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.listing().join("\n"))
    }
}
