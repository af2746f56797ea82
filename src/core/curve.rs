//! Sampled payoff curves
//!
//! The price grid and the P/L values evaluated on it, plus the summary
//! figures shown next to the chart.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// The last sample is pinned to `end` so the upper bound survives rounding.
pub fn sample_grid(start: f64, end: f64, n: usize) -> Vec<f64> {
    let mut grid = Array1::linspace(start, end, n).to_vec();
    if let Some(last) = grid.last_mut() {
        if n > 1 {
            *last = end;
        }
    }
    grid
}

/// Portfolio P/L sampled over a price grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoffCurve {
    /// Underlying prices, ascending
    pub prices: Vec<f64>,
    /// P/L at each price
    pub payoffs: Vec<f64>,
}

impl PayoffCurve {
    /// Evaluate `payoff` at every price
    pub fn sample(prices: Vec<f64>, payoff: impl Fn(f64) -> f64) -> Self {
        let payoffs = prices.iter().map(|&p| payoff(p)).collect();
        Self { prices, payoffs }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// `[price, payoff]` pairs for plotting
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.prices
            .iter()
            .zip(&self.payoffs)
            .map(|(&p, &v)| [p, v])
            .collect()
    }

    /// Highest sampled P/L
    pub fn max_profit(&self) -> Option<f64> {
        self.payoffs.iter().copied().reduce(f64::max)
    }

    /// Lowest sampled P/L
    pub fn max_loss(&self) -> Option<f64> {
        self.payoffs.iter().copied().reduce(f64::min)
    }

    /// Prices where the sampled curve crosses zero.
    ///
    /// Crossings between samples are linearly interpolated. A sample sitting
    /// exactly on zero is reported once, and flat stretches at zero only
    /// report where they start.
    pub fn break_evens(&self) -> Vec<f64> {
        let mut out = Vec::new();

        for i in 0..self.len() {
            let (p, v) = (self.prices[i], self.payoffs[i]);

            if v == 0.0 {
                let prev_zero = i > 0 && self.payoffs[i - 1] == 0.0;
                if !prev_zero {
                    out.push(p);
                }
                continue;
            }

            if i + 1 < self.len() {
                let (p1, v1) = (self.prices[i + 1], self.payoffs[i + 1]);
                if v1 != 0.0 && v.signum() != v1.signum() {
                    out.push(p + (p1 - p) * v / (v - v1));
                }
            }
        }

        out
    }
}
