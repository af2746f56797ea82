//! Payoff chart rendering
//!
//! The session hands a [`PayoffChart`] to a [`ChartRenderer`]. The native
//! implementation lives in [`viewer`].

pub mod viewer;

pub use viewer::EguiViewer;

use crate::config::AppConfig;
use crate::core::{PayoffCurve, PayoffError, PayoffResult, Portfolio};

/// Everything needed to draw one payoff chart
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend entry for the payoff line
    pub series_name: String,
    pub curve: PayoffCurve,
    pub break_evens: Vec<f64>,
    /// Portfolio listing shown beside the chart
    pub positions: Vec<String>,
}

impl PayoffChart {
    /// Sample the portfolio's payoff over its price range.
    ///
    /// Fails with [`PayoffError::EmptyPortfolio`] when there is nothing to draw.
    pub fn from_portfolio(portfolio: &Portfolio, config: &AppConfig) -> PayoffResult<Self> {
        if portfolio.is_empty() {
            return Err(PayoffError::EmptyPortfolio);
        }

        let curve = portfolio.payoff_curve_with(&config.range);
        let break_evens = curve.break_evens();

        Ok(Self {
            title: config.viewer.title.clone(),
            x_label: config.viewer.x_label.clone(),
            y_label: config.viewer.y_label.clone(),
            series_name: config.viewer.series_name.clone(),
            curve,
            break_evens,
            positions: portfolio.listing(),
        })
    }

    /// Summary figures over the sampled window
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(max) = self.curve.max_profit() {
            lines.push(format!("Max profit: {:.2}", max));
        }
        if let Some(min) = self.curve.max_loss() {
            lines.push(format!("Max loss: {:.2}", min));
        }

        if self.break_evens.is_empty() {
            lines.push("Break-even: none in range".to_string());
        } else {
            let prices: Vec<String> = self.break_evens.iter().map(|p| format!("{:.2}", p)).collect();
            lines.push(format!("Break-even: {}", prices.join(", ")));
        }

        lines
    }
}

/// Draws a payoff chart, blocking until the viewer is done with it
pub trait ChartRenderer {
    fn render(&mut self, chart: &PayoffChart) -> PayoffResult<()>;
}
