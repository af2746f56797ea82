//! Configuration for price sampling and the chart viewer

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Price-axis range heuristic
    pub range: RangeConfig,
    /// Chart window
    pub viewer: ViewerConfig,
}

/// Price-axis range heuristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Number of samples when the portfolio holds options
    /// Default: 200
    pub points: usize,

    /// Number of samples for an empty portfolio
    /// Default: 100
    pub empty_points: usize,

    /// Window used when there are no strikes to centre on
    /// Default: (0.0, 100.0)
    pub empty_bounds: (f64, f64),

    /// Lower bound = lowest strike * lower_factor
    /// Default: 0.5
    pub lower_factor: f64,

    /// Upper bound = highest strike * upper_factor
    /// Default: 1.5
    pub upper_factor: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            points: 200,
            empty_points: 100,
            empty_bounds: (0.0, 100.0),
            lower_factor: 0.5,
            upper_factor: 1.5,
        }
    }
}

/// Chart window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Window title
    pub title: String,
    /// Initial window size in logical pixels
    pub size: [f32; 2],
    pub x_label: String,
    pub y_label: String,
    /// Legend entry for the payoff line
    pub series_name: String,
    /// Mark break-even prices with vertical lines
    pub show_break_evens: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Option Strategy Payoff".to_string(),
            size: [1000.0, 700.0],
            x_label: "Underlying Price".to_string(),
            y_label: "Profit / Loss".to_string(),
            series_name: "Payoff".to_string(),
            show_break_evens: true,
        }
    }
}
