//! # Option Payoff
//!
//! Build a portfolio of vanilla options and chart its profit and loss at
//! expiry across a range of underlying prices.
//!
//! ## Key Components
//!
//! - **Core**: option positions, the portfolio and its sampled payoff curve
//! - **Input**: parses operator text into typed values
//! - **Session**: the interactive menu loop
//! - **Render**: chart data and the native chart window
//!
//! ## Usage
//!
//! ```rust
//! use option_payoff::prelude::*;
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.add(OptionPosition::new(OptionType::Call, Direction::Long, 100.0, 5.0));
//! portfolio.add(OptionPosition::new(OptionType::Call, Direction::Short, 110.0, 2.0));
//!
//! // Bull call spread: capped at 10 - 3
//! assert_eq!(portfolio.payoff(120.0), 7.0);
//!
//! let prices = portfolio.price_range();
//! assert_eq!(prices.len(), 200);
//! ```
//!
//! ## What This Does NOT Do
//!
//! - Price options before expiry or compute Greeks
//! - Offer multi-leg strategy presets
//! - Save portfolios between runs

pub mod config;
pub mod core;
pub mod input;
pub mod render;
pub mod session;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::config::{AppConfig, RangeConfig, ViewerConfig};

    pub use crate::core::{
        sample_grid, Direction, OptionPosition, OptionType, PayoffCurve, PayoffError,
        PayoffResult, Portfolio,
    };

    pub use crate::render::{ChartRenderer, EguiViewer, PayoffChart};

    pub use crate::session::{MenuChoice, Session};
}

// Re-export main types at crate root
pub use crate::core::{PayoffError, PayoffResult, Portfolio};
