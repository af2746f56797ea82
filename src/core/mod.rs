//! Core payoff model
//!
//! Defines fundamental types:
//! - OptionPosition: type (call/put), direction, strike, premium, quantity
//! - Portfolio: ordered positions, aggregate payoff, charting range
//! - PayoffCurve: P/L sampled over a price grid

pub mod option;
pub mod portfolio;
pub mod curve;
pub mod error;

pub use option::*;
pub use portfolio::*;
pub use curve::*;
pub use error::*;
