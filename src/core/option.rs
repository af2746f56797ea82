//! Option position definitions
//!
//! A single vanilla option held in the portfolio: call or put, long or short,
//! with the premium paid or received and a contract count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::PayoffError;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PayoffError::invalid_option_type(s.trim())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Position direction: bought (Long) or written (Short)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// +1 for long, -1 for short
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Long => 1,
            Direction::Short => -1,
        }
    }
}

impl FromStr for Direction {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" => Ok(Direction::Long),
            "short" => Ok(Direction::Short),
            _ => Err(PayoffError::invalid_direction(s.trim())),
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = PayoffError;

    fn try_from(sign: i32) -> Result<Self, Self::Error> {
        match sign {
            1 => Ok(Direction::Long),
            -1 => Ok(Direction::Short),
            other => Err(PayoffError::invalid_direction(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "Long"),
            Direction::Short => write!(f, "Short"),
        }
    }
}

/// An option held in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionPosition {
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Long or short
    pub direction: Direction,
    /// Strike price
    pub strike: f64,
    /// Premium per contract, paid when long and received when short
    pub premium: f64,
    /// Number of contracts
    pub quantity: u32,
}

impl OptionPosition {
    /// Create a single-contract position
    pub fn new(option_type: OptionType, direction: Direction, strike: f64, premium: f64) -> Self {
        Self {
            option_type,
            direction,
            strike,
            premium,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Intrinsic value at the given underlying price, ignoring premium
    pub fn intrinsic(&self, price: f64) -> f64 {
        self.option_type.intrinsic(price, self.strike)
    }

    /// Profit or loss at expiry for the given underlying price, net of premium
    pub fn payoff(&self, price: f64) -> f64 {
        let signed_qty = f64::from(self.quantity) * f64::from(self.direction.sign());
        signed_qty * (self.intrinsic(price) - self.premium)
    }
}

impl fmt::Display for OptionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - Strike {} - Premium {} - Qty {}",
            self.direction, self.option_type, self.strike, self.premium, self.quantity
        )
    }
}
