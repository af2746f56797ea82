//! Operator input parsing
//!
//! Turns raw text from the prompts into typed, already-valid values. Nothing
//! past this module parses strings.

use crate::config::RangeConfig;
use crate::core::{Direction, OptionType, PayoffError, PayoffResult};

pub fn parse_option_type(raw: &str) -> PayoffResult<OptionType> {
    raw.parse()
}

pub fn parse_direction(raw: &str) -> PayoffResult<Direction> {
    raw.parse()
}

/// Strike price: any finite number whose charting window stays finite.
///
/// Two strikes of magnitude `k` span at most `k * (|lower| + |upper|)` once
/// scaled by the range factors, so that product must not overflow.
pub fn parse_strike(raw: &str, range: &RangeConfig) -> PayoffResult<f64> {
    let strike = parse_finite("strike", raw)?;
    let reach = strike.abs() * (range.lower_factor.abs() + range.upper_factor.abs());
    if !reach.is_finite() {
        return Err(PayoffError::invalid_number(
            "strike",
            raw.trim(),
            "too large to chart",
        ));
    }
    Ok(strike)
}

/// Premium: finite and non-negative
pub fn parse_premium(raw: &str) -> PayoffResult<f64> {
    let premium = parse_finite("premium", raw)?;
    if premium < 0.0 {
        return Err(PayoffError::invalid_number(
            "premium",
            raw.trim(),
            "must not be negative",
        ));
    }
    Ok(premium)
}

/// Contract count: positive whole number, blank means 1
pub fn parse_quantity(raw: &str) -> PayoffResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(1);
    }

    let qty: u32 = raw
        .parse()
        .map_err(|_| PayoffError::invalid_number("quantity", raw, "expected a whole number"))?;
    if qty == 0 {
        return Err(PayoffError::invalid_number(
            "quantity",
            raw,
            "must be at least 1",
        ));
    }
    Ok(qty)
}

fn parse_finite(field: &'static str, raw: &str) -> PayoffResult<f64> {
    let raw = raw.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| PayoffError::invalid_number(field, raw, "expected a number"))?;
    if !value.is_finite() {
        return Err(PayoffError::invalid_number(field, raw, "must be finite"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical() {
        assert_eq!(parse_option_type("Call").unwrap(), OptionType::Call);
        assert_eq!(parse_direction(" short\n").unwrap(), Direction::Short);
        assert!(matches!(
            parse_option_type("future"),
            Err(PayoffError::InvalidOptionType(_))
        ));
        assert!(matches!(
            parse_direction("buy"),
            Err(PayoffError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_strike() {
        let range = RangeConfig::default();
        assert_eq!(parse_strike("100", &range).unwrap(), 100.0);
        assert_eq!(parse_strike(" 97.5 ", &range).unwrap(), 97.5);
        // Zero and negative strikes are accepted
        assert_eq!(parse_strike("0", &range).unwrap(), 0.0);
        assert_eq!(parse_strike("-10", &range).unwrap(), -10.0);

        assert!(matches!(
            parse_strike("abc", &range),
            Err(PayoffError::InvalidNumber { field: "strike", .. })
        ));
        assert!(parse_strike("", &range).is_err());
        assert!(parse_strike("NaN", &range).is_err());
        assert!(parse_strike("inf", &range).is_err());
    }

    #[test]
    fn test_strike_must_leave_a_finite_window() {
        let range = RangeConfig::default();

        assert!(matches!(
            parse_strike("1.7e308", &range),
            Err(PayoffError::InvalidNumber { field: "strike", .. })
        ));
        assert!(parse_strike("-1.7e308", &range).is_err());

        // Largest accepted strikes still give an evenly spaced, finite grid
        let mut portfolio = crate::core::Portfolio::new();
        for raw in ["4e307", "-4e307"] {
            let strike = parse_strike(raw, &range).unwrap();
            portfolio.add(crate::core::OptionPosition::new(
                OptionType::Call,
                Direction::Long,
                strike,
                1.0,
            ));
        }
        let grid = portfolio.price_range();
        assert_eq!(grid.len(), 200);
        assert!(grid.iter().all(|p| p.is_finite()));
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_premium() {
        assert_eq!(parse_premium("5").unwrap(), 5.0);
        assert_eq!(parse_premium("0").unwrap(), 0.0);
        assert!(matches!(
            parse_premium("-1"),
            Err(PayoffError::InvalidNumber { field: "premium", .. })
        ));
        assert!(parse_premium("five").is_err());
    }

    #[test]
    fn test_quantity() {
        assert_eq!(parse_quantity("").unwrap(), 1);
        assert_eq!(parse_quantity("   ").unwrap(), 1);
        assert_eq!(parse_quantity("3").unwrap(), 3);

        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(matches!(
            parse_quantity("lots"),
            Err(PayoffError::InvalidNumber { field: "quantity", .. })
        ));
    }
}
