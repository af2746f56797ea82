//! Error types for the payoff builder

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoffError {
    #[error("Invalid option type '{0}'. Use 'call' or 'put'.")]
    InvalidOptionType(String),

    #[error("Invalid direction '{0}'. Use 'long' or 'short'.")]
    InvalidDirection(String),

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("No options in portfolio.")]
    EmptyPortfolio,

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type PayoffResult<T> = Result<T, PayoffError>;

impl PayoffError {
    pub fn invalid_option_type(value: impl Into<String>) -> Self {
        Self::InvalidOptionType(value.into())
    }

    pub fn invalid_direction(value: impl Into<String>) -> Self {
        Self::InvalidDirection(value.into())
    }

    pub fn invalid_number(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Whether the session can report this error and keep going.
    ///
    /// Only a broken stdin/stdout ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::IO(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PayoffError::invalid_option_type("swap").to_string(),
            "Invalid option type 'swap'. Use 'call' or 'put'."
        );
        assert_eq!(
            PayoffError::invalid_number("strike", "abc", "not a number").to_string(),
            "Invalid strike 'abc': not a number"
        );
        assert_eq!(PayoffError::EmptyPortfolio.to_string(), "No options in portfolio.");
    }

    #[test]
    fn test_recoverable() {
        assert!(PayoffError::invalid_direction("sideways").is_recoverable());
        assert!(PayoffError::render("no display").is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!PayoffError::from(io).is_recoverable());
    }
}
