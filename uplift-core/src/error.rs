//! Structured error types for the uplift toolkit.

use thiserror::Error;

/// Unified error type for all uplift operations.
#[derive(Debug, Error)]
pub enum UpliftError {
    /// Invalid input (mismatched lengths, empty required input, bad arguments)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A statistic is undefined for the given data (division-by-zero class:
    /// zero pooled standard deviation, zero baseline rate, etc.)
    #[error("degenerate statistic: {0}")]
    DegenerateStatistic(String),

    /// An index computation would fall outside its container
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the uplift crates.
pub type Result<T> = std::result::Result<T, UpliftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = UpliftError::InvalidInput("lengths differ".into());
        assert_eq!(err.to_string(), "invalid input: lengths differ");

        let err = UpliftError::DegenerateStatistic("pooled std is zero".into());
        assert!(err.to_string().starts_with("degenerate statistic:"));
    }
}
