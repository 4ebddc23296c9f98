//! Crate-wide error type.
//!
//! One enum covers both halves of the crate:
//!
//! - fetch-layer failures (`Fetch`, `Parse`, `Config`)
//! - computation failures (`InvalidRange`, `RangeNotFound`, `EmptyRange`, `NonFinite`)
//!
//! Fetch failures for an individual series are caught by the history pipeline
//! and degraded to an empty series; calculator failures always propagate.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::Period;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A network/data call for a named series failed.
    #[error("Fetch failed for {name}: {reason}")]
    Fetch { name: String, reason: String },

    /// A response body could not be decoded.
    #[error("Invalid response payload: {0}")]
    Parse(String),

    /// A date range with start after end.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A period range with start after end.
    #[error("Invalid period range: start {start} is after end {end}")]
    InvalidPeriodRange { start: Period, end: Period },

    /// A requested period bound has no matching (or later) observation.
    #[error("No observation at or after the requested bound {0}")]
    RangeNotFound(Period),

    /// The selected computation range contains zero observations.
    #[error("Empty computation range")]
    EmptyRange,

    /// A computed rate or amount came out NaN or infinite.
    #[error("Computation produced a non-finite result")]
    NonFinite,

    /// Bad environment/configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Process exit code for the `peso` binary.
    ///
    /// 2 = usage/configuration problems, 4 = data problems.
    pub fn exit_code(&self) -> u8 {
        match self {
            CoreError::Config(_)
            | CoreError::InvalidRange { .. }
            | CoreError::InvalidPeriodRange { .. } => 2,
            CoreError::Fetch { .. }
            | CoreError::Parse(_)
            | CoreError::RangeNotFound(_)
            | CoreError::EmptyRange
            | CoreError::NonFinite => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_series() {
        let err = CoreError::Fetch {
            name: "blue".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Fetch failed for blue: connection refused");
    }

    #[test]
    fn exit_codes_split_usage_from_data() {
        assert_eq!(CoreError::Config("x".into()).exit_code(), 2);
        assert_eq!(CoreError::EmptyRange.exit_code(), 4);
        assert_eq!(CoreError::NonFinite.exit_code(), 4);
    }
}
