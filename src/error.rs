//! Error taxonomy for the comparison pipeline
//!
//! Only [`InvalidInput`] stops a comparison. Missing college data is recorded as a
//! [`DataGap`] and career-provider failures are absorbed into the fallback profile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request-level validation failures. Surfaced to the caller; nothing is simulated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("at least one college is required")]
    EmptyCollegeList,

    #[error("too many colleges: {count} supplied, at most {max} can be compared")]
    TooManyColleges { count: usize, max: usize },

    #[error("unknown income bracket {0:?}; expected one of 0-30000, 30001-48000, 48001-75000, 75001-110000, 110001-plus")]
    UnknownIncomeBracket(String),

    #[error("age {age} is outside the supported range {min}-{max}")]
    AgeOutOfRange { age: f64, min: u8, max: u8 },
}

/// Failures reported by a career data source
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("career data source unavailable: {0}")]
    Unavailable(String),

    #[error("career data lookup timed out after {millis} ms")]
    Timeout { millis: u64 },

    #[error("no career data for {0:?}")]
    UnknownCareer(String),
}

/// Errors loading colleges, career tables, or assumptions from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

/// A college field that was missing and replaced by a documented fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataGap {
    /// In-state tuition missing, 15000 assumed
    InStateTuition,
    /// Out-of-state tuition missing, 30000 assumed
    OutOfStateTuition,
    /// Room and board missing, 15000 assumed
    RoomAndBoard,
    /// No net price for the bracket and no average; aid estimate reported as null
    NetPrice,
}

impl DataGap {
    pub fn describe(&self) -> &'static str {
        match self {
            DataGap::InStateTuition => "in-state tuition not reported; using default estimate",
            DataGap::OutOfStateTuition => "out-of-state tuition not reported; using default estimate",
            DataGap::RoomAndBoard => "room and board not reported; using default estimate",
            DataGap::NetPrice => "no net price data for this income bracket",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_messages() {
        let err = InvalidInput::UnknownIncomeBracket("rich".to_string());
        assert!(err.to_string().contains("\"rich\""));

        let err = InvalidInput::AgeOutOfRange { age: 120.0, min: 14, max: 99 };
        assert_eq!(err.to_string(), "age 120 is outside the supported range 14-99");
    }

    #[test]
    fn test_data_gap_serializes_snake_case() {
        let json = serde_json::to_string(&DataGap::RoomAndBoard).unwrap();
        assert_eq!(json, "\"room_and_board\"");
    }
}
