//! Modeling assumptions, text classification, and canonical career data

mod classifier;
mod career;
mod cache;
pub mod loader;

pub use classifier::{
    CategoryClassifier, CategoryRule, HEALTH_MAJOR_TAGS, MEDICAL_DOCTORATE_TAGS, VARIABLE_EARNINGS_MAJOR_TAGS,
    major_label,
};
pub use career::{is_metro_city, location_multiplier, CareerProfile, CareerProfileProvider, StaticCareerTable};
pub use cache::{CareerKey, CareerProfileCache};

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Financial modeling constants. Every field is overridable; the defaults are
/// modeling choices rather than derived data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationAssumptions {
    /// Fraction of each undergrad year's sticker price that is borrowed
    pub financed_fraction: f64,

    /// Fraction of salary saved each career year, before loan payments
    pub savings_rate: f64,

    /// Annual return on accumulated savings
    pub investment_return: f64,

    /// Multiplier over the standard plan payment (debt / repayment_years)
    pub payment_multiplier: f64,

    /// Standard repayment plan length in years
    pub repayment_years: f64,

    /// Annual interest on the debt balance during residency and career
    pub debt_interest_rate: f64,

    /// Fixed nominal debt reduction per residency year (income-based repayment)
    pub residency_annual_reduction: f64,

    /// Annual rate used for the quoted monthly loan payment
    pub loan_quote_rate: f64,

    pub in_state_tuition_fallback: f64,
    pub out_of_state_tuition_fallback: f64,
    pub room_and_board_fallback: f64,

    /// Whether room and board counts toward the yearly sticker price
    pub include_room_and_board: bool,

    /// Debt above this multiple of first-year earnings triggers a warning
    pub debt_to_earnings_warning_ratio: f64,
}

impl Default for SimulationAssumptions {
    fn default() -> Self {
        Self {
            financed_fraction: 0.60,
            savings_rate: 0.15,
            investment_return: 0.07,
            payment_multiplier: 1.5,
            repayment_years: 10.0,
            debt_interest_rate: 0.05,
            residency_annual_reduction: 2_400.0,
            loan_quote_rate: 0.075,
            in_state_tuition_fallback: 15_000.0,
            out_of_state_tuition_fallback: 30_000.0,
            room_and_board_fallback: 15_000.0,
            include_room_and_board: true,
            debt_to_earnings_warning_ratio: 1.5,
        }
    }
}

impl SimulationAssumptions {
    /// Load overrides from a JSON file; keys not present keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let assumptions = SimulationAssumptions::from_json_str(r#"{"savings_rate": 0.20}"#).unwrap();
        assert_eq!(assumptions.savings_rate, 0.20);
        assert_eq!(assumptions.financed_fraction, 0.60);
        assert_eq!(assumptions.investment_return, 0.07);
        assert!(assumptions.include_room_and_board);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            SimulationAssumptions::from_json_str("{savings_rate: }"),
            Err(LoadError::Json(_))
        ));
    }
}
