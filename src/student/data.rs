//! Student and college data structures matching the comparison request format

use crate::error::InvalidInput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Youngest supported starting age
pub const MIN_AGE: u8 = 14;
/// Oldest supported starting age
pub const MAX_AGE: u8 = 99;
/// Starting age when the profile omits one
pub const DEFAULT_AGE: u8 = 18;

/// Family income bracket used for net price lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "0-30000")]
    Under30k,
    #[serde(rename = "30001-48000")]
    From30kTo48k,
    #[serde(rename = "48001-75000")]
    From48kTo75k,
    #[serde(rename = "75001-110000")]
    From75kTo110k,
    #[serde(rename = "110001-plus")]
    Over110k,
}

impl IncomeBracket {
    pub const ALL: [IncomeBracket; 5] = [
        IncomeBracket::Under30k,
        IncomeBracket::From30kTo48k,
        IncomeBracket::From48kTo75k,
        IncomeBracket::From75kTo110k,
        IncomeBracket::Over110k,
    ];

    /// Canonical wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeBracket::Under30k => "0-30000",
            IncomeBracket::From30kTo48k => "30001-48000",
            IncomeBracket::From48kTo75k => "48001-75000",
            IncomeBracket::From75kTo110k => "75001-110000",
            IncomeBracket::Over110k => "110001-plus",
        }
    }
}

impl fmt::Display for IncomeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeBracket {
    type Err = InvalidInput;

    /// Exact match only, like the serde form; near-misses such as "0-30k" or
    /// " 0-30000 " are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncomeBracket::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| InvalidInput::UnknownIncomeBracket(s.to_string()))
    }
}

/// Student inputs for a comparison request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub income_bracket: IncomeBracket,

    /// Two-letter home state, compared case-insensitively with the college state
    #[serde(default)]
    pub home_state: Option<String>,

    /// Free-text intended major
    #[serde(default)]
    pub intended_major: String,

    /// Free-text career goal
    #[serde(default)]
    pub career_goal: String,

    #[serde(default)]
    pub has_scholarship: bool,

    /// Total scholarship over the four undergrad years
    #[serde(default)]
    pub scholarship_amount: f64,

    /// Current age; defaults to 18
    #[serde(default)]
    pub current_age: Option<f64>,
}

impl StudentProfile {
    pub fn new(income_bracket: IncomeBracket) -> Self {
        Self {
            income_bracket,
            home_state: None,
            intended_major: String::new(),
            career_goal: String::new(),
            has_scholarship: false,
            scholarship_amount: 0.0,
            current_age: None,
        }
    }

    pub fn with_home_state(mut self, state: &str) -> Self {
        self.home_state = Some(state.to_string());
        self
    }

    pub fn with_major(mut self, major: &str) -> Self {
        self.intended_major = major.to_string();
        self
    }

    pub fn with_career(mut self, career: &str) -> Self {
        self.career_goal = career.to_string();
        self
    }

    pub fn with_scholarship(mut self, amount: f64) -> Self {
        self.has_scholarship = true;
        self.scholarship_amount = amount;
        self
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.current_age = Some(age);
        self
    }

    /// Validated starting age. Fractional ages round to the nearest year first.
    pub fn start_age(&self) -> Result<u8, InvalidInput> {
        let Some(age) = self.current_age else {
            return Ok(DEFAULT_AGE);
        };
        let rounded = age.round();
        if !rounded.is_finite() || rounded < MIN_AGE as f64 || rounded > MAX_AGE as f64 {
            return Err(InvalidInput::AgeOutOfRange { age, min: MIN_AGE, max: MAX_AGE });
        }
        Ok(rounded as u8)
    }

    /// Scholarship applied against the four-year sticker cost (0 when not declared)
    pub fn scholarship_total(&self) -> f64 {
        if self.has_scholarship {
            self.scholarship_amount.max(0.0)
        } else {
            0.0
        }
    }
}

/// Institutional control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    Public,
    PrivateNonprofit,
    PrivateForprofit,
}

impl Ownership {
    /// Parse Scorecard CONTROL codes (1/2/3) or names
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace(&['-', ' '][..], "_").as_str() {
            "1" | "public" => Some(Ownership::Public),
            "2" | "private_nonprofit" | "nonprofit" => Some(Ownership::PrivateNonprofit),
            "3" | "private_forprofit" | "private_for_profit" | "forprofit" | "for_profit" => {
                Some(Ownership::PrivateForprofit)
            }
            _ => None,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Ownership::Public)
    }
}

/// A college's cost and outcome record. Every monetary field may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeRecord {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    pub ownership: Ownership,

    #[serde(default)]
    pub tuition_in_state: Option<f64>,

    #[serde(default)]
    pub tuition_out_of_state: Option<f64>,

    #[serde(default)]
    pub room_and_board: Option<f64>,

    /// Net price by bracket reported for public institutions
    #[serde(default)]
    pub net_price_public: BTreeMap<IncomeBracket, f64>,

    /// Net price by bracket reported for private institutions
    #[serde(default)]
    pub net_price_private: BTreeMap<IncomeBracket, f64>,

    /// Average net price across all aided students
    #[serde(default)]
    pub avg_net_price: Option<f64>,

    /// Median debt at graduation
    #[serde(default)]
    pub median_debt: Option<f64>,

    #[serde(default)]
    pub median_earnings_6yr: Option<f64>,

    #[serde(default)]
    pub median_earnings_10yr: Option<f64>,
}

impl CollegeRecord {
    /// Create a record with identity only; all monetary fields missing
    pub fn new(id: &str, name: &str, state: Option<&str>, ownership: Ownership) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            city: None,
            state: state.map(str::to_string),
            ownership,
            tuition_in_state: None,
            tuition_out_of_state: None,
            room_and_board: None,
            net_price_public: BTreeMap::new(),
            net_price_private: BTreeMap::new(),
            avg_net_price: None,
            median_debt: None,
            median_earnings_6yr: None,
            median_earnings_10yr: None,
        }
    }

    /// Net price table that applies to this college's ownership class
    pub fn net_price_table(&self) -> &BTreeMap<IncomeBracket, f64> {
        if self.ownership.is_public() {
            &self.net_price_public
        } else {
            &self.net_price_private
        }
    }

    /// Net price for a bracket, falling back to the average net price
    pub fn net_price_for(&self, bracket: IncomeBracket) -> Option<f64> {
        self.net_price_table().get(&bracket).copied().or(self.avg_net_price)
    }

    /// Whether a student from `home_state` pays in-state tuition here
    pub fn is_in_state(&self, home_state: Option<&str>) -> bool {
        match (self.state.as_deref(), home_state) {
            (Some(college), Some(home)) => college.trim().eq_ignore_ascii_case(home.trim()),
            _ => false,
        }
    }
}
