//! Timeline output structures for life-path projections

use crate::assumptions::CareerProfile;
use crate::error::DataGap;
use serde::{Deserialize, Serialize};

use super::phases::PhaseKind;
use super::summary::LifePathSummary;

/// One year of a projection. Currency figures are whole units and
/// `net_worth == accumulated_savings - debt_balance` exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    /// Timeline year (1-indexed, contiguous)
    pub year: u32,
    pub age: u32,
    pub phase: PhaseKind,
    pub label: String,
    pub description: String,

    /// None while studying without a stipend
    pub earnings: Option<f64>,

    pub debt_balance: f64,
    pub accumulated_savings: f64,
    pub net_worth: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
}

impl YearSnapshot {
    /// Build a snapshot from unrounded balances; net worth is derived from the rounded figures
    pub fn new(
        year: u32,
        age: u32,
        phase: PhaseKind,
        label: String,
        description: String,
        earnings: Option<f64>,
        debt_balance: f64,
        accumulated_savings: f64,
    ) -> Self {
        let debt = debt_balance.max(0.0).round();
        let savings = accumulated_savings.round();
        Self {
            year,
            age,
            phase,
            label,
            description,
            earnings: earnings.map(f64::round),
            debt_balance: debt,
            accumulated_savings: savings,
            net_worth: savings - debt,
            milestone: None,
        }
    }

    /// Append milestone text, joining multiple milestones in one year
    pub fn add_milestone(&mut self, text: &str) {
        self.milestone = Some(match self.milestone.take() {
            Some(existing) => format!("{existing}; {text}"),
            None => text.to_string(),
        });
    }
}

/// Ordered year-by-year projection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timeline {
    pub snapshots: Vec<YearSnapshot>,

    /// Debt balance entering the first career year (before rounding)
    pub debt_at_repayment: Option<f64>,

    pub break_even_age: Option<u32>,
    pub debt_free_age: Option<u32>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot
    pub fn push(&mut self, snapshot: YearSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&YearSnapshot> {
        self.snapshots.last()
    }

    /// Maximum debt balance over the whole timeline
    pub fn peak_debt(&self) -> f64 {
        self.snapshots.iter().map(|s| s.debt_balance).fold(0.0, f64::max)
    }

    /// Earnings in the first Career year, if the timeline reaches one
    pub fn first_career_earnings(&self) -> Option<f64> {
        self.snapshots
            .iter()
            .find(|s| s.phase == PhaseKind::Career)
            .and_then(|s| s.earnings)
    }
}

/// Age of the first snapshot with positive net worth
pub fn first_break_even_age(snapshots: &[YearSnapshot]) -> Option<u32> {
    snapshots.iter().find(|s| s.net_worth > 0.0).map(|s| s.age)
}

/// Resolved career parameters as reported to consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSummary {
    pub tag: String,
    pub title: String,
    pub median_salary: f64,
    pub low_salary: f64,
    pub high_salary: f64,

    /// Percentage number (5 = 5%), unlike the decimal rates elsewhere
    pub job_growth_pct: f64,

    pub grad_school_years: u32,
    pub residency_years: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub estimated: bool,
}

impl From<&CareerProfile> for CareerSummary {
    fn from(career: &CareerProfile) -> Self {
        Self {
            tag: career.tag.clone(),
            title: career.title.clone(),
            median_salary: career.median_salary.round(),
            low_salary: career.low_salary.round(),
            high_salary: career.high_salary.round(),
            job_growth_pct: career.job_growth_pct(),
            grad_school_years: career.grad_school_years,
            residency_years: career.residency_years,
            note: career.note.clone(),
            estimated: career.estimated,
        }
    }
}

/// Complete projection for one college
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifePathResult {
    pub college_id: String,
    pub college_name: String,
    pub in_state: bool,

    pub major_tag: String,
    pub major_label: String,

    pub career: CareerSummary,

    pub timeline: Vec<YearSnapshot>,

    pub summary: LifePathSummary,

    /// College fields that fell back to default estimates
    pub data_gaps: Vec<DataGap>,
}
