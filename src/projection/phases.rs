//! Life phase scheduling: Undergrad → GradSchool → Residency → Career

use crate::assumptions::CareerProfile;
use serde::{Deserialize, Serialize};

use super::salary::SalaryCurve;

/// Undergraduate program length in years
pub const UNDERGRAD_YEARS: u32 = 4;

/// Years past the starting age covered by a projection (18 → 35)
pub const HORIZON_YEARS: u32 = 17;

/// Kind of life stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Undergrad,
    GradSchool,
    Residency,
    Career,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Undergrad => "undergrad",
            PhaseKind::GradSchool => "grad_school",
            PhaseKind::Residency => "residency",
            PhaseKind::Career => "career",
        }
    }
}

/// One scheduled phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifePhase {
    pub kind: PhaseKind,

    /// First timeline year of the phase (1-indexed)
    pub start_year: u32,

    pub duration: u32,

    /// Direct cost per year (tuition; 0 for Residency and Career)
    pub annual_cost: f64,

    /// Income per year. Career carries its entry salary; later years follow the salary curve.
    pub annual_income: f64,
}

impl LifePhase {
    /// Last timeline year of the phase, or None for an empty phase
    pub fn end_year(&self) -> Option<u32> {
        (self.duration > 0).then(|| self.start_year + self.duration - 1)
    }

    pub fn contains(&self, year: u32) -> bool {
        year >= self.start_year && year < self.start_year + self.duration
    }
}

/// Ordered phases for one student and career
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSchedule {
    pub start_age: u32,
    pub phases: Vec<LifePhase>,
}

impl PhaseSchedule {
    /// Total simulated years across all phases
    pub fn total_years(&self) -> u32 {
        self.phases.iter().map(|p| p.duration).sum()
    }

    /// Age at the start of a timeline year
    pub fn age_at(&self, year: u32) -> u32 {
        self.start_age + year - 1
    }

    /// Age entering the Career phase
    pub fn career_start_age(&self) -> u32 {
        let pre_career: u32 = self
            .phases
            .iter()
            .filter(|p| p.kind != PhaseKind::Career)
            .map(|p| p.duration)
            .sum();
        self.start_age + pre_career
    }

    /// Last age covered by the projection horizon
    pub fn horizon_age(&self) -> u32 {
        self.start_age + HORIZON_YEARS
    }

    pub fn phase(&self, kind: PhaseKind) -> Option<&LifePhase> {
        self.phases.iter().find(|p| p.kind == kind)
    }

    pub fn phase_for_year(&self, year: u32) -> Option<&LifePhase> {
        self.phases.iter().find(|p| p.contains(year))
    }
}

/// Builds the phase sequence from a career profile
pub struct PhaseScheduler;

impl PhaseScheduler {
    /// Schedule phases for a student starting at `start_age`
    ///
    /// The Career phase runs to `start_age + HORIZON_YEARS`; if schooling and training
    /// run past the horizon the Career phase is empty and the timeline ends with training.
    pub fn schedule(start_age: u32, sticker_per_year: f64, career: &CareerProfile) -> PhaseSchedule {
        let mut phases = Vec::with_capacity(4);
        let mut next_year = 1;

        phases.push(LifePhase {
            kind: PhaseKind::Undergrad,
            start_year: next_year,
            duration: UNDERGRAD_YEARS,
            annual_cost: sticker_per_year,
            annual_income: 0.0,
        });
        next_year += UNDERGRAD_YEARS;

        if career.grad_school_years > 0 {
            phases.push(LifePhase {
                kind: PhaseKind::GradSchool,
                start_year: next_year,
                duration: career.grad_school_years,
                annual_cost: career.grad_school_annual_cost,
                annual_income: career.grad_stipend,
            });
            next_year += career.grad_school_years;
        }

        if career.residency_years > 0 && career.training_salary > 0.0 {
            phases.push(LifePhase {
                kind: PhaseKind::Residency,
                start_year: next_year,
                duration: career.residency_years,
                annual_cost: 0.0,
                annual_income: career.training_salary,
            });
            next_year += career.residency_years;
        }

        let career_start_age = start_age + next_year - 1;
        let horizon_age = start_age + HORIZON_YEARS;
        let career_years = (horizon_age + 1).saturating_sub(career_start_age);

        phases.push(LifePhase {
            kind: PhaseKind::Career,
            start_year: next_year,
            duration: career_years,
            annual_cost: 0.0,
            annual_income: SalaryCurve::for_career(career).entry_salary(),
        });

        PhaseSchedule { start_age, phases }
    }
}
