//! College cost model: sticker price, aid-adjusted net price, and debt estimate

use crate::assumptions::{CareerProfile, SimulationAssumptions};
use crate::error::DataGap;
use crate::student::{CollegeRecord, StudentProfile};
use log::debug;
use serde::{Deserialize, Serialize};

use super::phases::UNDERGRAD_YEARS;

/// Four-year cost figures reported alongside the total. Whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Tuition plus room and board, all undergrad years
    pub sticker_with_room_board: f64,

    /// Tuition only, all undergrad years
    pub sticker_tuition_only: f64,

    /// Graduate school tuition, all years
    pub grad_cost: f64,

    /// Net price for the student's bracket, all undergrad years (None without aid data)
    pub aid_adjusted_undergrad: Option<f64>,
}

/// Cost figures for one college and student
#[derive(Debug, Clone, PartialEq)]
pub struct CollegeCosts {
    pub in_state: bool,

    pub tuition_per_year: f64,
    pub room_and_board_per_year: f64,

    /// Yearly sticker price used for debt accrual
    pub sticker_per_year: f64,

    /// Aid-adjusted yearly price; None means no estimate is available
    pub net_price_per_year: Option<f64>,

    /// Four-year sticker cost less scholarship, floored at zero
    pub undergrad_cost: f64,

    /// Reported median debt, or the financed share of `undergrad_cost`
    pub undergrad_debt_estimate: f64,

    pub grad_cost: f64,

    pub data_gaps: Vec<DataGap>,
}

impl CollegeCosts {
    /// Undergrad cost after scholarship plus graduate tuition
    pub fn total_cost(&self) -> f64 {
        (self.undergrad_cost + self.grad_cost).round()
    }

    pub fn breakdown(&self) -> CostBreakdown {
        let years = UNDERGRAD_YEARS as f64;
        CostBreakdown {
            sticker_with_room_board: ((self.tuition_per_year + self.room_and_board_per_year) * years).round(),
            sticker_tuition_only: (self.tuition_per_year * years).round(),
            grad_cost: self.grad_cost.round(),
            aid_adjusted_undergrad: self.net_price_per_year.map(|p| (p * years).round()),
        }
    }
}

/// Computes college costs from a record, falling back to documented constants
pub struct CostModel<'a> {
    assumptions: &'a SimulationAssumptions,
}

impl<'a> CostModel<'a> {
    pub fn new(assumptions: &'a SimulationAssumptions) -> Self {
        Self { assumptions }
    }

    /// Tuition for this student, recording a gap if the college did not report it
    pub fn tuition_per_year(&self, college: &CollegeRecord, in_state: bool, gaps: &mut Vec<DataGap>) -> f64 {
        let (reported, fallback, gap) = if in_state {
            (college.tuition_in_state, self.assumptions.in_state_tuition_fallback, DataGap::InStateTuition)
        } else {
            (college.tuition_out_of_state, self.assumptions.out_of_state_tuition_fallback, DataGap::OutOfStateTuition)
        };

        reported.unwrap_or_else(|| {
            debug!("{}: {}", college.name, gap.describe());
            gaps.push(gap);
            fallback
        })
    }

    pub fn room_and_board_per_year(&self, college: &CollegeRecord, gaps: &mut Vec<DataGap>) -> f64 {
        college.room_and_board.unwrap_or_else(|| {
            if self.assumptions.include_room_and_board {
                debug!("{}: {}", college.name, DataGap::RoomAndBoard.describe());
                gaps.push(DataGap::RoomAndBoard);
            }
            self.assumptions.room_and_board_fallback
        })
    }

    /// Aid-adjusted yearly price. Never inferred from tuition.
    pub fn net_price_per_year(&self, college: &CollegeRecord, profile: &StudentProfile) -> Option<f64> {
        college.net_price_for(profile.income_bracket)
    }

    /// Evaluate all cost figures for one college
    pub fn evaluate(&self, college: &CollegeRecord, profile: &StudentProfile, career: &CareerProfile) -> CollegeCosts {
        let mut gaps = Vec::new();
        let in_state = college.is_in_state(profile.home_state.as_deref());

        let tuition = self.tuition_per_year(college, in_state, &mut gaps);
        let room_and_board = self.room_and_board_per_year(college, &mut gaps);
        let sticker_per_year = if self.assumptions.include_room_and_board {
            tuition + room_and_board
        } else {
            tuition
        };

        let net_price_per_year = self.net_price_per_year(college, profile);
        if net_price_per_year.is_none() {
            debug!("{}: {}", college.name, DataGap::NetPrice.describe());
            gaps.push(DataGap::NetPrice);
        }

        let undergrad_cost =
            (sticker_per_year * UNDERGRAD_YEARS as f64 - profile.scholarship_total()).max(0.0);
        let undergrad_debt_estimate = college
            .median_debt
            .unwrap_or_else(|| (undergrad_cost * self.assumptions.financed_fraction).round());

        CollegeCosts {
            in_state,
            tuition_per_year: tuition,
            room_and_board_per_year: room_and_board,
            sticker_per_year,
            net_price_per_year,
            undergrad_cost,
            undergrad_debt_estimate,
            grad_cost: career.grad_school_total_cost(),
            data_gaps: gaps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::{IncomeBracket, Ownership};

    fn college() -> CollegeRecord {
        let mut c = CollegeRecord::new("1", "State U", Some("OH"), Ownership::Public);
        c.tuition_in_state = Some(12_000.0);
        c.tuition_out_of_state = Some(35_000.0);
        c.room_and_board = Some(13_000.0);
        c.net_price_public.insert(IncomeBracket::Under30k, 9_000.0);
        c
    }

    fn career() -> CareerProfile {
        CareerProfile::fallback("test")
    }

    #[test]
    fn test_in_state_sticker_price() {
        let assumptions = SimulationAssumptions::default();
        let model = CostModel::new(&assumptions);
        let profile = StudentProfile::new(IncomeBracket::Under30k).with_home_state("oh");

        let costs = model.evaluate(&college(), &profile, &career());
        assert!(costs.in_state);
        assert_eq!(costs.sticker_per_year, 25_000.0);
        assert_eq!(costs.undergrad_cost, 100_000.0);
        assert_eq!(costs.undergrad_debt_estimate, 60_000.0);
        assert_eq!(costs.net_price_per_year, Some(9_000.0));
        assert!(costs.data_gaps.is_empty());
    }

    #[test]
    fn test_out_of_state_and_scholarship() {
        let assumptions = SimulationAssumptions::default();
        let model = CostModel::new(&assumptions);
        let profile = StudentProfile::new(IncomeBracket::Under30k)
            .with_home_state("MI")
            .with_scholarship(20_000.0);

        let costs = model.evaluate(&college(), &profile, &career());
        assert!(!costs.in_state);
        assert_eq!(costs.sticker_per_year, 48_000.0);
        assert_eq!(costs.undergrad_cost, 172_000.0);
        assert_eq!(costs.undergrad_debt_estimate, 103_200.0);
    }

    #[test]
    fn test_scholarship_floors_at_zero() {
        let assumptions = SimulationAssumptions::default();
        let model = CostModel::new(&assumptions);
        let profile = StudentProfile::new(IncomeBracket::Under30k)
            .with_home_state("OH")
            .with_scholarship(1_000_000.0);

        let costs = model.evaluate(&college(), &profile, &career());
        assert_eq!(costs.undergrad_cost, 0.0);
        assert_eq!(costs.undergrad_debt_estimate, 0.0);
    }

    #[test]
    fn test_reported_median_debt_preferred() {
        let assumptions = SimulationAssumptions::default();
        let model = CostModel::new(&assumptions);
        let mut c = college();
        c.median_debt = Some(23_250.0);

        let costs = model.evaluate(&c, &StudentProfile::new(IncomeBracket::Under30k), &career());
        assert_eq!(costs.undergrad_debt_estimate, 23_250.0);
    }

    #[test]
    fn test_missing_fields_use_fallbacks() {
        let assumptions = SimulationAssumptions::default();
        let model = CostModel::new(&assumptions);
        let bare = CollegeRecord::new("9", "Sparse College", Some("TX"), Ownership::PrivateNonprofit);

        let in_state = model.evaluate(
            &bare,
            &StudentProfile::new(IncomeBracket::Over110k).with_home_state("TX"),
            &career(),
        );
        assert_eq!(in_state.tuition_per_year, 15_000.0);
        assert_eq!(in_state.room_and_board_per_year, 15_000.0);
        assert_eq!(in_state.net_price_per_year, None);
        assert_eq!(
            in_state.data_gaps,
            vec![DataGap::InStateTuition, DataGap::RoomAndBoard, DataGap::NetPrice]
        );

        let out_of_state = model.evaluate(&bare, &StudentProfile::new(IncomeBracket::Over110k), &career());
        assert_eq!(out_of_state.tuition_per_year, 30_000.0);
        assert_eq!(out_of_state.breakdown().aid_adjusted_undergrad, None);
    }

    #[test]
    fn test_room_and_board_optional() {
        let assumptions = SimulationAssumptions {
            include_room_and_board: false,
            ..Default::default()
        };
        let model = CostModel::new(&assumptions);
        let profile = StudentProfile::new(IncomeBracket::Under30k).with_home_state("OH");

        let costs = model.evaluate(&college(), &profile, &career());
        assert_eq!(costs.sticker_per_year, 12_000.0);
        // Breakdown still reports both sticker figures
        let breakdown = costs.breakdown();
        assert_eq!(breakdown.sticker_with_room_board, 100_000.0);
        assert_eq!(breakdown.sticker_tuition_only, 48_000.0);
        assert_eq!(breakdown.aid_adjusted_undergrad, Some(36_000.0));
    }

    #[test]
    fn test_total_cost_includes_grad_school() {
        let assumptions = SimulationAssumptions::default();
        let model = CostModel::new(&assumptions);
        let mut med = career();
        med.grad_school_years = 4;
        med.grad_school_annual_cost = 50_000.0;
        med.residency_years = 3;

        let costs = model.evaluate(&college(), &StudentProfile::new(IncomeBracket::Under30k).with_home_state("OH"), &med);
        assert_eq!(costs.grad_cost, 200_000.0);
        assert_eq!(costs.total_cost(), 300_000.0);
    }
}
