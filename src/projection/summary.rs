//! Headline metrics and warning classification for a simulated timeline

use crate::assumptions::{CareerProfile, SimulationAssumptions, HEALTH_MAJOR_TAGS, VARIABLE_EARNINGS_MAJOR_TAGS};
use serde::{Deserialize, Serialize};

use super::amortization::LoanQuote;
use super::cost::{CollegeCosts, CostBreakdown};
use super::phases::PhaseSchedule;
use super::salary::SalaryCurve;
use super::timeline::Timeline;

/// Term of the quoted standard repayment plan
const LOAN_QUOTE_TERM_YEARS: u32 = 10;

/// Warning categories, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Medical career without a health or biology background
    Competitiveness,
    /// Debt well above first-year earnings
    HighDebtRatio,
    /// Major with widely varying earnings outcomes
    EarningsVariance,
    /// Note supplied by the career data source
    Advisory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

/// Reduced view of a life path. Currency figures are whole units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifePathSummary {
    /// Undergrad cost after scholarship plus graduate tuition
    pub total_cost: f64,
    pub cost_breakdown: CostBreakdown,

    pub peak_debt: f64,

    /// Debt balance entering the first career year; `None` when training
    /// runs past the horizon
    pub debt_at_repayment: Option<f64>,

    pub break_even_age: Option<u32>,
    pub debt_free_age: Option<u32>,

    pub net_worth_at_horizon: f64,
    pub earnings_at_horizon: Option<f64>,

    pub career_start_age: u32,

    /// Standard amortized quote for `debt_at_repayment`, or for the final
    /// balance when repayment never starts within the horizon
    pub loan_quote: LoanQuote,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<Warning>,
}

/// Builds a [`LifePathSummary`] from the pieces of one simulation
pub struct SummaryAggregator<'a> {
    assumptions: &'a SimulationAssumptions,
}

impl<'a> SummaryAggregator<'a> {
    pub fn new(assumptions: &'a SimulationAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn summarize(
        &self,
        costs: &CollegeCosts,
        schedule: &PhaseSchedule,
        timeline: &Timeline,
        career: &CareerProfile,
        major_tag: &str,
    ) -> LifePathSummary {
        let peak_debt = timeline.peak_debt();
        let debt_at_repayment = timeline.debt_at_repayment.map(f64::round);
        let last = timeline.last();
        let quoted_debt = debt_at_repayment.unwrap_or_else(|| last.map(|s| s.debt_balance).unwrap_or(0.0));

        LifePathSummary {
            total_cost: costs.total_cost(),
            cost_breakdown: costs.breakdown(),
            peak_debt,
            debt_at_repayment,
            break_even_age: timeline.break_even_age,
            debt_free_age: timeline.debt_free_age,
            net_worth_at_horizon: last.map(|s| s.net_worth).unwrap_or(0.0),
            earnings_at_horizon: last.and_then(|s| s.earnings),
            career_start_age: schedule.career_start_age(),
            loan_quote: LoanQuote::new(quoted_debt, self.assumptions.loan_quote_rate, LOAN_QUOTE_TERM_YEARS),
            warning: self.classify_warning(timeline, career, major_tag),
        }
    }

    /// Select the single highest-priority warning, if any applies
    pub fn classify_warning(&self, timeline: &Timeline, career: &CareerProfile, major_tag: &str) -> Option<Warning> {
        if career.requires_medical_doctorate() && !HEALTH_MAJOR_TAGS.contains(&major_tag) {
            return Some(Warning {
                kind: WarningKind::Competitiveness,
                message: format!(
                    "{} requires medical school; admission is highly competitive without a health or biology background",
                    career.title
                ),
            });
        }

        let peak_debt = timeline.peak_debt();
        let first_year_earnings = timeline
            .first_career_earnings()
            .unwrap_or_else(|| SalaryCurve::for_career(career).entry_salary().round());
        if peak_debt > self.assumptions.debt_to_earnings_warning_ratio * first_year_earnings {
            return Some(Warning {
                kind: WarningKind::HighDebtRatio,
                message: format!(
                    "Total debt of {} exceeds {}x expected first-year earnings of {}",
                    format_currency(peak_debt),
                    self.assumptions.debt_to_earnings_warning_ratio,
                    format_currency(first_year_earnings)
                ),
            });
        }

        if VARIABLE_EARNINGS_MAJOR_TAGS.contains(&major_tag) {
            return Some(Warning {
                kind: WarningKind::EarningsVariance,
                message: "Earnings in this field vary widely; median outcomes may differ from this projection"
                    .to_string(),
            });
        }

        career.note.as_ref().map(|note| Warning {
            kind: WarningKind::Advisory,
            message: note.clone(),
        })
    }
}

/// Whole-unit currency with thousands separators ("$1,234,567")
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::cost::CostModel;
    use crate::projection::engine::TimelineSimulator;
    use crate::projection::phases::PhaseScheduler;
    use crate::student::{CollegeRecord, IncomeBracket, Ownership, StudentProfile};

    fn career(tag: &str, low: f64, median: f64, high: f64) -> CareerProfile {
        let mut c = CareerProfile::fallback("test");
        c.tag = tag.to_string();
        c.title = "Test Career".to_string();
        c.low_salary = low;
        c.median_salary = median;
        c.high_salary = high;
        c.note = None;
        c.estimated = false;
        c
    }

    fn summarize(tuition: f64, career: &CareerProfile, major_tag: &str) -> LifePathSummary {
        let assumptions = SimulationAssumptions {
            include_room_and_board: false,
            ..Default::default()
        };
        let mut college = CollegeRecord::new("1", "Test College", Some("OH"), Ownership::Public);
        college.tuition_in_state = Some(tuition);
        let profile = StudentProfile::new(IncomeBracket::Under30k).with_home_state("OH");

        let costs = CostModel::new(&assumptions).evaluate(&college, &profile, career);
        let schedule = PhaseScheduler::schedule(18, costs.sticker_per_year, career);
        let timeline = TimelineSimulator::new(assumptions.clone()).simulate(&schedule, career, "Test College", "Major");
        SummaryAggregator::new(&assumptions).summarize(&costs, &schedule, &timeline, career, major_tag)
    }

    #[test]
    fn test_headline_metrics() {
        let summary = summarize(8_000.0, &career("technician", 32_000.0, 45_000.0, 62_000.0), "engineering");
        assert_eq!(summary.total_cost, 32_000.0);
        assert_eq!(summary.peak_debt, 19_200.0);
        assert_eq!(summary.debt_at_repayment, Some(19_200.0));
        assert_eq!(summary.break_even_age, Some(26));
        assert_eq!(summary.debt_free_age, Some(32));
        assert_eq!(summary.career_start_age, 22);
        assert!(summary.net_worth_at_horizon > 0.0);
        assert!(summary.earnings_at_horizon.is_some());
        assert_eq!(summary.loan_quote.principal, 19_200.0);
        assert_eq!(summary.loan_quote.interest_rate, 0.075);
        assert!(summary.warning.is_none());
    }

    #[test]
    fn test_training_past_horizon_quotes_final_balance() {
        let mut surgeon = career("surgery", 200_000.0, 300_000.0, 500_000.0);
        surgeon.grad_school_years = 4;
        surgeon.grad_school_annual_cost = 50_000.0;
        surgeon.residency_years = 12;
        surgeon.training_salary = 60_000.0;

        let summary = summarize(8_000.0, &surgeon, "biology");
        assert_eq!(summary.debt_at_repayment, None);
        assert!(summary.peak_debt > 200_000.0);
        assert!(summary.loan_quote.principal > 200_000.0);
        assert!(summary.loan_quote.monthly_payment > 0.0);
    }

    #[test]
    fn test_competitiveness_takes_priority() {
        let summary = summarize(40_000.0, &career("surgery", 200_000.0, 300_000.0, 500_000.0), "arts");
        assert_eq!(summary.warning.unwrap().kind, WarningKind::Competitiveness);

        let summary = summarize(40_000.0, &career("surgery", 200_000.0, 300_000.0, 500_000.0), "biology");
        assert!(summary.warning.map_or(true, |w| w.kind != WarningKind::Competitiveness));
    }

    #[test]
    fn test_high_debt_ratio() {
        // 60,000 × 0.6 × 4 = 144,000 of debt against 36,000 entry salary
        let summary = summarize(60_000.0, &career("teaching", 40_000.0, 50_000.0, 70_000.0), "arts");
        let warning = summary.warning.unwrap();
        assert_eq!(warning.kind, WarningKind::HighDebtRatio);
        assert!(warning.message.contains("$144,000"));
    }

    #[test]
    fn test_earnings_variance_and_advisory() {
        let summary = summarize(8_000.0, &career("arts_design", 32_000.0, 45_000.0, 62_000.0), "humanities");
        assert_eq!(summary.warning.unwrap().kind, WarningKind::EarningsVariance);

        let mut estimated = career("not_sure", 40_000.0, 55_000.0, 75_000.0);
        estimated.note = Some("estimated data".to_string());
        let summary = summarize(8_000.0, &estimated, "business");
        let warning = summary.warning.unwrap();
        assert_eq!(warning.kind, WarningKind::Advisory);
        assert_eq!(warning.message, "estimated data");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-19_200.0), "-$19,200");
    }
}
