//! Year-by-year life-path simulation

use crate::assumptions::{CareerProfile, SimulationAssumptions};
use super::phases::{LifePhase, PhaseKind, PhaseSchedule};
use super::salary::SalaryCurve;
use super::state::SimulationState;
use super::timeline::{Timeline, YearSnapshot};

const UNDERGRAD_LABELS: [&str; 4] = ["Freshman year", "Sophomore year", "Junior year", "Senior year"];

/// Walks a phase schedule and produces one snapshot per year
pub struct TimelineSimulator {
    assumptions: SimulationAssumptions,
}

impl TimelineSimulator {
    /// Create a new simulator with the given assumptions
    pub fn new(assumptions: SimulationAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &SimulationAssumptions {
        &self.assumptions
    }

    /// Run the full timeline for one schedule
    ///
    /// Debt and savings carry across phase boundaries. Debt accrues during study,
    /// receives a fixed reduction during residency, and is repaid on an accelerated
    /// ten-year plan during the career while savings compound.
    pub fn simulate(
        &self,
        schedule: &PhaseSchedule,
        career: &CareerProfile,
        college_name: &str,
        major_label: &str,
    ) -> Timeline {
        let mut timeline = Timeline::new();
        let mut state = SimulationState::new(schedule.start_age);
        let curve = SalaryCurve::for_career(career);

        for phase in &schedule.phases {
            for index in 0..phase.duration {
                state.advance_year();

                let mut snapshot = match phase.kind {
                    PhaseKind::Undergrad => self.undergrad_year(&mut state, phase, index, college_name, major_label),
                    PhaseKind::GradSchool => self.grad_school_year(&mut state, phase, index, career),
                    PhaseKind::Residency => self.residency_year(&mut state, phase, index, career),
                    PhaseKind::Career => self.career_year(&mut state, &curve, career),
                };

                if index == 0 {
                    match phase.kind {
                        PhaseKind::Undergrad => {}
                        PhaseKind::GradSchool => snapshot.add_milestone("Started graduate school"),
                        PhaseKind::Residency => snapshot.add_milestone("Started residency"),
                        PhaseKind::Career => snapshot.add_milestone(&format!("Started career as {}", career.title)),
                    }
                }
                if phase.kind == PhaseKind::Undergrad && index + 1 == phase.duration {
                    snapshot.add_milestone(&format!("Graduated from {college_name}"));
                }

                self.record_thresholds(&mut state, &mut snapshot);
                timeline.push(snapshot);
            }
        }

        timeline.debt_at_repayment = state.debt_at_repayment;
        timeline.break_even_age = state.break_even_age;
        timeline.debt_free_age = state.debt_free_age;
        timeline
    }

    fn undergrad_year(
        &self,
        state: &mut SimulationState,
        phase: &LifePhase,
        index: u32,
        college_name: &str,
        major_label: &str,
    ) -> YearSnapshot {
        state.borrow(phase.annual_cost * self.assumptions.financed_fraction);

        let label = UNDERGRAD_LABELS
            .get(index as usize)
            .map(|l| l.to_string())
            .unwrap_or_else(|| format!("Undergraduate (year {})", index + 1));

        self.snapshot(
            state,
            PhaseKind::Undergrad,
            label,
            format!("Studying {major_label} at {college_name}"),
            None,
        )
    }

    fn grad_school_year(
        &self,
        state: &mut SimulationState,
        phase: &LifePhase,
        index: u32,
        career: &CareerProfile,
    ) -> YearSnapshot {
        state.borrow(phase.annual_cost);

        let stipend = (phase.annual_income > 0.0).then_some(phase.annual_income);
        let description = if stipend.is_some() {
            format!("Funded graduate study toward {}", career.title)
        } else {
            format!("Graduate school toward {}", career.title)
        };

        self.snapshot(
            state,
            PhaseKind::GradSchool,
            format!("Graduate school (year {})", index + 1),
            description,
            stipend,
        )
    }

    fn residency_year(
        &self,
        state: &mut SimulationState,
        phase: &LifePhase,
        index: u32,
        career: &CareerProfile,
    ) -> YearSnapshot {
        state.accrue_and_pay(self.assumptions.debt_interest_rate, self.assumptions.residency_annual_reduction);

        self.snapshot(
            state,
            PhaseKind::Residency,
            format!("Residency (year {})", index + 1),
            format!("Supervised training as {}", career.title),
            Some(phase.annual_income),
        )
    }

    fn career_year(&self, state: &mut SimulationState, curve: &SalaryCurve, career: &CareerProfile) -> YearSnapshot {
        let a = &self.assumptions;

        state.career_years += 1;
        let basis = *state.debt_at_repayment.get_or_insert(state.debt_balance);

        let salary = curve.salary((state.career_years - 1) as f64);
        let payment = self.annual_payment(basis).min(state.debt_balance);

        state.accrue_and_pay(a.debt_interest_rate, payment);
        let contribution = (salary * a.savings_rate - payment).max(0.0);
        state.invest(a.investment_return, contribution);

        self.snapshot(
            state,
            PhaseKind::Career,
            format!("Career year {}", state.career_years),
            format!("Working as {}", career.title),
            Some(salary),
        )
    }

    /// Accelerated ten-year-plan payment for a balance entering repayment
    pub fn annual_payment(&self, debt_at_repayment: f64) -> f64 {
        let a = &self.assumptions;
        if a.repayment_years <= 0.0 {
            return debt_at_repayment;
        }
        debt_at_repayment / a.repayment_years * a.payment_multiplier
    }

    fn snapshot(
        &self,
        state: &SimulationState,
        phase: PhaseKind,
        label: String,
        description: String,
        earnings: Option<f64>,
    ) -> YearSnapshot {
        YearSnapshot::new(
            state.year,
            state.age,
            phase,
            label,
            description,
            earnings,
            state.debt_balance,
            state.accumulated_savings,
        )
    }

    /// Debt-free and break-even are first crossings on the rounded figures; neither is overwritten
    fn record_thresholds(&self, state: &mut SimulationState, snapshot: &mut YearSnapshot) {
        if state.had_debt && state.debt_free_age.is_none() && snapshot.debt_balance == 0.0 {
            state.debt_free_age = Some(snapshot.age);
            snapshot.add_milestone("Debt paid off");
        }

        if state.break_even_age.is_none() && snapshot.net_worth > 0.0 {
            state.break_even_age = Some(snapshot.age);
            snapshot.add_milestone("Break-even: net worth turns positive");
        }
    }
}
