//! Life-path projection: costs, phase scheduling, yearly simulation, and summary

mod amortization;
mod cost;
mod engine;
mod phases;
mod salary;
mod state;
mod summary;
mod timeline;

pub use amortization::{LoanQuote, monthly_payment, remaining_balance};
pub use cost::{CollegeCosts, CostBreakdown, CostModel};
pub use engine::TimelineSimulator;
pub use phases::{HORIZON_YEARS, LifePhase, PhaseKind, PhaseSchedule, PhaseScheduler, UNDERGRAD_YEARS};
pub use salary::SalaryCurve;
pub use state::SimulationState;
pub use summary::{LifePathSummary, SummaryAggregator, Warning, WarningKind, format_currency};
pub use timeline::{CareerSummary, LifePathResult, Timeline, YearSnapshot, first_break_even_age};
