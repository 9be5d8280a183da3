//! Running financial state carried across phase boundaries

/// State of a student's finances at a point in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Current timeline year (1-indexed)
    pub year: u32,

    /// Attained age in the current year
    pub age: u32,

    /// Outstanding debt, never negative
    pub debt_balance: f64,

    /// Invested savings
    pub accumulated_savings: f64,

    /// Debt balance when the first career year began (basis for the repayment plan)
    pub debt_at_repayment: Option<f64>,

    /// Years completed in the Career phase
    pub career_years: u32,

    /// Whether any debt was ever taken on
    pub had_debt: bool,

    pub break_even_age: Option<u32>,
    pub debt_free_age: Option<u32>,
}

impl SimulationState {
    /// Fresh state before year 1
    pub fn new(start_age: u32) -> Self {
        Self {
            year: 0,
            age: start_age.saturating_sub(1),
            debt_balance: 0.0,
            accumulated_savings: 0.0,
            debt_at_repayment: None,
            career_years: 0,
            had_debt: false,
            break_even_age: None,
            debt_free_age: None,
        }
    }

    /// Advance to the next timeline year
    pub fn advance_year(&mut self) {
        self.year += 1;
        self.age += 1;
    }

    /// Borrow `amount` this year
    pub fn borrow(&mut self, amount: f64) {
        if amount > 0.0 {
            self.debt_balance += amount;
            self.had_debt = true;
        }
    }

    /// Apply a year of interest and a payment; the balance floors at zero
    pub fn accrue_and_pay(&mut self, interest_rate: f64, payment: f64) {
        self.debt_balance = (self.debt_balance * (1.0 + interest_rate) - payment).max(0.0);
    }

    /// Grow savings by one year of return, then add this year's contribution
    pub fn invest(&mut self, annual_return: f64, contribution: f64) {
        self.accumulated_savings = self.accumulated_savings * (1.0 + annual_return) + contribution;
    }

    pub fn net_worth(&self) -> f64 {
        self.accumulated_savings - self.debt_balance
    }
}
