//! Standard loan amortization
//!
//! Used to quote a fixed monthly payment for the debt entering repayment.

use serde::{Deserialize, Serialize};

/// Level monthly payment for a fully amortizing loan
///
/// # Arguments
/// * `principal` - Amount borrowed
/// * `annual_rate` - Annual interest rate as a decimal (0.075 = 7.5%)
/// * `years` - Term in years
pub fn monthly_payment(principal: f64, annual_rate: f64, years: u32) -> f64 {
    let n = years * 12;
    if principal <= 0.0 || n == 0 {
        return 0.0;
    }

    let r = annual_rate / 12.0;
    if r.abs() < 1e-12 {
        return principal / n as f64;
    }

    principal * r / (1.0 - (1.0 + r).powi(-(n as i32)))
}

/// Outstanding balance after `months` level payments
pub fn remaining_balance(principal: f64, annual_rate: f64, years: u32, months: u32) -> f64 {
    let payment = monthly_payment(principal, annual_rate, years);
    let r = annual_rate / 12.0;
    let mut balance = principal;
    for _ in 0..months.min(years * 12) {
        balance = balance * (1.0 + r) - payment;
    }
    balance.max(0.0)
}

/// Quoted repayment terms for a debt balance. Currency figures are whole units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal: f64,

    /// Annual rate as a decimal
    pub interest_rate: f64,

    pub term_years: u32,

    pub monthly_payment: f64,

    /// monthly_payment × months
    pub total_paid: f64,

    /// total_paid − principal
    pub total_interest: f64,
}

impl LoanQuote {
    pub fn new(principal: f64, annual_rate: f64, years: u32) -> Self {
        let principal = principal.max(0.0).round();
        let monthly = monthly_payment(principal, annual_rate, years).round();
        let total_paid = monthly * (years * 12) as f64;

        Self {
            principal,
            interest_rate: annual_rate,
            term_years: years,
            monthly_payment: monthly,
            total_paid,
            total_interest: total_paid - principal,
        }
    }
}
