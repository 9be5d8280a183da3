//! Piecewise salary progression anchored to a career's low / median / high band
//!
//! Years of experience `e` map onto the band as:
//! - `e <= 0`: entry salary, 90% of the low figure
//! - `0 < e <= 2`: halfway from entry to median by year 2
//! - `2 < e <= 5`: the rest of the way to median by year 5
//! - `5 < e <= 10`: 60% of the median-to-high gap by year 10
//! - `e > 10`: approaches high asymptotically, closing half the remaining gap every 10 years

use crate::assumptions::CareerProfile;

/// Entry salary as a fraction of the low figure
const ENTRY_FRACTION: f64 = 0.9;
/// Share of the median-to-high gap reached after ten years
const DECADE_GAP_SHARE: f64 = 0.6;
/// Years for the remaining gap to halve after year ten
const LATE_HALF_LIFE: f64 = 10.0;

/// Salary curve for a single career
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryCurve {
    entry: f64,
    early: f64,
    median: f64,
    decade: f64,
    high: f64,
}

impl SalaryCurve {
    pub fn new(low: f64, median: f64, high: f64) -> Self {
        let entry = ENTRY_FRACTION * low;
        Self {
            entry,
            early: entry + 0.5 * (median - entry),
            median,
            decade: median + DECADE_GAP_SHARE * (high - median),
            high,
        }
    }

    pub fn for_career(career: &CareerProfile) -> Self {
        Self::new(career.low_salary, career.median_salary, career.high_salary)
    }

    /// Salary in the first career year
    pub fn entry_salary(&self) -> f64 {
        self.entry
    }

    /// Salary for `experience` completed years in the career
    pub fn salary(&self, experience: f64) -> f64 {
        if experience <= 0.0 {
            self.entry
        } else if experience <= 2.0 {
            lerp(self.entry, self.early, experience / 2.0)
        } else if experience <= 5.0 {
            lerp(self.early, self.median, (experience - 2.0) / 3.0)
        } else if experience <= 10.0 {
            lerp(self.median, self.decade, (experience - 5.0) / 5.0)
        } else {
            let closed = 1.0 - 0.5_f64.powf((experience - 10.0) / LATE_HALF_LIFE);
            self.decade + (self.high - self.decade) * closed
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> SalaryCurve {
        SalaryCurve::new(40_000.0, 60_000.0, 100_000.0)
    }

    #[test]
    fn test_anchor_points() {
        let c = curve();
        assert_relative_eq!(c.salary(0.0), 36_000.0, epsilon = 1e-6);
        assert_relative_eq!(c.salary(2.0), 48_000.0, epsilon = 1e-6);
        assert_relative_eq!(c.salary(5.0), 60_000.0, epsilon = 1e-6);
        assert_relative_eq!(c.salary(10.0), 84_000.0, epsilon = 1e-6);
        assert_relative_eq!(c.salary(20.0), 92_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_interpolation_within_segments() {
        let c = curve();
        assert_relative_eq!(c.salary(1.0), 42_000.0, epsilon = 1e-6);
        assert_relative_eq!(c.salary(3.5), 54_000.0, epsilon = 1e-6);
        assert_relative_eq!(c.salary(7.5), 72_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_monotonic_and_bounded_by_high() {
        let c = curve();
        let mut prev = c.salary(0.0);
        for e in 1..60 {
            let s = c.salary(e as f64);
            assert!(s >= prev, "salary fell at year {e}");
            assert!(s < 100_000.0);
            prev = s;
        }
    }

    #[test]
    fn test_negative_experience_is_entry() {
        assert_relative_eq!(curve().salary(-3.0), curve().entry_salary());
    }
}
