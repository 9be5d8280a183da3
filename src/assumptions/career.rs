//! Canonical career profiles and the built-in career data source

use super::classifier::{CategoryClassifier, MEDICAL_DOCTORATE_TAGS};
use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Salary premium for colleges inside a major metro area
const METRO_PREMIUM: f64 = 1.05;

/// Core cities of the largest US metro areas
const METRO_CITIES: &[&str] = &[
    "new york", "brooklyn", "los angeles", "chicago", "houston", "dallas", "philadelphia",
    "washington", "miami", "atlanta", "boston", "san francisco", "oakland", "berkeley",
    "san jose", "palo alto", "seattle", "phoenix", "detroit", "minneapolis", "san diego",
    "denver", "baltimore", "austin", "cambridge", "pittsburgh", "portland", "nashville",
];

/// Whether a city is one of the major metro areas that earn the salary premium
pub fn is_metro_city(city: &str) -> bool {
    let city = city.trim().to_lowercase();
    METRO_CITIES.contains(&city.as_str())
}

/// Resolved, location-adjusted career parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    /// Canonical career tag
    pub tag: String,

    pub title: String,

    pub median_salary: f64,
    pub low_salary: f64,
    pub high_salary: f64,

    /// Projected 10-year job growth as a decimal (0.05 = 5%)
    pub growth_rate: f64,

    /// Years of schooling after the undergraduate degree
    pub grad_school_years: u32,

    pub grad_school_annual_cost: f64,

    /// Stipend paid during a funded doctorate (0 when unfunded)
    #[serde(default)]
    pub grad_stipend: f64,

    /// Supervised training years after graduate school (e.g. medical residency)
    pub residency_years: u32,

    pub training_salary: f64,

    #[serde(default)]
    pub note: Option<String>,

    /// True when the profile is the fallback estimate rather than resolved data
    #[serde(default)]
    pub estimated: bool,
}

impl CareerProfile {
    /// Fallback used when the career data source fails
    pub fn fallback(note: &str) -> Self {
        Self {
            tag: "not_sure".to_string(),
            title: "Estimated Career".to_string(),
            median_salary: 55_000.0,
            low_salary: 40_000.0,
            high_salary: 75_000.0,
            growth_rate: 0.04,
            grad_school_years: 0,
            grad_school_annual_cost: 0.0,
            grad_stipend: 0.0,
            residency_years: 0,
            training_salary: 0.0,
            note: Some(note.to_string()),
            estimated: true,
        }
    }

    /// Whether this career requires a medical doctorate
    pub fn requires_medical_doctorate(&self) -> bool {
        MEDICAL_DOCTORATE_TAGS.contains(&self.tag.as_str())
    }

    /// Total graduate school tuition across all years
    pub fn grad_school_total_cost(&self) -> f64 {
        self.grad_school_annual_cost * self.grad_school_years as f64
    }

    /// Job growth as a percentage number (5.0 = 5%)
    pub fn job_growth_pct(&self) -> f64 {
        (self.growth_rate * 100.0).round()
    }

    /// Scale salaries for location
    pub fn adjusted_for_location(&self, state: Option<&str>, city: Option<&str>) -> Self {
        let mut factor = state.map(location_multiplier).unwrap_or(1.0);
        if city.is_some_and(is_metro_city) {
            factor *= METRO_PREMIUM;
        }

        let mut adjusted = self.clone();
        adjusted.median_salary = (self.median_salary * factor).round();
        adjusted.low_salary = (self.low_salary * factor).round();
        adjusted.high_salary = (self.high_salary * factor).round();
        adjusted
    }
}

/// Source of canonical career parameters
///
/// Implementations may call out to a model, a government dataset, or a static table.
/// Errors are absorbed by [`super::CareerProfileCache`], never by the simulator.
pub trait CareerProfileProvider: Send + Sync {
    fn resolve(
        &self,
        career_text: &str,
        state: Option<&str>,
        city: Option<&str>,
    ) -> Result<CareerProfile, ProviderError>;
}

/// Relative salary level by state (1.0 = national median)
pub fn location_multiplier(state: &str) -> f64 {
    match state.trim().to_ascii_uppercase().as_str() {
        "DC" => 1.20,
        "CA" => 1.18,
        "NY" => 1.15,
        "MA" => 1.14,
        "WA" => 1.10,
        "NJ" => 1.10,
        "CT" => 1.08,
        "MD" => 1.07,
        "CO" => 1.05,
        "IL" => 1.03,
        "VA" => 1.03,
        "OR" => 1.02,
        "MN" => 1.02,
        "TX" => 0.98,
        "PA" => 0.98,
        "AZ" => 0.97,
        "FL" => 0.96,
        "GA" => 0.96,
        "NC" => 0.95,
        "MI" => 0.94,
        "OH" => 0.93,
        "IN" => 0.92,
        "TN" => 0.92,
        "KY" => 0.90,
        "OK" => 0.89,
        "AL" => 0.88,
        "AR" => 0.87,
        "WV" => 0.86,
        "MS" => 0.85,
        _ => 1.0,
    }
}

/// Built-in career table keyed by career tag
#[derive(Debug, Clone)]
pub struct StaticCareerTable {
    entries: HashMap<String, CareerProfile>,
    classifier: CategoryClassifier,
}

impl StaticCareerTable {
    /// Default national career data
    pub fn default_table() -> Self {
        Self::from_profiles(default_profiles())
    }

    /// Build from profiles, replacing the built-in table
    pub fn from_profiles(profiles: Vec<CareerProfile>) -> Self {
        let entries = profiles.into_iter().map(|p| (p.tag.clone(), p)).collect();
        Self {
            entries,
            classifier: CategoryClassifier::careers().clone(),
        }
    }

    /// Use a different classifier for career text
    pub fn with_classifier(mut self, classifier: CategoryClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// National (unadjusted) profile for a tag
    pub fn get(&self, tag: &str) -> Option<&CareerProfile> {
        self.entries.get(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StaticCareerTable {
    fn default() -> Self {
        Self::default_table()
    }
}

impl CareerProfileProvider for StaticCareerTable {
    fn resolve(
        &self,
        career_text: &str,
        state: Option<&str>,
        city: Option<&str>,
    ) -> Result<CareerProfile, ProviderError> {
        let tag = self.classifier.classify(career_text);
        let base = self
            .entries
            .get(tag)
            .ok_or_else(|| ProviderError::UnknownCareer(career_text.to_string()))?;
        Ok(base.adjusted_for_location(state, city))
    }
}

#[allow(clippy::too_many_arguments)]
fn profile(
    tag: &str,
    title: &str,
    median: f64,
    low: f64,
    high: f64,
    growth: f64,
    grad_years: u32,
    grad_cost: f64,
    stipend: f64,
    residency_years: u32,
    training_salary: f64,
    note: Option<&str>,
) -> CareerProfile {
    CareerProfile {
        tag: tag.to_string(),
        title: title.to_string(),
        median_salary: median,
        low_salary: low,
        high_salary: high,
        growth_rate: growth,
        grad_school_years: grad_years,
        grad_school_annual_cost: grad_cost,
        grad_stipend: stipend,
        residency_years,
        training_salary,
        note: note.map(str::to_string),
        estimated: false,
    }
}

/// National salary bands (BLS-style medians and 10th/90th percentiles)
fn default_profiles() -> Vec<CareerProfile> {
    vec![
        profile("neurosurgery", "Neurosurgeon", 450_000.0, 300_000.0, 750_000.0, 0.03, 4, 50_000.0, 0.0, 7, 65_000.0,
            Some("Neurosurgery residency is seven years and among the most competitive matches in medicine.")),
        profile("surgery", "Surgeon", 350_000.0, 220_000.0, 500_000.0, 0.03, 4, 50_000.0, 0.0, 5, 62_000.0,
            Some("General surgery residency is five years after medical school.")),
        profile("medicine", "Physician", 240_000.0, 170_000.0, 330_000.0, 0.04, 4, 50_000.0, 0.0, 3, 60_000.0,
            Some("Most primary care residencies last three years.")),
        profile("physician_assistant", "Physician Assistant", 130_000.0, 98_000.0, 170_000.0, 0.27, 2, 45_000.0, 0.0, 0, 0.0, None),
        profile("dental_hygiene", "Dental Hygienist", 87_000.0, 65_000.0, 110_000.0, 0.07, 0, 0.0, 0.0, 0, 0.0, None),
        profile("dentistry", "Dentist", 170_000.0, 110_000.0, 240_000.0, 0.04, 4, 60_000.0, 0.0, 0, 0.0, None),
        profile("veterinary", "Veterinarian", 110_000.0, 75_000.0, 160_000.0, 0.19, 4, 45_000.0, 0.0, 0, 0.0, None),
        profile("pharmacy", "Pharmacist", 132_000.0, 105_000.0, 160_000.0, 0.03, 4, 40_000.0, 0.0, 0, 0.0, None),
        profile("physical_therapy", "Physical Therapist", 97_000.0, 75_000.0, 125_000.0, 0.15, 3, 35_000.0, 0.0, 0, 0.0, None),
        profile("nursing", "Registered Nurse", 81_000.0, 62_000.0, 110_000.0, 0.06, 0, 0.0, 0.0, 0, 0.0, None),
        profile("clinical_psychology", "Clinical Psychologist", 90_000.0, 60_000.0, 140_000.0, 0.06, 5, 0.0, 30_000.0, 1, 35_000.0,
            Some("Clinical psychology doctorates are usually funded; a one-year internship follows coursework.")),
        profile("law", "Lawyer", 135_000.0, 70_000.0, 230_000.0, 0.08, 3, 55_000.0, 0.0, 0, 0.0,
            Some("Law salaries are bimodal; large-firm and public-interest pay differ widely.")),
        profile("software_engineering", "Software Engineer", 127_000.0, 80_000.0, 190_000.0, 0.25, 0, 0.0, 0.0, 0, 0.0, None),
        profile("data_science", "Data Scientist", 108_000.0, 70_000.0, 170_000.0, 0.35, 0, 0.0, 0.0, 0, 0.0, None),
        profile("engineering", "Engineer", 95_000.0, 68_000.0, 140_000.0, 0.05, 0, 0.0, 0.0, 0, 0.0, None),
        profile("research_science", "Research Scientist", 100_000.0, 65_000.0, 150_000.0, 0.07, 5, 0.0, 32_000.0, 0, 0.0,
            Some("Science PhD programs typically waive tuition and pay a stipend.")),
        profile("finance", "Financial Analyst", 96_000.0, 62_000.0, 165_000.0, 0.09, 0, 0.0, 0.0, 0, 0.0, None),
        profile("accounting", "Accountant", 79_000.0, 52_000.0, 125_000.0, 0.04, 0, 0.0, 0.0, 0, 0.0, None),
        profile("teaching", "Teacher", 62_000.0, 45_000.0, 90_000.0, 0.01, 0, 0.0, 0.0, 0, 0.0, None),
        profile("technician", "Technician", 45_000.0, 32_000.0, 62_000.0, 0.05, 0, 0.0, 0.0, 0, 0.0, None),
        profile("trades", "Skilled Trades Worker", 58_000.0, 38_000.0, 85_000.0, 0.06, 0, 0.0, 0.0, 0, 0.0, None),
        profile("social_work", "Social Worker", 56_000.0, 40_000.0, 80_000.0, 0.07, 2, 25_000.0, 0.0, 0, 0.0, None),
        profile("business_management", "Business Manager", 105_000.0, 60_000.0, 170_000.0, 0.06, 0, 0.0, 0.0, 0, 0.0, None),
        profile("marketing", "Marketing Specialist", 68_000.0, 45_000.0, 120_000.0, 0.08, 0, 0.0, 0.0, 0, 0.0, None),
        profile("arts_design", "Artist / Designer", 52_000.0, 30_000.0, 90_000.0, 0.03, 0, 0.0, 0.0, 0, 0.0,
            Some("Creative careers often combine freelance and salaried work.")),
        profile("writing_journalism", "Writer / Journalist", 58_000.0, 35_000.0, 100_000.0, -0.03, 0, 0.0, 0.0, 0, 0.0, None),
        profile("not_sure", "General Graduate", 55_000.0, 40_000.0, 75_000.0, 0.04, 0, 0.0, 0.0, 0, 0.0,
            Some("No specific career selected; projections use general graduate earnings.")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neurosurgeon_profile() {
        let table = StaticCareerTable::default_table();
        let profile = table.resolve("neurosurgeon", None, None).unwrap();
        assert_eq!(profile.tag, "neurosurgery");
        assert_eq!(profile.grad_school_years, 4);
        assert_eq!(profile.grad_school_total_cost(), 200_000.0);
        assert!(profile.residency_years > 0);
        assert!(profile.requires_medical_doctorate());
    }

    #[test]
    fn test_unmatched_text_uses_general_profile() {
        let table = StaticCareerTable::default_table();
        let profile = table.resolve("astronaut", None, None).unwrap();
        assert_eq!(profile.tag, "not_sure");
        assert_eq!(profile.median_salary, 55_000.0);
        assert!(!profile.estimated);
    }

    #[test]
    fn test_location_adjustment() {
        let table = StaticCareerTable::default_table();
        let national = table.resolve("software engineer", None, None).unwrap();
        let california = table.resolve("software engineer", Some("ca"), None).unwrap();
        let san_jose = table.resolve("software engineer", Some("CA"), Some("San Jose")).unwrap();

        assert_eq!(national.median_salary, 127_000.0);
        assert_eq!(california.median_salary, (127_000.0_f64 * 1.18).round());
        assert_eq!(san_jose.median_salary, (127_000.0_f64 * (1.18 * 1.05)).round());
        assert_eq!(california.training_salary, national.training_salary);
    }

    #[test]
    fn test_small_towns_get_no_metro_premium() {
        let table = StaticCareerTable::default_table();
        let state_only = table.resolve("software engineer", Some("IA"), None).unwrap();
        let ames = table.resolve("software engineer", Some("IA"), Some("Ames")).unwrap();
        assert_eq!(ames.median_salary, state_only.median_salary);

        assert!(is_metro_city(" Boston "));
        assert!(!is_metro_city("Gambier"));
        assert!(!is_metro_city(""));
    }

    #[test]
    fn test_missing_tag_is_unknown_career() {
        let table = StaticCareerTable::from_profiles(vec![]);
        assert_eq!(
            table.resolve("teacher", None, None),
            Err(ProviderError::UnknownCareer("teacher".to_string()))
        );
    }

    #[test]
    fn test_job_growth_pct() {
        let mut profile = CareerProfile::fallback("estimated");
        assert_eq!(profile.job_growth_pct(), 4.0);
        profile.growth_rate = 0.25;
        assert_eq!(profile.job_growth_pct(), 25.0);
    }

    #[test]
    fn test_every_career_tag_has_a_profile() {
        let table = StaticCareerTable::default_table();
        for tag in CategoryClassifier::careers().tags() {
            assert!(table.get(tag).is_some(), "missing profile for {tag}");
        }
    }

    #[test]
    fn test_salary_bands_are_ordered() {
        for p in default_profiles() {
            assert!(p.low_salary * 0.9 <= p.median_salary, "{}", p.tag);
            assert!(p.median_salary <= p.high_salary, "{}", p.tag);
        }
    }
}
