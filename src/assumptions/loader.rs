//! CSV-based career table loader
//!
//! Replaces the built-in national career table with one read from disk.
//! Columns: tag,title,median,low,high,growth_rate,grad_school_years,
//! grad_school_annual_cost,grad_stipend,residency_years,training_salary,note

use super::career::{CareerProfile, StaticCareerTable};
use crate::error::LoadError;
use std::fs::File;
use std::path::Path;

#[derive(Debug, serde::Deserialize)]
struct CareerCsvRow {
    tag: String,
    title: String,
    median: f64,
    low: f64,
    high: f64,
    growth_rate: f64,
    #[serde(default)]
    grad_school_years: Option<u32>,
    #[serde(default)]
    grad_school_annual_cost: Option<f64>,
    #[serde(default)]
    grad_stipend: Option<f64>,
    #[serde(default)]
    residency_years: Option<u32>,
    #[serde(default)]
    training_salary: Option<f64>,
    #[serde(default)]
    note: Option<String>,
}

impl CareerCsvRow {
    fn into_profile(self, row: usize) -> Result<CareerProfile, LoadError> {
        if !(self.low <= self.median && self.median <= self.high) {
            return Err(LoadError::InvalidRow {
                row,
                message: format!(
                    "salary band for {} must satisfy low <= median <= high ({} / {} / {})",
                    self.tag, self.low, self.median, self.high
                ),
            });
        }

        Ok(CareerProfile {
            tag: self.tag.trim().to_lowercase(),
            title: self.title,
            median_salary: self.median,
            low_salary: self.low,
            high_salary: self.high,
            growth_rate: self.growth_rate,
            grad_school_years: self.grad_school_years.unwrap_or(0),
            grad_school_annual_cost: self.grad_school_annual_cost.unwrap_or(0.0),
            grad_stipend: self.grad_stipend.unwrap_or(0.0),
            residency_years: self.residency_years.unwrap_or(0),
            training_salary: self.training_salary.unwrap_or(0.0),
            note: self.note.filter(|n| !n.trim().is_empty()),
            estimated: false,
        })
    }
}

/// Load career profiles from a CSV reader
pub fn load_career_profiles_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CareerProfile>, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CareerCsvRow = result?;
        profiles.push(row.into_profile(idx + 2)?);
    }

    Ok(profiles)
}

/// Load a career table from a CSV file
pub fn load_career_table(path: &Path) -> Result<StaticCareerTable, LoadError> {
    let file = File::open(path)?;
    let profiles = load_career_profiles_from_reader(file)?;
    Ok(StaticCareerTable::from_profiles(profiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::CareerProfileProvider;

    const SAMPLE: &str = "\
tag,title,median,low,high,growth_rate,grad_school_years,grad_school_annual_cost,grad_stipend,residency_years,training_salary,note
nursing,Registered Nurse,80000,60000,105000,0.06,0,0,0,0,0,
medicine,Physician,250000,180000,340000,0.04,4,52000,0,3,61000,Residency required
not_sure,General Graduate,55000,40000,75000,0.04,,,,,,
";

    #[test]
    fn test_load_career_profiles() {
        let profiles = load_career_profiles_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[1].residency_years, 3);
        assert_eq!(profiles[1].note.as_deref(), Some("Residency required"));
        assert_eq!(profiles[0].note, None);
        assert_eq!(profiles[2].grad_school_years, 0);
    }

    #[test]
    fn test_loaded_table_resolves_through_classifier() {
        let profiles = load_career_profiles_from_reader(SAMPLE.as_bytes()).unwrap();
        let table = StaticCareerTable::from_profiles(profiles);
        let physician = table.resolve("family doctor", None, None).unwrap();
        assert_eq!(physician.median_salary, 250_000.0);
        assert!(table.resolve("software engineer", None, None).is_err());
    }

    #[test]
    fn test_inverted_band_rejected() {
        let csv = "tag,title,median,low,high,growth_rate\nteaching,Teacher,40000,60000,90000,0.01\n";
        let err = load_career_profiles_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow { row: 2, .. }));
    }
}
