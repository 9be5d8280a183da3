//! Life Path CLI
//!
//! Command-line interface for comparing colleges by projected debt, earnings, and net worth

use anyhow::{bail, Context, Result};
use clap::Parser;
use lifepath::{
    assumptions::{loader::load_career_table, CareerProfileCache, SimulationAssumptions, StaticCareerTable},
    projection::{format_currency, LifePathResult},
    scenario::MAX_COLLEGES,
    student::{load_colleges, IncomeBracket, StudentProfile},
    ComparisonRunner,
};
use log::warn;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "lifepath")]
#[command(about = "Compare colleges by simulating a student's financial life path", long_about = None)]
#[command(version)]
struct Cli {
    /// College records CSV
    #[arg(long)]
    colleges: PathBuf,

    /// Restrict the comparison to these college ids (up to four)
    #[arg(long = "college-id", value_delimiter = ',')]
    college_ids: Option<Vec<String>>,

    /// Family income bracket: 0-30000, 30001-48000, 48001-75000, 75001-110000, 110001-plus
    #[arg(long, default_value = "48001-75000")]
    income_bracket: String,

    /// Two-letter home state, for in-state tuition
    #[arg(long)]
    home_state: Option<String>,

    /// Intended major (free text)
    #[arg(long, default_value = "")]
    major: String,

    /// Career goal (free text)
    #[arg(long, default_value = "")]
    career: String,

    /// Total scholarship over four years
    #[arg(long)]
    scholarship: Option<f64>,

    /// Current age (default 18)
    #[arg(long)]
    age: Option<f64>,

    /// Career table CSV replacing the built-in table
    #[arg(long)]
    careers: Option<PathBuf>,

    /// Assumptions JSON overriding the modeling constants
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print full results as JSON
    #[arg(long)]
    json: bool,

    /// Write every timeline year to this CSV
    #[arg(long)]
    timeline_csv: Option<PathBuf>,

    /// Timeline years to print per college
    #[arg(long, default_value = "6")]
    years: usize,
}

/// One timeline year in the CSV export
#[derive(Debug, Serialize)]
struct TimelineCsvRow<'a> {
    college_id: &'a str,
    college_name: &'a str,
    year: u32,
    age: u32,
    phase: &'static str,
    label: &'a str,
    earnings: Option<f64>,
    debt_balance: f64,
    accumulated_savings: f64,
    net_worth: f64,
    milestone: Option<&'a str>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bracket: IncomeBracket = cli.income_bracket.parse()?;
    let mut profile = StudentProfile::new(bracket)
        .with_major(&cli.major)
        .with_career(&cli.career);
    if let Some(state) = &cli.home_state {
        profile = profile.with_home_state(state);
    }
    if let Some(amount) = cli.scholarship {
        profile = profile.with_scholarship(amount);
    }
    if let Some(age) = cli.age {
        profile = profile.with_age(age);
    }

    let assumptions = match &cli.assumptions {
        Some(path) => SimulationAssumptions::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => SimulationAssumptions::default(),
    };

    let table = match &cli.careers {
        Some(path) => load_career_table(path)
            .with_context(|| format!("loading career table from {}", path.display()))?,
        None => StaticCareerTable::default(),
    };
    let runner = ComparisonRunner::with_cache(assumptions, Arc::new(CareerProfileCache::new(Box::new(table))));

    let mut colleges = load_colleges(&cli.colleges)
        .with_context(|| format!("loading colleges from {}", cli.colleges.display()))?;
    if let Some(ids) = &cli.college_ids {
        colleges.retain(|c| ids.contains(&c.id));
    }
    if colleges.is_empty() {
        bail!("no colleges selected from {}", cli.colleges.display());
    }
    if colleges.len() > MAX_COLLEGES {
        warn!(
            "{} colleges loaded; comparing the first {}",
            colleges.len(),
            MAX_COLLEGES
        );
        colleges.truncate(MAX_COLLEGES);
    }

    let results = runner.compare(&colleges, &profile)?;

    if let Some(path) = &cli.timeline_csv {
        write_timeline_csv(path, &results)
            .with_context(|| format!("writing timeline to {}", path.display()))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results, &profile, cli.years);
        if let Some(path) = &cli.timeline_csv {
            println!("\nFull timelines written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_results(results: &[LifePathResult], profile: &StudentProfile, years: usize) {
    println!("Life Path Comparison v{}", env!("CARGO_PKG_VERSION"));
    println!("==========================\n");
    println!("Income bracket: {}", profile.income_bracket);
    if let Some(first) = results.first() {
        println!("Major: {} | Career: {}", first.major_label, first.career.title);
    }
    println!();

    println!(
        "{:<32} {:>12} {:>12} {:>10} {:>10} {:>14}",
        "College", "Total Cost", "Peak Debt", "Break-even", "Debt-free", "Net Worth"
    );
    println!("{}", "-".repeat(95));
    for result in results {
        let s = &result.summary;
        println!(
            "{:<32} {:>12} {:>12} {:>10} {:>10} {:>14}",
            truncate(&result.college_name, 32),
            format_currency(s.total_cost),
            format_currency(s.peak_debt),
            age_or_dash(s.break_even_age),
            age_or_dash(s.debt_free_age),
            format_currency(s.net_worth_at_horizon),
        );
    }

    for result in results {
        let s = &result.summary;
        println!("\n{} ({})", result.college_name, if result.in_state { "in-state" } else { "out-of-state" });
        println!(
            "  Career: {} (median {}, growth {}%)",
            result.career.title,
            format_currency(result.career.median_salary),
            result.career.job_growth_pct
        );
        println!(
            "  Loan quote: {}/month over {} years at {:.1}%",
            format_currency(s.loan_quote.monthly_payment),
            s.loan_quote.term_years,
            s.loan_quote.interest_rate * 100.0
        );
        if let Some(warning) = &s.warning {
            println!("  Warning: {}", warning.message);
        }
        for gap in &result.data_gaps {
            println!("  Note: {}", gap.describe());
        }

        println!(
            "  {:>4} {:>4} {:<26} {:>10} {:>12} {:>12}",
            "Year", "Age", "Stage", "Earnings", "Debt", "Net Worth"
        );
        for snapshot in result.timeline.iter().take(years) {
            println!(
                "  {:>4} {:>4} {:<26} {:>10} {:>12} {:>12}",
                snapshot.year,
                snapshot.age,
                snapshot.label,
                snapshot.earnings.map(format_currency).unwrap_or_else(|| "-".to_string()),
                format_currency(snapshot.debt_balance),
                format_currency(snapshot.net_worth),
            );
        }
        if result.timeline.len() > years {
            println!("  ... ({} more years)", result.timeline.len() - years);
        }
    }
}

fn write_timeline_csv(path: &Path, results: &[LifePathResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for result in results {
        for s in &result.timeline {
            writer.serialize(TimelineCsvRow {
                college_id: &result.college_id,
                college_name: &result.college_name,
                year: s.year,
                age: s.age,
                phase: s.phase.as_str(),
                label: &s.label,
                earnings: s.earnings,
                debt_balance: s.debt_balance,
                accumulated_savings: s.accumulated_savings,
                net_worth: s.net_worth,
                milestone: s.milestone.as_deref(),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn age_or_dash(age: Option<u32>) -> String {
    age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('~');
        cut
    }
}
