//! Run one comparison per income bracket
//!
//! Loads colleges from CSV, projects each bracket in parallel, and writes one
//! row per (bracket, college) for side-by-side review of aid sensitivity.

use anyhow::{Context, Result};
use clap::Parser;
use lifepath::{
    scenario::MAX_COLLEGES,
    student::{load_colleges, IncomeBracket, StudentProfile},
    ComparisonRunner, LifePathResult,
};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "bracket_sweep")]
#[command(about = "Project every income bracket for a set of colleges", long_about = None)]
struct Args {
    /// College records CSV (first four rows are used)
    #[arg(long)]
    colleges: PathBuf,

    #[arg(long)]
    home_state: Option<String>,

    #[arg(long, default_value = "")]
    major: String,

    #[arg(long, default_value = "")]
    career: String,

    #[arg(long, default_value = "bracket_sweep_output.csv")]
    output: PathBuf,
}

/// One (bracket, college) output row
#[derive(Debug, Serialize)]
struct SweepRow {
    income_bracket: &'static str,
    college_id: String,
    college_name: String,
    in_state: bool,
    aid_adjusted_undergrad: Option<f64>,
    total_cost: f64,
    peak_debt: f64,
    break_even_age: Option<u32>,
    debt_free_age: Option<u32>,
    net_worth_at_horizon: f64,
    monthly_payment: f64,
    warning: Option<String>,
}

impl SweepRow {
    fn new(bracket: IncomeBracket, result: &LifePathResult) -> Self {
        let s = &result.summary;
        Self {
            income_bracket: bracket.as_str(),
            college_id: result.college_id.clone(),
            college_name: result.college_name.clone(),
            in_state: result.in_state,
            aid_adjusted_undergrad: s.cost_breakdown.aid_adjusted_undergrad,
            total_cost: s.total_cost,
            peak_debt: s.peak_debt,
            break_even_age: s.break_even_age,
            debt_free_age: s.debt_free_age,
            net_worth_at_horizon: s.net_worth_at_horizon,
            monthly_payment: s.loan_quote.monthly_payment,
            warning: s.warning.as_ref().map(|w| w.message.clone()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading colleges from {}...", args.colleges.display());
    let mut colleges = load_colleges(&args.colleges)
        .with_context(|| format!("loading colleges from {}", args.colleges.display()))?;
    colleges.truncate(MAX_COLLEGES);
    println!("Loaded {} colleges in {:?}", colleges.len(), start.elapsed());

    let runner = ComparisonRunner::new();

    println!("Running projections...");
    let proj_start = Instant::now();

    // Brackets in parallel; the career cache is shared across all of them
    let sweeps: Vec<(IncomeBracket, Vec<LifePathResult>)> = IncomeBracket::ALL
        .par_iter()
        .map(|&bracket| {
            let mut profile = StudentProfile::new(bracket)
                .with_major(&args.major)
                .with_career(&args.career);
            if let Some(state) = &args.home_state {
                profile = profile.with_home_state(state);
            }
            runner.compare(&colleges, &profile).map(|results| (bracket, results))
        })
        .collect::<Result<_, _>>()?;

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for (bracket, results) in &sweeps {
        for result in results {
            writer.serialize(SweepRow::new(*bracket, result))?;
        }
    }
    writer.flush()?;
    println!("Output written to {}", args.output.display());

    println!("\nAid-adjusted undergrad cost by bracket:");
    for (bracket, results) in &sweeps {
        let costs: Vec<String> = results
            .iter()
            .map(|r| match r.summary.cost_breakdown.aid_adjusted_undergrad {
                Some(cost) => format!("{cost:>10.0}"),
                None => format!("{:>10}", "n/a"),
            })
            .collect();
        println!("  {:<14} {}", bracket.as_str(), costs.join("  "));
    }

    println!(
        "\nCareer cache: {} entries, hit rate {:.0}%",
        runner.career_cache().len(),
        runner.career_cache().hit_rate() * 100.0
    );
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
