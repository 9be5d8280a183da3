//! Comparison runner for multi-college requests
//!
//! Holds the modeling assumptions and the shared career cache once, then runs
//! each college's pipeline (cost model, phase scheduling, timeline, summary)
//! independently and in parallel.

use crate::assumptions::{major_label, CareerProfile, CareerProfileCache, CategoryClassifier, SimulationAssumptions, StaticCareerTable};
use crate::error::InvalidInput;
use crate::projection::{CareerSummary, CostModel, LifePathResult, PhaseScheduler, SummaryAggregator, TimelineSimulator};
use crate::student::{CollegeRecord, StudentProfile};
use log::{debug, info};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Most colleges accepted in one comparison
pub const MAX_COLLEGES: usize = 4;

/// Pre-loaded runner for college comparisons
///
/// # Example
/// ```ignore
/// let runner = ComparisonRunner::new();
/// let results = runner.compare(&colleges, &profile)?;
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonRunner {
    assumptions: SimulationAssumptions,

    /// Shared across runners and threads
    careers: Arc<CareerProfileCache>,

    majors: CategoryClassifier,
}

impl ComparisonRunner {
    /// Runner with default assumptions and the built-in career table
    pub fn new() -> Self {
        Self::with_cache(
            SimulationAssumptions::default(),
            Arc::new(CareerProfileCache::new(Box::new(StaticCareerTable::default()))),
        )
    }

    /// Runner over an existing (possibly shared) career cache
    pub fn with_cache(assumptions: SimulationAssumptions, careers: Arc<CareerProfileCache>) -> Self {
        Self {
            assumptions,
            careers,
            majors: CategoryClassifier::majors().clone(),
        }
    }

    /// Replace the major classifier
    pub fn with_major_classifier(mut self, majors: CategoryClassifier) -> Self {
        self.majors = majors;
        self
    }

    pub fn assumptions(&self) -> &SimulationAssumptions {
        &self.assumptions
    }

    pub fn career_cache(&self) -> &Arc<CareerProfileCache> {
        &self.careers
    }

    /// Validate a request; returns the starting age
    pub fn validate(&self, colleges: &[CollegeRecord], profile: &StudentProfile) -> Result<u32, InvalidInput> {
        if colleges.is_empty() {
            return Err(InvalidInput::EmptyCollegeList);
        }
        if colleges.len() > MAX_COLLEGES {
            return Err(InvalidInput::TooManyColleges {
                count: colleges.len(),
                max: MAX_COLLEGES,
            });
        }
        Ok(profile.start_age()? as u32)
    }

    /// Project every college for one student. Results are in input order.
    pub fn compare(
        &self,
        colleges: &[CollegeRecord],
        profile: &StudentProfile,
    ) -> Result<Vec<LifePathResult>, InvalidInput> {
        let start_age = self.validate(colleges, profile)?;
        let start = Instant::now();
        info!(
            "Comparing {} college(s) for bracket {}, career {:?}",
            colleges.len(),
            profile.income_bracket,
            profile.career_goal
        );

        let results: Vec<LifePathResult> = colleges
            .par_iter()
            .map(|college| {
                let career = self.careers.resolve(
                    &profile.career_goal,
                    college.state.as_deref(),
                    college.city.as_deref(),
                );
                self.project_at(college, profile, &career, start_age)
            })
            .collect();

        info!(
            "Compared {} college(s) in {:.1}ms (career cache hit rate {:.0}%)",
            results.len(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.careers.hit_rate() * 100.0
        );
        Ok(results)
    }

    /// Project one college with an already-resolved career
    pub fn project(
        &self,
        college: &CollegeRecord,
        profile: &StudentProfile,
        career: &CareerProfile,
    ) -> Result<LifePathResult, InvalidInput> {
        let start_age = profile.start_age()? as u32;
        Ok(self.project_at(college, profile, career, start_age))
    }

    fn project_at(
        &self,
        college: &CollegeRecord,
        profile: &StudentProfile,
        career: &CareerProfile,
        start_age: u32,
    ) -> LifePathResult {
        let major_tag = self.majors.classify(&profile.intended_major).to_string();
        let major_label = major_label(&major_tag);

        let costs = CostModel::new(&self.assumptions).evaluate(college, profile, career);
        let schedule = PhaseScheduler::schedule(start_age, costs.sticker_per_year, career);
        let timeline = TimelineSimulator::new(self.assumptions.clone()).simulate(
            &schedule,
            career,
            &college.name,
            &major_label,
        );
        let summary =
            SummaryAggregator::new(&self.assumptions).summarize(&costs, &schedule, &timeline, career, &major_tag);

        debug!(
            "{}: peak debt {}, break-even {:?}",
            college.name, summary.peak_debt, summary.break_even_age
        );

        LifePathResult {
            college_id: college.id.clone(),
            college_name: college.name.clone(),
            in_state: costs.in_state,
            major_tag,
            major_label,
            career: CareerSummary::from(career),
            timeline: timeline.snapshots,
            summary,
            data_gaps: costs.data_gaps,
        }
    }
}

impl Default for ComparisonRunner {
    fn default() -> Self {
        Self::new()
    }
}
