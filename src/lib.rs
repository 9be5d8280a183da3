//! Life Path - Financial projection engine for comparing colleges
//!
//! This library provides:
//! - College cost modeling (sticker price, aid-adjusted net price, debt estimates)
//! - Free-text major and career classification against ordered rule tables
//! - Career profile resolution with a shared, constructor-injected cache
//! - Year-by-year simulation of debt, earnings, savings, and net worth
//! - Headline metrics, break-even detection, and risk warnings
//! - Parallel multi-college comparisons

pub mod student;
pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod error;

// Re-export commonly used types
pub use student::{CollegeRecord, IncomeBracket, StudentProfile};
pub use assumptions::{CareerProfile, CareerProfileCache, CareerProfileProvider, SimulationAssumptions, StaticCareerTable};
pub use projection::{LifePathResult, LifePathSummary, YearSnapshot};
pub use scenario::ComparisonRunner;
pub use error::{DataGap, InvalidInput, LoadError, ProviderError};
