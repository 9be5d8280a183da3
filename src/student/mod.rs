//! Student profile and college record structures, plus college CSV loading

mod data;
pub mod loader;

pub use data::{CollegeRecord, IncomeBracket, Ownership, StudentProfile, DEFAULT_AGE, MAX_AGE, MIN_AGE};
pub use loader::{load_colleges, load_colleges_from_reader};
