//! Application layer - pipeline orchestration.

mod analyzer;

pub use analyzer::{PaperAnalysis, PaperAnalyzer};
