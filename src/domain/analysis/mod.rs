//! Analysis Module - Pure domain services for cognitive-level analysis.
//!
//! This module contains stateless functions that operate on question records
//! to score, classify, and summarize a paper.
//!
//! # Components
//!
//! - `LevelScorer` - Keyword occurrence counts per cognitive level
//! - `DominanceResolver` - Dominant level with actual/ideal/deviation
//! - `RecommendationEngine` - Deviation bands and guidance messages
//! - `Aggregator` - Document-level distribution vs. the ideal
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. The vocabulary and ideal
//! distribution are threaded in explicitly; nothing here reads global state.

mod aggregator;
mod dominance;
mod recommendation;
mod result;
mod scorer;

pub use aggregator::{Aggregator, LevelBreakdown, PaperSummary};
pub use dominance::{Dominance, DominanceResolver};
pub use recommendation::{
    AlignmentStatus, Recommendation, RecommendationEngine, ON_TARGET_DEVIATION,
    SUGGESTED_KEYWORD_COUNT, SUGGESTED_KEYWORD_RANGE,
};
pub use result::QuestionAnalysis;
pub use scorer::{LevelScorer, LevelScores};
