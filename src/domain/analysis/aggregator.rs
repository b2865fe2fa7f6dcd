//! Aggregator - document-level distribution of dominant levels.

use serde::Serialize;

use super::QuestionAnalysis;
use crate::domain::foundation::{round2, CognitiveLevel, Percentage, LEVEL_COUNT};
use crate::domain::taxonomy::IdealDistribution;

/// One row of the document-level comparison: how often a level was dominant
/// across the paper's questions, next to its target share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelBreakdown {
    pub level: CognitiveLevel,
    pub question_count: usize,
    /// Percentage of questions whose dominant level is this one.
    pub actual: Percentage,
    pub ideal: Percentage,
}

/// Document-level summary across all questions.
///
/// `breakdown` always holds all six levels in canonical order; levels that
/// dominated no question keep zero entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaperSummary {
    pub total_questions: usize,
    pub breakdown: Vec<LevelBreakdown>,
}

/// Aggregator over per-question results. Pure and stateless.
pub struct Aggregator;

impl Aggregator {
    /// Combines per-question results into the document-level summary.
    ///
    /// # Edge Cases
    /// - No questions: All-zero percentages, not a failure.
    pub fn summarize(results: &[QuestionAnalysis], ideal: &IdealDistribution) -> PaperSummary {
        let mut counts = [0usize; LEVEL_COUNT];
        for result in results {
            counts[result.dominance.level.order_index()] += 1;
        }

        let total = results.len();
        let breakdown = CognitiveLevel::all()
            .iter()
            .map(|level| {
                let question_count = counts[level.order_index()];
                let actual = if total == 0 {
                    Percentage::ZERO
                } else {
                    Percentage::new(round2(question_count as f64 / total as f64 * 100.0))
                };
                LevelBreakdown {
                    level: *level,
                    question_count,
                    actual,
                    ideal: ideal.target(*level),
                }
            })
            .collect();

        PaperSummary {
            total_questions: total,
            breakdown,
        }
    }
}
