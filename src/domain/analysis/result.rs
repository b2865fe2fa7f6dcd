//! Per-question analysis result.

use serde::Serialize;

use super::{Dominance, LevelScores, Recommendation};
use crate::domain::paper::Question;

/// Everything the pipeline derives for one question. A value; lives only
/// for the duration of the analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionAnalysis {
    pub question: Question,
    pub scores: LevelScores,
    pub dominance: Dominance,
    pub recommendation: Recommendation,
}
