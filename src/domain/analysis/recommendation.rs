//! Recommendation engine - turns deviation into guidance.

use serde::Serialize;

use super::Dominance;
use crate::domain::taxonomy::Vocabulary;

/// Deviation magnitude (percentage points) still considered on-target.
/// The single authoritative band; inclusive at the boundary.
pub const ON_TARGET_DEVIATION: f64 = 8.0;

/// Default number of keywords suggested for an under-represented level.
pub const SUGGESTED_KEYWORD_COUNT: usize = 3;

/// Allowed range for the configurable suggestion count.
pub const SUGGESTED_KEYWORD_RANGE: (usize, usize) = (3, 5);

/// How a question's dominant level sits relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentStatus {
    OnTarget,
    OverRepresented,
    UnderRepresented,
}

impl AlignmentStatus {
    /// Classifies a signed deviation against the on-target band.
    pub fn classify(deviation: f64) -> Self {
        if deviation.abs() <= ON_TARGET_DEVIATION {
            AlignmentStatus::OnTarget
        } else if deviation > ON_TARGET_DEVIATION {
            AlignmentStatus::OverRepresented
        } else {
            AlignmentStatus::UnderRepresented
        }
    }
}

/// Guidance for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub status: AlignmentStatus,
    pub message: String,
    /// Drawn from the dominant level's own vocabulary, never cross-level.
    /// Empty unless the level is under-represented.
    pub suggested_keywords: Vec<String>,
}

/// Engine producing recommendations. Pure and stateless.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Produces the recommendation for a resolved dominance, suggesting up
    /// to `suggestion_count` keywords (clamped to 3-5) when the level is
    /// under-represented.
    pub fn recommend(
        dominance: &Dominance,
        vocabulary: &Vocabulary,
        suggestion_count: usize,
    ) -> Recommendation {
        let status = AlignmentStatus::classify(dominance.deviation);
        let level = dominance.level;

        match status {
            AlignmentStatus::OnTarget => Recommendation {
                status,
                message: "No suggestion needed; you are already on the perfect path.".to_string(),
                suggested_keywords: Vec::new(),
            },
            AlignmentStatus::OverRepresented => Recommendation {
                status,
                message: format!("Consider reducing focus on '{}'.", level),
                suggested_keywords: Vec::new(),
            },
            AlignmentStatus::UnderRepresented => {
                let count = suggestion_count
                    .clamp(SUGGESTED_KEYWORD_RANGE.0, SUGGESTED_KEYWORD_RANGE.1);
                let suggested: Vec<String> = vocabulary
                    .keywords(level)
                    .iter()
                    .take(count)
                    .cloned()
                    .collect();

                Recommendation {
                    status,
                    message: format!("Consider increasing focus on '{}'.", level),
                    suggested_keywords: suggested,
                }
            }
        }
    }
}
