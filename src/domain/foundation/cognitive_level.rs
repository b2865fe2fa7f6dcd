//! CognitiveLevel enum representing the six Bloom's Taxonomy levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six Bloom's Taxonomy levels, from lowest to highest cognitive demand.
///
/// The declaration order is the canonical order used for deterministic
/// tie-breaking throughout the analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

/// Number of cognitive levels.
pub const LEVEL_COUNT: usize = 6;

impl CognitiveLevel {
    /// Returns all levels in canonical order.
    pub fn all() -> &'static [CognitiveLevel; LEVEL_COUNT] {
        &[
            CognitiveLevel::Remember,
            CognitiveLevel::Understand,
            CognitiveLevel::Apply,
            CognitiveLevel::Analyze,
            CognitiveLevel::Evaluate,
            CognitiveLevel::Create,
        ]
    }

    /// Returns the 0-based index of this level in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            CognitiveLevel::Remember => 0,
            CognitiveLevel::Understand => 1,
            CognitiveLevel::Apply => 2,
            CognitiveLevel::Analyze => 3,
            CognitiveLevel::Evaluate => 4,
            CognitiveLevel::Create => 5,
        }
    }

    /// Returns true if this level comes before another in canonical order.
    pub fn is_before(&self, other: &CognitiveLevel) -> bool {
        self.order_index() < other.order_index()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CognitiveLevel::Remember => "Remember",
            CognitiveLevel::Understand => "Understand",
            CognitiveLevel::Apply => "Apply",
            CognitiveLevel::Analyze => "Analyze",
            CognitiveLevel::Evaluate => "Evaluate",
            CognitiveLevel::Create => "Create",
        }
    }
}

impl fmt::Display for CognitiveLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
