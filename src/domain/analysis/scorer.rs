//! Level scorer - keyword occurrence counts per cognitive level.

use serde::Serialize;

use crate::domain::foundation::{CognitiveLevel, LEVEL_COUNT};
use crate::domain::taxonomy::Vocabulary;

/// Keyword-match counts for one text span, one entry per level.
///
/// Always fully populated; zero entries are retained, not omitted. A keyword
/// present in several levels' vocabularies counts toward each independently,
/// so the total is a measure of emphasis overlap, not a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelScores {
    counts: [u32; LEVEL_COUNT],
}

impl LevelScores {
    /// All-zero score vector.
    pub fn zero() -> Self {
        Self {
            counts: [0; LEVEL_COUNT],
        }
    }

    /// Returns the count for a level.
    pub fn count(&self, level: CognitiveLevel) -> u32 {
        self.counts[level.order_index()]
    }

    /// Returns the sum of all level counts.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterates (level, count) pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (CognitiveLevel, u32)> + '_ {
        CognitiveLevel::all()
            .iter()
            .map(move |level| (*level, self.count(*level)))
    }
}

/// Scorer for question text spans. Pure and stateless.
pub struct LevelScorer;

impl LevelScorer {
    /// Counts non-overlapping, case-insensitive, whole-word (or whole-phrase)
    /// keyword occurrences per level.
    pub fn score(text: &str, vocabulary: &Vocabulary) -> LevelScores {
        let mut counts = [0u32; LEVEL_COUNT];

        for level in CognitiveLevel::all() {
            let total: usize = vocabulary
                .matchers(*level)
                .iter()
                .map(|matcher| matcher.find_iter(text).count())
                .sum();
            counts[level.order_index()] = total as u32;
        }

        LevelScores { counts }
    }
}
