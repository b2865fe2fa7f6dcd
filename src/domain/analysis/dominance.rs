//! Dominance resolver - dominant level selection and deviation arithmetic.

use serde::Serialize;

use super::LevelScores;
use crate::domain::foundation::{round2, CognitiveLevel, Percentage};
use crate::domain::taxonomy::IdealDistribution;

/// The resolved dominant level of a question, with its statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dominance {
    pub level: CognitiveLevel,
    /// Share of the question's keyword matches held by the dominant level,
    /// rounded to two decimals. Zero when no keywords matched at all.
    pub actual: Percentage,
    /// Target percentage for the dominant level.
    pub ideal: Percentage,
    /// Signed `actual - ideal`, rounded to two decimals. Positive means the
    /// level is over-represented relative to target.
    pub deviation: f64,
}

/// Resolver for dominant cognitive levels. Pure and stateless.
pub struct DominanceResolver;

impl DominanceResolver {
    /// Selects the dominant level and computes actual/ideal/deviation.
    ///
    /// Ties break to the level earlier in canonical order, deterministically.
    ///
    /// # Edge Cases
    /// - All-zero scores: Dominant level is Remember (canonical first) with
    ///   actual = 0; a defined degenerate result, not an error.
    pub fn resolve(scores: &LevelScores, ideal: &IdealDistribution) -> Dominance {
        let mut dominant = CognitiveLevel::Remember;
        let mut best = scores.count(dominant);

        for level in &CognitiveLevel::all()[1..] {
            let count = scores.count(*level);
            // Strict comparison keeps the earlier level on ties.
            if count > best {
                best = count;
                dominant = *level;
            }
        }

        let total = scores.total();
        let actual_raw = if total == 0 {
            0.0
        } else {
            f64::from(best) / f64::from(total) * 100.0
        };

        let ideal_pct = ideal.target(dominant);

        Dominance {
            level: dominant,
            actual: Percentage::new(round2(actual_raw)),
            ideal: ideal_pct,
            deviation: round2(actual_raw - ideal_pct.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::LevelScorer;
    use crate::domain::taxonomy::DEFAULT_VOCABULARY;

    fn resolve(text: &str) -> Dominance {
        let scores = LevelScorer::score(text, &DEFAULT_VOCABULARY);
        DominanceResolver::resolve(&scores, &IdealDistribution::default())
    }

    #[test]
    fn single_keyword_question_is_fully_dominant() {
        let dominance = resolve("Q1) Define the term algorithm. [3]");
        assert_eq!(dominance.level, CognitiveLevel::Remember);
        assert_eq!(dominance.actual.value(), 100.0);
        assert_eq!(dominance.ideal.value(), 10.0);
        assert_eq!(dominance.deviation, 90.0);
    }

    #[test]
    fn zero_scores_default_to_canonical_first_level() {
        let dominance =
            DominanceResolver::resolve(&LevelScores::zero(), &IdealDistribution::default());
        assert_eq!(dominance.level, CognitiveLevel::Remember);
        assert_eq!(dominance.actual, Percentage::ZERO);
        assert_eq!(dominance.deviation, -10.0);
    }

    #[test]
    fn tie_breaks_to_earlier_canonical_level() {
        // "explain" (Understand) vs "apply" (Apply): one match each;
        // Understand wins the tie because it comes first.
        let dominance = resolve("explain how to apply it");
        assert_eq!(dominance.level, CognitiveLevel::Understand);
    }

    #[test]
    fn tie_break_is_stable_across_runs() {
        let first = resolve("a) compare and contrast");
        for _ in 0..10 {
            assert_eq!(resolve("a) compare and contrast"), first);
        }
    }

    #[test]
    fn higher_count_beats_earlier_level() {
        // One Understand match vs three Create matches.
        let dominance = resolve("explain the design and design the build, then design more");
        assert_eq!(dominance.level, CognitiveLevel::Create);
    }

    #[test]
    fn actual_percentage_is_share_of_total_matches() {
        // "compare and contrast": Understand 1, Analyze 2, total 3.
        let dominance = resolve("a) compare and contrast");
        assert_eq!(dominance.level, CognitiveLevel::Analyze);
        assert_eq!(dominance.actual.value(), 66.67);
    }

    #[test]
    fn deviation_equals_rounded_actual_minus_ideal() {
        let dominance = resolve("a) compare and contrast");
        let expected = dominance.actual.value() - dominance.ideal.value();
        assert!((dominance.deviation - expected).abs() < 0.005);
    }
}
