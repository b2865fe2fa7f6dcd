//! Paper analyzer - orchestrates the full analysis pipeline.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::analysis::{
    Aggregator, DominanceResolver, LevelScorer, PaperSummary, QuestionAnalysis,
    RecommendationEngine, SUGGESTED_KEYWORD_COUNT,
};
use crate::domain::paper::Segmenter;
use crate::domain::taxonomy::{IdealDistribution, Vocabulary};
use crate::ports::AnalysisObserver;

/// Complete output of one analysis run: per-question results in document
/// order plus the paper-level summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaperAnalysis {
    pub questions: Vec<QuestionAnalysis>,
    pub summary: PaperSummary,
}

/// One-document analysis pipeline.
///
/// Holds the vocabulary and ideal distribution explicitly; every run sees
/// the same immutable configuration, so repeated runs over the same text
/// produce identical results. Independent analyzers can run in parallel
/// with no coordination.
pub struct PaperAnalyzer {
    vocabulary: Vocabulary,
    ideal: IdealDistribution,
    suggestion_count: usize,
    observer: Option<Box<dyn AnalysisObserver>>,
}

impl PaperAnalyzer {
    /// Creates an analyzer with an explicit vocabulary and rubric.
    pub fn new(vocabulary: Vocabulary, ideal: IdealDistribution) -> Self {
        Self {
            vocabulary,
            ideal,
            suggestion_count: SUGGESTED_KEYWORD_COUNT,
            observer: None,
        }
    }

    /// Sets the number of keywords suggested for under-represented levels.
    pub fn with_suggestion_count(mut self, count: usize) -> Self {
        self.suggestion_count = count;
        self
    }

    /// Attaches an observer receiving per-question score snapshots.
    pub fn with_observer(mut self, observer: Box<dyn AnalysisObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Runs the full pipeline over one document's raw text.
    ///
    /// Never fails: empty or unrecognizable text produces an empty question
    /// list and an all-zero summary.
    pub fn analyze(&self, text: &str) -> PaperAnalysis {
        let questions = Segmenter::segment(text);
        info!(question_count = questions.len(), "segmented document");

        let results: Vec<QuestionAnalysis> = questions
            .into_iter()
            .map(|question| {
                let scores = LevelScorer::score(&question.text, &self.vocabulary);
                if let Some(observer) = &self.observer {
                    observer.question_scored(&question, &scores);
                }

                let dominance = DominanceResolver::resolve(&scores, &self.ideal);
                debug!(
                    question = %question.id,
                    dominant = %dominance.level,
                    deviation = dominance.deviation,
                    "resolved dominant level"
                );

                let recommendation = RecommendationEngine::recommend(
                    &dominance,
                    &self.vocabulary,
                    self.suggestion_count,
                );

                QuestionAnalysis {
                    question,
                    scores,
                    dominance,
                    recommendation,
                }
            })
            .collect();

        let summary = Aggregator::summarize(&results, &self.ideal);

        PaperAnalysis {
            questions: results,
            summary,
        }
    }
}

impl Default for PaperAnalyzer {
    fn default() -> Self {
        Self::new(Vocabulary::default(), IdealDistribution::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::AlignmentStatus;
    use crate::domain::foundation::CognitiveLevel;
    use crate::domain::paper::QuestionKind;

    #[test]
    fn empty_text_produces_empty_degenerate_result() {
        let analysis = PaperAnalyzer::default().analyze("");
        assert!(analysis.questions.is_empty());
        assert_eq!(analysis.summary.total_questions, 0);
    }

    #[test]
    fn define_scenario_end_to_end() {
        let analysis = PaperAnalyzer::default().analyze("Q1) Define the term algorithm. [3]");
        assert_eq!(analysis.questions.len(), 1);

        let result = &analysis.questions[0];
        assert_eq!(result.question.id.to_string(), "Q1");
        assert_eq!(result.question.marks, Some(3));
        assert_eq!(result.dominance.level, CognitiveLevel::Remember);
        assert_eq!(result.dominance.actual.value(), 100.0);
        assert_eq!(result.dominance.ideal.value(), 10.0);
        assert_eq!(result.dominance.deviation, 90.0);
        assert_eq!(result.recommendation.status, AlignmentStatus::OverRepresented);
        assert_eq!(
            result.recommendation.message,
            "Consider reducing focus on 'Remember'."
        );
    }

    #[test]
    fn compare_contrast_scenario_end_to_end() {
        let analysis = PaperAnalyzer::default().analyze("a) compare and contrast");
        assert_eq!(analysis.questions.len(), 1);

        let result = &analysis.questions[0];
        assert_eq!(result.question.kind, QuestionKind::Sub);
        assert_eq!(result.question.marks, None);
        assert_eq!(result.scores.count(CognitiveLevel::Understand), 1);
        assert_eq!(result.scores.count(CognitiveLevel::Analyze), 2);
        assert_eq!(result.dominance.level, CognitiveLevel::Analyze);
    }

    #[test]
    fn keyword_free_question_reports_canonical_first_level() {
        let analysis = PaperAnalyzer::default().analyze("Q1) What year was it built? [2]");
        let result = &analysis.questions[0];
        assert_eq!(result.dominance.level, CognitiveLevel::Remember);
        assert_eq!(result.dominance.actual.value(), 0.0);
        assert_eq!(result.dominance.deviation, -10.0);
        assert_eq!(
            result.recommendation.message,
            "Consider increasing focus on 'Remember'."
        );
        assert_eq!(
            result.recommendation.suggested_keywords,
            vec!["define", "list", "state"]
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let analyzer = PaperAnalyzer::default();
        let text = "Q1) Define X. [3]\na) compare and contrast\n2. Evaluate the proposal. (10)";

        let first = analyzer.analyze(text);
        let second = analyzer.analyze(text);
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn summary_reflects_per_question_dominant_levels() {
        let analysis = PaperAnalyzer::default()
            .analyze("Q1) Define X. [3]\nQ2) List the steps. [2]");
        let remember =
            &analysis.summary.breakdown[CognitiveLevel::Remember.order_index()];
        assert_eq!(remember.question_count, 2);
        assert_eq!(remember.actual.value(), 100.0);
    }
}
