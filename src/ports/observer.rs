//! Observability port for the analysis pipeline.
//!
//! The pipeline reports per-question score snapshots through this port
//! instead of printing from inside the algorithm. Implementations can log,
//! collect, or ignore the snapshots.

use tracing::debug;

use crate::domain::analysis::LevelScores;
use crate::domain::paper::Question;

/// Port for observing the pipeline as it scores questions.
///
/// Implementations must be thread-safe; the pipeline itself is synchronous
/// but callers may run independent analyses in parallel.
pub trait AnalysisObserver: Send + Sync {
    /// Called once per question, after scoring and before resolution.
    fn question_scored(&self, question: &Question, scores: &LevelScores);
}

/// Observer that emits structured `tracing` events at debug level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn question_scored(&self, question: &Question, scores: &LevelScores) {
        debug!(
            question = %question.id,
            total_matches = scores.total(),
            scores = ?scores,
            "question scored"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::paper::QuestionId;
    use std::sync::Mutex;

    struct Recording {
        seen: Mutex<Vec<(String, u32)>>,
    }

    impl AnalysisObserver for Recording {
        fn question_scored(&self, question: &Question, scores: &LevelScores) {
            self.seen
                .lock()
                .unwrap()
                .push((question.id.to_string(), scores.total()));
        }
    }

    #[test]
    fn custom_observer_receives_snapshots() {
        let observer = Recording {
            seen: Mutex::new(Vec::new()),
        };
        let question = Question::sub(QuestionId::new(1), "a) compare and contrast");
        observer.question_scored(&question, &LevelScores::zero());

        let seen = observer.seen.lock().unwrap();
        assert_eq!(*seen, vec![("Q1".to_string(), 0)]);
    }
}
