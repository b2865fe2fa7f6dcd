//! Taxonomy vocabulary - trigger keywords for each cognitive level.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::foundation::{CognitiveLevel, ValidationError, LEVEL_COUNT};

/// Keyword sets for the six cognitive levels, with precompiled matchers.
///
/// Keyword sets may overlap across levels; the ambiguity is intentional and
/// resolved by scoring, not by vocabulary design. Matching is case-insensitive
/// and bounded by word boundaries, so "applied" never matches "apply".
#[derive(Debug, Clone, Serialize)]
pub struct Vocabulary {
    #[serde(skip)]
    matchers: Vec<Vec<Regex>>,
    keywords: Vec<Vec<String>>,
}

impl Vocabulary {
    /// Builds a vocabulary from one keyword set per level, in canonical order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any level's set is empty or any keyword
    /// is blank.
    pub fn try_new(sets: [Vec<String>; LEVEL_COUNT]) -> Result<Self, ValidationError> {
        let mut keywords = Vec::with_capacity(LEVEL_COUNT);
        let mut matchers = Vec::with_capacity(LEVEL_COUNT);

        for (level, set) in CognitiveLevel::all().iter().zip(sets.into_iter()) {
            if set.is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "keyword set for {}",
                    level
                )));
            }

            let mut level_matchers = Vec::with_capacity(set.len());
            for keyword in &set {
                if keyword.trim().is_empty() {
                    return Err(ValidationError::empty_field(format!(
                        "keyword in set for {}",
                        level
                    )));
                }
                level_matchers.push(whole_phrase_matcher(keyword));
            }

            keywords.push(set);
            matchers.push(level_matchers);
        }

        Ok(Self { matchers, keywords })
    }

    /// Returns the keywords for a level, in declaration order.
    pub fn keywords(&self, level: CognitiveLevel) -> &[String] {
        &self.keywords[level.order_index()]
    }

    /// Returns the precompiled whole-phrase matchers for a level.
    pub fn matchers(&self, level: CognitiveLevel) -> &[Regex] {
        &self.matchers[level.order_index()]
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        DEFAULT_VOCABULARY.clone()
    }
}

/// Builds a case-insensitive, word-boundary-anchored matcher for a keyword
/// or short phrase. The keyword is escaped, so the pattern is always valid.
fn whole_phrase_matcher(keyword: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword.trim())))
        .expect("escaped keyword is a valid pattern")
}

/// The standard Bloom's Taxonomy trigger vocabulary.
pub static DEFAULT_VOCABULARY: Lazy<Vocabulary> = Lazy::new(|| {
    let to_owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();

    Vocabulary::try_new([
        to_owned(&[
            "define", "list", "state", "identify", "recall", "recognize", "describe", "name",
            "locate", "find", "label", "select", "choose", "match", "outline", "restate",
            "duplicate", "memorize", "highlight", "indicate",
        ]),
        to_owned(&[
            "explain", "summarize", "interpret", "classify", "compare", "exemplify",
            "illustrate", "rephrase", "translate", "estimate", "predict", "infer", "conclude",
            "generalize", "expand", "discuss", "review", "give an example",
        ]),
        to_owned(&[
            "apply", "demonstrate", "use", "implement", "solve", "operate", "execute", "show",
            "illustrate", "practice", "calculate", "modify", "construct", "produce",
            "experiment", "make", "change", "complete", "discover",
        ]),
        to_owned(&[
            "differentiate", "organize", "attribute", "examine", "compare", "contrast",
            "investigate", "categorize", "separate", "distinguish", "analyze", "inspect",
            "probe", "deconstruct", "correlate", "test", "relate", "study", "trace",
        ]),
        to_owned(&[
            "judge", "recommend", "criticize", "assess", "justify", "support", "defend",
            "argue", "evaluate", "appraise", "conclude", "prioritize", "rank", "score",
            "choose", "weigh", "estimate", "validate", "interpret",
        ]),
        to_owned(&[
            "design", "construct", "develop", "formulate", "generate", "produce", "invent",
            "compose", "assemble", "plan", "create", "originate", "initiate", "propose",
            "write", "prepare", "devise", "build", "model",
        ]),
    ])
    .expect("default vocabulary is valid")
});
