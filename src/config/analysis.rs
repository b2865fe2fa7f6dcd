//! Analysis configuration - ideal distribution targets and suggestion count.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::SUGGESTED_KEYWORD_RANGE;
use crate::domain::foundation::CognitiveLevel;
use crate::domain::taxonomy::{IdealDistribution, DEFAULT_TARGETS};

/// Analysis configuration
///
/// Per-level target percentages for the ideal cognitive distribution, plus
/// the number of keywords suggested for under-represented levels. Targets
/// are independent 0-100 values; they are not normalized to sum to 100.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Target percentage for Remember
    #[serde(default = "default_remember")]
    pub remember_pct: f64,

    /// Target percentage for Understand
    #[serde(default = "default_understand")]
    pub understand_pct: f64,

    /// Target percentage for Apply
    #[serde(default = "default_apply")]
    pub apply_pct: f64,

    /// Target percentage for Analyze
    #[serde(default = "default_analyze")]
    pub analyze_pct: f64,

    /// Target percentage for Evaluate
    #[serde(default = "default_evaluate")]
    pub evaluate_pct: f64,

    /// Target percentage for Create
    #[serde(default = "default_create")]
    pub create_pct: f64,

    /// Keywords suggested for an under-represented level (3-5)
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
}

impl AnalysisConfig {
    /// Returns the configured targets in canonical level order.
    pub fn targets(&self) -> [f64; 6] {
        [
            self.remember_pct,
            self.understand_pct,
            self.apply_pct,
            self.analyze_pct,
            self.evaluate_pct,
            self.create_pct,
        ]
    }

    /// Builds the domain `IdealDistribution` from the configured targets.
    ///
    /// Call `validate` first; this only fails if validation was skipped.
    pub fn ideal_distribution(&self) -> Result<IdealDistribution, ValidationError> {
        self.validate()?;
        IdealDistribution::try_new(self.targets())
            .map_err(|_| ValidationError::TargetOutOfRange("ideal distribution"))
    }

    /// Validate all analysis configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (level, target) in CognitiveLevel::all().iter().zip(self.targets()) {
            if !target.is_finite() || !(0.0..=100.0).contains(&target) {
                return Err(ValidationError::TargetOutOfRange(level.display_name()));
            }
        }

        let (min, max) = SUGGESTED_KEYWORD_RANGE;
        if !(min..=max).contains(&self.suggestion_count) {
            return Err(ValidationError::InvalidSuggestionCount);
        }

        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            remember_pct: default_remember(),
            understand_pct: default_understand(),
            apply_pct: default_apply(),
            analyze_pct: default_analyze(),
            evaluate_pct: default_evaluate(),
            create_pct: default_create(),
            suggestion_count: default_suggestion_count(),
        }
    }
}

fn default_remember() -> f64 {
    DEFAULT_TARGETS[0]
}

fn default_understand() -> f64 {
    DEFAULT_TARGETS[1]
}

fn default_apply() -> f64 {
    DEFAULT_TARGETS[2]
}

fn default_analyze() -> f64 {
    DEFAULT_TARGETS[3]
}

fn default_evaluate() -> f64 {
    DEFAULT_TARGETS[4]
}

fn default_create() -> f64 {
    DEFAULT_TARGETS[5]
}

fn default_suggestion_count() -> usize {
    3
}
