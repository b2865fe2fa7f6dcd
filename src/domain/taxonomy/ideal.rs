//! Ideal cognitive distribution - per-level target percentages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CognitiveLevel, Percentage, ValidationError, LEVEL_COUNT};

/// Default targets in canonical level order, from the standard rubric.
pub const DEFAULT_TARGETS: [f64; LEVEL_COUNT] = [10.0, 15.0, 20.0, 20.0, 20.0, 15.0];

/// Target percentage per cognitive level.
///
/// Each target must be in 0-100; the six targets are not required to sum
/// to 100 and no normalization is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdealDistribution {
    targets: [Percentage; LEVEL_COUNT],
}

impl IdealDistribution {
    /// Builds a distribution from per-level targets in canonical order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any target is outside 0-100.
    pub fn try_new(targets: [f64; LEVEL_COUNT]) -> Result<Self, ValidationError> {
        let mut validated = [Percentage::ZERO; LEVEL_COUNT];
        for (slot, value) in validated.iter_mut().zip(targets) {
            *slot = Percentage::try_new(value)?;
        }
        Ok(Self { targets: validated })
    }

    /// Returns the target percentage for a level.
    pub fn target(&self, level: CognitiveLevel) -> Percentage {
        self.targets[level.order_index()]
    }
}

impl Default for IdealDistribution {
    fn default() -> Self {
        Self::try_new(DEFAULT_TARGETS).expect("default targets are in range")
    }
}
