//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the Bloom analysis domain.

mod cognitive_level;
mod errors;
mod percentage;

pub use cognitive_level::{CognitiveLevel, LEVEL_COUNT};
pub use errors::ValidationError;
pub use percentage::{round2, Percentage};
