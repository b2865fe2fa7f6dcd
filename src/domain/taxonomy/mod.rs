//! Taxonomy module - the static vocabulary and the configurable rubric.

mod ideal;
mod vocabulary;

pub use ideal::{IdealDistribution, DEFAULT_TARGETS};
pub use vocabulary::{Vocabulary, DEFAULT_VOCABULARY};
