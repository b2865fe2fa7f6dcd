//! Domain layer containing the analysis logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `taxonomy` - Keyword vocabulary and the configurable ideal distribution
//! - `paper` - Question records and text segmentation
//! - `analysis` - Pure domain services (scoring, dominance, recommendations,
//!   aggregation)

pub mod analysis;
pub mod foundation;
pub mod paper;
pub mod taxonomy;
