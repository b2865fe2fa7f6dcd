//! Adapters - Implementations facing the outside world.

pub mod report;
