//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. The pipeline itself is pure, so the
//! only port is the observability hook.
//!
//! - `AnalysisObserver` - Per-question score snapshot callback

mod observer;

pub use observer::{AnalysisObserver, TracingObserver};
