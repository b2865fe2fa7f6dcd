//! Report error types.

use thiserror::Error;

/// Errors that can occur while writing CSV reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not flush CSV output: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV buffer was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
