//! Report adapters - CSV export of analysis results.

mod csv;
mod error;

pub use self::csv::{
    question_report_to_string, summary_report_to_string, write_question_report,
    write_summary_report,
};
pub use error::ReportError;
