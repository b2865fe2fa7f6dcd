//! CSV serialization of analysis results.
//!
//! Flat rows with field-name headers: one row per question for the
//! question-wise report, one row per cognitive level for the summary.
//! This is the only persisted artifact; there is no schema versioning.

use serde::Serialize;
use std::io::Write;

use crate::application::PaperAnalysis;
use crate::domain::analysis::{AlignmentStatus, PaperSummary, QuestionAnalysis};
use crate::domain::paper::QuestionKind;

use super::ReportError;

/// One question-wise CSV row.
#[derive(Debug, Serialize)]
struct QuestionRow<'a> {
    question_number: String,
    kind: QuestionKind,
    marks: Option<u32>,
    question_text: &'a str,
    dominant_level: &'a str,
    ideal_pct: f64,
    actual_pct: f64,
    deviation_pct: f64,
    status: AlignmentStatus,
    recommendation: &'a str,
    suggested_keywords: String,
}

impl<'a> QuestionRow<'a> {
    fn from_analysis(result: &'a QuestionAnalysis) -> Self {
        Self {
            question_number: result.question.id.to_string(),
            kind: result.question.kind,
            marks: result.question.marks,
            question_text: &result.question.text,
            dominant_level: result.dominance.level.display_name(),
            ideal_pct: result.dominance.ideal.rounded(),
            actual_pct: result.dominance.actual.rounded(),
            deviation_pct: result.dominance.deviation,
            status: result.recommendation.status,
            recommendation: &result.recommendation.message,
            suggested_keywords: result.recommendation.suggested_keywords.join(", "),
        }
    }
}

/// One summary CSV row.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    level: &'a str,
    question_count: usize,
    actual_pct: f64,
    ideal_pct: f64,
}

/// Writes the question-wise report as CSV.
pub fn write_question_report<W: Write>(
    analysis: &PaperAnalysis,
    writer: W,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in &analysis.questions {
        csv_writer.serialize(QuestionRow::from_analysis(result))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the per-level summary report as CSV.
pub fn write_summary_report<W: Write>(
    summary: &PaperSummary,
    writer: W,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &summary.breakdown {
        csv_writer.serialize(SummaryRow {
            level: row.level.display_name(),
            question_count: row.question_count,
            actual_pct: row.actual.rounded(),
            ideal_pct: row.ideal.rounded(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders the question-wise report to a CSV string.
pub fn question_report_to_string(analysis: &PaperAnalysis) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_question_report(analysis, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Renders the summary report to a CSV string.
pub fn summary_report_to_string(summary: &PaperSummary) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_summary_report(summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
