//! Question records produced by the segmenter.

use serde::Serialize;
use std::fmt;

/// Sequential question identifier, displayed as "Q1", "Q2", ...
///
/// Assigned in segmentation order, starting at 1, shared across main and
/// sub-questions, never reused within one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(u32);

impl QuestionId {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the 1-based sequence number.
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

impl Serialize for QuestionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Whether a record came from a main-question line or a sub-question line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Main,
    Sub,
}

/// One extracted question: a non-overlapping line-level span of the source
/// document. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    /// Mark value from the line's mark indicator; `None` means "not gradable
    /// by marks", never zero.
    pub marks: Option<u32>,
    pub text: String,
    pub kind: QuestionKind,
}

impl Question {
    /// Creates a main-question record.
    pub fn main(id: QuestionId, marks: Option<u32>, text: impl Into<String>) -> Self {
        Self {
            id,
            marks,
            text: text.into(),
            kind: QuestionKind::Main,
        }
    }

    /// Creates a sub-question record. Sub-questions carry no mark value.
    pub fn sub(id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            id,
            marks: None,
            text: text.into(),
            kind: QuestionKind::Sub,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_displays_with_q_prefix() {
        assert_eq!(format!("{}", QuestionId::new(1)), "Q1");
        assert_eq!(format!("{}", QuestionId::new(42)), "Q42");
    }

    #[test]
    fn question_id_serializes_as_string() {
        let json = serde_json::to_string(&QuestionId::new(3)).unwrap();
        assert_eq!(json, "\"Q3\"");
    }

    #[test]
    fn sub_questions_have_no_marks() {
        let q = Question::sub(QuestionId::new(2), "a) compare and contrast");
        assert_eq!(q.marks, None);
        assert_eq!(q.kind, QuestionKind::Sub);
    }

    #[test]
    fn main_question_keeps_marks_and_text() {
        let q = Question::main(QuestionId::new(1), Some(3), "Q1) Define X. [3]");
        assert_eq!(q.marks, Some(3));
        assert_eq!(q.text, "Q1) Define X. [3]");
        assert_eq!(q.kind, QuestionKind::Main);
    }
}
