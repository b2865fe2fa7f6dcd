//! Question segmenter - splits raw document text into question records.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Question, QuestionId};

/// A main-question line must begin with a label token (optionally followed
/// by punctuation and a number) or a bare integer with `.` or `)`.
/// Longer tokens come first so "question" is not consumed as "q".
static MAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:question|que\s+no|q\s+no|que|qn|qu|q|\d+[.)])")
        .expect("main label pattern is valid")
});

/// Sub-question fallback: a single letter followed by `)`.
static SUB_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z]\)").expect("sub label pattern is valid"));

/// Mark indicator alternatives, tried in priority order.
static BRACKETED_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("bracketed mark pattern is valid"));
static PARENTHESIZED_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d+)\)").expect("parenthesized mark pattern is valid"));
static WORDED_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*marks?").expect("worded mark pattern is valid"));

/// Segmenter for exam-paper text. Pure and stateless.
pub struct Segmenter;

impl Segmenter {
    /// Splits raw document text into an ordered sequence of question records.
    ///
    /// Line-oriented: each record is one trimmed line. A line is captured as
    /// a main question only when it begins with a question label AND carries
    /// a mark indicator; the label alone is not enough (precision over
    /// recall). Lines that fail the main pattern but start like "a)" are
    /// captured as sub-questions without marks.
    ///
    /// # Edge Cases
    /// - Empty or label-free text: Returns an empty sequence
    /// - Mark indicator without a label: Line not captured
    /// - Unparseable mark digits: Question captured with `marks = None`
    pub fn segment(text: &str) -> Vec<Question> {
        let mut questions = Vec::new();
        let mut next_number = 1u32;

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if MAIN_LABEL.is_match(line) {
                if let Some(marks) = Self::find_mark(line) {
                    questions.push(Question::main(QuestionId::new(next_number), marks, line));
                    next_number += 1;
                    continue;
                }
            }

            if SUB_LABEL.is_match(line) {
                questions.push(Question::sub(QuestionId::new(next_number), line));
                next_number += 1;
            }
        }

        questions
    }

    /// Finds the mark indicator on a line.
    ///
    /// Alternatives are tried in priority order bracket `[n]` -> paren
    /// `(n)` -> trailing "n marks", regardless of position on the line.
    /// Outer `None` means no indicator at all; `Some(None)` means an
    /// indicator whose digits do not fit an integer.
    fn find_mark(line: &str) -> Option<Option<u32>> {
        for pattern in [&*BRACKETED_MARK, &*PARENTHESIZED_MARK, &*WORDED_MARK] {
            if let Some(caps) = pattern.captures(line) {
                return Some(caps[1].parse().ok());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::paper::QuestionKind;

    #[test]
    fn empty_text_yields_empty_sequence() {
        assert!(Segmenter::segment("").is_empty());
        assert!(Segmenter::segment("\n\n  \n").is_empty());
    }

    #[test]
    fn captures_labeled_question_with_bracketed_mark() {
        let questions = Segmenter::segment("Q1) Define the term algorithm. [3]");
        assert_eq!(questions.len(), 1);
        assert_eq!(format!("{}", questions[0].id), "Q1");
        assert_eq!(questions[0].marks, Some(3));
        assert_eq!(questions[0].text, "Q1) Define the term algorithm. [3]");
        assert_eq!(questions[0].kind, QuestionKind::Main);
    }

    #[test]
    fn captures_bare_number_question_with_worded_mark() {
        let questions = Segmenter::segment("2. Explain recursion. 5 marks");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].marks, Some(5));
    }

    #[test]
    fn captures_question_label_variants() {
        let text = "Question 1: Define X [2]\n\
                    Qn 2. Explain Y (4)\n\
                    Que no 3 - Apply Z. 6 marks";
        let questions = Segmenter::segment(text);
        assert_eq!(questions.len(), 3);
        assert_eq!(
            questions.iter().map(|q| q.marks).collect::<Vec<_>>(),
            vec![Some(2), Some(4), Some(6)]
        );
    }

    #[test]
    fn label_without_mark_indicator_is_not_captured() {
        let questions = Segmenter::segment("Question 1: Define an algorithm.");
        assert!(questions.is_empty());
    }

    #[test]
    fn mark_indicator_without_label_is_not_captured() {
        let questions = Segmenter::segment("This exercise carries [3] overall.");
        assert!(questions.is_empty());
    }

    #[test]
    fn sub_question_line_becomes_separate_record_without_marks() {
        let questions = Segmenter::segment("a) compare and contrast");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind, QuestionKind::Sub);
        assert_eq!(questions[0].marks, None);
    }

    #[test]
    fn main_pattern_is_checked_before_sub_pattern() {
        // "q)" starts like a question label but has no mark indicator, so it
        // falls through to the sub-question pattern.
        let questions = Segmenter::segment("q) restate the definition");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind, QuestionKind::Sub);
    }

    #[test]
    fn identifiers_are_sequential_across_main_and_sub() {
        let text = "Q1) Define X. [3]\n\
                    a) compare and contrast\n\
                    b) give an example\n\
                    2. Evaluate the design. (10)";
        let questions = Segmenter::segment(text);
        let numbers: Vec<u32> = questions.iter().map(|q| q.id.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn bracket_mark_wins_over_earlier_paren() {
        let questions = Segmenter::segment("Q1 (2) see section 4 [3]");
        assert_eq!(questions[0].marks, Some(3));
    }

    #[test]
    fn paren_mark_wins_over_worded_mark() {
        let questions = Segmenter::segment("Q1 solve for x, 4 marks (2)");
        assert_eq!(questions[0].marks, Some(2));
    }

    #[test]
    fn overflowing_mark_digits_record_none() {
        let questions = Segmenter::segment("Q1) Define X. [99999999999999999999]");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].marks, None);
    }

    #[test]
    fn prose_lines_between_questions_are_ignored() {
        let text = "Section A\n\
                    Answer all questions.\n\
                    Q1) List three sorting algorithms. [3]\n\
                    Total: 20";
        let questions = Segmenter::segment(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id.number(), 1);
    }
}
