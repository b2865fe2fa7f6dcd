//! Paper module - question records and text segmentation.

mod question;
mod segmenter;

pub use question::{Question, QuestionId, QuestionKind};
pub use segmenter::Segmenter;
