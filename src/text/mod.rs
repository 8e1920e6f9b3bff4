//! Text processing layer
//!
//! Cleaning of extracted text, question segmentation, and mark-scheme rows.

pub mod cleaner;
pub mod mark_scheme;
pub mod segmenter;

pub use cleaner::{clean_content, CleanerConfig, PeriodStripping};
pub use mark_scheme::reconstruct_mark_lines;
pub use segmenter::{LineMatch, PatternSet, QuestionSelection, Segmentation, INVALID_SUBQUESTION};
