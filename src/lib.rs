//! Exam Navigator Library
//!
//! This crate turns exam-paper PDFs into browsable questions:
//! - `pdf`: page-text extraction via PDFium
//! - `text`: cleaning, question segmentation, mark-scheme rows
//! - `source`: locating the input PDF and reusing extracted text
//! - `pipeline`: extract → clean → persist for questions and mark schemes
//! - `navigator`: the interactive question browser

pub mod error;
pub mod logging;
pub mod navigator;
pub mod pdf;
pub mod pipeline;
pub mod source;
pub mod text;

pub use error::{Error, Result};
pub use navigator::{prompt_line, Navigator};
pub use pipeline::{ExtractionOutcome, Pipeline, PipelineConfig};
pub use text::{
    clean_content, reconstruct_mark_lines, CleanerConfig, PatternSet, PeriodStripping,
    QuestionSelection, Segmentation,
};
