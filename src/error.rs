//! Error types for exam-navigator

use thiserror::Error;

/// Result type alias for exam-navigator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for exam-navigator
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF is password protected
    #[error("PDF is password protected")]
    PasswordRequired,

    /// Page out of bounds
    #[error("Page {page} out of bounds (total: {total})")]
    PageOutOfBounds { page: u32, total: u32 },

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A segmentation pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A file-name filter failed to compile
    #[error("Invalid file filter {filter}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// Question number outside the available range
    #[error("Invalid question number. Please choose between 1 and {total}.")]
    QuestionOutOfRange { number: usize, total: usize },

    /// Sub-question index outside the selected question
    #[error("Invalid subquestion index.")]
    SubquestionOutOfRange { index: usize, total: usize },
}

impl Error {
    /// Whether the error comes from user input and the prompt loop can continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::QuestionOutOfRange { .. } | Error::SubquestionOutOfRange { .. }
        )
    }
}
