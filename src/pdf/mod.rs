//! PDF processing layer
//!
//! This module provides page-text extraction using PDFium.

mod reader;

pub use reader::{extract_text, PdfReader, PdfiumExtractor, RawDocument, TextExtractor};
