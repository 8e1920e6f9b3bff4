//! PDF reader wrapper for PDFium

use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use std::path::Path;

/// Page texts of one PDF, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    pages: Vec<String>,
}

impl RawDocument {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Concatenate every page followed by a newline
    pub fn text(&self) -> String {
        let capacity = self.pages.iter().map(|p| p.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        for page in &self.pages {
            text.push_str(page);
            text.push('\n');
        }
        text
    }
}

/// Anything that can turn a PDF path into page texts.
///
/// The pipeline only talks to this trait, so extraction can be swapped
/// out (tests drive the pipeline with in-memory documents).
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<RawDocument>;
}

/// Extractor backed by PDFium
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfiumExtractor;

impl TextExtractor for PdfiumExtractor {
    fn extract(&self, path: &Path) -> Result<RawDocument> {
        extract_text(path)
    }
}

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to a library next to the binary, then a conventional install, then the system
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

fn check_pdf_header(data: &[u8]) -> Result<()> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }
    Ok(())
}

/// PDF reader using PDFium
pub struct PdfReader {
    page_texts: Vec<String>,
}

impl PdfReader {
    /// Open a PDF from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::PdfNotFound {
                path: path.display().to_string(),
            });
        }

        let data = std::fs::read(path)?;
        Self::open_bytes(&data)
    }

    /// Open a PDF from bytes
    pub fn open_bytes(data: &[u8]) -> Result<Self> {
        check_pdf_header(data)?;

        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(Self::map_pdfium_error)?;

        let page_texts = Self::extract_all_page_texts(&document)?;
        tracing::debug!(pages = page_texts.len(), "extracted page texts");

        Ok(Self { page_texts })
    }

    /// Every page must yield text; the first failure aborts the whole document.
    fn extract_all_page_texts(document: &PdfDocument) -> Result<Vec<String>> {
        let pages = document.pages();
        let mut texts = Vec::with_capacity(pages.len() as usize);

        for index in 0..pages.len() {
            let page = pages.get(index).map_err(|e| Error::Pdfium {
                reason: format!("Failed to get page {}: {}", index + 1, e),
            })?;

            let text = page.text().map_err(|e| Error::Pdfium {
                reason: format!("Failed to extract text from page {}: {}", index + 1, e),
            })?;

            texts.push(text.all());
        }

        Ok(texts)
    }

    /// Map PDFium errors to our error type
    fn map_pdfium_error(err: PdfiumError) -> Error {
        match err {
            PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
                Error::PasswordRequired
            }
            _ => Error::Pdfium {
                reason: format!("{}", err),
            },
        }
    }

    /// Get the number of pages
    pub fn page_count(&self) -> u32 {
        self.page_texts.len() as u32
    }

    /// Text of a specific page (1-indexed)
    pub fn page_text(&self, page_num: u32) -> Result<&str> {
        let total = self.page_count();
        if page_num < 1 || page_num > total {
            return Err(Error::PageOutOfBounds {
                page: page_num,
                total,
            });
        }

        Ok(&self.page_texts[(page_num - 1) as usize])
    }

    pub fn into_document(self) -> RawDocument {
        RawDocument::new(self.page_texts)
    }
}

/// Read every page of the PDF at `path` into a [`RawDocument`]
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<RawDocument> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "extracting PDF text");
    Ok(PdfReader::open(path)?.into_document())
}
