//! Locate → extract → clean → persist, shared by the question and mark-scheme tools

use crate::error::Result;
use crate::pdf::{PdfiumExtractor, TextExtractor};
use crate::source::{discover_pdf, CachePolicy};
use crate::text::{clean_content, CleanerConfig};
use std::path::{Path, PathBuf};

pub const QUESTIONS_OUTPUT: &str = "extracted_questions.txt";
pub const TEXT_OUTPUT: &str = "extracted_text.txt";
pub const MARKS_OUTPUT: &str = "extracted_marks.txt";

/// Which PDF to pick up and where its cleaned text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Human-readable name used in messages
    pub label: String,
    /// Case-insensitive glob over file names
    pub pdf_filter: String,
    /// Intermediate text file, relative to the working directory
    pub output_file: PathBuf,
    pub cache_policy: CachePolicy,
}

impl PipelineConfig {
    /// PDFs with "question" in their name, saved to `extracted_questions.txt`
    pub fn question_paper() -> Self {
        Self {
            label: "question paper".to_string(),
            pdf_filter: "*question*.pdf".to_string(),
            output_file: PathBuf::from(QUESTIONS_OUTPUT),
            cache_policy: CachePolicy::default(),
        }
    }

    /// Any PDF, saved to `extracted_text.txt`
    pub fn any_paper() -> Self {
        Self {
            label: "paper".to_string(),
            pdf_filter: "*.pdf".to_string(),
            output_file: PathBuf::from(TEXT_OUTPUT),
            cache_policy: CachePolicy::default(),
        }
    }

    /// PDFs with "mark" in their name, saved to `extracted_marks.txt`
    pub fn mark_scheme() -> Self {
        Self {
            label: "mark scheme".to_string(),
            pdf_filter: "*mark*.pdf".to_string(),
            output_file: PathBuf::from(MARKS_OUTPUT),
            cache_policy: CachePolicy::default(),
        }
    }
}

/// What [`Pipeline::run`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// The PDF was extracted and the cleaned text written
    Extracted { source: PathBuf, output: PathBuf },
    /// The intermediate file was reused
    CacheHit { output: PathBuf },
    /// No PDF matched the filter; nothing was written
    NoPdfFound,
}

impl ExtractionOutcome {
    /// Console message for the user
    pub fn describe(&self) -> String {
        match self {
            ExtractionOutcome::Extracted { output, .. } => {
                format!("Extracted text and saved to '{}'.", file_name(output))
            }
            ExtractionOutcome::CacheHit { output } => {
                format!("'{}' already exists. Skipping extraction.", file_name(output))
            }
            ExtractionOutcome::NoPdfFound => {
                "No PDF files found in the current directory.".to_string()
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub struct Pipeline<E = PdfiumExtractor> {
    config: PipelineConfig,
    extractor: E,
}

impl Pipeline<PdfiumExtractor> {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_extractor(config, PdfiumExtractor)
    }
}

impl<E: TextExtractor> Pipeline<E> {
    pub fn with_extractor(config: PipelineConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.config.output_file)
    }

    /// Produce the intermediate text file for the first matching PDF in `dir`.
    ///
    /// `cleaner` is only called when extraction actually happens. The output
    /// file is written only after extraction and cleaning both succeed.
    pub fn run<F>(&self, dir: &Path, cleaner: F) -> Result<ExtractionOutcome>
    where
        F: FnOnce() -> Result<CleanerConfig>,
    {
        let Some(source) = discover_pdf(dir, &self.config.pdf_filter)? else {
            tracing::warn!(
                dir = %dir.display(),
                filter = %self.config.pdf_filter,
                "no matching PDF"
            );
            return Ok(ExtractionOutcome::NoPdfFound);
        };

        let output = self.output_path(dir);
        if self.config.cache_policy.is_fresh(&output, &source) {
            tracing::info!(output = %output.display(), "reusing extracted text");
            return Ok(ExtractionOutcome::CacheHit { output });
        }

        let cleaner = cleaner()?;
        let raw = self.extractor.extract(&source)?;
        let cleaned = clean_content(&raw.text(), &cleaner);
        std::fs::write(&output, cleaned)?;

        tracing::info!(
            source = %source.display(),
            output = %output.display(),
            label = %self.config.label,
            "extracted text"
        );
        Ok(ExtractionOutcome::Extracted { source, output })
    }

    /// Read back the intermediate text file
    pub fn load(&self, dir: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(self.output_path(dir))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pdf::RawDocument;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use tempfile::TempDir;

    struct FixedExtractor {
        pages: Vec<&'static str>,
        calls: Cell<usize>,
    }

    impl FixedExtractor {
        fn new(pages: Vec<&'static str>) -> Self {
            Self {
                pages,
                calls: Cell::new(0),
            }
        }
    }

    impl TextExtractor for FixedExtractor {
        fn extract(&self, _path: &Path) -> Result<RawDocument> {
            self.calls.set(self.calls.get() + 1);
            Ok(RawDocument::new(
                self.pages.iter().map(|p| p.to_string()).collect(),
            ))
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract(&self, _path: &Path) -> Result<RawDocument> {
            Err(Error::Pdfium {
                reason: "Failed to extract text from page 2".to_string(),
            })
        }
    }

    fn question_cleaner() -> Result<CleanerConfig> {
        Ok(CleanerConfig::question_paper("2023"))
    }

    #[test]
    fn test_extracts_cleans_and_writes() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("physics-question-paper.pdf"), b"%PDF").unwrap();

        let extractor = FixedExtractor::new(vec![
            "Cover\n© OCR 2023\n1 Explain why X occurs.\n2",
            "(a) Describe it. [2]\nEND OF QUESTION PAPER",
        ]);
        let pipeline = Pipeline::with_extractor(PipelineConfig::question_paper(), extractor);

        let outcome = pipeline.run(dir.path(), question_cleaner).unwrap();
        assert!(matches!(outcome, ExtractionOutcome::Extracted { .. }));
        assert_eq!(
            pipeline.load(dir.path()).unwrap(),
            "1 Explain why X occurs\n(a) Describe it [2]"
        );
    }

    #[test]
    fn test_existing_output_short_circuits() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Question.pdf"), b"%PDF").unwrap();
        std::fs::write(dir.path().join(QUESTIONS_OUTPUT), "1 Stale text").unwrap();

        let pipeline = Pipeline::with_extractor(
            PipelineConfig::question_paper(),
            FixedExtractor::new(vec!["1 Fresh text"]),
        );
        let outcome = pipeline
            .run(dir.path(), || panic!("cleaner must not be built on a cache hit"))
            .unwrap();

        assert_eq!(
            outcome,
            ExtractionOutcome::CacheHit {
                output: dir.path().join(QUESTIONS_OUTPUT)
            }
        );
        assert_eq!(pipeline.extractor.calls.get(), 0);
        assert_eq!(pipeline.load(dir.path()).unwrap(), "1 Stale text");
    }

    #[test]
    fn test_no_pdf_writes_nothing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.pdf"), b"%PDF").unwrap();

        let pipeline = Pipeline::with_extractor(
            PipelineConfig::mark_scheme(),
            FixedExtractor::new(vec!["unused"]),
        );
        let outcome = pipeline
            .run(dir.path(), || Ok(CleanerConfig::mark_scheme()))
            .unwrap();

        assert_eq!(outcome, ExtractionOutcome::NoPdfFound);
        assert!(!dir.path().join(MARKS_OUTPUT).exists());
    }

    #[test]
    fn test_extraction_failure_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("paper.pdf"), b"%PDF").unwrap();

        let pipeline = Pipeline::with_extractor(PipelineConfig::any_paper(), FailingExtractor);
        let result = pipeline.run(dir.path(), question_cleaner);

        assert!(matches!(result, Err(Error::Pdfium { .. })));
        assert!(!dir.path().join(TEXT_OUTPUT).exists());
    }

    #[test]
    fn test_load_without_output_is_an_error() {
        let dir = TempDir::new().unwrap();
        let pipeline = Pipeline::new(PipelineConfig::question_paper());
        assert!(matches!(pipeline.load(dir.path()), Err(Error::Io(_))));
    }

    #[test]
    fn test_outcome_messages() {
        let output = PathBuf::from("/tmp/exams").join(MARKS_OUTPUT);
        assert_eq!(
            ExtractionOutcome::CacheHit { output }.describe(),
            "'extracted_marks.txt' already exists. Skipping extraction."
        );
        assert_eq!(
            ExtractionOutcome::NoPdfFound.describe(),
            "No PDF files found in the current directory."
        );
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            PipelineConfig::question_paper().output_file,
            PathBuf::from("extracted_questions.txt")
        );
        assert_eq!(
            PipelineConfig::any_paper().output_file,
            PathBuf::from("extracted_text.txt")
        );
        assert_eq!(PipelineConfig::mark_scheme().pdf_filter, "*mark*.pdf");
    }
}
