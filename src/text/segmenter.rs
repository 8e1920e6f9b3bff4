//! Segmentation of cleaned exam text into questions and sub-questions
//!
//! Three line patterns are scanned independently over the cleaned text:
//! - question stems: a number, then whitespace or `*`, then text with a lowercase letter
//! - sub-question markers: a line opening with `(a)`, `(iv)`, ...
//! - mark annotations: any line with a bracketed part such as `[3]`
//!
//! All offsets are byte offsets into the cleaned text.

use crate::error::{Error, Result};
use regex::Regex;

pub const QUESTION_STEM_PATTERN: &str = r"(?m)^\d+[\s*].*[a-z].*$";
pub const SUBQUESTION_PATTERN: &str = r"(?m)^\s*\([a-z]+\).*";
pub const MARKS_PATTERN: &str = r".*\[.*\].*";

/// Returned by [`Segmentation::display_subquestion`] for an index past the last part
pub const INVALID_SUBQUESTION: &str = "Invalid subquestion index.";

/// The three line classifiers
#[derive(Debug, Clone)]
pub struct PatternSet {
    question_stem: Regex,
    subquestion: Regex,
    marks: Regex,
    /// Anchored marker test used when re-filtering rendered lines
    marker_prefix: Regex,
}

impl PatternSet {
    pub fn new(question_stem: &str, subquestion: &str, marks: &str) -> Result<Self> {
        Ok(Self {
            question_stem: Regex::new(question_stem)?,
            subquestion: Regex::new(subquestion)?,
            marks: Regex::new(marks)?,
            marker_prefix: Regex::new(r"^\s*\([a-z]+\)")?,
        })
    }

    /// Whether `line` carries a mark annotation
    pub fn is_marks_line(&self, line: &str) -> bool {
        self.marks.is_match(line)
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new(QUESTION_STEM_PATTERN, SUBQUESTION_PATTERN, MARKS_PATTERN)
            .expect("built-in segmentation patterns are valid")
    }
}

/// One classified line: half-open byte range plus the matched text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl LineMatch {
    fn collect(regex: &Regex, content: &str) -> Vec<Self> {
        regex
            .find_iter(content)
            .map(|m| Self {
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
            })
            .collect()
    }
}

/// A question picked out of a [`Segmentation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSelection {
    /// 1-indexed question number
    pub number: usize,
    /// Literal stem line
    pub stem: String,
    /// Text between the stem and the next stem, trimmed
    pub content: String,
    /// Sub-question markers whose start lies in `start..end`
    pub subquestions: Vec<LineMatch>,
    /// Absolute span over the cleaned text
    pub start: usize,
    pub end: usize,
}

/// Classified lines over one cleaned text
#[derive(Debug, Clone)]
pub struct Segmentation {
    content: String,
    patterns: PatternSet,
    stems: Vec<LineMatch>,
    subquestions: Vec<LineMatch>,
    marks: Vec<LineMatch>,
}

impl Segmentation {
    pub fn new(content: impl Into<String>, patterns: &PatternSet) -> Self {
        let content = content.into();
        let stems = LineMatch::collect(&patterns.question_stem, &content);
        let subquestions = LineMatch::collect(&patterns.subquestion, &content);
        let marks = LineMatch::collect(&patterns.marks, &content);

        tracing::debug!(
            stems = stems.len(),
            subquestions = subquestions.len(),
            marks = marks.len(),
            "segmented text"
        );

        Self {
            content,
            patterns: patterns.clone(),
            stems,
            subquestions,
            marks,
        }
    }

    pub fn question_count(&self) -> usize {
        self.stems.len()
    }

    pub fn stems(&self) -> &[LineMatch] {
        &self.stems
    }

    pub fn subquestions(&self) -> &[LineMatch] {
        &self.subquestions
    }

    pub fn mark_annotations(&self) -> &[LineMatch] {
        &self.marks
    }

    /// Select question `number` (1-indexed)
    pub fn select_question(&self, number: usize) -> Result<QuestionSelection> {
        let total = self.stems.len();
        if number < 1 || number > total {
            return Err(Error::QuestionOutOfRange { number, total });
        }

        let stem = &self.stems[number - 1];
        let start = stem.end;
        let end = self
            .stems
            .get(number)
            .map(|next| next.start)
            .unwrap_or(self.content.len());

        let subquestions = self
            .subquestions
            .iter()
            .filter(|sq| start <= sq.start && sq.start < end)
            .cloned()
            .collect();

        Ok(QuestionSelection {
            number,
            stem: stem.text.clone(),
            content: self.content[start..end].trim().to_string(),
            subquestions,
            start,
            end,
        })
    }

    /// Byte range of sub-question `index` within `question`
    pub fn subquestion_span(
        &self,
        question: &QuestionSelection,
        index: usize,
    ) -> Result<(usize, usize)> {
        let subq = question
            .subquestions
            .get(index)
            .ok_or(Error::SubquestionOutOfRange {
                index,
                total: question.subquestions.len(),
            })?;
        let end = question
            .subquestions
            .get(index + 1)
            .map(|next| next.start)
            .unwrap_or(question.end);
        Ok((subq.start, end))
    }

    /// Render sub-question `index` (0-indexed) of `question`.
    ///
    /// The first line is always the matched marker line. Later lines that
    /// open with a marker of their own are dropped.
    pub fn subquestion_text(&self, question: &QuestionSelection, index: usize) -> Result<String> {
        let (start, end) = self.subquestion_span(question, index)?;
        let marker = question.subquestions[index].text.trim();

        let mut rendered = vec![marker];
        rendered.extend(
            self.content[start..end]
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .skip(1)
                .filter(|line| !self.patterns.marker_prefix.is_match(line)),
        );

        Ok(rendered.join("\n"))
    }

    /// Like [`Self::subquestion_text`], but an out-of-range index yields [`INVALID_SUBQUESTION`]
    pub fn display_subquestion(&self, question: &QuestionSelection, index: usize) -> String {
        self.subquestion_text(question, index)
            .unwrap_or_else(|_| INVALID_SUBQUESTION.to_string())
    }

    /// Whether the last line of a rendered part carries a mark annotation
    pub fn ends_with_marks(&self, rendered: &str) -> bool {
        rendered
            .lines()
            .last()
            .is_some_and(|line| self.patterns.is_marks_line(line))
    }
}
