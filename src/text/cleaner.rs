//! Trimming of raw extracted text to the answerable part of a paper

use std::borrow::Cow;

/// Sentinel printed after the last question of an OCR paper
pub const END_OF_QUESTION_PAPER: &str = "END OF QUESTION PAPER";

/// Column header that opens the body of a mark scheme
pub const MARK_SCHEME_HEADER: &str = "Question  Answer  Mark";

/// When literal `.` characters are removed relative to the anchor search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodStripping {
    /// Keep periods
    #[default]
    Never,
    /// Strip the whole text, then look for anchors in the stripped text
    BeforeAnchorSearch,
    /// Look for anchors in the unmodified text, then strip the window
    AfterAnchorSearch,
}

/// How raw text is cut down and filtered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerConfig {
    /// Literal marking where meaningful content starts (kept in the window)
    pub start_anchor: String,
    /// Literal marking where content ends (excluded); `None` runs to the end of the text
    pub end_marker: Option<String>,
    /// Footer lines to drop, optionally preceded by "Turn over"
    pub footer_labels: Vec<String>,
    pub period_stripping: PeriodStripping,
    /// Drop lines made only of digits (page numbers)
    pub drop_page_numbers: bool,
}

impl CleanerConfig {
    /// Question paper from the given exam year: window opens at the copyright footer
    pub fn question_paper(year: &str) -> Self {
        let copyright = format!("© OCR {}", year.trim());
        Self {
            start_anchor: copyright.clone(),
            end_marker: Some(END_OF_QUESTION_PAPER.to_string()),
            footer_labels: vec![copyright],
            period_stripping: PeriodStripping::BeforeAnchorSearch,
            drop_page_numbers: true,
        }
    }

    /// Mark scheme: window opens at the answer table header and runs to the end.
    ///
    /// Bare numbers are mark values in a mark scheme, so they are kept.
    pub fn mark_scheme() -> Self {
        Self {
            start_anchor: MARK_SCHEME_HEADER.to_string(),
            end_marker: None,
            footer_labels: Vec::new(),
            period_stripping: PeriodStripping::BeforeAnchorSearch,
            drop_page_numbers: false,
        }
    }
}

/// Clean raw extracted text.
///
/// The text is cut to the window between the start anchor and the end
/// marker only when both are present; otherwise the full text is filtered.
pub fn clean_content(raw: &str, config: &CleanerConfig) -> String {
    let content: Cow<'_, str> = match config.period_stripping {
        PeriodStripping::BeforeAnchorSearch => Cow::Owned(strip_periods(raw)),
        _ => Cow::Borrowed(raw),
    };

    let window = anchor_window(&content, config);
    let window: Cow<'_, str> = match config.period_stripping {
        PeriodStripping::AfterAnchorSearch => Cow::Owned(strip_periods(window)),
        _ => Cow::Borrowed(window),
    };

    let lines: Vec<&str> = window
        .lines()
        .filter(|line| keep_line(line, config))
        .collect();

    tracing::debug!(
        anchored = window.len() != content.len(),
        kept = lines.len(),
        "cleaned extracted text"
    );

    lines.join("\n")
}

fn strip_periods(text: &str) -> String {
    text.replace('.', "")
}

/// Slice of `content` between the anchors, or all of it when an anchor is missing
fn anchor_window<'a>(content: &'a str, config: &CleanerConfig) -> &'a str {
    let Some(start) = content.find(&config.start_anchor) else {
        return content;
    };

    // An end marker that only occurs before the start anchor leaves the window unanchored
    let end = match &config.end_marker {
        Some(marker) => match content[start..].find(marker.as_str()) {
            Some(offset) => start + offset,
            None => return content,
        },
        None => content.len(),
    };

    content[start..end].trim()
}

fn keep_line(line: &str, config: &CleanerConfig) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    if config.drop_page_numbers && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    !is_footer(trimmed, &config.footer_labels)
}

fn is_footer(line: &str, labels: &[String]) -> bool {
    if labels.is_empty() {
        return false;
    }

    let normalized = normalize_whitespace(line);
    let unprefixed = strip_turn_over(&normalized);
    labels.iter().any(|label| {
        let label = normalize_whitespace(label);
        normalized == label || unprefixed == Some(label.as_str())
    })
}

/// Rest of the line after a case-insensitive "Turn over " prefix
fn strip_turn_over(line: &str) -> Option<&str> {
    const PREFIX: &str = "turn over ";
    let head = line.get(..PREFIX.len())?;
    head.eq_ignore_ascii_case(PREFIX).then(|| &line[PREFIX.len()..])
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
