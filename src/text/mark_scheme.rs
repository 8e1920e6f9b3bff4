//! Second pass over a cleaned mark scheme: keep the question/answer rows

use regex::Regex;
use std::sync::LazyLock;

/// A question reference such as `3`, `2(a)` or `4 (b)(ii)` followed by answer text
static QUESTION_ROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\s*(?:\([a-z]+\))*\s+\S").expect("valid question row regex")
});

/// A bare line number in front of a question reference with parts: `12 3 (a) ...`
static LINE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\s+(\d+\s*(?:\([a-z]+\))+.*)$").expect("valid line number regex")
});

/// Rebuild the question rows of a cleaned mark scheme.
///
/// Rows are whitespace-normalized. A leading line-number token is removed
/// when a full question reference follows it.
pub fn reconstruct_mark_lines(cleaned: &str) -> Vec<String> {
    cleaned
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter_map(|line| {
            let stripped = LINE_NUMBER_REGEX
                .captures(&line)
                .map(|caps| caps[1].to_string());
            let line = stripped.unwrap_or(line);
            QUESTION_ROW_REGEX.is_match(&line).then_some(line)
        })
        .collect()
}
