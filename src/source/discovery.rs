//! Locating the input PDF in a directory

use crate::error::{Error, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Compile a file-name filter such as `*question*.pdf`
pub fn compile_filter(filter: &str) -> Result<Pattern> {
    Pattern::new(filter).map_err(|e| Error::InvalidFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}

/// PDF files directly inside `dir` whose name matches `filter`, in listing order.
///
/// The extension check and the filter are both case-insensitive.
pub fn list_pdfs(dir: &Path, filter: &str) -> Result<Vec<PathBuf>> {
    let pattern = compile_filter(filter)?;
    let entries = std::fs::read_dir(dir)?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue, // Skip entries we can't read
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if pattern.matches_with(&name, MATCH_OPTIONS) {
            files.push(path);
        }
    }

    Ok(files)
}

/// First PDF in `dir` matching `filter`, if any
pub fn discover_pdf(dir: &Path, filter: &str) -> Result<Option<PathBuf>> {
    let files = list_pdfs(dir, filter)?;
    tracing::debug!(dir = %dir.display(), filter, found = files.len(), "listed PDFs");
    Ok(files.into_iter().next())
}
