//! Intermediate text file caching

use std::path::Path;
use std::time::SystemTime;

/// When an existing intermediate file may be reused instead of re-extracting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Reuse whenever the file exists. A changed PDF is never noticed.
    #[default]
    ExistenceOnly,
    /// Reuse only if the file is at least as new as the source PDF
    SourceNewer,
}

impl CachePolicy {
    /// Whether `output` can stand in for extracting `source` again
    pub fn is_fresh(&self, output: &Path, source: &Path) -> bool {
        if !output.exists() {
            return false;
        }

        match self {
            CachePolicy::ExistenceOnly => true,
            CachePolicy::SourceNewer => match (modified(output), modified(source)) {
                (Some(cached), Some(pdf)) => cached >= pdf,
                _ => false,
            },
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
