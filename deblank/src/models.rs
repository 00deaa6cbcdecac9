// src/models.rs

/// Aggregate counters for one run: files matched by the walker, blank lines
/// removed across all of them, and files skipped due to I/O failures.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_found: u64,
    pub lines_removed: u64,
    pub files_failed: u64,
}

impl RunSummary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_found: 0,
            lines_removed: 0,
            files_failed: 0,
        }
    }

    pub fn record_removed(&mut self, lines: u64) {
        self.lines_removed = self.lines_removed.saturating_add(lines);
    }

    pub fn record_failure(&mut self) {
        self.files_failed = self.files_failed.saturating_add(1);
    }
}
