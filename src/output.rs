//! CLI output formatting for batch progress and results.
//!
//! Each event has a `format_*` function returning lines (pure, testable —
//! no I/O), and `main` owns the printing. Directories lead with their path
//! and image count; per-page progress and terminal states are indented
//! context lines:
//!
//! ```text
//! Converting scans/ledger-1987 (14 images)
//!     page 1/14
//!     ...
//!     created scans/ledger-1987.pdf (14 pages)
//! Converting scans/ledger-1988 (9 images)
//!     failed: failed to decode scans/ledger-1988/page_04.jpg: ...
//!
//! 1 converted, 1 failed
//! ```

use crate::batch::{BatchEvent, BatchSummary};

/// Format one batch event as display lines.
pub fn format_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::DirectoryStarted { path, total } => {
            vec![format!("Converting {} ({} images)", path.display(), total)]
        }
        BatchEvent::PageAdded { index, total, .. } => {
            vec![format!("    page {index}/{total}")]
        }
        BatchEvent::DirectoryCompleted { output, pages, .. } => {
            vec![format!("    created {} ({} pages)", output.display(), pages)]
        }
        BatchEvent::DirectoryFailed { error, .. } => {
            vec![format!("    failed: {error}")]
        }
    }
}

/// Format the end-of-run summary line.
pub fn format_summary(summary: &BatchSummary) -> Vec<String> {
    vec![
        String::new(),
        format!("{} converted, {} failed", summary.completed(), summary.failed()),
    ]
}

/// Print the end-of-run summary to stdout.
pub fn print_summary(summary: &BatchSummary) {
    for line in format_summary(summary) {
        println!("{line}");
    }
}
