//! Terminal output helpers.
//!
//! Formatting is kept in pure functions where practical so it can be
//! tested without capturing stdout.

use std::path::Path;

use crate::cli::BumpRecord;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display one performed bump with its before/after versions.
pub fn display_bump_record(record: &BumpRecord) {
    display_success(&format_bump_record(record));
}

/// Display one planned bump under dry-run.
pub fn display_dry_run_record(record: &BumpRecord) {
    println!("\x1b[33m→\x1b[0m [dry-run] {}", format_bump_record(record));
}

/// Render a bump record as `path: old -> new (mode)`.
pub fn format_bump_record(record: &BumpRecord) -> String {
    format!(
        "{}: \x1b[31m{}\x1b[0m -> \x1b[32m{}\x1b[0m ({})",
        display_path(&record.path),
        record.old_version,
        record.new_version,
        record.mode
    )
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
