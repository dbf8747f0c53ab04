//! Bump plan building and execution.
//!
//! This module contains the batch workflow that sits between CLI argument
//! parsing and the file rewriter. It provides a clean separation between
//! clap and business logic: callers hand over the raw per-level file
//! lists and get back a deduplicated, precedence-filtered plan.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{bump, BumpMode};
use crate::error::{BumperError, Result};
use crate::rewriter;

/// Raw per-level file selections, mirroring the CLI flags.
///
/// `None` means the flag was absent; `Some(vec![])` means the flag was
/// given without FILES, which substitutes the configured default files.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanArgs {
    pub major: Option<Vec<String>>,
    pub minor: Option<Vec<String>>,
    pub patch: Option<Vec<String>>,
}

impl PlanArgs {
    /// Whether any bump level was requested at all
    pub fn is_empty(&self) -> bool {
        self.major.is_none() && self.minor.is_none() && self.patch.is_none()
    }
}

/// One level of a bump plan: a mode and the files to bump at that level
#[derive(Debug, Clone, PartialEq)]
pub struct BumpRequest {
    pub mode: BumpMode,
    pub files: Vec<PathBuf>,
}

/// Record of one file bump (performed, or planned under dry-run)
#[derive(Debug, Clone, PartialEq)]
pub struct BumpRecord {
    pub path: PathBuf,
    pub mode: BumpMode,
    pub old_version: String,
    pub new_version: String,
}

/// Build a bump plan from raw CLI selections.
///
/// For each requested level: an empty file list is replaced by the
/// configured defaults, entries containing `*` are glob-expanded, and the
/// result is filtered down to versioned source files. Overlaps between
/// levels resolve to the highest level (major over minor over patch), so
/// each file is bumped at most once. Files within a level are
/// deduplicated and sorted; levels left with no files are dropped.
pub fn build_plan(args: &PlanArgs, config: &Config) -> Result<Vec<BumpRequest>> {
    let major = select_files(args.major.as_deref(), config)?;
    let minor = select_files(args.minor.as_deref(), config)?;
    let patch = select_files(args.patch.as_deref(), config)?;

    let minor = minor.map(|files| filter_overlaps(files, major.as_deref().unwrap_or(&[])));
    let patch = patch.map(|files| {
        let files = filter_overlaps(files, major.as_deref().unwrap_or(&[]));
        filter_overlaps(files, minor.as_deref().unwrap_or(&[]))
    });

    let mut plan = Vec::new();
    for (mode, files) in [
        (BumpMode::Major, major),
        (BumpMode::Minor, minor),
        (BumpMode::Patch, patch),
    ] {
        if let Some(files) = files {
            if !files.is_empty() {
                plan.push(BumpRequest { mode, files });
            }
        }
    }

    Ok(plan)
}

/// Execute a bump plan, returning a record per bumped file.
///
/// Under dry-run the records are computed but no file is modified.
pub fn execute_plan(plan: &[BumpRequest], dry_run: bool) -> Result<Vec<BumpRecord>> {
    let mut records = Vec::new();

    for request in plan {
        for path in &request.files {
            let Some(old_version) = rewriter::get_version(path)? else {
                // Plan entries are pre-filtered; degrade to a skip
                continue;
            };
            let new_version = bump(&old_version, request.mode)?;

            if !dry_run {
                rewriter::bump_file(path, request.mode)?;
            }

            records.push(BumpRecord {
                path: path.clone(),
                mode: request.mode,
                old_version,
                new_version,
            });
        }
    }

    Ok(records)
}

/// Resolve one level's raw file list into versioned source files.
fn select_files(raw: Option<&[String]>, config: &Config) -> Result<Option<Vec<PathBuf>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    // Flag given with no FILES: fall back to the configured defaults
    let entries: Vec<String> = if raw.is_empty() {
        config.files.default.clone()
    } else {
        raw.to_vec()
    };

    let mut candidates = Vec::new();
    for entry in &entries {
        if entry.contains('*') {
            for matched in glob::glob(entry)? {
                if let Ok(path) = matched {
                    candidates.push(path);
                }
            }
        } else {
            let path = PathBuf::from(entry);
            if !path.exists() && config.behavior.fail_on_missing {
                return Err(BumperError::file_not_found(entry.clone()));
            }
            candidates.push(path);
        }
    }

    let mut files: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|path| rewriter::is_versioned_file(path))
        .collect();
    files.sort();
    files.dedup();

    Ok(Some(files))
}

/// Remove from `files` every path that also appears in `higher`.
fn filter_overlaps(files: Vec<PathBuf>, higher: &[PathBuf]) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|path| !higher.contains(path))
        .collect()
}
