//! Rewriting version declarations in place.
//!
//! A bump streams the file's lines into a sibling temporary file,
//! substituting the version on the first declaration line, then atomically
//! swaps the temporary file in for the original. Every other line passes
//! through byte-identical. The original is never superseded by a partial
//! write: a failure while writing the temporary file leaves it untouched.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::detect;
use crate::domain::{BumpMode, Version};
use crate::error::Result;

/// Suffix appended to the source path to form the temporary sibling file
const TMP_SUFFIX: &str = ".bumper";

/// File extension the rewriter is willing to modify
const SOURCE_EXTENSION: &str = "py";

/// Get the version declared in a file.
///
/// Returns the version from the first declaration line, or `None` when no
/// line declares one. Later declaration-shaped lines are ignored.
pub fn get_version(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().find_map(detect::extract_version))
}

/// Check whether a path is a source file the rewriter would bump.
///
/// True when the path exists, carries the expected extension, and declares
/// a version. Cheap and idempotent, so callers can probe freely.
pub fn is_versioned_file(path: &Path) -> bool {
    if !path.exists() || path.extension().and_then(OsStr::to_str) != Some(SOURCE_EXTENSION) {
        return false;
    }
    matches!(get_version(path), Ok(Some(_)))
}

/// Bump the version declared in a file, rewriting it in place.
///
/// Silent no-op when the path is not a versioned source file. Otherwise
/// the first declaration line gets its version substring replaced with the
/// bumped value; all other lines are preserved exactly, including line
/// endings. Not safe for concurrent invocation on the same path.
pub fn bump_file(path: &Path, mode: BumpMode) -> Result<()> {
    if !is_versioned_file(path) {
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let tmp_path = tmp_path_for(path);

    match write_rewritten(&content, &tmp_path, mode) {
        Ok(true) => replace_file(&tmp_path, path),
        Ok(false) => {
            // No declaration after all; discard the temp file
            fs::remove_file(&tmp_path).ok();
            Ok(())
        }
        Err(e) => {
            fs::remove_file(&tmp_path).ok();
            Err(e)
        }
    }
}

/// Stream `content` into `tmp_path`, bumping the first declaration line.
///
/// Returns whether a declaration was found and rewritten.
fn write_rewritten(content: &str, tmp_path: &Path, mode: BumpMode) -> Result<bool> {
    let tmp_file = File::create(tmp_path)?;
    let mut writer = BufWriter::new(tmp_file);
    let mut found = false;

    for line in content.split_inclusive('\n') {
        if !found {
            if let Some(old_version) = detect::extract_version(line) {
                let new_version = Version::parse(&old_version)?.bump(mode).to_string();
                let rewritten = detect::rewrite_version(line, &old_version, &new_version);
                writer.write_all(rewritten.as_bytes())?;
                found = true;
                continue;
            }
        }
        writer.write_all(line.as_bytes())?;
    }

    writer.flush()?;
    Ok(found)
}

/// Atomically replace `target` with `tmp`.
///
/// Uses the platform rename when possible; falls back to copy + delete
/// when rename fails (e.g., across filesystems).
fn replace_file(tmp: &Path, target: &Path) -> Result<()> {
    if fs::rename(tmp, target).is_err() {
        fs::copy(tmp, target)?;
        fs::remove_file(tmp)?;
    }
    Ok(())
}

/// Temporary sibling path for a source file (same directory, fixed suffix)
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}
