//! Recognizing version declaration lines in source text.
//!
//! A declaration line assigns a strict `MAJOR.MINOR.PATCH` string literal
//! to the bare `__version__` identifier. References to the identifier in
//! imports or attribute access are not declarations.

use regex::Regex;

/// Loose semver pattern used to locate the version substring inside a line
const SEMVER_PATTERN: &str = r"\d+\.\d+\.\d+";

/// Strict semver pattern for validating a full candidate string
const SEMVER_STRICT_PATTERN: &str = r"^\d+\.\d+\.\d+$";

/// The reserved identifier a declaration line must assign to
const VERSION_IDENTIFIER: &str = "__version__";

/// Check whether a string is exactly a three-component semver triple
pub fn is_strict_semver(candidate: &str) -> bool {
    match Regex::new(SEMVER_STRICT_PATTERN) {
        Ok(re) => re.is_match(candidate),
        Err(_) => false,
    }
}

/// Extract the declared version from a line, if the line is a declaration.
///
/// Whitespace is stripped and double quotes normalized to single quotes
/// before matching, so indentation and quote style don't matter. The
/// normalized line must start with `__version__='` and the quoted content
/// must be a strict semver triple.
pub fn extract_version(line: &str) -> Option<String> {
    let normalized = line.trim_start().replace(' ', "").replace('"', "'");
    let rest = normalized.strip_prefix(VERSION_IDENTIFIER)?;
    let rest = rest.strip_prefix("='")?;
    let (candidate, _) = rest.split_once('\'')?;

    if is_strict_semver(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}

/// Check whether a line declares a version
pub fn line_has_version(line: &str) -> bool {
    extract_version(line).is_some()
}

/// Replace the declared version substring in a line.
///
/// Substitutes the first semver match equal to `old` with `new`, leaving
/// every other byte of the line untouched (indentation, quote style,
/// trailing text). Returns the line unchanged when no such match exists.
pub fn rewrite_version(line: &str, old: &str, new: &str) -> String {
    if let Ok(re) = Regex::new(SEMVER_PATTERN) {
        for m in re.find_iter(line) {
            if m.as_str() == old {
                let mut rewritten = String::with_capacity(line.len() + new.len());
                rewritten.push_str(&line[..m.start()]);
                rewritten.push_str(new);
                rewritten.push_str(&line[m.end()..]);
                return rewritten;
            }
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_has_version_single_quotes() {
        assert!(line_has_version("__version__ = '1.2.3'"));
    }

    #[test]
    fn test_line_has_version_double_quotes() {
        assert!(line_has_version("__version__ = \"1.2.3\""));
    }

    #[test]
    fn test_line_has_version_indented() {
        assert!(line_has_version("  __version__ = '0.0.0'"));
        assert!(line_has_version("\t__version__ = '0.0.0'"));
    }

    #[test]
    fn test_line_has_version_rejects_other_assignments() {
        assert!(!line_has_version("foo = bar(baz)"));
        assert!(!line_has_version("version = '1.2.3'"));
    }

    #[test]
    fn test_line_has_version_rejects_non_semver() {
        assert!(!line_has_version("__version__ = 'not-a-version'"));
        assert!(!line_has_version("__version__ = '1.2'"));
        assert!(!line_has_version("__version__ = '1.2.3.4'"));
        assert!(!line_has_version("__version__ = '1.2.x'"));
    }

    #[test]
    fn test_line_has_version_rejects_references() {
        assert!(!line_has_version("from foo import bar, __version__"));
        assert!(!line_has_version("version = __version__"));
        assert!(!line_has_version("self.__version__ = '1.2.3'"));
    }

    #[test]
    fn test_extract_version() {
        assert_eq!(
            extract_version("__version__ = '1.2.3'"),
            Some("1.2.3".to_string())
        );
        assert_eq!(
            extract_version("  __version__ = \"10.20.30\""),
            Some("10.20.30".to_string())
        );
        assert_eq!(extract_version("foo = bar(baz)"), None);
    }

    #[test]
    fn test_rewrite_version_preserves_surrounding_text() {
        let line = "  __version__ = \"1.2.3\"\n";
        assert_eq!(
            rewrite_version(line, "1.2.3", "2.0.0"),
            "  __version__ = \"2.0.0\"\n"
        );
    }

    #[test]
    fn test_rewrite_version_skips_unrelated_matches() {
        // An earlier version-like number on the line must not be touched
        let line = "x = '9.9.9'; __version__ = '1.2.3'";
        assert_eq!(
            rewrite_version(line, "1.2.3", "1.2.4"),
            "x = '9.9.9'; __version__ = '1.2.4'"
        );
    }

    #[test]
    fn test_rewrite_version_no_match_is_identity() {
        let line = "plain text line";
        assert_eq!(rewrite_version(line, "1.2.3", "1.2.4"), line);
    }

    #[test]
    fn test_is_strict_semver() {
        assert!(is_strict_semver("0.0.0"));
        assert!(is_strict_semver("12.34.56"));
        assert!(!is_strict_semver("1.2"));
        assert!(!is_strict_semver("1.2.3.4"));
        assert!(!is_strict_semver("1.2.3-rc1"));
        assert!(!is_strict_semver(""));
    }
}
