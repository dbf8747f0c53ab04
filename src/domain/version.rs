use std::fmt;
use std::str::FromStr;

use crate::error::{BumperError, Result};

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string (e.g., "1.2.3" -> Version(1,2,3)).
    ///
    /// Strict: exactly three dot-separated non-negative integers,
    /// no prefix, no pre-release or build-metadata suffix.
    pub fn parse(version: &str) -> Result<Self> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return Err(BumperError::invalid_version(version));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| BumperError::invalid_version(version))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| BumperError::invalid_version(version))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| BumperError::invalid_version(version))?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to the given mode
    pub fn bump(&self, mode: BumpMode) -> Self {
        match mode {
            BumpMode::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpMode::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpMode::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpMode {
    Major,
    Minor,
    Patch,
}

impl BumpMode {
    /// Stable textual name, matching the CLI flag spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpMode::Major => "major",
            BumpMode::Minor => "minor",
            BumpMode::Patch => "patch",
        }
    }
}

impl FromStr for BumpMode {
    type Err = BumperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpMode::Major),
            "minor" => Ok(BumpMode::Minor),
            "patch" => Ok(BumpMode::Patch),
            other => Err(BumperError::invalid_mode(other)),
        }
    }
}

impl fmt::Display for BumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bump a version string according to the given mode.
///
/// Pure function: parses strictly, increments the requested component,
/// resets lower components to zero, and re-serializes.
pub fn bump(version: &str, mode: BumpMode) -> Result<String> {
    Ok(Version::parse(version)?.bump(mode).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_zeros() {
        let v = Version::parse("0.0.0").unwrap();
        assert_eq!(v, Version::new(0, 0, 0));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("not-a-version").is_err());
        assert!(Version::parse("1.2.3-rc1").is_err());
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpMode::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpMode::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpMode::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_bump_string() {
        assert_eq!(bump("1.2.3", BumpMode::Patch).unwrap(), "1.2.4");
        assert_eq!(bump("1.2.3", BumpMode::Minor).unwrap(), "1.3.0");
        assert_eq!(bump("1.2.3", BumpMode::Major).unwrap(), "2.0.0");
    }

    #[test]
    fn test_bump_string_invalid() {
        assert!(matches!(
            bump("1.2", BumpMode::Patch),
            Err(BumperError::InvalidVersionFormat(_))
        ));
    }

    #[test]
    fn test_bump_is_pure() {
        let v = "1.2.3";
        let first = bump(v, BumpMode::Minor).unwrap();
        let second = bump(v, BumpMode::Minor).unwrap();
        assert_eq!(first, second);
        assert_eq!(v, "1.2.3");
    }

    #[test]
    fn test_bump_mode_from_str() {
        assert_eq!("major".parse::<BumpMode>().unwrap(), BumpMode::Major);
        assert_eq!("minor".parse::<BumpMode>().unwrap(), BumpMode::Minor);
        assert_eq!("patch".parse::<BumpMode>().unwrap(), BumpMode::Patch);
        assert!(matches!(
            "nightly".parse::<BumpMode>(),
            Err(BumperError::InvalidBumpMode(_))
        ));
    }
}
