use thiserror::Error;

/// Unified error type for bumper operations
#[derive(Error, Debug)]
pub enum BumperError {
    #[error("Invalid version format: '{0}' - expected MAJOR.MINOR.PATCH")]
    InvalidVersionFormat(String),

    #[error("Invalid bump mode: '{0}' - expected one of major, minor, patch")]
    InvalidBumpMode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bumper
pub type Result<T> = std::result::Result<T, BumperError>;

impl BumperError {
    /// Create an invalid-version error with context
    pub fn invalid_version(version: impl Into<String>) -> Self {
        BumperError::InvalidVersionFormat(version.into())
    }

    /// Create an invalid-mode error with context
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        BumperError::InvalidBumpMode(mode.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumperError::Config(msg.into())
    }

    /// Create a file-not-found error for a path
    pub fn file_not_found(path: impl Into<String>) -> Self {
        BumperError::FileNotFound(path.into())
    }
}
