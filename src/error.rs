use thiserror::Error;

/// Unified error type for light-semver operations
///
/// Only grammar setup and configuration loading can fail. Matching an input
/// against a compiled grammar never produces one of these.
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Invalid grammar pattern: {0}")]
    Grammar(#[from] regex::Error),

    #[error("Invalid grammar pattern: {0}")]
    Syntax(#[from] regex_syntax::Error),

    #[error("Grammar must have exactly {expected} capture groups, found {found}")]
    GroupCount { expected: usize, found: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Version conversion error: {0}")]
    Conversion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in light-semver
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }

    /// Create a conversion error with context
    pub fn conversion(msg: impl Into<String>) -> Self {
        SemverError::Conversion(msg.into())
    }
}
