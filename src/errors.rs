//! Centralized error handling.
//!
//! Configuration failures come in exactly two kinds: a variable is
//! missing from the source, or it is present but not coercible to the
//! requested type. Both are terminal for the calling path; the accessor
//! never substitutes defaults or retries.

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The named variable has no value in the settings source.
    ///
    /// Callers should let this terminate the affected startup path
    /// rather than run with an incomplete configuration.
    #[error("{0} environment variable is not set")]
    Missing(String),

    /// The value exists but does not parse as a number.
    #[error("{0} environment variable is not a number")]
    NotANumber(String),

    /// The value exists but does not parse as a boolean literal.
    #[error("{0} environment variable is not a boolean")]
    NotABoolean(String),
}

impl ConfigError {
    /// The variable name the failure refers to.
    pub fn key(&self) -> &str {
        match self {
            ConfigError::Missing(key)
            | ConfigError::NotANumber(key)
            | ConfigError::NotABoolean(key) => key,
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
