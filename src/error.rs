//! Error types for a3s-cronexpr

use crate::field::Field;
use thiserror::Error;

/// Errors that can occur while parsing or evaluating a cron expression
#[derive(Debug, Error)]
pub enum CronError {
    /// Input is empty or not shaped like a cron expression at all
    #[error("Malformed expression: {0}")]
    Malformed(String),

    /// Whitespace-separated token count is neither 5 nor 6
    #[error("Expected 5 or 6 fields, got {found}")]
    FieldCount { found: usize },

    /// A single field token could not be resolved to legal values
    #[error("Invalid {field} field '{token}': {reason}")]
    InvalidField {
        field: Field,
        token: String,
        reason: String,
    },

    /// A start instant supplied as text could not be understood
    #[error("Invalid timestamp '{0}', expected YYYY-MM-DD HH:MM[:SS]")]
    InvalidTimestamp(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl CronError {
    pub(crate) fn invalid_field(field: Field, token: &str, reason: impl Into<String>) -> Self {
        CronError::InvalidField {
            field,
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// The offending field, for field-level errors
    pub fn field(&self) -> Option<Field> {
        match self {
            CronError::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// The offending raw token, for field-level errors
    pub fn token(&self) -> Option<&str> {
        match self {
            CronError::InvalidField { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Result type alias for cron operations
pub type Result<T> = std::result::Result<T, CronError>;
