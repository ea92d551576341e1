//! Error types and error handling for termsift.
//!
//! The tokenizer and query builder are total and never produce these.
//! They cover the adapters (SQL lowering, record loading) and the ambient
//! configuration layer.

use thiserror::Error;

/// Result type alias for termsift operations
pub type Result<T> = std::result::Result<T, TermsiftError>;

/// Main error type for termsift
#[derive(Error, Debug)]
pub enum TermsiftError {
    #[error("Invalid field path '{field}': {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid limit {0}: must be at least 1")]
    InvalidLimit(i64),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TermsiftError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            TermsiftError::InvalidField { .. }
                | TermsiftError::InvalidLimit(_)
                | TermsiftError::InvalidRecord(_)
                | TermsiftError::ConfigError(_)
        )
    }
}
