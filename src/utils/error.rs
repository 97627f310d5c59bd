//! Error handling for termbatch
//!
//! This module defines all error types used throughout the tool.

use thiserror::Error;

/// Result type alias for termbatch
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for termbatch
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Batch input validation errors, raised before any store call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested entity missing from the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-success response from the terminology store
    #[error("Terminology store error (status {status}): {message}")]
    Store {
        /// HTTP status code returned by the store
        status: u16,
        /// Response body, as returned
        message: String,
    },
}
