//! Error types for catalog-admin
//!
//! This module defines all error types used throughout the crate,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for catalog-admin operations
///
/// Persistence failures are represented here so that callers inside the
/// crate can log them, but the session manager and color assigner never
/// return them to their own callers.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Login rejected by the remote API
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Non-2xx response, transport failure, or undecodable response body
    #[error("{0}")]
    Request(String),

    /// Key-value store read/write failure or corrupt persisted blob
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Product draft violates a validation rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for catalog-admin operations
///
/// Uses `anyhow::Error` so context can be attached on the way up; match on a
/// specific kind with `err.downcast_ref::<CatalogError>()`.
pub type Result<T> = anyhow::Result<T>;
