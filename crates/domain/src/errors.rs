//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SysSentry
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SysSentryError {
    /// Malformed or out-of-range ingestion payload, rejected before any
    /// store mutation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Durable sink failure. Swallowed on the ingest path, triggers the
    /// in-memory fallback on history reads.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error (bad environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SysSentry operations
pub type Result<T> = std::result::Result<T, SysSentryError>;
