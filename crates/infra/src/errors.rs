//! Infrastructure error types and their mapping into the domain error.

use syssentry_domain::SysSentryError;
use thiserror::Error;

/// Errors raised by infrastructure adapters.
#[derive(Error, Debug)]
pub enum InfraError {
    /// SQLite query or statement failure.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool exhaustion or setup failure.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A blocking database task was cancelled or panicked.
    #[error("blocking task failed: {0}")]
    Join(String),

    /// Stored row could not be decoded back into a domain type.
    #[error("corrupt row: {0}")]
    CorruptRow(String),
}

impl From<InfraError> for SysSentryError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Join(message) => Self::Internal(message),
            other => Self::Database(other.to_string()),
        }
    }
}
