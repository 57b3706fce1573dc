//! Store-specific error types
//!
//! Errors raised by the persistence layer, independent of HTTP concerns.

use thiserror::Error;

/// Errors that can occur while reading or writing the store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A UNIQUE constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    Duplicate(String),

    /// Any other database failure (connection, syntax, NOT NULL, ...)
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Schema bootstrap failed
    #[error("Migration failed: {0}")]
    Migration(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate(db_err.message().to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}
