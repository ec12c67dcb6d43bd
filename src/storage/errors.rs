//! Storage error types
//!
//! Driver failures are classified once, here, so callers only have to
//! distinguish "no such row", "referenced row missing" and everything else.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted row does not exist
    #[error("Record not found")]
    NotFound,

    /// A foreign key references a row that does not exist
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Invalid connection URL or options
    #[error("Invalid store configuration: {0}")]
    Config(String),

    /// Any other driver failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl StoreError {
    /// Returns true for the "no matching row" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return StoreError::NotFound;
        }

        if let Some(db_err) = err.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation(db_err.message().to_string());
            }
        }

        StoreError::Database(err)
    }
}
