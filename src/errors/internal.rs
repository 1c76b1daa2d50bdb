use thiserror::Error;

use super::not_found::NotFoundError;

/// Internal error type for store operations
///
/// Infrastructure failures (Database, Record) are never rendered as
/// structured API responses; handlers forward them untranslated as 500s.
/// NotFound is the only variant the API layer maps into its taxonomy.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// A stored document failed to encode or decode
    #[error("Record error: {operation} failed: {source}")]
    Record {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// A lookup by id found no record
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    /// Create a record encode/decode error with context
    pub fn record(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Record {
            operation: operation.into(),
            source,
        }
    }
}
