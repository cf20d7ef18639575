//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or the handshake failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// A store operation was rejected or failed in flight.
    #[error("{operation} failed: {message}")]
    Operation {
        /// The store operation that failed (e.g. `insert_one`).
        operation: &'static str,
        /// The underlying error text.
        message: String,
    },

    /// An update attempted to change a document's identifier.
    #[error("cannot modify the immutable field '_id' in collection {collection}")]
    ImmutableId {
        /// The collection being updated.
        collection: String,
    },
}

impl StoreError {
    /// Creates an operation error from any displayable cause.
    pub fn operation(operation: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Operation {
            operation,
            message: cause.to_string(),
        }
    }
}
