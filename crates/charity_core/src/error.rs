//! Error types for the console engine.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can escape a console operation.
///
/// Store failures inside a CRUD operation are reported to the user and
/// never surface here; only conditions that end the session do.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store error outside an operation boundary (startup, seeding).
    #[error("store error: {0}")]
    Store(#[from] charity_store::StoreError),

    /// The user interrupted the session.
    #[error("interrupted")]
    Interrupted,

    /// Input was closed.
    #[error("end of input")]
    EndOfInput,

    /// The console could not be read or written.
    #[error("console error: {message}")]
    Console {
        /// Description of the failure.
        message: String,
    },
}

impl CoreError {
    /// Creates a console error.
    pub fn console(message: impl Into<String>) -> Self {
        Self::Console {
            message: message.into(),
        }
    }

    /// Returns true for conditions that should end the session quietly.
    pub fn is_shutdown(&self) -> bool {
        matches!(self, Self::Interrupted | Self::EndOfInput)
    }
}
