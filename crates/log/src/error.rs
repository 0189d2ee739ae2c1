//! Error types for logger initialization

use thiserror::Error;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    /// The filter directive could not be parsed.
    #[error("Invalid filter '{filter}': {reason}")]
    Filter {
        /// The directive string as given.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber was already installed.
    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Result alias for logger operations.
pub type LogResult<T> = Result<T, LogError>;
