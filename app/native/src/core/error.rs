//! Unified error types for uibot.
//!
//! This module provides the base [`Error`] type every fallible operation in the
//! crate returns. Module-specific errors (such as configuration loading errors)
//! convert into it with `From` implementations.

use std::time::Duration;

use thiserror::Error;

use crate::toolkit::WidgetId;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Base error type for all uibot errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The display was disposed (or its UI thread exited) before the work ran.
    #[error("Display has been disposed")]
    DisplayDisposed,

    /// A widget handle refers to a widget that no longer exists.
    #[error("Widget {0} is disposed")]
    WidgetDisposed(WidgetId),

    /// Widget state was reached for from a thread that is not the UI thread.
    #[error("Invalid thread access: {0}")]
    InvalidThreadAccess(String),

    /// A wait condition did not resolve within its time budget.
    #[error("Timed out after {timeout:?} waiting {condition}")]
    Timeout {
        /// Description of the condition that never resolved.
        condition: String,
        /// The time budget that elapsed.
        timeout: Duration,
    },

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid arguments provided.
    #[error("{0}")]
    InvalidArguments(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a timeout error for the described condition.
    pub fn timeout(condition: impl Into<String>, timeout: Duration) -> Self {
        Self::Timeout { condition: condition.into(), timeout }
    }

    /// Creates an invalid thread access error.
    pub fn thread_access(msg: impl Into<String>) -> Self { Self::InvalidThreadAccess(msg.into()) }

    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }

    /// Creates an invalid arguments error.
    pub fn invalid_args(msg: impl Into<String>) -> Self { Self::InvalidArguments(msg.into()) }

    /// Creates a generic error.
    pub fn other(msg: impl Into<String>) -> Self { Self::Other(msg.into()) }

    /// Returns true if this error is a wait timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool { matches!(self, Self::Timeout { .. }) }
}

impl From<String> for Error {
    fn from(msg: String) -> Self { Self::Other(msg) }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self { Self::Other(msg.to_string()) }
}
