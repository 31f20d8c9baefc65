//! Shared error fixtures for the outcome test suites.
//!
//! Provides one error type whose message is always present and one whose
//! message is always absent, so tests can exercise both sides of the
//! message-extraction seam without redeclaring fixtures per suite.

use outcome::ErrorMessage;
use thiserror::Error;

/// Error rendering a fixed message through `Display`.
///
/// Reaches the failure constructors through the blanket [`ErrorMessage`]
/// impl for `std::error::Error`, like any ordinary error type.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct MessageError(String);

impl MessageError {
    /// Fixture carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Error value without a human-readable message.
///
/// Deliberately not a `std::error::Error`; it implements [`ErrorMessage`]
/// by hand and always reports an absent message, standing in for throwable
/// values whose message can be null.
#[derive(Debug, Default)]
pub struct SilentError;

impl ErrorMessage for SilentError {
    fn message(&self) -> Option<String> {
        None
    }
}
