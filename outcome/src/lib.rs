//! Immutable value types reporting the outcome of an operation.
//!
//! An operation either succeeds, optionally producing a payload, or fails
//! carrying zero or more human-readable error messages. [`UnitOutcome`]
//! reports success or failure alone; [`ValueOutcome`] adds a typed payload
//! on success. Both satisfy the [`Outcome`] trait, so generic callers can
//! branch on the success flag and read the recorded messages without caring
//! which concrete type they hold.
//!
//! Outcomes are created through named constructors and never change
//! afterwards, which also makes them freely shareable across threads.
//!
//! ```
//! use outcome::{Outcome, UnitOutcome};
//!
//! let saved = UnitOutcome::failure("disk full");
//! assert!(saved.is_failure());
//! assert_eq!(saved.aggregate_errors().as_deref(), Some("disk full"));
//! ```

use std::fmt;

mod message;
mod unit;
mod value;

pub use message::ErrorMessage;
pub use unit::UnitOutcome;
pub use value::ValueOutcome;

/// Separator placed between messages by [`Outcome::aggregate_errors`].
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Separator placed between messages by [`Outcome::aggregate_errors`].
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Read-only queries shared by [`UnitOutcome`] and [`ValueOutcome`].
///
/// Both concrete types also expose these queries as inherent methods, so
/// the trait only needs importing when code abstracts over either kind of
/// outcome.
pub trait Outcome {
    /// Whether the operation succeeded.
    fn is_success(&self) -> bool;

    /// Whether the operation failed.
    ///
    /// Always the negation of [`Outcome::is_success`].
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The recorded error messages, in construction order.
    fn errors(&self) -> &[String];

    /// All error messages joined with [`LINE_SEPARATOR`].
    ///
    /// Returns `None` when no messages were recorded, which covers every
    /// success and the degenerate failure constructed without messages.
    fn aggregate_errors(&self) -> Option<String> {
        join_messages(self.errors())
    }
}

pub(crate) fn join_messages(errors: &[String]) -> Option<String> {
    if errors.is_empty() {
        None
    } else {
        Some(errors.join(LINE_SEPARATOR))
    }
}

pub(crate) fn format_outcome(
    f: &mut fmt::Formatter<'_>,
    success: bool,
    errors: &[String],
) -> fmt::Result {
    if success {
        f.write_str("success")
    } else {
        match join_messages(errors) {
            Some(joined) => f.write_str(&joined),
            None => f.write_str("failure"),
        }
    }
}
