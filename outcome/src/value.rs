//! Outcome of an operation that produces a payload on success.

use std::fmt;

use crate::message::{ErrorMessage, collect_messages};
use crate::{Outcome, format_outcome, join_messages};

/// Result of an operation that either succeeds carrying a payload of type
/// `T` or fails with zero or more error messages.
///
/// The payload exists only in the success state. Reading it from a failure
/// yields `T::default()` rather than panicking, so callers are expected to
/// branch on [`ValueOutcome::is_success`] before trusting the payload.
/// Construction fully determines the final state; instances never change
/// afterwards.
///
/// # Examples
///
/// ```
/// use outcome::ValueOutcome;
///
/// let parsed = ValueOutcome::success(42_u32);
/// assert!(parsed.is_success());
/// assert_eq!(parsed.value(), 42);
///
/// let parsed = ValueOutcome::<u32>::failure("bad input");
/// assert!(parsed.is_failure());
/// assert_eq!(parsed.value(), 0);
/// assert_eq!(parsed.errors(), ["bad input"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOutcome<T> {
    success: bool,
    value: Option<T>,
    errors: Vec<String>,
}

impl<T> ValueOutcome<T> {
    /// Successful outcome carrying `value`.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            errors: Vec::new(),
        }
    }

    /// Successful outcome carrying `T::default()`.
    ///
    /// Shorthand for `success(T::default())`, not a distinguished
    /// payload-less success.
    #[must_use]
    pub fn success_default() -> Self
    where
        T: Default,
    {
        Self::success(T::default())
    }

    /// Failed outcome carrying a single message.
    ///
    /// The message is recorded verbatim, the empty string included.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            value: None,
            errors: vec![message.into()],
        }
    }

    /// Failed outcome carrying the given messages verbatim, in order.
    ///
    /// No deduplication or reordering takes place. An empty iterator
    /// produces the degenerate failure without messages.
    #[must_use]
    pub fn failure_all<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            success: false,
            value: None,
            errors: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Failed outcome derived from a single error value.
    ///
    /// Records the error's message when it has one; a message-less error
    /// yields a failure with an empty message list.
    #[must_use]
    pub fn failure_from<E>(error: &E) -> Self
    where
        E: ErrorMessage + ?Sized,
    {
        Self {
            success: false,
            value: None,
            errors: collect_messages(std::iter::once(error)),
        }
    }

    /// Failed outcome derived from a collection of error values.
    ///
    /// Messages keep their input order; error values without a message are
    /// dropped from the list, not recorded as empty strings.
    #[must_use]
    pub fn failure_from_all<'a, E, I>(errors: I) -> Self
    where
        E: ErrorMessage + ?Sized + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Self {
            success: false,
            value: None,
            errors: collect_messages(errors),
        }
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Whether the operation failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.success
    }

    /// The recorded error messages, in construction order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All error messages joined with [`crate::LINE_SEPARATOR`], or `None`
    /// when the message list is empty.
    #[must_use]
    pub fn aggregate_errors(&self) -> Option<String> {
        join_messages(&self.errors)
    }

    /// A copy of the payload, or `T::default()` in the failure state.
    #[must_use]
    pub fn value(&self) -> T
    where
        T: Clone + Default,
    {
        self.value.clone().unwrap_or_default()
    }

    /// Consumes the outcome and returns the payload, or `T::default()` in
    /// the failure state.
    #[must_use]
    pub fn into_value(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Borrows the payload when the outcome is successful.
    #[must_use]
    pub const fn value_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> Outcome for ValueOutcome<T> {
    fn is_success(&self) -> bool {
        self.success
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Treats a bare string as shorthand for a single-message failure.
///
/// The matching shorthand from a bare `T` to a success cannot coexist with
/// this one under coherence (both would apply at `T = String`), so the
/// success side stays the explicit [`ValueOutcome::success`] call.
impl<T> From<&str> for ValueOutcome<T> {
    fn from(message: &str) -> Self {
        Self::failure(message)
    }
}

/// Treats a bare string as shorthand for a single-message failure.
impl<T> From<String> for ValueOutcome<T> {
    fn from(message: String) -> Self {
        Self::failure(message)
    }
}

impl<T> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_outcome(f, self.success, &self.errors)
    }
}
