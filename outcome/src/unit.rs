//! Outcome of an operation that produces no payload.

use std::fmt;

use crate::message::{ErrorMessage, collect_messages};
use crate::{Outcome, format_outcome, join_messages};

/// Result of an operation that either succeeds without a payload or fails
/// with zero or more error messages.
///
/// Instances are built through the named constructors and are immutable
/// afterwards. A failure normally carries at least one message, but an
/// empty message list is accepted rather than rejected; such a failure
/// still reports `is_failure` while [`UnitOutcome::aggregate_errors`]
/// stays `None`.
///
/// # Examples
///
/// ```
/// use outcome::UnitOutcome;
///
/// let saved = UnitOutcome::success();
/// assert!(saved.is_success());
///
/// let saved = UnitOutcome::failure("disk full");
/// assert!(saved.is_failure());
/// assert_eq!(saved.errors(), ["disk full"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutcome {
    success: bool,
    errors: Vec<String>,
}

impl UnitOutcome {
    /// Successful outcome with no error messages.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
        }
    }

    /// Failed outcome carrying a single message.
    ///
    /// The message is recorded verbatim, the empty string included.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
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
}

impl Outcome for UnitOutcome {
    fn is_success(&self) -> bool {
        self.success
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Treats a bare string as shorthand for a single-message failure.
impl From<&str> for UnitOutcome {
    fn from(message: &str) -> Self {
        Self::failure(message)
    }
}

/// Treats a bare string as shorthand for a single-message failure.
impl From<String> for UnitOutcome {
    fn from(message: String) -> Self {
        Self::failure(message)
    }
}

impl fmt::Display for UnitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_outcome(f, self.success, &self.errors)
    }
}
