//! Bridge between external error values and outcome messages.
//!
//! The failure constructors accept anything implementing [`ErrorMessage`]
//! rather than `std::error::Error` directly, so error values whose message
//! may be absent can participate without inventing empty strings.

/// An error value exposing an optional human-readable message.
///
/// Every [`std::error::Error`] implementor, trait objects included, gets
/// this for free with the message taken from its `Display` rendering, so
/// ordinary error types plug straight into the failure constructors.
/// Implement the trait directly for error values whose message can be
/// absent; those are dropped from failure outcomes rather than recorded as
/// empty strings.
///
/// # Examples
///
/// ```
/// use outcome::ErrorMessage;
///
/// let err = std::io::Error::other("device unreachable");
/// assert_eq!(err.message().as_deref(), Some("device unreachable"));
/// ```
pub trait ErrorMessage {
    /// The human-readable message for this error, if it has one.
    fn message(&self) -> Option<String>;
}

impl<E: std::error::Error + ?Sized> ErrorMessage for E {
    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Collects the present messages from `errors`, preserving input order.
///
/// Values without a message are skipped. The skip is deliberate and
/// invisible to callers, so it is recorded on the `debug` trace level.
pub(crate) fn collect_messages<'a, E, I>(errors: I) -> Vec<String>
where
    E: ErrorMessage + ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut messages = Vec::new();
    for error in errors {
        match error.message() {
            Some(message) => messages.push(message),
            None => tracing::debug!("dropping error value without a message"),
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::fmt;

    use super::{ErrorMessage, collect_messages};

    #[derive(Debug)]
    struct Offline;

    impl fmt::Display for Offline {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("backend offline")
        }
    }

    impl Error for Offline {}

    struct Silent;

    impl ErrorMessage for Silent {
        fn message(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn std_errors_always_carry_their_display_text() {
        assert_eq!(Offline.message(), Some("backend offline".to_owned()));
    }

    #[test]
    fn trait_objects_use_the_blanket_impl() {
        let err: &dyn Error = &Offline;
        assert_eq!(err.message(), Some("backend offline".to_owned()));
    }

    #[test]
    fn absent_messages_are_skipped() {
        let errors = [Silent, Silent];
        assert!(collect_messages(errors.iter()).is_empty());
    }

    #[test]
    fn present_messages_keep_their_order() {
        let first: Box<dyn Error> = "first".into();
        let second: Box<dyn Error> = "second".into();
        let collected = collect_messages([first.as_ref(), second.as_ref()]);
        assert_eq!(collected, ["first", "second"]);
    }
}
