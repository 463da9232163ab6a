//! Error handling types.
//!
//! Every codec and combinator in this crate fails with the same [`Error`].
//! Failures are distinguished by their message, not by their type.

use std::borrow::Cow;
use std::error::Error as StdError;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A value could not be decoded or encoded.
///
/// Carries a human-readable message and, optionally, the error that caused
/// it, f.e. a parse error raised by a conversion used within
/// [`flat_xmap`](crate::Codec::flat_xmap).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: Cow<'static, str>,
    #[source]
    source: Option<BoxError>,
}

impl Error {
    /// Creates a new error with just a message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new error with a message and the error that caused it.
    pub fn with_source<E>(message: impl Into<Cow<'static, str>>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates the error returned when a value was not of the expected kind.
    ///
    /// The message will read `Expected <kind>`.
    pub fn expected(kind: &str) -> Self {
        Self::new(format!("Expected {kind}"))
    }

    /// Gets the message of this error, without the cause.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::Error;

    #[test]
    fn display_is_message() {
        let err = Error::expected("list");
        assert_eq!(err.to_string(), "Expected list", "display must be the message");
        assert!(err.source().is_none(), "no source was given");
    }

    #[test]
    fn source_is_kept() {
        let cause = "x".parse::<i32>().expect_err("not a number");
        let err = Error::with_source("Invalid number", cause.clone());
        assert_eq!(err.message(), "Invalid number", "message must not include the cause");

        let source = err.source().expect("source must be set");
        assert_eq!(source.to_string(), cause.to_string(), "source must be the cause");
    }
}
