//! Error types for stream argument validation.
//!
//! The only failure this library can produce is an invalid argument:
//! [`EagerStream::skip`](super::EagerStream::skip) rejects a zero skip
//! count and [`generate_with_limit`](super::generate_with_limit) rejects a
//! zero limit. Both reject synchronously, before any element is inspected
//! or any producer invoked; no other operation can fail.

/// Represents a rejected non-positive argument.
///
/// # Examples
///
/// ```rust
/// use rivulet::stream::InvalidArgumentError;
///
/// let error = InvalidArgumentError { parameter: "count" };
/// assert_eq!(format!("{}", error), "count has to be a positive integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the rejected parameter (`"count"` or `"limit"`).
    pub parameter: &'static str,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} has to be a positive integer", self.parameter)
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Represents errors that can occur when operating on a stream.
///
/// Currently the only variant is `InvalidArgument`, but the enum is
/// designed to be extensible for future error kinds.
///
/// # Examples
///
/// ```rust
/// use rivulet::stream::{InvalidArgumentError, StreamError};
///
/// let error = StreamError::InvalidArgument(InvalidArgumentError {
///     parameter: "limit",
/// });
/// assert_eq!(format!("{}", error), "limit has to be a positive integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// An argument was not a positive integer.
    InvalidArgument(InvalidArgumentError),
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for StreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error_display_count() {
        let error = InvalidArgumentError { parameter: "count" };
        assert_eq!(format!("{error}"), "count has to be a positive integer");
    }

    #[test]
    fn test_invalid_argument_error_display_limit() {
        let error = InvalidArgumentError { parameter: "limit" };
        assert_eq!(format!("{error}"), "limit has to be a positive integer");
    }

    #[test]
    fn test_stream_error_display() {
        let error = StreamError::InvalidArgument(InvalidArgumentError { parameter: "limit" });
        assert_eq!(format!("{error}"), "limit has to be a positive integer");
    }

    #[test]
    fn test_invalid_argument_error_equality() {
        let error1 = InvalidArgumentError { parameter: "count" };
        let error2 = InvalidArgumentError { parameter: "count" };
        let error3 = InvalidArgumentError { parameter: "limit" };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_stream_error_equality() {
        let error1 = StreamError::InvalidArgument(InvalidArgumentError { parameter: "count" });
        let error2 = StreamError::InvalidArgument(InvalidArgumentError { parameter: "count" });
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_invalid_argument_error_clone() {
        let error = InvalidArgumentError { parameter: "count" };
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_stream_error_clone() {
        let error = StreamError::InvalidArgument(InvalidArgumentError { parameter: "limit" });
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_invalid_argument_error_debug() {
        let error = InvalidArgumentError { parameter: "count" };
        let debug_string = format!("{error:?}");
        assert!(debug_string.contains("InvalidArgumentError"));
        assert!(debug_string.contains("count"));
    }

    #[test]
    fn test_stream_error_debug() {
        let error = StreamError::InvalidArgument(InvalidArgumentError { parameter: "limit" });
        let debug_string = format!("{error:?}");
        assert!(debug_string.contains("InvalidArgument"));
    }

    #[test]
    fn test_stream_error_source() {
        use std::error::Error;

        let error = StreamError::InvalidArgument(InvalidArgumentError { parameter: "count" });
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_argument_error_is_error() {
        use std::error::Error;

        let error = InvalidArgumentError { parameter: "count" };
        let _: &dyn Error = &error;
    }
}
