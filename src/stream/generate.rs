//! Generator factories for [`EagerStream`].
//!
//! A generated stream is built by invoking a zero-argument producer
//! function a fixed number of times and collecting the results in call
//! order. The limit defaults to [`DEFAULT_GENERATE_LIMIT`].
//!
//! # Examples
//!
//! ```rust
//! use rivulet::stream::{generate, generate_with_limit};
//!
//! let stream = generate(|| 1);
//! assert_eq!(stream.count(), 100);
//!
//! let mut next = 0;
//! let stream = generate_with_limit(3, || {
//!     next += 1;
//!     next
//! })
//! .unwrap();
//! assert_eq!(stream.collect(), vec![1, 2, 3]);
//! ```

use super::eager::EagerStream;
use super::error::{InvalidArgumentError, StreamError};

/// Number of producer invocations when no explicit limit is given.
pub const DEFAULT_GENERATE_LIMIT: usize = 100;

/// Generates a stream by invoking the producer [`DEFAULT_GENERATE_LIMIT`]
/// times.
///
/// The producer is invoked exactly once per element, in call order.
///
/// # Examples
///
/// ```rust
/// use rivulet::stream::generate;
///
/// let stream = generate(|| 1);
/// assert_eq!(stream.count(), 100);
/// ```
#[must_use]
pub fn generate<T, F>(producer: F) -> EagerStream<T>
where
    F: FnMut() -> T,
{
    produce(DEFAULT_GENERATE_LIMIT, producer)
}

/// Generates a stream by invoking the producer exactly `limit` times.
///
/// The limit is validated before the producer is invoked for the first
/// time.
///
/// # Errors
///
/// Returns [`StreamError::InvalidArgument`] if `limit` is zero; the limit
/// has to be a positive integer.
///
/// # Examples
///
/// ```rust
/// use rivulet::stream::generate_with_limit;
///
/// let stream = generate_with_limit(15, || 1).unwrap();
/// assert_eq!(stream.count(), 15);
///
/// assert!(generate_with_limit(0, || 1).is_err());
/// ```
pub fn generate_with_limit<T, F>(limit: usize, producer: F) -> Result<EagerStream<T>, StreamError>
where
    F: FnMut() -> T,
{
    if limit == 0 {
        return Err(StreamError::InvalidArgument(InvalidArgumentError {
            parameter: "limit",
        }));
    }

    Ok(produce(limit, producer))
}

fn produce<T, F>(limit: usize, mut producer: F) -> EagerStream<T>
where
    F: FnMut() -> T,
{
    let mut elements = Vec::with_capacity(limit);
    for _ in 0..limit {
        elements.push(producer());
    }
    EagerStream::from_vec(elements)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_generate_default_limit_is_hundred() {
        let stream = generate(|| 1);
        assert_eq!(stream.count(), DEFAULT_GENERATE_LIMIT);
        assert_eq!(stream.count(), 100);
    }

    #[rstest]
    fn test_generate_with_limit() {
        let stream = generate_with_limit(15, || 1).unwrap();
        assert_eq!(stream.count(), 15);
    }

    #[rstest]
    fn test_generate_with_limit_one() {
        let stream = generate_with_limit(1, || "element").unwrap();
        assert_eq!(stream.collect(), vec!["element"]);
    }

    #[rstest]
    fn test_generate_invokes_producer_in_call_order() {
        let mut next = 0;
        let stream = generate_with_limit(4, || {
            next += 1;
            next
        })
        .unwrap();
        assert_eq!(stream.collect(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_generate_invokes_producer_exactly_limit_times() {
        let mut invocations = 0;
        let _stream = generate_with_limit(7, || {
            invocations += 1;
        })
        .unwrap();
        assert_eq!(invocations, 7);
    }

    #[rstest]
    fn test_generate_with_zero_limit_is_rejected() {
        let result = generate_with_limit(0, || 1);
        let error = result.unwrap_err();
        assert_eq!(format!("{error}"), "limit has to be a positive integer");
    }

    #[rstest]
    fn test_generate_with_zero_limit_never_invokes_producer() {
        let mut invocations = 0;
        let result = generate_with_limit(0, || {
            invocations += 1;
        });
        assert!(result.is_err());
        assert_eq!(invocations, 0);
    }
}
