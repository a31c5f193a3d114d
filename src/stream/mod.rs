//! Eager, immutable streams over in-memory sequences.
//!
//! This module provides [`EagerStream`], an immutable wrapper around an
//! ordered sequence, together with the generator factories [`generate`] and
//! [`generate_with_limit`].
//!
//! # Immutability
//!
//! All operations follow functional programming principles:
//! - **Referential Transparency**: Same inputs always produce same outputs
//! - **Immutability**: Every intermediary operation returns a new stream
//!   backed by freshly allocated storage; the receiver is never modified
//! - **No Side Effects**: The only observable effects are those performed
//!   by caller-supplied predicate, transform, and producer functions
//!
//! Construction takes ownership of the given sequence without copying it,
//! while [`EagerStream::collect`] always hands back an independent copy, so
//! the internal storage can never be reached through the public surface.
//!
//! # Examples
//!
//! ```rust
//! use rivulet::stream::EagerStream;
//!
//! let stream = EagerStream::from_vec(vec![2, 2, 3, 4, 4]);
//! let collected = stream
//!     .distinct()
//!     .map(|number| number * 10)
//!     .collect();
//! assert_eq!(collected, vec![20, 30, 40]);
//!
//! // Intermediary operations leave the original untouched.
//! assert_eq!(stream.collect(), vec![2, 2, 3, 4, 4]);
//! ```
//!
//! ```rust
//! use rivulet::stream::generate_with_limit;
//!
//! let stream = generate_with_limit(3, || 7).unwrap();
//! assert_eq!(stream.collect(), vec![7, 7, 7]);
//! ```

mod eager;
mod error;
mod generate;

pub use eager::EagerStream;
pub use eager::EagerStreamIntoIterator;
pub use eager::EagerStreamIterator;
pub use error::InvalidArgumentError;
pub use error::StreamError;
pub use generate::DEFAULT_GENERATE_LIMIT;
pub use generate::generate;
pub use generate::generate_with_limit;
