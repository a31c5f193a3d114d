//! # rivulet
//!
//! An eager, immutable stream over in-memory collections.
//!
//! ## Overview
//!
//! This library provides [`EagerStream`](stream::EagerStream), an immutable
//! wrapper around an ordered sequence of elements with chainable
//! transformation operations and scalar terminal operations:
//!
//! - **Intermediary operations**: `filter`, `map`, `distinct`, `skip` —
//!   each eagerly materializes a new stream and leaves the receiver intact
//! - **Terminal operations**: `count`, `all_match`, `any_match`, `collect`
//! - **Factories**: [`EagerStream::from_vec`](stream::EagerStream::from_vec)
//!   wraps an existing sequence; [`generate`](stream::generate) and
//!   [`generate_with_limit`](stream::generate_with_limit) build a stream by
//!   repeatedly invoking a producer function
//!
//! Evaluation is eager and single-threaded: there is no laziness, no
//! suspension, and no shared mutable state. Because every operation returns
//! a new instance, a stream can be reused freely after any transformation.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for `EagerStream`
//!
//! ## Example
//!
//! ```rust
//! use rivulet::prelude::*;
//!
//! let stream = EagerStream::from_vec(vec![1, 2, 3, 4, 5]);
//! let collected = stream.filter(|number| number % 2 == 0).collect();
//! assert_eq!(collected, vec![2, 4]);
//!
//! // The original stream is unchanged.
//! assert_eq!(stream.count(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use rivulet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::stream::*;
}

pub mod stream;
