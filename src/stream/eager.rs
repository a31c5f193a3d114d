//! Eager, immutable stream backed by a `Vec`.
//!
//! This module provides [`EagerStream`], an immutable ordered sequence
//! wrapper whose intermediary operations each materialize a new stream.
//!
//! # Overview
//!
//! `EagerStream` holds its elements in a plain `Vec<T>` fixed at
//! construction time. Intermediary operations (`filter`, `map`, `distinct`,
//! `skip`) allocate a fresh backing vector and return a new stream; terminal
//! operations (`count`, `all_match`, `any_match`, `collect`) produce a
//! scalar or an independent copy. Nothing ever mutates the receiver.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `from_vec`  | O(1)       |
//! | `count`     | O(1)       |
//! | `is_empty`  | O(1)       |
//! | `filter`    | O(n)       |
//! | `map`       | O(n)       |
//! | `distinct`  | O(n²)      |
//! | `skip`      | O(n)       |
//! | `all_match` | O(n), short-circuiting |
//! | `any_match` | O(n), short-circuiting |
//! | `collect`   | O(n)       |
//!
//! `distinct` uses a linear membership scan per element so that any
//! `PartialEq` element type is supported, without requiring `Eq + Hash`.
//!
//! # Examples
//!
//! ```rust
//! use rivulet::stream::EagerStream;
//!
//! let stream = EagerStream::from_vec(vec![1, 2, 3, 4, 5]);
//! let collected = stream.filter(|number| number % 2 == 0).collect();
//! assert_eq!(collected, vec![2, 4]);
//!
//! // The original stream is preserved.
//! assert_eq!(stream.count(), 5);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::error::{InvalidArgumentError, StreamError};

// =============================================================================
// EagerStream Definition
// =============================================================================

/// An eager, immutable stream over an ordered in-memory sequence.
///
/// Intermediary operations return a new `EagerStream` backed by freshly
/// allocated storage; terminal operations return a scalar or an independent
/// copy of the elements. The receiver is never modified, so a stream stays
/// usable after any number of operations have been chained off it.
///
/// Streams are safe to share across call sites without coordination: no
/// operation touches shared mutable state, and `EagerStream<T>` is
/// `Send`/`Sync` whenever `T` is.
///
/// # Examples
///
/// ```rust
/// use rivulet::stream::EagerStream;
///
/// let stream = EagerStream::from_vec(vec![1, 2, 2, 3]);
/// assert_eq!(stream.distinct().count(), 3);
/// assert_eq!(stream.count(), 4); // Original unchanged
/// ```
#[derive(Clone)]
pub struct EagerStream<T> {
    /// Ordered backing storage, fixed at construction time.
    elements: Vec<T>,
}

impl<T> EagerStream<T> {
    /// Wraps an existing vector into a stream.
    ///
    /// The stream takes ownership of the vector as-is; no copy is made at
    /// construction time. Any input is valid, including an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![1, 2, 3]);
    /// assert_eq!(stream.count(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Creates a new empty stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream: EagerStream<i32> = EagerStream::new();
    /// assert!(stream.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements in this stream.
    ///
    /// This is a terminal operation.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![1, 2, 3]);
    /// assert_eq!(stream.count(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the stream contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let empty: EagerStream<i32> = EagerStream::new();
    /// assert!(empty.is_empty());
    /// assert!(!EagerStream::from_vec(vec![1]).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over references to the elements, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![1, 2, 3]);
    /// let doubled: Vec<i32> = stream.iter().map(|number| number * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> EagerStreamIterator<'_, T> {
        EagerStreamIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns `true` if every element satisfies the given predicate.
    ///
    /// Evaluation short-circuits at the first element for which the
    /// predicate returns `false`. On an empty stream the result is `true`
    /// and the predicate is never invoked (vacuous truth).
    ///
    /// This is a terminal operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![2, 4, 6]);
    /// assert!(stream.all_match(|number| number % 2 == 0));
    /// assert!(!stream.all_match(|number| *number > 2));
    /// ```
    #[must_use]
    pub fn all_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        for element in &self.elements {
            if !predicate(element) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if at least one element satisfies the given predicate.
    ///
    /// Evaluation short-circuits at the first match. On an empty stream the
    /// result is `false` and the predicate is never invoked.
    ///
    /// This is a terminal operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![1, 2, 3]);
    /// assert!(stream.any_match(|number| *number == 2));
    /// assert!(!stream.any_match(|number| *number > 5));
    /// ```
    #[must_use]
    pub fn any_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        for element in &self.elements {
            if predicate(element) {
                return true;
            }
        }
        false
    }

    /// Returns a new stream where each element is replaced by the result of
    /// the transform, preserving order and count exactly.
    ///
    /// This is an intermediary operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![1, 2, 3]);
    /// let strings = stream.map(|number| number.to_string());
    /// assert_eq!(strings.collect(), vec!["1", "2", "3"]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, transform: F) -> EagerStream<U>
    where
        F: FnMut(&T) -> U,
    {
        EagerStream {
            elements: self.elements.iter().map(transform).collect(),
        }
    }
}

impl<T: Clone> EagerStream<T> {
    /// Returns a new stream retaining, in order, every element for which
    /// the predicate returns `true`.
    ///
    /// This is an intermediary operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![1, 2, 3, 4, 5]);
    /// let even = stream.filter(|number| number % 2 == 0);
    /// assert_eq!(even.collect(), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut filtered = Vec::new();
        for element in &self.elements {
            if predicate(element) {
                filtered.push(element.clone());
            }
        }
        Self { elements: filtered }
    }

    /// Returns a new stream without the first `count` elements.
    ///
    /// If `count` is greater than or equal to the stream's length, the
    /// result is empty. The argument is validated before any element is
    /// inspected.
    ///
    /// This is an intermediary operation.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidArgument`] if `count` is zero; the
    /// count has to be a positive integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![1, 2, 3]);
    /// assert_eq!(stream.skip(1).unwrap().collect(), vec![2, 3]);
    /// assert!(stream.skip(4).unwrap().is_empty());
    /// assert!(stream.skip(0).is_err());
    /// ```
    pub fn skip(&self, count: usize) -> Result<Self, StreamError> {
        if count == 0 {
            return Err(StreamError::InvalidArgument(InvalidArgumentError {
                parameter: "count",
            }));
        }

        Ok(Self {
            elements: self.elements.iter().skip(count).cloned().collect(),
        })
    }

    /// Returns an independent copy of the stream's elements, in order.
    ///
    /// Mutating the returned vector affects neither this stream nor any
    /// previously collected copy.
    ///
    /// This is a terminal operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![1, 2, 3]);
    /// let mut collected = stream.collect();
    /// collected.push(4);
    /// assert_eq!(stream.count(), 3); // Stream unaffected
    /// ```
    #[inline]
    #[must_use]
    pub fn collect(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T: Clone + PartialEq> EagerStream<T> {
    /// Returns a new stream keeping only the first occurrence of each
    /// distinct value, in first-seen order.
    ///
    /// Equality is structural (`PartialEq`), not by identity. Each element
    /// is checked against the already-retained ones with a linear scan, so
    /// no `Eq + Hash` bound is required.
    ///
    /// This is an intermediary operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::EagerStream;
    ///
    /// let stream = EagerStream::from_vec(vec![2, 2, 3, 4, 1, 1, 2]);
    /// assert_eq!(stream.distinct().collect(), vec![2, 3, 4, 1]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut unique: Vec<T> = Vec::new();
        for element in &self.elements {
            if !unique.contains(element) {
                unique.push(element.clone());
            }
        }
        Self { elements: unique }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over the elements of an [`EagerStream`].
pub struct EagerStreamIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for EagerStreamIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for EagerStreamIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of an [`EagerStream`].
pub struct EagerStreamIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for EagerStreamIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for EagerStreamIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for EagerStream<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for EagerStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for EagerStream<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> IntoIterator for EagerStream<T> {
    type Item = T;
    type IntoIter = EagerStreamIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        EagerStreamIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a EagerStream<T> {
    type Item = &'a T;
    type IntoIter = EagerStreamIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for EagerStream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for EagerStream<T> {}

impl<T: Hash> Hash for EagerStream<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for EagerStream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

impl<T: fmt::Display> fmt::Display for EagerStream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for EagerStream<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.count()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct EagerStreamVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> EagerStreamVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for EagerStreamVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = EagerStream<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(EagerStream::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for EagerStream<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(EagerStreamVisitor::new())
    }
}

// =============================================================================
// Thread Safety Assertions
// =============================================================================

static_assertions::assert_impl_all!(EagerStream<i32>: Send, Sync);
static_assertions::assert_impl_all!(EagerStream<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
