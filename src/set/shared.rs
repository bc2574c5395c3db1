//! Concurrent set variant.
//!
//! This module provides [`SharedSet`], the lock-guarded set for concurrent
//! callers. One reader/writer lock guards one owned table; every access
//! goes through the lock and no reference to the table ever escapes
//! un-guarded.

use std::fmt;

use parking_lot::RwLock;

use crate::element::{Element, Elements};

use super::Set;
use super::raw::RawSet;

/// A heterogeneous set safe for concurrent callers.
///
/// `SharedSet` exposes the identical [`Set`] contract as
/// [`UnsyncSet`](super::UnsyncSet), guarded by a single reader/writer lock.
/// The lock lives as long as the set; the inner table is exclusively owned
/// and never leaks outside the guard boundary.
///
/// # Locking
///
/// - Pure reads (`cardinality`, `contains`, `to_elements`, and through it
///   `render`) hold the shared (read) lock for the duration of the call.
/// - Mutations (`add`, `remove`, `clear`, `pop`) hold the exclusive (write)
///   lock.
/// - Derived operations (`union`, `intersection`, `complement`,
///   `boxed_clone`, `is_subset_of`, `equals`) compose the primitives above
///   and never hold a lock across the whole composition. Each primitive
///   sub-step is linearizable; the composite is **not** atomic with respect
///   to concurrent mutation, so a mutation interleaved inside it may or may
///   not be reflected in the result.
///
/// No operation blocks indefinitely barring lock contention, and none
/// panics under normal input; `pop` on the empty set returns `None`.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
///
/// use cantor::elements;
/// use cantor::set::{Set, SharedSet};
///
/// let set = Arc::new(SharedSet::new());
///
/// let handles: Vec<_> = (0..4_i64)
///     .map(|value| {
///         let set = Arc::clone(&set);
///         thread::spawn(move || {
///             set.add(elements![value]);
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().expect("Thread panicked");
/// }
///
/// assert_eq!(set.cardinality(), 4);
/// ```
#[derive(Default)]
pub struct SharedSet {
    inner: RwLock<RawSet>,
}

impl SharedSet {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::set::{Set, SharedSet};
    ///
    /// let set = SharedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding every distinct element of the sequence.
    ///
    /// Duplicates in the input collapse; the set ends up with one copy of
    /// each.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, SharedSet};
    ///
    /// let set = SharedSet::from_elements(elements!["a", "b", "a"]);
    /// assert_eq!(set.cardinality(), 2);
    /// ```
    #[must_use]
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        Self {
            inner: RwLock::new(elements.into_iter().collect()),
        }
    }
}

impl Set for SharedSet {
    fn cardinality(&self) -> usize {
        self.inner.read().cardinality()
    }

    fn contains(&self, elements: &[Element]) -> bool {
        self.inner.read().contains_all(elements)
    }

    fn add(&self, elements: Vec<Element>) -> bool {
        self.inner.write().insert_all(elements)
    }

    fn remove(&self, elements: &[Element]) -> bool {
        self.inner.write().remove_all(elements)
    }

    fn clear(&self) {
        self.inner.write().clear();
    }

    fn pop(&self) -> Option<Element> {
        self.inner.write().pop()
    }

    fn to_elements(&self) -> Elements {
        self.inner.read().snapshot()
    }

    fn boxed_clone(&self) -> Box<dyn Set> {
        Box::new(self.clone())
    }

    fn boxed_empty(&self) -> Box<dyn Set> {
        Box::new(Self::new())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Clone for SharedSet {
    /// Snapshots the table under the read lock.
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl FromIterator<Element> for SharedSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl Extend<Element> for SharedSet {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.inner.get_mut().insert_all(iter.into_iter().collect());
    }
}

impl PartialEq for SharedSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for SharedSet {}

impl fmt::Debug for SharedSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.to_elements();
        formatter.debug_set().entries(elements.iter()).finish()
    }
}

impl fmt::Display for SharedSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.render())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SharedSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let elements = self.to_elements();
        let mut seq = serializer.serialize_seq(Some(elements.len()))?;
        for element in elements.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SharedSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for SharedSetVisitor {
    type Value = SharedSet;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicate elements in the wire form collapse on insert.
        let set = SharedSet::new();
        while let Some(element) = seq.next_element()? {
            set.add(vec![element]);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SharedSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SharedSetVisitor)
    }
}

// =============================================================================
// Marker Guarantees
// =============================================================================

static_assertions::assert_impl_all!(SharedSet: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
