//! Single-threaded set variant.
//!
//! This module provides [`UnsyncSet`], the set for single-threaded (or
//! externally-synchronized) use. It carries no internal synchronization;
//! instead of documenting concurrent use as undefined, the type is `!Sync`,
//! so the compiler rejects sharing it across threads outright.

use std::cell::RefCell;
use std::fmt;

use crate::element::{Element, Elements};

use super::Set;
use super::raw::RawSet;

/// A heterogeneous set for single-threaded use.
///
/// `UnsyncSet` implements the full [`Set`] contract through interior
/// mutability (`RefCell`), which is what lets one trait serve both this
/// variant and the lock-guarded [`SharedSet`](super::SharedSet) with
/// identical `&self` signatures. The cell is never borrowed across a call
/// into foreign code, so the usual reentrancy hazards do not arise.
///
/// The type is `Send` but deliberately `!Sync`: moving a set into another
/// thread is fine, sharing one between threads is a compile error. Use
/// [`SharedSet`](super::SharedSet) for concurrent callers.
///
/// # Examples
///
/// ```rust
/// use cantor::elements;
/// use cantor::set::{Set, UnsyncSet};
///
/// let set = UnsyncSet::from_elements(elements![1_i64, "one", true]);
/// assert_eq!(set.cardinality(), 3);
/// assert!(set.contains(&elements!["one"]));
///
/// set.add(elements![2_i64]);
/// assert!(set.remove(&elements![true]));
/// assert_eq!(set.cardinality(), 3);
/// ```
#[derive(Clone, Default)]
pub struct UnsyncSet {
    inner: RefCell<RawSet>,
}

impl UnsyncSet {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let set = UnsyncSet::new();
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
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let set = UnsyncSet::from_elements(elements![1_i64, 2_i64, 2_i64]);
    /// assert_eq!(set.cardinality(), 2);
    /// ```
    #[must_use]
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        Self {
            inner: RefCell::new(elements.into_iter().collect()),
        }
    }
}

impl Set for UnsyncSet {
    fn cardinality(&self) -> usize {
        self.inner.borrow().cardinality()
    }

    fn contains(&self, elements: &[Element]) -> bool {
        self.inner.borrow().contains_all(elements)
    }

    fn add(&self, elements: Vec<Element>) -> bool {
        self.inner.borrow_mut().insert_all(elements)
    }

    fn remove(&self, elements: &[Element]) -> bool {
        self.inner.borrow_mut().remove_all(elements)
    }

    fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    fn pop(&self) -> Option<Element> {
        self.inner.borrow_mut().pop()
    }

    fn to_elements(&self) -> Elements {
        self.inner.borrow().snapshot()
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

impl FromIterator<Element> for UnsyncSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl Extend<Element> for UnsyncSet {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.inner.get_mut().insert_all(iter.into_iter().collect());
    }
}

impl PartialEq for UnsyncSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for UnsyncSet {}

impl fmt::Debug for UnsyncSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.to_elements();
        formatter.debug_set().entries(elements.iter()).finish()
    }
}

impl fmt::Display for UnsyncSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.render())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for UnsyncSet {
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
struct UnsyncSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for UnsyncSetVisitor {
    type Value = UnsyncSet;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicate elements in the wire form collapse on insert.
        let set = UnsyncSet::new();
        while let Some(element) = seq.next_element()? {
            set.add(vec![element]);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnsyncSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UnsyncSetVisitor)
    }
}

// =============================================================================
// Marker Guarantees
// =============================================================================

static_assertions::assert_impl_all!(UnsyncSet: Send);
static_assertions::assert_not_impl_any!(UnsyncSet: Sync);

// =============================================================================
// Tests
// =============================================================================
