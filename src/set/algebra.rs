//! The set capability contract and its shared algebra.
//!
//! This module provides [`Set`], the object-safe trait every set variant
//! implements. The required methods are the primitives each variant backs
//! with its own guard discipline; every derived operation is a provided
//! method composing only those primitives, so the variants cannot diverge
//! algebraically and operands of different variants combine transparently
//! through `&dyn Set`.

use std::fmt;
use std::slice;

use crate::element::{Element, Elements};

use super::IterSession;

/// The capability contract shared by every set variant.
///
/// All methods take `&self`: the single-threaded variant mutates through a
/// `RefCell`, the concurrent variant through a reader/writer lock, and the
/// shared algebra below works identically on both. Algebraic operations
/// accept `&dyn Set` operands and return a boxed set of the receiver's
/// family, so a single-threaded set can be unioned with a concurrent one.
///
/// # Composite operations and concurrency
///
/// On the concurrent variant each *primitive* operation is linearizable,
/// but the derived operations (`union`, `intersection`, `complement`,
/// `equals`, `is_subset_of`, `boxed_clone`) are compositions of primitives
/// and never hold a lock across the whole composition. A mutation
/// interleaved between two sub-steps may or may not be reflected in the
/// result; see the crate-level documentation.
///
/// # Examples
///
/// ```rust
/// use cantor::elements;
/// use cantor::set::{Set, SharedSet, UnsyncSet};
///
/// let primes = UnsyncSet::from_elements(elements![2_i64, 3_i64, 5_i64]);
/// let odds = SharedSet::from_elements(elements![1_i64, 3_i64, 5_i64]);
///
/// // Variants mix freely through the trait.
/// let odd_primes = primes.intersection(&[&odds]);
/// assert_eq!(odd_primes.cardinality(), 2);
/// assert!(odd_primes.contains(&elements![3_i64, 5_i64]));
/// ```
pub trait Set: fmt::Debug {
    // =========================================================================
    // Primitive Operations
    // =========================================================================

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let set = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
    /// assert_eq!(set.cardinality(), 2);
    /// ```
    #[must_use]
    fn cardinality(&self) -> usize;

    /// Returns `true` iff every given element is present.
    ///
    /// Vacuously true for an empty slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let set = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
    /// assert!(set.contains(&elements![1_i64]));
    /// assert!(set.contains(&elements![1_i64, 2_i64]));
    /// assert!(!set.contains(&elements![1_i64, 3_i64]));
    /// assert!(set.contains(&elements![]));
    /// ```
    #[must_use]
    fn contains(&self, elements: &[Element]) -> bool;

    /// Inserts each element not already present.
    ///
    /// **The boolean is batch-level, not per-element**: it is `true` iff
    /// *none* of the given elements already existed. A `false` return says
    /// only that at least one element of the batch was a duplicate, never
    /// which one; elements that were new have still been inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let set = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
    /// assert!(set.add(elements![3_i64, 4_i64]));
    /// assert!(!set.add(elements![1_i64, 5_i64])); // 1 was a duplicate; 5 went in
    /// assert_eq!(set.cardinality(), 5);
    /// ```
    fn add(&self, elements: Vec<Element>) -> bool;

    /// Deletes each given element if present.
    ///
    /// **The boolean is batch-level, not per-element**: it is `true` iff
    /// *every* given element existed prior to removal. A `false` return says
    /// only that at least one element of the batch was absent, never which
    /// one; elements that were present have still been removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let set = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
    /// assert!(!set.remove(&elements![1_i64, 4_i64])); // 4 was absent; 1 is gone
    /// assert!(set.remove(&elements![2_i64]));
    /// assert!(set.is_empty());
    /// ```
    fn remove(&self, elements: &[Element]) -> bool;

    /// Removes all elements, leaving the empty set.
    fn clear(&self);

    /// Removes and returns one arbitrarily-chosen element.
    ///
    /// Returns `None` on the empty set; absence is a sentinel, not an
    /// error. Selection order is unspecified and need not be stable across
    /// calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let set = UnsyncSet::from_elements(elements![1_i64]);
    /// assert!(set.pop().is_some());
    /// assert_eq!(set.pop(), None);
    /// ```
    fn pop(&self) -> Option<Element>;

    /// Materializes all elements in unspecified order.
    ///
    /// The empty set yields an empty sequence, never an absent result.
    #[must_use]
    fn to_elements(&self) -> Elements;

    /// Returns a new, independently-mutable set with the same elements and
    /// the same implementation family.
    #[must_use]
    fn boxed_clone(&self) -> Box<dyn Set>;

    /// Returns an empty set of the receiver's implementation family.
    ///
    /// This is the result constructor the algebraic operations use.
    #[must_use]
    fn boxed_empty(&self) -> Box<dyn Set>;

    // =========================================================================
    // Derived Operations
    // =========================================================================

    /// Returns `true` if the set has no elements.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }

    /// Returns `true` if the set has exactly one element.
    #[must_use]
    fn is_singleton(&self) -> bool {
        self.cardinality() == 1
    }

    /// Returns `true` iff every element of the receiver is contained in
    /// `other`.
    ///
    /// Short-circuits false when the receiver's cardinality exceeds the
    /// other's. The empty set is a subset of any set; every set is a subset
    /// of itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let small = UnsyncSet::from_elements(elements![1_i64, 3_i64]);
    /// let large = UnsyncSet::from_elements(elements![1_i64, 2_i64, 3_i64, 4_i64]);
    /// assert!(small.is_subset_of(&large));
    /// assert!(!large.is_subset_of(&small));
    /// assert!(large.is_subset_of(&large));
    /// ```
    #[must_use]
    fn is_subset_of(&self, other: &dyn Set) -> bool {
        if self.cardinality() > other.cardinality() {
            return false;
        }
        other.contains(self.to_elements().as_slice())
    }

    /// Returns `true` iff both sets have the same cardinality and contain
    /// the same elements.
    ///
    /// Insertion order and implementation family are irrelevant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let left = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
    /// let right = UnsyncSet::from_elements(elements![2_i64, 1_i64]);
    /// assert!(left.equals(&right));
    /// assert!(!left.equals(&UnsyncSet::from_elements(elements![1_i64])));
    /// ```
    #[must_use]
    fn equals(&self, other: &dyn Set) -> bool {
        if other.cardinality() != self.cardinality() {
            return false;
        }
        self.contains(other.to_elements().as_slice())
    }

    /// Returns the union of the receiver and every operand: a clone of the
    /// receiver with every operand's elements inserted, in operand order.
    ///
    /// Duplicates across operands collapse naturally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let left = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
    /// let right = UnsyncSet::from_elements(elements![2_i64, 3_i64]);
    ///
    /// let union = left.union(&[&right]);
    /// assert_eq!(union.cardinality(), 3);
    /// assert!(union.contains(&elements![1_i64, 2_i64, 3_i64]));
    /// ```
    #[must_use]
    fn union(&self, others: &[&dyn Set]) -> Box<dyn Set> {
        let result = self.boxed_clone();
        for other in others {
            result.add(other.to_elements().into_vec());
        }
        result
    }

    /// Returns the intersection of the receiver and every operand.
    ///
    /// The participant with the smallest cardinality becomes the scan base
    /// (ties resolve to the first encountered, the receiver before any
    /// operand), bounding the cost by the smallest set. Each base element
    /// found in every other participant lands in a fresh set of the
    /// receiver's family. With zero operands the scan base is the receiver
    /// and there is nothing to fail membership against, so the result is a
    /// clone of the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let left = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
    /// let right = UnsyncSet::from_elements(elements![2_i64, 3_i64]);
    ///
    /// let intersection = left.intersection(&[&right]);
    /// assert_eq!(intersection.cardinality(), 1);
    /// assert!(intersection.contains(&elements![2_i64]));
    ///
    /// let clone = left.intersection(&[]);
    /// assert!(clone.equals(&left));
    /// ```
    #[must_use]
    fn intersection(&self, others: &[&dyn Set]) -> Box<dyn Set> {
        // Scan-base selection: strict `<` keeps the first-encountered
        // participant on ties, the receiver before any operand.
        let mut base_index = None;
        let mut base_cardinality = self.cardinality();
        for (index, other) in others.iter().enumerate() {
            let cardinality = other.cardinality();
            if cardinality < base_cardinality {
                base_cardinality = cardinality;
                base_index = Some(index);
            }
        }

        let base_elements = match base_index {
            Some(index) => others[index].to_elements(),
            None => self.to_elements(),
        };

        let result = self.boxed_empty();
        'scan: for element in base_elements {
            if base_index.is_some() && !self.contains(slice::from_ref(&element)) {
                continue 'scan;
            }
            for (index, other) in others.iter().enumerate() {
                if base_index == Some(index) {
                    continue;
                }
                if !other.contains(slice::from_ref(&element)) {
                    continue 'scan;
                }
            }
            result.add(vec![element]);
        }
        result
    }

    /// Returns the relative complement (set difference): a clone of the
    /// receiver with every element present in any operand removed, applied
    /// in operand order.
    ///
    /// Removing a non-member is a no-op per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let full = UnsyncSet::from_elements(elements![1_i64, 2_i64, 3_i64, 4_i64]);
    /// let odd = UnsyncSet::from_elements(elements![1_i64, 3_i64]);
    ///
    /// let even = full.complement(&[&odd]);
    /// assert_eq!(even.cardinality(), 2);
    /// assert!(even.contains(&elements![2_i64, 4_i64]));
    /// ```
    #[must_use]
    fn complement(&self, others: &[&dyn Set]) -> Box<dyn Set> {
        let result = self.boxed_clone();
        for other in others {
            result.remove(other.to_elements().as_slice());
        }
        result
    }

    /// Renders the set as `{e1,e2,...}`.
    ///
    /// Element order is unspecified; the empty set renders `{}`. Element
    /// text comes from each element's `Display` form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let singleton = UnsyncSet::from_elements(elements![7_i64]);
    /// assert_eq!(singleton.render(), "{7}");
    ///
    /// let empty = UnsyncSet::new();
    /// assert_eq!(empty.render(), "{}");
    /// ```
    #[must_use]
    fn render(&self) -> String {
        let rendered: Vec<String> = self
            .to_elements()
            .iter()
            .map(|element| element.to_string())
            .collect();
        format!("{{{}}}", rendered.join(","))
    }

    /// Starts a snapshot traversal of the set.
    ///
    /// The session captures the elements at this instant; later mutations
    /// are never observed. Callers abandoning a partially-consumed session
    /// should call [`IterSession::stop`] on all exit paths; see the session
    /// type for the full contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::elements;
    /// use cantor::set::{Set, UnsyncSet};
    ///
    /// let set = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
    /// let mut session = set.iter_session();
    /// let mut seen = 0;
    /// for _element in session.by_ref() {
    ///     seen += 1;
    /// }
    /// session.stop();
    /// assert_eq!(seen, 2);
    /// ```
    #[must_use]
    fn iter_session(&self) -> IterSession {
        IterSession::new(self.to_elements().into_vec())
    }
}
