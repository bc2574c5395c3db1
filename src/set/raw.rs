//! Crate-private backing store shared by both set variants.
//!
//! [`RawSet`] owns the hash table and implements the primitive contract
//! with plain `&mut self` methods; the public variants wrap it in their
//! respective guards (`RefCell` or `RwLock`) and never expose it.

use std::collections::HashMap;

use crate::element::{Element, Elements};

use super::DefaultHashBuilder;

/// The unique-element table: a map from element identity to presence.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawSet {
    table: HashMap<Element, (), DefaultHashBuilder>,
}

impl RawSet {
    pub(crate) fn cardinality(&self) -> usize {
        self.table.len()
    }

    /// True iff every given element is present; vacuously true for an empty
    /// slice.
    pub(crate) fn contains_all(&self, elements: &[Element]) -> bool {
        elements.iter().all(|element| self.table.contains_key(element))
    }

    /// Inserts each element not already present. Returns true iff none of
    /// the given elements already existed.
    pub(crate) fn insert_all(&mut self, elements: Vec<Element>) -> bool {
        let mut duplicate = false;
        for element in elements {
            if self.table.insert(element, ()).is_some() {
                duplicate = true;
            }
        }
        !duplicate
    }

    /// Deletes each given element if present. Returns true iff every given
    /// element existed prior to removal; present elements are removed even
    /// when the batch reports false.
    pub(crate) fn remove_all(&mut self, elements: &[Element]) -> bool {
        let mut absent = false;
        for element in elements {
            if self.table.remove(element).is_none() {
                absent = true;
            }
        }
        !absent
    }

    pub(crate) fn clear(&mut self) {
        self.table.clear();
    }

    /// Removes and returns one arbitrarily-chosen element, `None` on the
    /// empty table. Selection follows hash-table iteration order and is not
    /// stable across calls.
    pub(crate) fn pop(&mut self) -> Option<Element> {
        let element = self.table.keys().next().cloned()?;
        self.table.remove(&element);
        Some(element)
    }

    /// Materializes every element, in unspecified order.
    pub(crate) fn snapshot(&self) -> Elements {
        self.table.keys().cloned().collect()
    }
}

impl FromIterator<Element> for RawSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().map(|element| (element, ())).collect(),
        }
    }
}
