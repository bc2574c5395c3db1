//! Materialized element sequences and typed projections.
//!
//! This module provides [`Elements`], the sequence type returned by
//! `to_elements` on every set, and [`ProjectionError`], the one recoverable
//! failure in the crate.
//!
//! # Overview
//!
//! A set materializes to an `Elements` in unspecified order. When the caller
//! knows the set is homogeneous, a typed projection converts the whole
//! sequence into a `Vec` of the payload type in one pass; the first element
//! of any other payload type fails the projection and the error names it.
//!
//! # Examples
//!
//! ```rust
//! use cantor::element::Elements;
//! use cantor::elements;
//!
//! let homogeneous = Elements::from(elements![1_i64, 2_i64, 3_i64]);
//! assert_eq!(homogeneous.into_i64s().unwrap(), vec![1, 2, 3]);
//!
//! let mixed = Elements::from(elements![1_i64, "two"]);
//! let error = mixed.into_i64s().unwrap_err();
//! assert_eq!(error.expected, "i64");
//! ```

use std::fmt;
use std::slice;
use std::vec;

use paste::paste;

use super::{Complex32, Complex64, Element};

// =============================================================================
// ProjectionError
// =============================================================================

/// A failed typed projection.
///
/// Produced when a projection encounters an element whose payload type does
/// not match the requested type. The error carries the offending element, so
/// callers can report or recover from exactly the value that broke the
/// batch.
///
/// # Examples
///
/// ```rust
/// use cantor::element::{Element, Elements};
/// use cantor::elements;
///
/// let error = Elements::from(elements![true, 3_u8]).into_bools().unwrap_err();
/// assert_eq!(error.expected, "bool");
/// assert_eq!(error.value, Element::U8(3));
/// assert_eq!(
///     error.to_string(),
///     "projection to bool failed: incompatible element 3 of type u8",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionError {
    /// Name of the requested payload type.
    pub expected: &'static str,
    /// The element that does not match the requested type.
    pub value: Element,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "projection to {} failed: incompatible element {} of type {}",
            self.expected,
            self.value,
            self.value.type_name()
        )
    }
}

impl std::error::Error for ProjectionError {}

// =============================================================================
// Elements Definition
// =============================================================================

/// A materialized sequence of set elements.
///
/// `Elements` is what `to_elements` returns: every element of the set, in
/// unspecified order. It offers slice access, iteration, and one consuming
/// typed projection per payload type.
///
/// An `Elements` built directly from a `Vec` (as opposed to a set snapshot)
/// preserves that vector's order and duplicates; deduplication happens in
/// sets, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Elements(Vec<Element>);

impl Elements {
    /// Returns the number of elements in the sequence.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the sequence as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        self.0.as_slice()
    }

    /// Iterates over the elements by reference.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Element> {
        self.0.iter()
    }

    /// Consumes the sequence and returns the backing vector.
    ///
    /// This is the untyped escape hatch: every element keeps its dynamic
    /// payload type.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<Element> {
        self.0
    }
}

// =============================================================================
// Typed Projections
// =============================================================================

macro_rules! impl_numeric_projections {
    ($($payload:ident),* $(,)?) => {
        paste! {
            impl Elements {
                $(
                    #[doc = concat!(
                        "Projects every element into `", stringify!($payload),
                        "`, consuming the sequence.",
                    )]
                    #[doc = ""]
                    #[doc = "Fails on the first element of any other payload type; \
                             the error names the offending element. The empty \
                             sequence projects to an empty vector."]
                    pub fn [<into_ $payload s>](self) -> Result<Vec<$payload>, ProjectionError> {
                        let mut result = Vec::with_capacity(self.0.len());
                        for element in self.0 {
                            match element {
                                Element::[<$payload:upper>](value) => result.push(value),
                                other => {
                                    return Err(ProjectionError {
                                        expected: stringify!($payload),
                                        value: other,
                                    });
                                }
                            }
                        }
                        Ok(result)
                    }
                )*
            }
        }
    };
}

impl_numeric_projections!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl Elements {
    /// Projects every element into [`Complex32`], consuming the sequence.
    ///
    /// Fails on the first element of any other payload type; the error names
    /// the offending element.
    pub fn into_complex32s(self) -> Result<Vec<Complex32>, ProjectionError> {
        let mut result = Vec::with_capacity(self.0.len());
        for element in self.0 {
            match element {
                Element::Complex32(value) => result.push(value),
                other => {
                    return Err(ProjectionError {
                        expected: "complex32",
                        value: other,
                    });
                }
            }
        }
        Ok(result)
    }

    /// Projects every element into [`Complex64`], consuming the sequence.
    ///
    /// Fails on the first element of any other payload type; the error names
    /// the offending element.
    pub fn into_complex64s(self) -> Result<Vec<Complex64>, ProjectionError> {
        let mut result = Vec::with_capacity(self.0.len());
        for element in self.0 {
            match element {
                Element::Complex64(value) => result.push(value),
                other => {
                    return Err(ProjectionError {
                        expected: "complex64",
                        value: other,
                    });
                }
            }
        }
        Ok(result)
    }

    /// Projects every element into `bool`, consuming the sequence.
    ///
    /// Fails on the first element of any other payload type; the error names
    /// the offending element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::element::Elements;
    /// use cantor::elements;
    ///
    /// let flags = Elements::from(elements![true, false]);
    /// assert_eq!(flags.into_bools().unwrap(), vec![true, false]);
    /// ```
    pub fn into_bools(self) -> Result<Vec<bool>, ProjectionError> {
        let mut result = Vec::with_capacity(self.0.len());
        for element in self.0 {
            match element {
                Element::Bool(value) => result.push(value),
                other => {
                    return Err(ProjectionError {
                        expected: "bool",
                        value: other,
                    });
                }
            }
        }
        Ok(result)
    }

    /// Projects every element into `String`, consuming the sequence.
    ///
    /// Fails on the first element of any other payload type; the error names
    /// the offending element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::element::Elements;
    /// use cantor::elements;
    ///
    /// let words = Elements::from(elements!["alpha", "beta"]);
    /// assert_eq!(words.into_strings().unwrap(), vec!["alpha", "beta"]);
    /// ```
    pub fn into_strings(self) -> Result<Vec<String>, ProjectionError> {
        let mut result = Vec::with_capacity(self.0.len());
        for element in self.0 {
            match element {
                Element::Str(value) => result.push(value),
                other => {
                    return Err(ProjectionError {
                        expected: "string",
                        value: other,
                    });
                }
            }
        }
        Ok(result)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl From<Vec<Element>> for Elements {
    #[inline]
    fn from(elements: Vec<Element>) -> Self {
        Self(elements)
    }
}

impl FromIterator<Element> for Elements {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Elements {
    type Item = Element;
    type IntoIter = vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a Element;
    type IntoIter = slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
