//! The `elements!` macro for building element vectors.
//!
//! This module provides the [`elements!`](crate::elements) macro, the
//! variadic-construction ergonomics for heterogeneous sets.

/// Builds a `Vec<Element>` from zero or more values of any payload type.
///
/// Every argument is converted through [`Element::from`], so integers,
/// floats, booleans, strings, and complex payloads can be mixed freely in
/// one invocation. The resulting vector feeds `from_elements`, `add`,
/// `remove`, and `contains` on any set.
///
/// # Syntax
///
/// - `elements![]` - The empty vector
/// - `elements![a]` - One converted element
/// - `elements![a, b, c]` - Converted elements in argument order
///
/// # Examples
///
/// ## Mixed payload types
///
/// ```rust
/// use cantor::element::Element;
/// use cantor::elements;
///
/// let mixed = elements![1_i32, "one", true];
/// assert_eq!(
///     mixed,
///     vec![
///         Element::I32(1),
///         Element::Str("one".to_string()),
///         Element::Bool(true),
///     ],
/// );
/// ```
///
/// ## Seeding a set
///
/// ```rust
/// use cantor::elements;
/// use cantor::set::{Set, UnsyncSet};
///
/// let set = UnsyncSet::from_elements(elements![1_i64, 2_i64, 2_i64]);
/// assert_eq!(set.cardinality(), 2);
/// ```
///
/// [`Element::from`]: crate::element::Element
#[macro_export]
macro_rules! elements {
    // No arguments: the empty vector
    () => {
        ::std::vec::Vec::<$crate::element::Element>::new()
    };

    // One or more arguments: convert each in order
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::element::Element::from($value)),+]
    };
}
