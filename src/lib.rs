//! # cantor
//!
//! An in-memory mathematical set library over dynamically typed elements.
//!
//! ## Overview
//!
//! This library provides unordered collections of distinct values drawn
//! from a closed universe of primitive payload types. It includes:
//!
//! - **Elements**: A tagged value type covering integers, floats, complex
//!   numbers, booleans, and strings
//! - **Set Variants**: [`UnsyncSet`](set::UnsyncSet) for single-threaded use,
//!   [`SharedSet`](set::SharedSet) guarded by a reader/writer lock
//! - **Set Algebra**: Union, intersection, complement, subset and equality
//!   tests, usable across variants through `&dyn Set`
//! - **Streaming Iteration**: Stoppable element streams over point-in-time
//!   snapshots
//! - **Projections**: Fail-fast extraction of homogeneous `Vec<T>` from
//!   mixed element sequences
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization of elements and sets as plain sequences
//! - `fxhash`: Drive the element tables with `rustc-hash`
//! - `ahash`: Drive the element tables with `ahash` (ignored when `fxhash`
//!   is also enabled)
//!
//! ## Example
//!
//! ```rust
//! use cantor::elements;
//! use cantor::set::{Set, UnsyncSet};
//!
//! let required = UnsyncSet::from_elements(elements!["biology", "chemistry"]);
//! let enrolled = UnsyncSet::from_elements(elements!["biology", "history"]);
//!
//! let everything = required.union(&[&enrolled]);
//! assert_eq!(everything.cardinality(), 3);
//!
//! let overlap = required.intersection(&[&enrolled]);
//! assert!(overlap.contains(&elements!["biology"]));
//! assert_eq!(overlap.render(), "{biology}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use cantor::prelude::*;
/// ```
pub mod prelude {

    pub use crate::element::{Complex32, Complex64, Element, Elements, ProjectionError};

    pub use crate::set::{IterSession, Set, SharedSet, UnsyncSet};
}

pub mod element;

pub mod set;
