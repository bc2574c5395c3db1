//! Mutable mathematical sets over dynamically typed elements.
//!
//! This module provides the set variants and the operations shared
//! between them:
//!
//! - [`Set`]: The object-safe trait carrying the full set contract
//! - [`UnsyncSet`]: Single-threaded variant, no locking overhead
//! - [`SharedSet`]: Concurrent variant guarded by a reader/writer lock
//! - [`IterSession`]: Stoppable streaming iteration over a snapshot
//!
//! # Choosing a Variant
//!
//! Both variants implement [`Set`] and are interchangeable behind
//! `&dyn Set`; algebraic operations mix them freely. [`UnsyncSet`]
//! is the default choice and the faster one. Reach for [`SharedSet`]
//! only when the set itself is shared between threads.
//!
//! # Examples
//!
//! ## `UnsyncSet`
//!
//! ```rust
//! use cantor::elements;
//! use cantor::set::{Set, UnsyncSet};
//!
//! let set = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
//! assert_eq!(set.cardinality(), 2);
//!
//! // Adding an element already present reports the duplicate.
//! assert!(!set.add(elements![1_i64]));
//! assert_eq!(set.cardinality(), 2);
//! ```
//!
//! ## `SharedSet`
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//!
//! use cantor::elements;
//! use cantor::set::{Set, SharedSet};
//!
//! let set = Arc::new(SharedSet::new());
//! let worker = {
//!     let set = Arc::clone(&set);
//!     thread::spawn(move || {
//!         set.add(elements!["from the worker"]);
//!     })
//! };
//! worker.join().expect("Thread panicked");
//!
//! assert!(set.contains(&elements!["from the worker"]));
//! ```
//!
//! ## Algebra Across Variants
//!
//! ```rust
//! use cantor::elements;
//! use cantor::set::{Set, SharedSet, UnsyncSet};
//!
//! let local = UnsyncSet::from_elements(elements![1_i64, 2_i64]);
//! let shared = SharedSet::from_elements(elements![2_i64, 3_i64]);
//!
//! let union = local.union(&[&shared]);
//! assert_eq!(union.cardinality(), 3);
//! ```

// =============================================================================
// Hash Builder Type Alias
// =============================================================================

/// Hash state builder for the element tables.
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// a fast non-cryptographic hasher suited to small keys.
///
/// When the `ahash` feature is enabled (and `fxhash` is not), this is
/// `ahash::RandomState`, which keeps DoS resistance while outperforming
/// the standard hasher.
///
/// When neither feature is enabled (default), this is the standard
/// library's `RandomState` (SipHash 1-3).
#[cfg(feature = "fxhash")]
pub(crate) type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod algebra;
mod iter;
mod raw;
mod shared;
mod unsync;

pub use algebra::Set;
pub use iter::IterSession;
pub use shared::SharedSet;
pub use unsync::UnsyncSet;

// =============================================================================
// Tests
// =============================================================================
