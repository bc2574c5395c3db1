//! Heterogeneous set elements.
//!
//! This module provides [`Element`], the value type stored by every set in
//! this crate, together with its identity model (equality and hashing) and
//! its textual form.
//!
//! # Overview
//!
//! Sets in this crate are heterogeneous: one set may hold integers, strings,
//! booleans, floats, and complex numbers side by side. `Element` is the
//! closed union of every payload type the crate supports. Identity is
//! variant plus value, so `Element::I8(1)` and `Element::I16(1)` are two
//! distinct elements even though both print as `1`.
//!
//! # Float identity
//!
//! Floating-point payloads compare and hash by bit pattern, which keeps
//! `Eq` and `Hash` lawful for use as a hash-table key:
//!
//! - two `NaN`s with the same bit pattern are one element;
//! - `0.0` and `-0.0` have different bit patterns and are two elements.
//!
//! # Examples
//!
//! ```rust
//! use cantor::element::Element;
//!
//! let int = Element::from(42_i64);
//! let text = Element::from("forty-two");
//!
//! assert_eq!(int.to_string(), "42");
//! assert_eq!(text.to_string(), "forty-two");
//! assert_ne!(Element::from(1_i8), Element::from(1_i16));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use paste::paste;

mod macros;
mod projection;

pub use projection::Elements;
pub use projection::ProjectionError;

// =============================================================================
// Complex Payloads
// =============================================================================

/// A complex number with `f32` components.
///
/// The crate models complex values as plain `{ re, im }` pairs; no arithmetic
/// is provided because sets only need identity and rendering.
///
/// # Examples
///
/// ```rust
/// use cantor::element::Complex32;
///
/// let value = Complex32::new(1.0, 2.0);
/// assert_eq!(value.to_string(), "(1+2i)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex32 {
    /// Real component.
    pub re: f32,
    /// Imaginary component.
    pub im: f32,
}

impl Complex32 {
    /// Creates a complex number from its real and imaginary components.
    #[inline]
    #[must_use]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex32 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}{:+}i)", self.re, self.im)
    }
}

/// A complex number with `f64` components.
///
/// # Examples
///
/// ```rust
/// use cantor::element::Complex64;
///
/// let value = Complex64::new(3.5, -1.0);
/// assert_eq!(value.to_string(), "(3.5-1i)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex64 {
    /// Real component.
    pub re: f64,
    /// Imaginary component.
    pub im: f64,
}

impl Complex64 {
    /// Creates a complex number from its real and imaginary components.
    #[inline]
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}{:+}i)", self.re, self.im)
    }
}

// =============================================================================
// Element Definition
// =============================================================================

/// A dynamically-typed set element.
///
/// `Element` is the closed union of every payload type a set can hold.
/// Values of different variants never compare equal, so mixed-type sets
/// behave exactly like maps keyed by dynamic type plus value.
///
/// Construction normally goes through `From`, which exists for every payload
/// type (and `&str`), or through the [`elements!`](crate::elements) macro:
///
/// ```rust
/// use cantor::element::Element;
/// use cantor::elements;
///
/// let mixed = elements![1_i32, "one", true];
/// assert_eq!(mixed[0], Element::I32(1));
/// assert_eq!(mixed[1], Element::Str("one".to_string()));
/// assert_eq!(mixed[2], Element::Bool(true));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// Signed 8-bit integer.
    I8(i8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 32-bit float, identified by bit pattern.
    F32(f32),
    /// 64-bit float, identified by bit pattern.
    F64(f64),
    /// Complex number with `f32` components.
    Complex32(Complex32),
    /// Complex number with `f64` components.
    Complex64(Complex64),
    /// Boolean.
    Bool(bool),
    /// Owned string.
    Str(String),
}

impl Element {
    /// Returns the name of this element's payload type.
    ///
    /// Used by projection errors to describe what was actually found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cantor::element::Element;
    ///
    /// assert_eq!(Element::from(1_u16).type_name(), "u16");
    /// assert_eq!(Element::from("x").type_name(), "string");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Complex32(_) => "complex32",
            Self::Complex64(_) => "complex64",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
        }
    }
}

// =============================================================================
// Identity
// =============================================================================

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::I8(left), Self::I8(right)) => left == right,
            (Self::I16(left), Self::I16(right)) => left == right,
            (Self::I32(left), Self::I32(right)) => left == right,
            (Self::I64(left), Self::I64(right)) => left == right,
            (Self::U8(left), Self::U8(right)) => left == right,
            (Self::U16(left), Self::U16(right)) => left == right,
            (Self::U32(left), Self::U32(right)) => left == right,
            (Self::U64(left), Self::U64(right)) => left == right,
            (Self::F32(left), Self::F32(right)) => left.to_bits() == right.to_bits(),
            (Self::F64(left), Self::F64(right)) => left.to_bits() == right.to_bits(),
            (Self::Complex32(left), Self::Complex32(right)) => {
                left.re.to_bits() == right.re.to_bits() && left.im.to_bits() == right.im.to_bits()
            }
            (Self::Complex64(left), Self::Complex64(right)) => {
                left.re.to_bits() == right.re.to_bits() && left.im.to_bits() == right.im.to_bits()
            }
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::I8(value) => value.hash(state),
            Self::I16(value) => value.hash(state),
            Self::I32(value) => value.hash(state),
            Self::I64(value) => value.hash(state),
            Self::U8(value) => value.hash(state),
            Self::U16(value) => value.hash(state),
            Self::U32(value) => value.hash(state),
            Self::U64(value) => value.hash(state),
            Self::F32(value) => value.to_bits().hash(state),
            Self::F64(value) => value.to_bits().hash(state),
            Self::Complex32(value) => {
                value.re.to_bits().hash(state);
                value.im.to_bits().hash(state);
            }
            Self::Complex64(value) => {
                value.re.to_bits().hash(state);
                value.im.to_bits().hash(state);
            }
            Self::Bool(value) => value.hash(state),
            Self::Str(value) => value.hash(state),
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(value) => write!(formatter, "{value}"),
            Self::I16(value) => write!(formatter, "{value}"),
            Self::I32(value) => write!(formatter, "{value}"),
            Self::I64(value) => write!(formatter, "{value}"),
            Self::U8(value) => write!(formatter, "{value}"),
            Self::U16(value) => write!(formatter, "{value}"),
            Self::U32(value) => write!(formatter, "{value}"),
            Self::U64(value) => write!(formatter, "{value}"),
            Self::F32(value) => write!(formatter, "{value}"),
            Self::F64(value) => write!(formatter, "{value}"),
            Self::Complex32(value) => write!(formatter, "{value}"),
            Self::Complex64(value) => write!(formatter, "{value}"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_numeric_conversions {
    ($($payload:ident),* $(,)?) => {
        paste! {
            $(
                impl From<$payload> for Element {
                    #[inline]
                    fn from(value: $payload) -> Self {
                        Self::[<$payload:upper>](value)
                    }
                }
            )*
        }
    };
}

impl_numeric_conversions!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<Complex32> for Element {
    #[inline]
    fn from(value: Complex32) -> Self {
        Self::Complex32(value)
    }
}

impl From<Complex64> for Element {
    #[inline]
    fn from(value: Complex64) -> Self {
        Self::Complex64(value)
    }
}

impl From<bool> for Element {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Element {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Element {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

// =============================================================================
// Marker Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Element: Send, Sync, Clone);
static_assertions::assert_impl_all!(Complex32: Send, Sync, Copy);
static_assertions::assert_impl_all!(Complex64: Send, Sync, Copy);

// =============================================================================
// Tests
// =============================================================================
