//! Runtime type predicates over dynamically typed values.
//!
//! Each predicate answers whether a `&dyn Any` holds a value of one family of
//! types. They are total and never panic.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::equal::Symbol;
//! use typekind::data::predicate::{is_number, is_symbol};
//!
//! assert!(is_symbol(&Symbol::new("key")));
//! assert!(!is_symbol(&"key"));
//! assert!(is_number(&1.5_f32));
//! ```

use std::any::Any;

use super::equal::Symbol;
use super::refinement::Refinement;

/// Whether `value` is a [`Symbol`].
#[must_use]
pub fn is_symbol(value: &dyn Any) -> bool {
    value.is::<Symbol>()
}

/// Whether `value` is a `String` or a `&'static str`.
#[must_use]
pub fn is_string(value: &dyn Any) -> bool {
    value.is::<String>() || value.is::<&'static str>()
}

/// Whether `value` is a primitive integer up to 64 bits or a float.
#[must_use]
pub fn is_number(value: &dyn Any) -> bool {
    value.is::<i8>()
        || value.is::<i16>()
        || value.is::<i32>()
        || value.is::<i64>()
        || value.is::<isize>()
        || value.is::<u8>()
        || value.is::<u16>()
        || value.is::<u32>()
        || value.is::<u64>()
        || value.is::<usize>()
        || value.is::<f32>()
        || value.is::<f64>()
}

/// Whether `value` is a 128-bit integer.
#[must_use]
pub fn is_bigint(value: &dyn Any) -> bool {
    value.is::<i128>() || value.is::<u128>()
}

/// Whether `value` is a `bool`.
#[must_use]
pub fn is_boolean(value: &dyn Any) -> bool {
    value.is::<bool>()
}

/// The refinement from boxed values to [`Symbol`].
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use typekind::data::equal::Symbol;
/// use typekind::data::predicate::symbol_refinement;
///
/// let symbol = symbol_refinement();
/// let boxed: Box<dyn Any> = Box::new(Symbol::new("key"));
///
/// assert_eq!(symbol.refine(boxed).ok(), Some(Symbol::new("key")));
/// assert!(symbol.refine(Box::new(1)).is_err());
/// ```
#[must_use]
pub fn symbol_refinement() -> Refinement<Box<dyn Any>, Symbol> {
    Refinement::downcast("Symbol")
}
