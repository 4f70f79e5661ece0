//! # typekind
//!
//! Type classes over a higher-kinded type encoding, with the concrete data
//! types that implement them.
//!
//! ## Overview
//!
//! Rust has no type constructor polymorphism, so this crate encodes it: a
//! zero-sized *witness* type implements [`TypeLambda`](typeclass::TypeLambda)
//! and names the concrete type for a set of five slots (state, requirements,
//! output, error, value). Type classes are traits on witnesses.
//!
//! - **Type classes**: `Of`, `Covariant`, `FlatMap`, `Monad`, `Composable`,
//!   `Category`, `Extendable`, `Comonad`, `SemiProduct`, `SemiCoproduct`,
//!   `Alt`, `NonEmptyAlternative`, ...
//! - **Data types**: Option, Identity, Result, Vec, Async, pairs, function
//!   arrows, typed records, `Equivalence`, `Refinement`
//! - **Do-notation**: `do_`, `bind`, `bind_to`, `let_` over any witness
//! - **Macros**: [`pipe!`], [`record!`], [`pick!`], [`omit!`],
//!   [`non_empty_tuple!`], [`non_empty_struct!`]
//!
//! ## Feature Flags
//!
//! - `async`: the `Async` data type (default)
//! - `serde`: `Serialize`/`Deserialize` for `Identity` and `Symbol`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use typekind::prelude::*;
//! use typekind::{label, record};
//!
//! label!(Width = "width"; Height = "height"; Area = "area");
//!
//! let started = OptionTypeLambda::bind(OptionTypeLambda::do_(), Width, |_| Some(3));
//! let sized = OptionTypeLambda::bind(started, Height, |_| Some(4));
//! let result = OptionTypeLambda::let_(sized, Area, |record| get(record, Width) * get(record, Height));
//!
//! assert_eq!(result, Some(record! { Width: 3, Height: 4, Area: 12 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type classes, the witnesses and the record helpers.
///
/// # Usage
///
/// ```rust
/// use typekind::prelude::*;
/// ```
pub mod prelude {
    pub use crate::data::struct_::{HCons, HNil, Label, get};
    pub use crate::data::*;
    pub use crate::typeclass::*;
}

pub mod data;
mod internal;
pub mod typeclass;
