//! Type class traits for functional programming abstractions.
//!
//! Every trait here is stated against the [`Kind`] encoding and implemented
//! on zero-sized witness types (see [`crate::data`]). Operations are
//! associated functions, called through the witness:
//!
//! ```rust
//! use typekind::data::OptionTypeLambda;
//! use typekind::typeclass::{Covariant, FlatMap, Of};
//!
//! let result = OptionTypeLambda::flat_map(OptionTypeLambda::of(20), |n| {
//!     OptionTypeLambda::map(Some(n), |m| m + 22)
//! });
//! assert_eq!(result, Some(42));
//! ```
//!
//! ## Channels
//!
//! Each trait is generic over the channels it leaves untouched
//! (`Covariant<S, R, O, E>` maps only the value). A witness implements a
//! trait for the channel values it supports, and the compiler infers them
//! from that implementation at call sites.
//!
//! ## Primitive type classes
//!
//! - [`Of`]: lift a pure value
//! - [`Covariant`]: map the value channel
//! - [`FlatMap`]: sequence dependent computations
//! - [`Composable`]: compose arrows
//! - [`Extendable`]: comonadic extension
//! - [`SemiProduct`]: pair independent computations
//! - [`SemiCoproduct`]: choose between computations
//! - [`Bicovariant`]: map the error and value channels
//!
//! ## Derived type classes
//!
//! - [`Pointed`] = `Covariant` + `Of`
//! - [`Monad`] = `FlatMap` + `Pointed`
//! - [`Chainable`] = `FlatMap` + `Covariant` (Do-notation `bind`)
//! - [`Category`] = `Composable` + `identity`
//! - [`Comonad`] = `Extendable` + `extract`
//! - [`Product`] = `SemiProduct` + `Of` + `product_all`
//! - [`Coproduct`] = `SemiCoproduct` + `zero`
//! - [`Alt`], [`NonEmptyAlternative`] = `SemiCoproduct` + `Covariant`
//! - [`Alternative`] = `NonEmptyAlternative` + `Coproduct` + `Of`

mod alternative;
mod bicovariant;
mod category;
mod chainable;
mod comonad;
mod compose;
mod coproduct;
mod covariant;
mod extend;
mod flat_map;
mod kind;
mod monad;
mod non_empty;
mod of;
mod pointed;
mod product;
mod semi_coproduct;
mod semi_product;

pub use alternative::{Alt, Alternative, NonEmptyAlternative};
pub use bicovariant::Bicovariant;
pub use category::Category;
pub use chainable::Chainable;
pub use comonad::Comonad;
pub use compose::Composable;
pub use coproduct::Coproduct;
pub use covariant::Covariant;
pub use extend::Extendable;
pub use flat_map::FlatMap;
pub use kind::{Kind, Never, TypeLambda};
pub use monad::Monad;
pub use of::Of;
pub use pointed::Pointed;
pub use product::Product;
pub use semi_coproduct::SemiCoproduct;
pub use semi_product::SemiProduct;
