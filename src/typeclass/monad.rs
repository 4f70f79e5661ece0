//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` is a witness that is both [`FlatMap`] and [`Pointed`]. It has no
//! operation of its own; the blanket implementation makes every such witness
//! a monad automatically.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! F::flat_map(F::of(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! F::flat_map(m, F::of) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! F::flat_map(F::flat_map(m, f), g) == F::flat_map(m, |x| F::flat_map(f(x), g))
//! ```
//!
//! The laws are not checked at runtime; the crate's property tests verify
//! them for every bundled witness.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::OptionTypeLambda;
//! use typekind::typeclass::{FlatMap, Monad, Never, Of};
//!
//! fn double_twice<F: Monad<(), (), Never, Never>>(
//!     source: typekind::typeclass::Kind<F, (), (), Never, Never, i32>,
//! ) -> typekind::typeclass::Kind<F, (), (), Never, Never, i32> {
//!     F::flat_map::<i32, i32, _>(source, |n| F::flat_map::<i32, i32, _>(F::of(n * 2), |m| F::of(m * 2)))
//! }
//!
//! assert_eq!(double_twice::<OptionTypeLambda>(Some(3)), Some(12));
//! ```

use super::flat_map::FlatMap;
use super::pointed::Pointed;

/// `FlatMap` together with `Pointed`.
pub trait Monad<S, R, O, E>: FlatMap<S, R, O, E> + Pointed<S, R, O, E> {}

impl<F, S, R, O, E> Monad<S, R, O, E> for F where F: FlatMap<S, R, O, E> + Pointed<S, R, O, E> + ?Sized {}
