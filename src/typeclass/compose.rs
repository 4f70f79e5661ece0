//! Composable type class - associative arrow composition.
//!
//! Arrow witnesses use the requirements slot `R` as their input and the value
//! slot `A` as their output, so an arrow from `R` to `A` is
//! `Kind<F, S, R, O, E, A>`.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! F::compose(F::compose(ab, bc), cd) == F::compose(ab, F::compose(bc, cd))
//! ```
//!
//! No identity arrow is required here; [`Category`](super::Category) adds it.

use super::kind::{Kind, TypeLambda};

/// A type class for witnesses whose values are composable arrows.
pub trait Composable<S, O, E>: TypeLambda {
    /// Composes `ab` with `bc`, running `ab` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::{Function, FunctionTypeLambda};
    /// use typekind::typeclass::Composable;
    ///
    /// let length = Function::new(|text: String| text.len());
    /// let doubled = Function::new(|n: usize| n * 2);
    ///
    /// let composed = FunctionTypeLambda::compose(length, doubled);
    /// assert_eq!(composed.call("abc".to_string()), 6);
    /// ```
    fn compose<R, B, C>(
        ab: Kind<Self, S, R, O, E, B>,
        bc: Kind<Self, S, B, O, E, C>,
    ) -> Kind<Self, S, R, O, E, C>
    where
        R: 'static,
        B: 'static,
        C: 'static;
}
