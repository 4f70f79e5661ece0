//! Comonad type class - extendable witnesses with an extractable value.
//!
//! # Laws
//!
//! ## Extend-Extract Law
//!
//! ```text
//! F::extract(F::extend(w, f)) == f(&w)
//! ```
//!
//! ## Extract-Extend Law
//!
//! ```text
//! F::extend(w, |x| F::extract(x.clone())) == w
//! ```

use super::extend::Extendable;
use super::kind::Kind;

/// `Extendable` together with `extract`.
pub trait Comonad<S, R, O, E>: Extendable<S, R, O, E> {
    /// Returns the focused value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::TupleTypeLambda;
    /// use typekind::typeclass::Comonad;
    ///
    /// assert_eq!(TupleTypeLambda::extract((1, "context")), 1);
    /// ```
    fn extract<A>(source: Kind<Self, S, R, O, E, A>) -> A
    where
        A: 'static;
}
