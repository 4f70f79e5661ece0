//! Extendable type class - the dual of `flat_map`.
//!
//! Where `flat_map` consumes a value and produces a context, `extend` takes a
//! function reading a whole context and produces a value, then rebuilds the
//! context around it.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! F::extend(F::extend(w, f), g) == F::extend(w, |x| g(&F::extend(x.clone(), f)))
//! ```

use super::covariant::Covariant;
use super::kind::Kind;

/// A type class for witnesses supporting comonadic extension.
pub trait Extendable<S, R, O, E>: Covariant<S, R, O, E> {
    /// Applies `function` to the whole of `source` and stores the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::{Identity, IdentityTypeLambda};
    /// use typekind::typeclass::Extendable;
    ///
    /// let extended = IdentityTypeLambda::extend(Identity(20), |whole| whole.0 + 1);
    /// assert_eq!(extended, Identity(21));
    /// ```
    fn extend<A, B, F>(source: Kind<Self, S, R, O, E, A>, function: F) -> Kind<Self, S, R, O, E, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(&Kind<Self, S, R, O, E, A>) -> B + 'static;

    /// Nests `source` inside itself.
    #[inline]
    fn duplicate<A>(source: Kind<Self, S, R, O, E, A>) -> Kind<Self, S, R, O, E, Kind<Self, S, R, O, E, A>>
    where
        A: 'static,
        Kind<Self, S, R, O, E, A>: Clone + 'static,
    {
        Self::extend::<A, Kind<Self, S, R, O, E, A>, _>(source, |whole| whole.clone())
    }
}
