//! Bicovariant type class - mapping the error and value channels together.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::bimap(fa, |e| e, |a| a) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::bimap(F::bimap(fa, f1, g1), f2, g2) == F::bimap(fa, |e| f2(f1(e)), |a| g2(g1(a)))
//! ```

use super::kind::{Kind, TypeLambda};

/// A type class for witnesses covariant in both the error and value slots.
pub trait Bicovariant<S, R, O>: TypeLambda {
    /// Maps the error channel with `on_error` and the value channel with
    /// `on_value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::ResultTypeLambda;
    /// use typekind::typeclass::Bicovariant;
    ///
    /// let failed: Result<i32, &str> = Err("boom");
    /// assert_eq!(ResultTypeLambda::bimap(failed, |e| e.len(), |n| n * 2), Err(4));
    ///
    /// let succeeded: Result<i32, &str> = Ok(21);
    /// assert_eq!(ResultTypeLambda::bimap(succeeded, |e| e.len(), |n| n * 2), Ok(42));
    /// ```
    fn bimap<E1, A, E2, B, G, F>(
        source: Kind<Self, S, R, O, E1, A>,
        on_error: G,
        on_value: F,
    ) -> Kind<Self, S, R, O, E2, B>
    where
        E1: 'static,
        A: 'static,
        E2: 'static,
        B: 'static,
        G: FnMut(E1) -> E2 + 'static,
        F: FnMut(A) -> B + 'static;

    /// Maps the error channel only.
    #[inline]
    fn map_error<E1, E2, A, G>(source: Kind<Self, S, R, O, E1, A>, on_error: G) -> Kind<Self, S, R, O, E2, A>
    where
        E1: 'static,
        E2: 'static,
        A: 'static,
        G: FnMut(E1) -> E2 + 'static,
    {
        Self::bimap::<E1, A, E2, A, G, _>(source, on_error, |value| value)
    }
}
