//! FlatMap type class - sequencing dependent computations.
//!
//! `flat_map` feeds the value of one computation into a function producing
//! the next computation. How the two are sequenced (short-circuiting on
//! `None`, concatenating lists, awaiting a future) is entirely up to the
//! witness.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! F::flat_map(F::flat_map(m, f), g) == F::flat_map(m, |x| F::flat_map(f(x), g))
//! ```

use super::kind::{Kind, TypeLambda};

/// A type class for witnesses supporting dependent sequencing.
pub trait FlatMap<S, R, O, E>: TypeLambda {
    /// Applies `function` to the value(s) in `source` and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::FlatMap;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
    /// assert_eq!(OptionTypeLambda::flat_map(Some(8), halve), Some(4));
    /// assert_eq!(OptionTypeLambda::flat_map(Some(7), halve), None);
    /// ```
    fn flat_map<A, B, F>(
        source: Kind<Self, S, R, O, E, A>,
        function: F,
    ) -> Kind<Self, S, R, O, E, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Kind<Self, S, R, O, E, B> + 'static;

    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::FlatMap;
    ///
    /// assert_eq!(OptionTypeLambda::flatten(Some(Some(1))), Some(1));
    /// assert_eq!(OptionTypeLambda::flatten(Some(None::<i32>)), None);
    /// ```
    #[inline]
    fn flatten<A>(source: Kind<Self, S, R, O, E, Kind<Self, S, R, O, E, A>>) -> Kind<Self, S, R, O, E, A>
    where
        A: 'static,
        Kind<Self, S, R, O, E, A>: 'static,
    {
        Self::flat_map::<Kind<Self, S, R, O, E, A>, A, _>(source, |inner| inner)
    }

    /// Composes two Kleisli arrows left to right.
    ///
    /// The resulting function runs `first`, then feeds its value to `second`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::FlatMap;
    ///
    /// let parse = |text: &'static str| text.parse::<i32>().ok();
    /// let positive = |n: i32| (n > 0).then_some(n);
    /// let mut both = OptionTypeLambda::compose_kleisli(parse, positive);
    ///
    /// assert_eq!(both("12"), Some(12));
    /// assert_eq!(both("-3"), None);
    /// assert_eq!(both("x"), None);
    /// ```
    fn compose_kleisli<A, B, C, F, G>(
        mut first: F,
        second: G,
    ) -> impl FnMut(A) -> Kind<Self, S, R, O, E, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnMut(A) -> Kind<Self, S, R, O, E, B>,
        G: FnMut(B) -> Kind<Self, S, R, O, E, C> + Clone + 'static,
    {
        move |value| Self::flat_map::<B, C, G>(first(value), second.clone())
    }
}
