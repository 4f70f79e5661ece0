//! SemiProduct type class - combining independent computations.
//!
//! `product` runs two computations that do not depend on each other and pairs
//! their values. Unlike `flat_map`, neither side can see the other's value,
//! which lets witnesses such as `Async` run both sides together.
//!
//! # Laws
//!
//! ## Associativity Law (up to re-nesting)
//!
//! ```text
//! F::product(F::product(a, b), c) ~ F::product(a, F::product(b, c))
//! ```
//!
//! # Non-empty combinators
//!
//! [`non_empty_tuple!`](crate::non_empty_tuple) and
//! [`non_empty_struct!`](crate::non_empty_struct) build on `product` to
//! combine one or more computations into a tuple or a record. Both reject an
//! empty invocation at compile time.

use super::covariant::Covariant;
use super::kind::Kind;
use crate::internal::from_iterable;

/// A type class for witnesses that can pair independent computations.
pub trait SemiProduct<S, R, O, E>: Covariant<S, R, O, E> {
    /// Pairs the values of `first` and `second`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::SemiProduct;
    ///
    /// assert_eq!(OptionTypeLambda::product(Some(1), Some("a")), Some((1, "a")));
    /// assert_eq!(OptionTypeLambda::product(Some(1), None::<&str>), None);
    /// ```
    fn product<A, B>(
        first: Kind<Self, S, R, O, E, A>,
        second: Kind<Self, S, R, O, E, B>,
    ) -> Kind<Self, S, R, O, E, (A, B)>
    where
        A: 'static,
        B: 'static;

    /// Combines a head computation with any number of further ones.
    ///
    /// The head is always present, so the result is never built from nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::SemiProduct;
    ///
    /// assert_eq!(
    ///     OptionTypeLambda::product_many(Some(1), vec![Some(2), Some(3)]),
    ///     Some((1, vec![2, 3]))
    /// );
    /// assert_eq!(OptionTypeLambda::product_many(Some(1), vec![Some(2), None]), None);
    /// ```
    fn product_many<A, I>(head: Kind<Self, S, R, O, E, A>, tail: I) -> Kind<Self, S, R, O, E, (A, Vec<A>)>
    where
        A: 'static,
        I: IntoIterator<Item = Kind<Self, S, R, O, E, A>>,
    {
        let start = Self::map::<A, (A, Vec<A>), _>(head, |first| (first, Vec::new()));
        from_iterable(tail).into_iter().fold(start, |accumulated, next| {
            Self::map::<((A, Vec<A>), A), (A, Vec<A>), _>(
                Self::product::<(A, Vec<A>), A>(accumulated, next),
                |((first, mut rest), value)| {
                    rest.push(value);
                    (first, rest)
                },
            )
        })
    }
}
