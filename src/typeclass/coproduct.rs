//! Coproduct type class - `SemiCoproduct` with an identity alternative.
//!
//! # Laws
//!
//! ```text
//! F::coproduct(F::zero(), x) == x
//! F::coproduct(x, F::zero()) == x
//! ```

use super::kind::Kind;
use super::semi_coproduct::SemiCoproduct;
use crate::internal::from_iterable;

/// `SemiCoproduct` together with `zero`.
pub trait Coproduct<S, R, O, E>: SemiCoproduct<S, R, O, E> {
    /// The alternative that never contributes.
    fn zero<A>() -> Kind<Self, S, R, O, E, A>
    where
        A: 'static;

    /// Folds `coproduct` over a possibly empty collection, starting at `zero`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::VecTypeLambda;
    /// use typekind::typeclass::Coproduct;
    ///
    /// assert_eq!(VecTypeLambda::coproduct_all(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
    /// assert_eq!(VecTypeLambda::coproduct_all(Vec::<Vec<i32>>::new()), Vec::<i32>::new());
    /// ```
    fn coproduct_all<A, I>(collection: I) -> Kind<Self, S, R, O, E, A>
    where
        A: 'static,
        I: IntoIterator<Item = Kind<Self, S, R, O, E, A>>,
    {
        from_iterable(collection)
            .into_iter()
            .fold(Self::zero::<A>(), |accumulated, next| Self::coproduct::<A>(accumulated, next))
    }
}
