//! SemiCoproduct type class - choosing between computations of one type.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! F::coproduct(F::coproduct(x, y), z) == F::coproduct(x, F::coproduct(y, z))
//! ```

use super::kind::{Kind, TypeLambda};
use crate::internal::from_iterable;

/// A type class for witnesses with an associative choice.
pub trait SemiCoproduct<S, R, O, E>: TypeLambda {
    /// Combines two alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::SemiCoproduct;
    ///
    /// assert_eq!(OptionTypeLambda::coproduct(None, Some(2)), Some(2));
    /// assert_eq!(OptionTypeLambda::coproduct(Some(1), Some(2)), Some(1));
    /// ```
    fn coproduct<A>(
        first: Kind<Self, S, R, O, E, A>,
        second: Kind<Self, S, R, O, E, A>,
    ) -> Kind<Self, S, R, O, E, A>
    where
        A: 'static;

    /// Folds `coproduct` over a head and any number of further alternatives.
    fn coproduct_many<A, I>(head: Kind<Self, S, R, O, E, A>, tail: I) -> Kind<Self, S, R, O, E, A>
    where
        A: 'static,
        I: IntoIterator<Item = Kind<Self, S, R, O, E, A>>,
    {
        from_iterable(tail)
            .into_iter()
            .fold(head, |accumulated, next| Self::coproduct::<A>(accumulated, next))
    }
}
