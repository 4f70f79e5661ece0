//! Alternative type classes - choice layered over mapping.
//!
//! - [`Alt`]: `SemiCoproduct` plus `Covariant`, with `alt` as a readable
//!   name for the choice.
//! - [`NonEmptyAlternative`]: the same capabilities, used where at least one
//!   alternative is always present.
//! - [`Alternative`]: a non-empty alternative that also has `zero` and `of`,
//!   which makes `guard` available.
//!
//! All three are blanket-implemented: a witness gets them by implementing
//! the underlying type classes.
//!
//! # Laws
//!
//! ## Left Distributivity
//!
//! ```text
//! F::map(F::coproduct(x, y), f) == F::coproduct(F::map(x, f), F::map(y, f))
//! ```

use super::coproduct::Coproduct;
use super::covariant::Covariant;
use super::kind::Kind;
use super::of::Of;
use super::semi_coproduct::SemiCoproduct;

/// `SemiCoproduct` together with `Covariant`.
pub trait Alt<S, R, O, E>: SemiCoproduct<S, R, O, E> + Covariant<S, R, O, E> {
    /// Returns `first` unless the witness considers it a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::Alt;
    ///
    /// assert_eq!(OptionTypeLambda::alt(None, Some(42)), Some(42));
    /// assert_eq!(OptionTypeLambda::alt(Some(1), Some(2)), Some(1));
    /// ```
    #[inline]
    fn alt<A>(first: Kind<Self, S, R, O, E, A>, second: Kind<Self, S, R, O, E, A>) -> Kind<Self, S, R, O, E, A>
    where
        A: 'static,
    {
        Self::coproduct::<A>(first, second)
    }
}

impl<F, S, R, O, E> Alt<S, R, O, E> for F where F: SemiCoproduct<S, R, O, E> + Covariant<S, R, O, E> + ?Sized {}

/// `SemiCoproduct` together with `Covariant`, for non-empty choices.
pub trait NonEmptyAlternative<S, R, O, E>: SemiCoproduct<S, R, O, E> + Covariant<S, R, O, E> {}

impl<F, S, R, O, E> NonEmptyAlternative<S, R, O, E> for F where
    F: SemiCoproduct<S, R, O, E> + Covariant<S, R, O, E> + ?Sized
{
}

/// `NonEmptyAlternative` together with `Coproduct` and `Of`.
pub trait Alternative<S, R, O, E>: NonEmptyAlternative<S, R, O, E> + Coproduct<S, R, O, E> + Of<S, R, O, E> {
    /// Succeeds with `()` when `condition` holds, otherwise returns `zero`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::{Alternative, Covariant};
    ///
    /// fn positive(n: i32) -> Option<i32> {
    ///     OptionTypeLambda::map(OptionTypeLambda::guard(n > 0), move |()| n)
    /// }
    ///
    /// assert_eq!(positive(5), Some(5));
    /// assert_eq!(positive(-3), None);
    /// ```
    #[inline]
    fn guard(condition: bool) -> Kind<Self, S, R, O, E, ()> {
        if condition { Self::unit() } else { Self::zero::<()>() }
    }
}

impl<F, S, R, O, E> Alternative<S, R, O, E> for F where
    F: NonEmptyAlternative<S, R, O, E> + Coproduct<S, R, O, E> + Of<S, R, O, E> + ?Sized
{
}
