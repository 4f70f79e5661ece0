//! Category type class - composable arrows with an identity.
//!
//! # Laws
//!
//! ```text
//! F::compose(F::identity(), ab) == ab
//! F::compose(ab, F::identity()) == ab
//! ```

use super::compose::Composable;
use super::kind::Kind;

/// `Composable` together with an identity arrow.
pub trait Category<S, O, E>: Composable<S, O, E> {
    /// The arrow returning its input unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::FunctionTypeLambda;
    /// use typekind::typeclass::Category;
    ///
    /// let identity = FunctionTypeLambda::identity::<i32>();
    /// assert_eq!(identity.call(7), 7);
    /// ```
    fn identity<R>() -> Kind<Self, S, R, O, E, R>
    where
        R: 'static;
}
