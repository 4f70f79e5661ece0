//! Option witness - computations that may have no value.
//!
//! `None` short-circuits every sequencing operation; `map` and `flat_map`
//! only touch a `Some`. The coproduct keeps the first `Some`, and `None` is
//! its zero.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::OptionTypeLambda;
//! use typekind::typeclass::{Covariant, FlatMap};
//!
//! let parsed = OptionTypeLambda::flat_map("42".parse::<i32>().ok(), |n| n.checked_mul(2));
//! assert_eq!(OptionTypeLambda::map(parsed, |n| n + 1), Some(85));
//! ```

use super::refinement::Refinement;
use crate::typeclass::{
    Coproduct, Covariant, FlatMap, Kind, Never, Of, Product, SemiCoproduct, SemiProduct, TypeLambda,
};

/// Witness for [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionTypeLambda;

impl TypeLambda for OptionTypeLambda {
    type Kind<S, R, O, E, A> = Option<A>;
}

impl Of<(), (), Never, Never> for OptionTypeLambda {
    #[inline]
    fn of<A>(value: A) -> Option<A>
    where
        A: 'static,
    {
        Some(value)
    }
}

impl Covariant<(), (), Never, Never> for OptionTypeLambda {
    #[inline]
    fn map<A, B, F>(source: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        source.map(function)
    }
}

impl FlatMap<(), (), Never, Never> for OptionTypeLambda {
    #[inline]
    fn flat_map<A, B, F>(source: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Kind<Self, (), (), Never, Never, B> + 'static,
    {
        source.and_then(function)
    }
}

impl SemiProduct<(), (), Never, Never> for OptionTypeLambda {
    #[inline]
    fn product<A, B>(first: Option<A>, second: Option<B>) -> Option<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        first.zip(second)
    }
}

impl Product<(), (), Never, Never> for OptionTypeLambda {}

impl SemiCoproduct<(), (), Never, Never> for OptionTypeLambda {
    #[inline]
    fn coproduct<A>(first: Option<A>, second: Option<A>) -> Option<A>
    where
        A: 'static,
    {
        first.or(second)
    }
}

impl Coproduct<(), (), Never, Never> for OptionTypeLambda {
    #[inline]
    fn zero<A>() -> Option<A>
    where
        A: 'static,
    {
        None
    }
}

static_assertions::assert_impl_all!(
    OptionTypeLambda: crate::typeclass::Monad<(), (), Never, Never>,
        crate::typeclass::Alternative<(), (), Never, Never>
);

/// Wraps a value in `Some`.
#[inline]
pub const fn some<A>(value: A) -> Option<A> {
    Some(value)
}

/// The empty option.
#[inline]
pub const fn none<A>() -> Option<A> {
    None
}

/// Runs a refinement, keeping the refined value and dropping a rejected one.
///
/// # Examples
///
/// ```rust
/// use typekind::data::option::lift_refinement;
/// use typekind::data::Refinement;
///
/// let even = Refinement::from_predicate("even", |n: &i32| n % 2 == 0);
///
/// assert_eq!(lift_refinement(&even, 4), Some(4));
/// assert_eq!(lift_refinement(&even, 3), None);
/// ```
#[inline]
pub fn lift_refinement<A, B>(refinement: &Refinement<A, B>, value: A) -> Option<B>
where
    A: 'static,
    B: 'static,
{
    refinement.refine(value).ok()
}
