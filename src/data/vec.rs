//! Vec witness - nondeterministic computations.
//!
//! A `Vec` holds every possible result of a computation. `flat_map` runs the
//! continuation once per element and concatenates the results, so the empty
//! vector short-circuits like `None` does for `Option`. The coproduct is
//! concatenation and the empty vector is its zero.
//!
//! There is no `SemiProduct` instance: a cartesian product reuses every
//! element of the first side once per element of the second, which would
//! require `A: Clone` on a method that places no bound on `A`.

use crate::typeclass::{Coproduct, Covariant, FlatMap, Kind, Never, Of, SemiCoproduct, TypeLambda};

/// Witness for [`Vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecTypeLambda;

impl TypeLambda for VecTypeLambda {
    type Kind<S, R, O, E, A> = Vec<A>;
}

impl Of<(), (), Never, Never> for VecTypeLambda {
    #[inline]
    fn of<A>(value: A) -> Vec<A>
    where
        A: 'static,
    {
        vec![value]
    }
}

impl Covariant<(), (), Never, Never> for VecTypeLambda {
    #[inline]
    fn map<A, B, F>(source: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        source.into_iter().map(function).collect()
    }
}

impl FlatMap<(), (), Never, Never> for VecTypeLambda {
    #[inline]
    fn flat_map<A, B, F>(source: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Kind<Self, (), (), Never, Never, B> + 'static,
    {
        source.into_iter().flat_map(function).collect()
    }
}

impl SemiCoproduct<(), (), Never, Never> for VecTypeLambda {
    #[inline]
    fn coproduct<A>(mut first: Vec<A>, second: Vec<A>) -> Vec<A>
    where
        A: 'static,
    {
        first.extend(second);
        first
    }
}

impl Coproduct<(), (), Never, Never> for VecTypeLambda {
    #[inline]
    fn zero<A>() -> Vec<A>
    where
        A: 'static,
    {
        Vec::new()
    }
}

static_assertions::assert_impl_all!(
    VecTypeLambda: crate::typeclass::Monad<(), (), Never, Never>,
        crate::typeclass::Coproduct<(), (), Never, Never>
);
