//! Identity wrapper type - the identity monad and comonad.
//!
//! `Identity` adds no behavior to the value it wraps, which makes it the
//! simplest witness for both [`Monad`](crate::typeclass::Monad) and
//! [`Comonad`](crate::typeclass::Comonad), and a convenient model for
//! checking laws.

use crate::typeclass::{
    Comonad, Covariant, Extendable, FlatMap, Kind, Never, Of, Product, SemiProduct, TypeLambda,
};

/// Wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use typekind::data::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Witness for [`Identity`].
///
/// Only the value slot is used; the other channels are fixed to `()` and
/// [`Never`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityTypeLambda;

impl TypeLambda for IdentityTypeLambda {
    type Kind<S, R, O, E, A> = Identity<A>;
}

impl Of<(), (), Never, Never> for IdentityTypeLambda {
    #[inline]
    fn of<A>(value: A) -> Identity<A>
    where
        A: 'static,
    {
        Identity(value)
    }
}

impl Covariant<(), (), Never, Never> for IdentityTypeLambda {
    #[inline]
    fn map<A, B, F>(source: Identity<A>, mut function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        Identity(function(source.0))
    }
}

impl FlatMap<(), (), Never, Never> for IdentityTypeLambda {
    #[inline]
    fn flat_map<A, B, F>(source: Identity<A>, mut function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Kind<Self, (), (), Never, Never, B> + 'static,
    {
        function(source.0)
    }
}

impl Extendable<(), (), Never, Never> for IdentityTypeLambda {
    #[inline]
    fn extend<A, B, F>(source: Identity<A>, mut function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(&Kind<Self, (), (), Never, Never, A>) -> B + 'static,
    {
        Identity(function(&source))
    }
}

impl Comonad<(), (), Never, Never> for IdentityTypeLambda {
    #[inline]
    fn extract<A>(source: Identity<A>) -> A
    where
        A: 'static,
    {
        source.0
    }
}

impl SemiProduct<(), (), Never, Never> for IdentityTypeLambda {
    #[inline]
    fn product<A, B>(first: Identity<A>, second: Identity<B>) -> Identity<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        Identity((first.0, second.0))
    }
}

impl Product<(), (), Never, Never> for IdentityTypeLambda {}

static_assertions::assert_impl_all!(
    IdentityTypeLambda: crate::typeclass::Monad<(), (), Never, Never>,
        crate::typeclass::Comonad<(), (), Never, Never>
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Chainable;
    use crate::{label, record};
    use rstest::rstest;

    label!(A1 = "a1"; A2 = "a2");

    #[rstest]
    fn identity_accessors() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
        assert_eq!(wrapped.into_inner(), vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<String> = String::from("hello").into();
        assert_eq!(wrapped, Identity("hello".to_string()));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MAX)]
    fn map_applies_function(#[case] value: i32) {
        let mapped = IdentityTypeLambda::map(Identity(value), |n| i64::from(n) * 2);
        assert_eq!(mapped, Identity(i64::from(value) * 2));
    }

    #[rstest]
    fn flat_map_returns_function_result() {
        let result = IdentityTypeLambda::flat_map(Identity(3), |n| Identity(n.to_string()));
        assert_eq!(result, Identity("3".to_string()));
    }

    #[rstest]
    fn extend_sees_whole_context() {
        let result = IdentityTypeLambda::extend(Identity("abc"), |whole| whole.0.len());
        assert_eq!(result, Identity(3));
    }

    #[rstest]
    fn duplicate_nests_the_context() {
        assert_eq!(IdentityTypeLambda::duplicate(Identity(1)), Identity(Identity(1)));
    }

    #[rstest]
    fn extract_unwraps() {
        assert_eq!(IdentityTypeLambda::extract(Identity('x')), 'x');
    }

    #[rstest]
    fn product_all_collects_in_order() {
        let collected = IdentityTypeLambda::product_all(vec![Identity(1), Identity(2), Identity(3)]);
        assert_eq!(collected, Identity(vec![1, 2, 3]));
    }

    #[rstest]
    fn do_notation_builds_record() {
        let started = IdentityTypeLambda::bind(IdentityTypeLambda::do_(), A1, |_| IdentityTypeLambda::of(1));
        let result = IdentityTypeLambda::bind(started, A2, |_| IdentityTypeLambda::of("b"));
        assert_eq!(result, Identity(record! { A1: 1, A2: "b" }));
    }
}
