//! Tuple helpers and the pair witness.
//!
//! The free functions work on plain pairs. [`TupleTypeLambda`] views a pair
//! `(A, E)` as a value `A` annotated with an environment `E` in the error
//! slot: `map` changes the value, `bimap` changes both, and the pair is a
//! comonad whose `extract` is the first component.
//!
//! [`AppendElement`] grows a tuple by one element at the end; it is what
//! [`non_empty_tuple!`](crate::non_empty_tuple) uses to build its result.

use super::equivalence::Equivalence;
use crate::typeclass::{Bicovariant, Comonad, Covariant, Extendable, Kind, Never, TypeLambda};

/// Builds a pair.
#[inline]
pub const fn tuple<A, B>(first: A, second: B) -> (A, B) {
    (first, second)
}

/// Returns the first component of a pair.
#[inline]
pub fn get_first<A, B>(pair: (A, B)) -> A {
    pair.0
}

/// Returns the second component of a pair.
#[inline]
pub fn get_second<A, B>(pair: (A, B)) -> B {
    pair.1
}

/// Maps the first component of a pair.
///
/// # Examples
///
/// ```rust
/// use typekind::data::tuple::map_first;
///
/// assert_eq!(map_first(("abc", 1), str::len), (3, 1));
/// ```
#[inline]
pub fn map_first<A, B, C, F>(pair: (A, B), function: F) -> (C, B)
where
    F: FnOnce(A) -> C,
{
    (function(pair.0), pair.1)
}

/// Maps the second component of a pair.
#[inline]
pub fn map_second<A, B, C, F>(pair: (A, B), function: F) -> (A, C)
where
    F: FnOnce(B) -> C,
{
    (pair.0, function(pair.1))
}

/// Maps both components of a pair.
///
/// # Examples
///
/// ```rust
/// use typekind::data::tuple::map_both;
///
/// assert_eq!(map_both((1, "two"), |n| n + 1, str::len), (2, 3));
/// ```
#[inline]
pub fn map_both<A, B, C, D, F, G>(pair: (A, B), on_first: F, on_second: G) -> (C, D)
where
    F: FnOnce(A) -> C,
    G: FnOnce(B) -> D,
{
    (on_first(pair.0), on_second(pair.1))
}

/// Swaps the components of a pair.
#[inline]
pub fn swap<A, B>(pair: (A, B)) -> (B, A) {
    (pair.1, pair.0)
}

/// The equivalence between `(A, B)` and `(B, A)`.
///
/// # Examples
///
/// ```rust
/// use typekind::data::tuple::swap_equivalence;
///
/// let swapped = swap_equivalence::<i32, &str>();
/// assert_eq!(swapped.to((1, "a")), ("a", 1));
/// assert_eq!(swapped.from(("a", 1)), (1, "a"));
/// ```
pub fn swap_equivalence<A, B>() -> Equivalence<(A, B), (B, A)>
where
    A: 'static,
    B: 'static,
{
    Equivalence::make(swap, swap)
}

/// Appends one element at the end of a tuple.
///
/// Implemented for tuples of up to eleven elements, producing tuples of up
/// to twelve.
///
/// # Examples
///
/// ```rust
/// use typekind::data::tuple::AppendElement;
///
/// assert_eq!(().append_element(1), (1,));
/// assert_eq!((1, "a").append_element(true), (1, "a", true));
/// ```
pub trait AppendElement<X> {
    /// The tuple with `X` appended.
    type Output;

    /// Appends `element` after the last element.
    fn append_element(self, element: X) -> Self::Output;
}

macro_rules! impl_append_element {
    ($($name:ident),*) => {
        impl<$($name,)* X> AppendElement<X> for ($($name,)*) {
            type Output = ($($name,)* X,);

            #[allow(non_snake_case)]
            #[inline]
            fn append_element(self, element: X) -> Self::Output {
                let ($($name,)*) = self;
                ($($name,)* element,)
            }
        }
    };
}

impl_append_element!();
impl_append_element!(T1);
impl_append_element!(T1, T2);
impl_append_element!(T1, T2, T3);
impl_append_element!(T1, T2, T3, T4);
impl_append_element!(T1, T2, T3, T4, T5);
impl_append_element!(T1, T2, T3, T4, T5, T6);
impl_append_element!(T1, T2, T3, T4, T5, T6, T7);
impl_append_element!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_append_element!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_append_element!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_append_element!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);

/// Appends `element` at the end of `tuple`.
#[inline]
pub fn append_element<T, X>(tuple: T, element: X) -> T::Output
where
    T: AppendElement<X>,
{
    tuple.append_element(element)
}

/// Witness for pairs `(A, E)`: a value with an environment in the `E` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TupleTypeLambda;

impl TypeLambda for TupleTypeLambda {
    type Kind<S, R, O, E, A> = (A, E);
}

impl<E> Covariant<(), (), Never, E> for TupleTypeLambda {
    #[inline]
    fn map<A, B, F>(source: (A, E), mut function: F) -> (B, E)
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        (function(source.0), source.1)
    }
}

impl Bicovariant<(), (), Never> for TupleTypeLambda {
    #[inline]
    fn bimap<E1, A, E2, B, G, F>(source: (A, E1), mut on_error: G, mut on_value: F) -> (B, E2)
    where
        E1: 'static,
        A: 'static,
        E2: 'static,
        B: 'static,
        G: FnMut(E1) -> E2 + 'static,
        F: FnMut(A) -> B + 'static,
    {
        (on_value(source.0), on_error(source.1))
    }
}

impl<E> Extendable<(), (), Never, E> for TupleTypeLambda {
    #[inline]
    fn extend<A, B, F>(source: (A, E), mut function: F) -> (B, E)
    where
        A: 'static,
        B: 'static,
        F: FnMut(&Kind<Self, (), (), Never, E, A>) -> B + 'static,
    {
        let value = function(&source);
        (value, source.1)
    }
}

impl<E> Comonad<(), (), Never, E> for TupleTypeLambda {
    #[inline]
    fn extract<A>(source: (A, E)) -> A
    where
        A: 'static,
    {
        source.0
    }
}
