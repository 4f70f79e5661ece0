//! Covariant type class - mapping over the value channel.
//!
//! `map` transforms the value channel only. State, requirements, output and
//! error are carried through untouched, which the trait guarantees by
//! construction: the channels are fixed by the trait parameters and only the
//! value type changes.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::OptionTypeLambda;
//! use typekind::typeclass::Covariant;
//!
//! assert_eq!(OptionTypeLambda::map(Some(5), |n| n.to_string()), Some("5".to_string()));
//! assert_eq!(OptionTypeLambda::map(None::<i32>, |n| n + 1), None);
//! ```

use super::kind::{Kind, TypeLambda};
use crate::data::equivalence::Equivalence;
use crate::data::struct_::{Append, Field, HCons, HNil, Label};

/// A type class for witnesses whose value channel can be mapped.
pub trait Covariant<S, R, O, E>: TypeLambda {
    /// Applies `function` to the value(s) in `source`.
    ///
    /// The function is `FnMut` so that witnesses holding several values can
    /// call it once per value.
    fn map<A, B, F>(source: Kind<Self, S, R, O, E, A>, function: F) -> Kind<Self, S, R, O, E, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static;

    /// Replaces every value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::Covariant;
    ///
    /// assert_eq!(OptionTypeLambda::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionTypeLambda::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(source: Kind<Self, S, R, O, E, A>, value: B) -> Kind<Self, S, R, O, E, B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        Self::map::<A, B, _>(source, move |_| value.clone())
    }

    /// Discards the value, keeping the shape.
    #[inline]
    fn void<A>(source: Kind<Self, S, R, O, E, A>) -> Kind<Self, S, R, O, E, ()>
    where
        A: 'static,
    {
        Self::map::<A, (), _>(source, |_| ())
    }

    /// Maps through the forward direction of an equivalence.
    ///
    /// Because an equivalence is invertible, the result can be mapped back
    /// with `equivalence.reverse()` without losing information.
    #[inline]
    fn imap<A, B>(
        source: Kind<Self, S, R, O, E, A>,
        equivalence: &Equivalence<A, B>,
    ) -> Kind<Self, S, R, O, E, B>
    where
        A: 'static,
        B: 'static,
    {
        let equivalence = equivalence.clone();
        Self::map::<A, B, _>(source, move |value| equivalence.to(value))
    }

    /// Starts a Do-notation record from a computation, naming its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::Covariant;
    /// use typekind::{label, record};
    ///
    /// label!(Count = "count");
    ///
    /// assert_eq!(OptionTypeLambda::bind_to(Some(3), Count), Some(record! { Count: 3 }));
    /// ```
    #[inline]
    fn bind_to<A, L>(
        source: Kind<Self, S, R, O, E, A>,
        _label: L,
    ) -> Kind<Self, S, R, O, E, HCons<Field<L, A>, HNil>>
    where
        A: 'static,
        L: Label + 'static,
    {
        Self::map::<A, HCons<Field<L, A>, HNil>, _>(source, |value| HCons::new(Field::new(value), HNil))
    }

    /// Appends a field computed purely from the record bound so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::struct_::get;
    /// use typekind::data::IdentityTypeLambda;
    /// use typekind::typeclass::{Covariant, Of};
    /// use typekind::{label, record};
    ///
    /// label!(Base = "base"; Doubled = "doubled");
    ///
    /// let started = IdentityTypeLambda::bind_to(IdentityTypeLambda::of(21), Base);
    /// let result = IdentityTypeLambda::let_(started, Doubled, |record| get(record, Base) * 2);
    /// assert_eq!(result.into_inner(), record! { Base: 21, Doubled: 42 });
    /// ```
    #[inline]
    fn let_<Rec, L, B, F>(
        source: Kind<Self, S, R, O, E, Rec>,
        _label: L,
        mut function: F,
    ) -> Kind<Self, S, R, O, E, <Rec as Append<Field<L, B>>>::Output>
    where
        Rec: Append<Field<L, B>> + 'static,
        <Rec as Append<Field<L, B>>>::Output: 'static,
        L: Label + 'static,
        B: 'static,
        F: FnMut(&Rec) -> B + 'static,
    {
        Self::map::<Rec, <Rec as Append<Field<L, B>>>::Output, _>(source, move |record| {
            let value = function(&record);
            <Rec as Append<Field<L, B>>>::append(record, Field::new(value))
        })
    }
}
