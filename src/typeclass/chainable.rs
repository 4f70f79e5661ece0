//! Chainable type class - `FlatMap` with `Covariant`, home of `bind`.
//!
//! Do-notation is spread over three type classes: [`Of::do_`] starts a block
//! with the empty record, [`Covariant::bind_to`] and [`Covariant::let_`] add
//! fields without sequencing, and [`Chainable::bind`] sequences a dependent
//! computation and stores its value under a new label.
//!
//! Fields are bound strictly left to right. A step can read every label bound
//! before it; reading a later label does not compile because the record type
//! does not contain it yet.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::struct_::get;
//! use typekind::data::OptionTypeLambda;
//! use typekind::typeclass::{Chainable, Of};
//! use typekind::{label, record};
//!
//! label!(X = "x"; Y = "y");
//!
//! let started = OptionTypeLambda::bind(OptionTypeLambda::do_(), X, |_| Some(2));
//! let result = OptionTypeLambda::bind(started, Y, |record| Some(get(record, X) + 1));
//! assert_eq!(result, Some(record! { X: 2, Y: 3 }));
//!
//! let failed = OptionTypeLambda::bind(OptionTypeLambda::do_(), X, |_| None::<i32>);
//! assert_eq!(failed, None);
//! ```
//!
//! [`Of::do_`]: super::Of::do_

use super::covariant::Covariant;
use super::flat_map::FlatMap;
use super::kind::Kind;
use crate::data::struct_::{Append, Field, Label};

/// `FlatMap` together with `Covariant`.
pub trait Chainable<S, R, O, E>: FlatMap<S, R, O, E> + Covariant<S, R, O, E> {
    /// Runs the computation returned by `function` and appends its value to
    /// the record under `label`.
    ///
    /// Failures are whatever the witness's `flat_map` makes them: `bind`
    /// introduces no failure of its own. The record is cloned once per value
    /// the computation produces, so list-like witnesses can fan out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::data::struct_::get;
    /// use typekind::typeclass::{Chainable, Of};
    /// use typekind::{label, record};
    ///
    /// label!(A1 = "a1"; A2 = "a2");
    ///
    /// let started = OptionTypeLambda::bind(OptionTypeLambda::do_(), A1, |_| Some(1));
    /// let result = OptionTypeLambda::bind(started, A2, |record| Some(*get(record, A1) + 1));
    /// assert_eq!(result, Some(record! { A1: 1, A2: 2 }));
    /// ```
    ///
    /// A step only sees the labels bound before it:
    ///
    /// ```compile_fail,E0277
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::data::struct_::get;
    /// use typekind::typeclass::{Chainable, Of};
    /// use typekind::label;
    ///
    /// label!(A1 = "a1"; A2 = "a2");
    ///
    /// let started = OptionTypeLambda::bind(OptionTypeLambda::do_(), A1, |record| Some(*get(record, A2)));
    /// let _ = OptionTypeLambda::bind(started, A2, |_| Some(2));
    /// ```
    fn bind<Rec, L, B, F>(
        source: Kind<Self, S, R, O, E, Rec>,
        _label: L,
        mut function: F,
    ) -> Kind<Self, S, R, O, E, <Rec as Append<Field<L, B>>>::Output>
    where
        Rec: Append<Field<L, B>> + Clone + 'static,
        <Rec as Append<Field<L, B>>>::Output: 'static,
        L: Label + 'static,
        B: 'static,
        F: FnMut(&Rec) -> Kind<Self, S, R, O, E, B> + 'static,
    {
        Self::flat_map::<Rec, <Rec as Append<Field<L, B>>>::Output, _>(source, move |record: Rec| {
            let computation = function(&record);
            Self::map::<B, <Rec as Append<Field<L, B>>>::Output, _>(computation, move |value| {
                <Rec as Append<Field<L, B>>>::append(record.clone(), Field::new(value))
            })
        })
    }

    /// Runs a computation for its effect and keeps the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::Chainable;
    ///
    /// let checked = OptionTypeLambda::tap(Some(4), |n| (*n > 0).then_some(()));
    /// assert_eq!(checked, Some(4));
    ///
    /// let rejected = OptionTypeLambda::tap(Some(-4), |n| (*n > 0).then_some(()));
    /// assert_eq!(rejected, None);
    /// ```
    fn tap<A, B, F>(source: Kind<Self, S, R, O, E, A>, mut function: F) -> Kind<Self, S, R, O, E, A>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnMut(&A) -> Kind<Self, S, R, O, E, B> + 'static,
    {
        Self::flat_map::<A, A, _>(source, move |value: A| {
            let effect = function(&value);
            Self::map::<B, A, _>(effect, move |_| value.clone())
        })
    }
}

impl<F, S, R, O, E> Chainable<S, R, O, E> for F where F: FlatMap<S, R, O, E> + Covariant<S, R, O, E> + ?Sized {}
