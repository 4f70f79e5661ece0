//! Of type class - lifting a pure value into a witness.
//!
//! `of` places a value in the value channel without inspecting it and
//! without failing. It is also the entry point of Do-notation: [`Of::do_`]
//! lifts the empty record that later `bind`/`let_` steps extend.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::OptionTypeLambda;
//! use typekind::typeclass::Of;
//!
//! assert_eq!(OptionTypeLambda::of(42), Some(42));
//! assert_eq!(OptionTypeLambda::unit(), Some(()));
//! ```

use super::kind::{Kind, TypeLambda};
use crate::data::struct_::HNil;

/// A type class for witnesses that can lift a pure value.
pub trait Of<S, R, O, E>: TypeLambda {
    /// Lifts `value` into the witness.
    fn of<A>(value: A) -> Kind<Self, S, R, O, E, A>
    where
        A: 'static;

    /// Lifts `()`.
    #[inline]
    fn unit() -> Kind<Self, S, R, O, E, ()> {
        Self::of(())
    }

    /// Starts a Do-notation block with the empty record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::{Identity, IdentityTypeLambda};
    /// use typekind::data::struct_::HNil;
    /// use typekind::typeclass::Of;
    ///
    /// assert_eq!(IdentityTypeLambda::do_(), Identity(HNil));
    /// ```
    ///
    /// Witnesses without `Of` cannot start a block:
    ///
    /// ```compile_fail,E0599
    /// use typekind::data::TupleTypeLambda;
    /// use typekind::typeclass::Of;
    ///
    /// let _ = TupleTypeLambda::do_();
    /// ```
    #[inline]
    fn do_() -> Kind<Self, S, R, O, E, HNil> {
        Self::of(HNil)
    }
}
