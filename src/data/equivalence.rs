//! Equivalence - a lossless conversion between two types.
//!
//! An [`Equivalence<A, B>`] is a pair of total functions `to: A -> B` and
//! `from: B -> A` that undo each other.
//!
//! # Laws
//!
//! ```text
//! equivalence.from(equivalence.to(a)) == a
//! equivalence.to(equivalence.from(b)) == b
//! ```
//!
//! [`Equivalence::make`] does not check the laws; they are a contract for
//! the caller and are exercised by the property tests of this crate.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::Equivalence;
//!
//! let chars = Equivalence::make(
//!     |text: String| text.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>(),
//! );
//!
//! assert_eq!(chars.to("hi".to_string()), vec!['h', 'i']);
//! assert_eq!(chars.from(vec!['h', 'i']), "hi");
//! ```

use std::fmt;
use std::rc::Rc;

/// A pair of mutually inverse functions between `A` and `B`.
pub struct Equivalence<A, B> {
    to_function: Rc<dyn Fn(A) -> B>,
    from_function: Rc<dyn Fn(B) -> A>,
}

impl<A: 'static, B: 'static> Equivalence<A, B> {
    /// Creates an equivalence from its two directions.
    #[must_use]
    pub fn make<To, From>(to: To, from: From) -> Self
    where
        To: Fn(A) -> B + 'static,
        From: Fn(B) -> A + 'static,
    {
        Self {
            to_function: Rc::new(to),
            from_function: Rc::new(from),
        }
    }

    /// Converts forward.
    pub fn to(&self, value: A) -> B {
        (self.to_function)(value)
    }

    /// Converts backward.
    pub fn from(&self, value: B) -> A {
        (self.from_function)(value)
    }

    /// Swaps the two directions.
    #[must_use]
    pub fn reverse(&self) -> Equivalence<B, A> {
        Equivalence {
            to_function: Rc::clone(&self.from_function),
            from_function: Rc::clone(&self.to_function),
        }
    }

    /// Chains this equivalence with one from `B` to `C`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::Equivalence;
    ///
    /// let widen = Equivalence::make(i64::from, |n: i64| n as i32);
    /// let text = Equivalence::make(|n: i64| n.to_string(), |s: String| s.parse::<i64>().unwrap_or_default());
    ///
    /// let composed = widen.compose(&text);
    /// assert_eq!(composed.to(42), "42");
    /// assert_eq!(composed.from("7".to_string()), 7);
    /// ```
    #[must_use]
    pub fn compose<C: 'static>(&self, other: &Equivalence<B, C>) -> Equivalence<A, C> {
        let first_to = Rc::clone(&self.to_function);
        let second_to = Rc::clone(&other.to_function);
        let second_from = Rc::clone(&other.from_function);
        let first_from = Rc::clone(&self.from_function);
        Equivalence {
            to_function: Rc::new(move |value| second_to(first_to(value))),
            from_function: Rc::new(move |value| first_from(second_from(value))),
        }
    }

    /// Converts forward, applies `function`, and converts back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::Equivalence;
    ///
    /// let chars = Equivalence::make(
    ///     |text: String| text.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// let reversed = chars.modify("abc".to_string(), |mut chars| {
    ///     chars.reverse();
    ///     chars
    /// });
    /// assert_eq!(reversed, "cba");
    /// ```
    pub fn modify<F>(&self, value: A, function: F) -> A
    where
        F: FnOnce(B) -> B,
    {
        self.from(function(self.to(value)))
    }
}

/// The equivalence of a type with itself.
#[must_use]
pub fn identity<A: 'static>() -> Equivalence<A, A> {
    Equivalence::make(|value| value, |value| value)
}

impl<A, B> Clone for Equivalence<A, B> {
    fn clone(&self) -> Self {
        Self {
            to_function: Rc::clone(&self.to_function),
            from_function: Rc::clone(&self.from_function),
        }
    }
}

impl<A, B> fmt::Debug for Equivalence<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Equivalence").finish_non_exhaustive()
    }
}
