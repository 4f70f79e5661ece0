//! Refinement - narrowing a value to a more specific type.
//!
//! A [`Refinement<A, B>`] tests whether a value of `A` belongs to the narrower
//! type `B`. On success it returns the value as a `B`; on failure it hands
//! the original value back, so nothing is lost.
//!
//! A refinement must be a pure, deterministic membership test.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::Refinement;
//!
//! #[derive(Debug, PartialEq)]
//! struct Even(u32);
//!
//! let even = Refinement::make("Even", |n: u32| if n % 2 == 0 { Ok(Even(n)) } else { Err(n) });
//!
//! assert_eq!(even.refine(4), Ok(Even(4)));
//! assert_eq!(even.refine(5), Err(5));
//! assert!(even.is(&8));
//! ```

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Narrows values of `A` to `B`.
pub struct Refinement<A, B> {
    name: &'static str,
    refine_function: Rc<dyn Fn(A) -> Result<B, A>>,
}

impl<A: 'static, B: 'static> Refinement<A, B> {
    /// Creates a refinement from a function returning `Ok` for members of
    /// `B` and `Err` with the untouched input otherwise.
    #[must_use]
    pub fn make<F>(name: &'static str, function: F) -> Self
    where
        F: Fn(A) -> Result<B, A> + 'static,
    {
        Self {
            name,
            refine_function: Rc::new(function),
        }
    }

    /// The name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Tests `value`, returning it as a `B` or handing it back.
    pub fn refine(&self, value: A) -> Result<B, A> {
        (self.refine_function)(value)
    }

    /// Like [`refine`](Self::refine), but wraps a rejected value in a
    /// [`RefinementError`].
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError`] when `value` is not a member of `B`.
    pub fn try_refine(&self, value: A) -> Result<B, RefinementError<A>> {
        self.refine(value).map_err(|value| RefinementError {
            refinement: self.name,
            value,
        })
    }

    /// Whether `value` is a member of `B`.
    pub fn is(&self, value: &A) -> bool
    where
        A: Clone,
    {
        self.refine(value.clone()).is_ok()
    }

    /// Refines further from `B` to `C`.
    ///
    /// A value rejected by the second step is converted back to `A`, so the
    /// caller always gets the original input type on failure.
    #[must_use]
    pub fn and_then<C: 'static>(&self, next: &Refinement<B, C>) -> Refinement<A, C>
    where
        B: Into<A>,
    {
        let first = Rc::clone(&self.refine_function);
        let second = Rc::clone(&next.refine_function);
        Refinement {
            name: next.name,
            refine_function: Rc::new(move |value: A| -> Result<C, A> {
                second(first(value)?).map_err(Into::into)
            }),
        }
    }

    /// Accepts values accepted by either refinement, trying `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::Refinement;
    ///
    /// let small = Refinement::from_predicate("small", |n: &i32| *n < 10);
    /// let even = Refinement::from_predicate("even", |n: &i32| n % 2 == 0);
    /// let either = small.or(&even);
    ///
    /// assert!(either.is(&3));
    /// assert!(either.is(&12));
    /// assert!(!either.is(&13));
    /// ```
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        let first = Rc::clone(&self.refine_function);
        let second = Rc::clone(&other.refine_function);
        Self {
            name: self.name,
            refine_function: Rc::new(move |value: A| first(value).or_else(|value| second(value))),
        }
    }
}

impl<A: 'static> Refinement<A, A> {
    /// A refinement that keeps values satisfying `predicate`, without
    /// changing their type.
    #[must_use]
    pub fn from_predicate<P>(name: &'static str, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self::make(name, move |value| if predicate(&value) { Ok(value) } else { Err(value) })
    }
}

impl<B: 'static> Refinement<Box<dyn Any>, B> {
    /// A refinement from any boxed value to the concrete type `B`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use typekind::data::Refinement;
    ///
    /// let number = Refinement::<Box<dyn Any>, i32>::downcast("i32");
    ///
    /// assert_eq!(number.refine(Box::new(7)).ok(), Some(7));
    /// assert!(number.refine(Box::new("seven")).is_err());
    /// ```
    #[must_use]
    pub fn downcast(name: &'static str) -> Self {
        Self::make(name, |value: Box<dyn Any>| value.downcast::<B>().map(|boxed| *boxed))
    }
}

impl<A, B> Clone for Refinement<A, B> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            refine_function: Rc::clone(&self.refine_function),
        }
    }
}

impl<A, B> fmt::Debug for Refinement<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Refinement")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A value rejected by a refinement.
///
/// # Examples
///
/// ```rust
/// use typekind::data::Refinement;
///
/// let positive = Refinement::from_predicate("Positive", |n: &i32| *n > 0);
/// let error = positive.try_refine(-3).unwrap_err();
///
/// assert_eq!(error.value, -3);
/// assert_eq!(error.to_string(), "value -3 is not a Positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementError<A> {
    /// The name of the refinement that rejected the value.
    pub refinement: &'static str,
    /// The rejected value, unchanged.
    pub value: A,
}

impl<A: fmt::Debug> fmt::Display for RefinementError<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "value {:?} is not a {}", self.value, self.refinement)
    }
}

impl<A: fmt::Debug> std::error::Error for RefinementError<A> {}
