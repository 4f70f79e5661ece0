//! Function arrows and left-to-right application.
//!
//! [`Function<R, A>`] is a shareable arrow from `R` to `A`. Its witness uses
//! the requirements slot for the input and the value slot for the output, so
//! mapping post-composes and [`Composable::compose`] chains arrows.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::{Function, FunctionTypeLambda};
//! use typekind::pipe;
//! use typekind::typeclass::{Category, Composable, Covariant};
//!
//! let length = Function::new(|text: &'static str| text.len());
//! let described = FunctionTypeLambda::map(length, |n| format!("{n} chars"));
//! assert_eq!(described.call("abc"), "3 chars");
//!
//! let same = FunctionTypeLambda::compose(FunctionTypeLambda::identity(), Function::new(|n: i32| n + 1));
//! assert_eq!(pipe!(1, |n: i32| same.call(n), |n: i32| n * 10), 20);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Category, Composable, Covariant, Never, TypeLambda};

/// Pipes a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. Each function is called once.
///
/// # Examples
///
/// ```rust
/// use typekind::pipe;
///
/// fn double(n: i32) -> i32 { n * 2 }
/// fn describe(n: i32) -> String { format!("got {n}") }
///
/// assert_eq!(pipe!(5), 5);
/// assert_eq!(pipe!(5, double), 10);
/// assert_eq!(pipe!(5, double, |n| n + 1, describe), "got 11");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };
    ($value:expr, $function:expr, $($remaining:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining),+)
    };
}

/// Returns its argument unchanged.
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and returns `value`.
///
/// # Examples
///
/// ```rust
/// use typekind::data::function::constant;
///
/// let always = constant::<_, i32>("fixed");
/// assert_eq!(always(1), "fixed");
/// ```
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// A shareable arrow from `R` to `A`.
pub struct Function<R, A> {
    function: Rc<dyn Fn(R) -> A>,
}

impl<R: 'static, A: 'static> Function<R, A> {
    /// Wraps a closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Applies the arrow.
    pub fn call(&self, input: R) -> A {
        (self.function)(input)
    }

    /// Runs `self`, then `next`.
    #[must_use]
    pub fn and_then<B: 'static>(&self, next: &Function<A, B>) -> Function<R, B> {
        let first = Rc::clone(&self.function);
        let second = Rc::clone(&next.function);
        Function::new(move |input| second(first(input)))
    }
}

impl<R, A> Clone for Function<R, A> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<R, A> fmt::Debug for Function<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Function").finish_non_exhaustive()
    }
}

/// Witness for [`Function`]: input in the `R` slot, output in the `A` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FunctionTypeLambda;

impl TypeLambda for FunctionTypeLambda {
    type Kind<S, R, O, E, A> = Function<R, A>;
}

impl<R: 'static> Covariant<(), R, Never, Never> for FunctionTypeLambda {
    fn map<A, B, F>(source: Function<R, A>, function: F) -> Function<R, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        let function = RefCell::new(function);
        Function::new(move |input| {
            let value = source.call(input);
            let mut apply = function.borrow_mut();
            (*apply)(value)
        })
    }
}

impl Composable<(), Never, Never> for FunctionTypeLambda {
    #[inline]
    fn compose<R, B, C>(ab: Function<R, B>, bc: Function<B, C>) -> Function<R, C>
    where
        R: 'static,
        B: 'static,
        C: 'static,
    {
        ab.and_then(&bc)
    }
}

impl Category<(), Never, Never> for FunctionTypeLambda {
    #[inline]
    fn identity<R>() -> Function<R, R>
    where
        R: 'static,
    {
        Function::new(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pipe_applies_left_to_right() {
        let add_one = |n: i32| n + 1;
        let double = |n: i32| n * 2;
        assert_eq!(pipe!(3, add_one, double), 8);
        assert_eq!(pipe!(3, double, add_one), 7);
    }

    #[rstest]
    fn pipe_accepts_trailing_comma() {
        assert_eq!(pipe!("abc", str::len,), 3);
    }

    #[rstest]
    fn map_post_composes() {
        let parse = Function::new(|text: String| text.len());
        let mapped = FunctionTypeLambda::map(parse, |n| n * 2);
        assert_eq!(mapped.call("four".to_string()), 8);
    }

    #[rstest]
    fn map_allows_stateful_functions() {
        let counter = FunctionTypeLambda::map(Function::new(|n: i32| n), {
            let mut calls = 0;
            move |n| {
                calls += 1;
                n + calls
            }
        });
        assert_eq!(counter.call(10), 11);
        assert_eq!(counter.call(10), 12);
    }

    #[rstest]
    fn compose_runs_first_argument_first() {
        let add = Function::new(|n: i32| n + 1);
        let double = Function::new(|n: i32| n * 2);
        assert_eq!(FunctionTypeLambda::compose(add.clone(), double.clone()).call(3), 8);
        assert_eq!(FunctionTypeLambda::compose(double, add).call(3), 7);
    }

    #[rstest]
    fn identity_is_neutral() {
        let length = Function::new(|text: &'static str| text.len());
        let left = FunctionTypeLambda::compose(FunctionTypeLambda::identity(), length.clone());
        let right = FunctionTypeLambda::compose(length.clone(), FunctionTypeLambda::identity());
        assert_eq!(left.call("abc"), length.call("abc"));
        assert_eq!(right.call("abc"), length.call("abc"));
    }

    #[rstest]
    fn constant_ignores_input() {
        let zero = constant::<i32, &str>(0);
        assert_eq!(zero("anything"), 0);
        assert_eq!(identity(5), 5);
    }
}
