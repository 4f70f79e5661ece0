//! Async witness - deferred asynchronous computations.
//!
//! An [`Async`] describes a computation producing a value later. Nothing runs
//! until the value is awaited (through [`Async::run`] or `.await`, since
//! `Async` implements [`IntoFuture`]). `map` and `flat_map` only extend the
//! description; `product` awaits both sides concurrently on the caller's
//! executor.
//!
//! `Async` is not `Send`: the boxed future is a
//! [`LocalBoxFuture`](futures::future::LocalBoxFuture), so it is driven on
//! the thread that runs it.
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::{Async, AsyncTypeLambda};
//! use typekind::typeclass::{Covariant, FlatMap};
//!
//! let computation = AsyncTypeLambda::flat_map(Async::succeed(20), |n| {
//!     AsyncTypeLambda::map(Async::succeed(n), |m| m + 22)
//! });
//!
//! assert_eq!(futures::executor::block_on(computation.run()), 42);
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::typeclass::{Covariant, FlatMap, Kind, Never, Of, Product, SemiProduct, TypeLambda};

/// A deferred asynchronous computation producing an `A`.
pub struct Async<A> {
    run_async: Box<dyn FnOnce() -> LocalBoxFuture<'static, A>>,
}

impl<A: 'static> Async<A> {
    /// Creates an `Async` from a closure returning a future.
    ///
    /// The closure is not called until the computation is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use typekind::data::Async;
    ///
    /// let started = Rc::new(Cell::new(false));
    /// let flag = Rc::clone(&started);
    /// let computation = Async::new(move || async move {
    ///     flag.set(true);
    ///     42
    /// });
    ///
    /// assert!(!started.get());
    /// assert_eq!(futures::executor::block_on(computation.run()), 42);
    /// assert!(started.get());
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = A> + 'static,
    {
        Self {
            run_async: Box::new(move || action().boxed_local()),
        }
    }

    /// Creates an `Async` from a future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + 'static,
    {
        Self {
            run_async: Box::new(move || future.boxed_local()),
        }
    }

    /// An `Async` that completes immediately with `value`.
    pub fn succeed(value: A) -> Self {
        Self::from_future(futures::future::ready(value))
    }

    /// Runs the computation.
    pub async fn run(self) -> A {
        (self.run_async)().await
    }
}

impl<A: 'static> IntoFuture for Async<A> {
    type Output = A;
    type IntoFuture = LocalBoxFuture<'static, A>;

    fn into_future(self) -> Self::IntoFuture {
        (self.run_async)()
    }
}

impl<A> fmt::Debug for Async<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Async").finish_non_exhaustive()
    }
}

impl<A> fmt::Display for Async<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Async>")
    }
}

/// Witness for [`Async`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AsyncTypeLambda;

impl TypeLambda for AsyncTypeLambda {
    type Kind<S, R, O, E, A> = Async<A>;
}

impl Of<(), (), Never, Never> for AsyncTypeLambda {
    #[inline]
    fn of<A>(value: A) -> Async<A>
    where
        A: 'static,
    {
        Async::succeed(value)
    }
}

impl Covariant<(), (), Never, Never> for AsyncTypeLambda {
    fn map<A, B, F>(source: Async<A>, mut function: F) -> Async<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        Async::new(move || source.into_future().map(move |value| function(value)))
    }
}

impl FlatMap<(), (), Never, Never> for AsyncTypeLambda {
    fn flat_map<A, B, F>(source: Async<A>, mut function: F) -> Async<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Kind<Self, (), (), Never, Never, B> + 'static,
    {
        Async::new(move || source.into_future().then(move |value| function(value).into_future()))
    }
}

impl SemiProduct<(), (), Never, Never> for AsyncTypeLambda {
    fn product<A, B>(first: Async<A>, second: Async<B>) -> Async<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        Async::new(move || futures::future::join(first.into_future(), second.into_future()))
    }
}

impl Product<(), (), Never, Never> for AsyncTypeLambda {}

static_assertions::assert_impl_all!(AsyncTypeLambda: crate::typeclass::Monad<(), (), Never, Never>);
static_assertions::assert_not_impl_any!(Async<i32>: Send, Sync);
