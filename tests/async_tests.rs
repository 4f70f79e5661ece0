#![cfg(feature = "async")]

//! Integration tests for the Async witness.

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;
use typekind::data::{Async, AsyncTypeLambda};
use typekind::typeclass::{Chainable, Covariant, FlatMap, Of, Product, SemiProduct};
use typekind::{label, non_empty_struct, non_empty_tuple, record};

label!(A1 = "a1"; A2 = "a2");

#[rstest]
#[tokio::test]
async fn nothing_runs_before_await() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let computation = AsyncTypeLambda::flat_map(AsyncTypeLambda::of(1), move |n| {
        counter.set(counter.get() + 1);
        Async::succeed(n + 1)
    });

    assert_eq!(runs.get(), 0);
    assert_eq!(computation.await, 2);
    assert_eq!(runs.get(), 1);
}

#[rstest]
#[tokio::test]
async fn left_identity_holds() {
    let function = |n: i32| Async::succeed(n * 3);
    let left = AsyncTypeLambda::flat_map(AsyncTypeLambda::of(7), function).await;
    let right = function(7).await;
    assert_eq!(left, right);
}

#[rstest]
#[tokio::test]
async fn right_identity_holds() {
    let source = Async::new(|| async { "value" });
    assert_eq!(AsyncTypeLambda::flat_map(source, AsyncTypeLambda::of).await, "value");
}

#[rstest]
#[tokio::test]
async fn do_notation_over_async() {
    let started = AsyncTypeLambda::bind(AsyncTypeLambda::do_(), A1, |_| Async::succeed(1));
    let result = AsyncTypeLambda::bind(started, A2, |_| Async::succeed("b"));
    assert_eq!(result.await, record! { A1: 1, A2: "b" });
}

#[rstest]
#[tokio::test]
async fn products_collect_every_result() {
    let pair = AsyncTypeLambda::product(Async::succeed(1), AsyncTypeLambda::map(Async::succeed(2), |n| n * 2));
    assert_eq!(pair.await, (1, 4));

    let all = AsyncTypeLambda::product_all(vec![Async::succeed(1), Async::succeed(2), Async::succeed(3)]);
    assert_eq!(all.await, vec![1, 2, 3]);
}

#[rstest]
#[tokio::test]
async fn non_empty_combinators_over_async() {
    let tuple = non_empty_tuple!(AsyncTypeLambda; Async::succeed(1), Async::succeed('b'));
    assert_eq!(tuple.await, (1, 'b'));

    let record = non_empty_struct!(AsyncTypeLambda; A1: Async::succeed(1), A2: Async::succeed("b"));
    assert_eq!(record.await, record! { A1: 1, A2: "b" });
}
