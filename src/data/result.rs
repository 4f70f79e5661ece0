//! Result witness - computations that may fail with an error.
//!
//! The error type sits in the `E` slot and is kept generic by every
//! instance, so one witness serves every `Result<A, E>`. Sequencing stops at
//! the first `Err`; the coproduct keeps the first `Ok` and otherwise the last
//! `Err`.

use crate::typeclass::{
    Bicovariant, Covariant, FlatMap, Kind, Never, Of, Product, SemiCoproduct, SemiProduct,
    TypeLambda,
};

/// Witness for [`Result`], with the error in the `E` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResultTypeLambda;

impl TypeLambda for ResultTypeLambda {
    type Kind<S, R, O, E, A> = Result<A, E>;
}

impl<E> Of<(), (), Never, E> for ResultTypeLambda {
    #[inline]
    fn of<A>(value: A) -> Result<A, E>
    where
        A: 'static,
    {
        Ok(value)
    }
}

impl<E> Covariant<(), (), Never, E> for ResultTypeLambda {
    #[inline]
    fn map<A, B, F>(source: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        source.map(function)
    }
}

impl<E> FlatMap<(), (), Never, E> for ResultTypeLambda {
    #[inline]
    fn flat_map<A, B, F>(source: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Kind<Self, (), (), Never, E, B> + 'static,
    {
        source.and_then(function)
    }
}

impl<E> SemiProduct<(), (), Never, E> for ResultTypeLambda {
    #[inline]
    fn product<A, B>(first: Result<A, E>, second: Result<B, E>) -> Result<(A, B), E>
    where
        A: 'static,
        B: 'static,
    {
        Ok((first?, second?))
    }
}

impl<E> Product<(), (), Never, E> for ResultTypeLambda {}

impl<E> SemiCoproduct<(), (), Never, E> for ResultTypeLambda {
    #[inline]
    fn coproduct<A>(first: Result<A, E>, second: Result<A, E>) -> Result<A, E>
    where
        A: 'static,
    {
        first.or(second)
    }
}

impl Bicovariant<(), (), Never> for ResultTypeLambda {
    #[inline]
    fn bimap<E1, A, E2, B, G, F>(source: Result<A, E1>, on_error: G, on_value: F) -> Result<B, E2>
    where
        E1: 'static,
        A: 'static,
        E2: 'static,
        B: 'static,
        G: FnMut(E1) -> E2 + 'static,
        F: FnMut(A) -> B + 'static,
    {
        source.map(on_value).map_err(on_error)
    }
}

static_assertions::assert_impl_all!(
    ResultTypeLambda: crate::typeclass::Monad<(), (), Never, String>,
        crate::typeclass::Alt<(), (), Never, String>
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Chainable;
    use crate::{label, record};
    use rstest::rstest;

    label!(A1 = "a1"; A2 = "a2");

    fn parse(text: &'static str) -> Result<i32, String> {
        text.parse::<i32>().map_err(|error| error.to_string())
    }

    #[rstest]
    #[case(Ok(2), Ok(3))]
    #[case(Err("bad"), Err("bad"))]
    fn map_touches_only_ok(#[case] source: Result<i32, &'static str>, #[case] expected: Result<i32, &'static str>) {
        assert_eq!(ResultTypeLambda::map(source, |n| n + 1), expected);
    }

    #[rstest]
    fn flat_map_stops_at_first_error() {
        let result = ResultTypeLambda::flat_map(parse("x"), |n| parse("1").map(|m| n + m));
        assert!(result.is_err());
        assert_eq!(ResultTypeLambda::flat_map(parse("2"), |n| Ok(n * 10)), Ok(20));
    }

    #[rstest]
    #[case(Ok(1), Ok(2), Ok(1))]
    #[case(Err("a"), Ok(2), Ok(2))]
    #[case(Err("a"), Err("b"), Err("b"))]
    fn coproduct_keeps_first_ok(
        #[case] first: Result<i32, &'static str>,
        #[case] second: Result<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        assert_eq!(ResultTypeLambda::coproduct(first, second), expected);
    }

    #[rstest]
    fn product_returns_first_error() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(ResultTypeLambda::product(first, second), Err("first"));
        assert_eq!(ResultTypeLambda::product(Ok::<_, &str>(1), Ok(2)), Ok((1, 2)));
    }

    #[rstest]
    fn map_error_changes_only_the_error() {
        let failed: Result<i32, &str> = Err("four");
        assert_eq!(ResultTypeLambda::map_error(failed, str::len), Err(4));
        let succeeded: Result<i32, &str> = Ok(1);
        assert_eq!(ResultTypeLambda::map_error(succeeded, str::len), Ok(1));
    }

    #[rstest]
    fn do_notation_stops_at_first_error() {
        let started = ResultTypeLambda::bind(ResultTypeLambda::do_(), A1, |_| parse("1"));
        let failed = ResultTypeLambda::bind(started.clone(), A2, |_| parse("nope"));
        assert!(failed.is_err());

        let succeeded = ResultTypeLambda::bind(started, A2, |_| parse("2"));
        assert_eq!(succeeded, Ok(record! { A1: 1, A2: 2 }));
    }
}
