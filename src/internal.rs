//! Small helpers shared by the type class defaults.

/// Normalizes any iterable into an owned, ordered `Vec`.
///
/// Type class defaults accept `impl IntoIterator` so callers can pass arrays,
/// vectors or iterator chains alike; folding over a `Vec` keeps the order of
/// evaluation identical for all of them.
#[inline]
pub(crate) fn from_iterable<I>(collection: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    collection.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1])]
    #[case(vec![3, 1, 2], vec![3, 1, 2])]
    fn from_iterable_preserves_order(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(from_iterable(input), expected);
    }

    #[rstest]
    fn from_iterable_accepts_arrays_and_iterators() {
        assert_eq!(from_iterable([1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(from_iterable((1..=3).map(|n| n * 10)), vec![10, 20, 30]);
    }
}
