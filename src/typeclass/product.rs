//! Product type class - `SemiProduct` that can also start from nothing.

use super::kind::Kind;
use super::of::Of;
use super::semi_product::SemiProduct;
use crate::internal::from_iterable;

/// `SemiProduct` together with `Of`, allowing an empty collection.
pub trait Product<S, R, O, E>: SemiProduct<S, R, O, E> + Of<S, R, O, E> {
    /// Collects the values of every computation, in order.
    ///
    /// An empty collection yields `of(Vec::new())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekind::data::OptionTypeLambda;
    /// use typekind::typeclass::Product;
    ///
    /// assert_eq!(OptionTypeLambda::product_all(vec![Some(1), Some(2)]), Some(vec![1, 2]));
    /// assert_eq!(OptionTypeLambda::product_all(Vec::<Option<i32>>::new()), Some(vec![]));
    /// assert_eq!(OptionTypeLambda::product_all(vec![Some(1), None]), None);
    /// ```
    fn product_all<A, I>(collection: I) -> Kind<Self, S, R, O, E, Vec<A>>
    where
        A: 'static,
        I: IntoIterator<Item = Kind<Self, S, R, O, E, A>>,
    {
        from_iterable(collection)
            .into_iter()
            .fold(Self::of::<Vec<A>>(Vec::new()), |accumulated, next| {
                Self::map::<(Vec<A>, A), Vec<A>, _>(
                    Self::product::<Vec<A>, A>(accumulated, next),
                    |(mut values, value)| {
                        values.push(value);
                        values
                    },
                )
            })
    }
}
