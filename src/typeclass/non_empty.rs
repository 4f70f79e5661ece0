//! Non-empty product combinators.
//!
//! Both macros need at least one computation. An empty invocation matches no
//! rule and is rejected by the compiler, so a product is never built from
//! nothing.

/// Combines one or more independent computations of a witness into a tuple.
///
/// Every computation is combined with [`SemiProduct::product`] and the
/// growing tuple is extended with
/// [`AppendElement`](crate::data::tuple::AppendElement).
///
/// # Syntax
///
/// ```text
/// non_empty_tuple!(Witness; first, second, ...)
/// ```
///
/// # Examples
///
/// ```rust
/// use typekind::data::OptionTypeLambda;
/// use typekind::non_empty_tuple;
///
/// let combined = non_empty_tuple!(OptionTypeLambda; Some(1), Some("a"), Some(true));
/// assert_eq!(combined, Some((1, "a", true)));
///
/// let single = non_empty_tuple!(OptionTypeLambda; Some(1));
/// assert_eq!(single, Some((1,)));
///
/// let missing = non_empty_tuple!(OptionTypeLambda; Some(1), None::<&str>);
/// assert_eq!(missing, None);
/// ```
///
/// [`SemiProduct::product`]: crate::typeclass::SemiProduct::product
#[macro_export]
macro_rules! non_empty_tuple {
    ($witness:ty; $first:expr $(, $rest:expr)* $(,)?) => {{
        let accumulated =
            <$witness as $crate::typeclass::Covariant<_, _, _, _>>::map($first, |value| (value,));
        $(
            let accumulated = <$witness as $crate::typeclass::Covariant<_, _, _, _>>::map(
                <$witness as $crate::typeclass::SemiProduct<_, _, _, _>>::product(accumulated, $rest),
                |(init, last)| $crate::data::tuple::AppendElement::append_element(init, last),
            );
        )*
        accumulated
    }};
}

/// Combines one or more labelled computations of a witness into a record.
///
/// # Syntax
///
/// ```text
/// non_empty_struct!(Witness; LabelA: first, LabelB: second, ...)
/// ```
///
/// # Examples
///
/// ```rust
/// use typekind::data::IdentityTypeLambda;
/// use typekind::data::Identity;
/// use typekind::{label, non_empty_struct, record};
///
/// label!(Name = "name"; Age = "age");
///
/// let combined = non_empty_struct!(IdentityTypeLambda; Name: Identity("Ada"), Age: Identity(36));
/// assert_eq!(combined, Identity(record! { Name: "Ada", Age: 36 }));
/// ```
#[macro_export]
macro_rules! non_empty_struct {
    ($witness:ty; $label:ident : $first:expr $(, $rest_label:ident : $rest:expr)* $(,)?) => {{
        let accumulated = <$witness as $crate::typeclass::Covariant<_, _, _, _>>::map(
            $first,
            |value| $crate::record! { $label: value },
        );
        $(
            let accumulated = <$witness as $crate::typeclass::Covariant<_, _, _, _>>::map(
                <$witness as $crate::typeclass::SemiProduct<_, _, _, _>>::product(accumulated, $rest),
                |(record, value)| $crate::data::struct_::Append::append(
                    record,
                    $crate::data::struct_::Field::<$rest_label, _>::new(value),
                ),
            );
        )*
        accumulated
    }};
}

#[cfg(test)]
mod tests {
    use crate::data::struct_::get;
    use crate::data::{Identity, IdentityTypeLambda, OptionTypeLambda, ResultTypeLambda};
    use crate::{label, record};
    use rstest::rstest;

    label!(First = "first"; Second = "second"; Third = "third");

    #[rstest]
    fn non_empty_tuple_keeps_argument_order() {
        let combined = non_empty_tuple!(IdentityTypeLambda; Identity(1), Identity('b'), Identity("c"), Identity(4.0));
        assert_eq!(combined, Identity((1, 'b', "c", 4.0)));
    }

    #[rstest]
    fn non_empty_tuple_short_circuits_on_first_error() {
        let first: Result<i32, &str> = Ok(1);
        let second: Result<i32, &str> = Err("second");
        let third: Result<i32, &str> = Err("third");

        let combined = non_empty_tuple!(ResultTypeLambda; first, second, third);
        assert_eq!(combined, Err("second"));
    }

    #[rstest]
    fn non_empty_struct_builds_record_in_label_order() {
        let combined = non_empty_struct!(OptionTypeLambda; First: Some(1), Second: Some("two"), Third: Some(3.0));
        let record = combined.expect("all fields are present");

        assert_eq!(*get(&record, First), 1);
        assert_eq!(*get(&record, Second), "two");
        assert_eq!(record, record! { First: 1, Second: "two", Third: 3.0 });
    }

    #[rstest]
    fn non_empty_struct_propagates_missing_field() {
        let combined = non_empty_struct!(OptionTypeLambda; First: Some(1), Second: None::<i32>);
        assert_eq!(combined, None);
    }
}
