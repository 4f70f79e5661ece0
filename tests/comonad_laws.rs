//! Property-based tests for Comonad laws.
//!
//! - **Extend-Extract**: `F::extract(F::extend(w, f)) == f(&w)`
//! - **Extract-Extend**: `F::extend(w, |x| F::extract(x.clone())) == w`
//! - **Associativity**: `F::extend(F::extend(w, f), g) == F::extend(w, |x| g(&F::extend(x.clone(), f)))`

use proptest::prelude::*;
use typekind::data::{Identity, IdentityTypeLambda, TupleTypeLambda};
use typekind::typeclass::{Comonad, Extendable};

proptest! {
    #[test]
    fn prop_identity_extract_extend(value in any::<i32>()) {
        let extended = IdentityTypeLambda::extend(Identity(value), |whole| IdentityTypeLambda::extract(*whole));
        prop_assert_eq!(extended, Identity(value));
    }

    #[test]
    fn prop_identity_extend_extract(value in any::<String>()) {
        let length = |whole: &Identity<String>| whole.0.len();
        let source = Identity(value);
        let expected = length(&source);
        prop_assert_eq!(IdentityTypeLambda::extract(IdentityTypeLambda::extend(source, length)), expected);
    }

    #[test]
    fn prop_tuple_extract_extend(value in any::<i32>(), environment in any::<u16>()) {
        let extended = TupleTypeLambda::extend((value, environment), |whole| TupleTypeLambda::extract(*whole));
        prop_assert_eq!(extended, (value, environment));
    }

    #[test]
    fn prop_tuple_extend_extract(value in any::<i64>(), environment in any::<i64>()) {
        let sum = |whole: &(i64, i64)| whole.0.wrapping_add(whole.1);
        prop_assert_eq!(
            TupleTypeLambda::extract(TupleTypeLambda::extend((value, environment), sum)),
            sum(&(value, environment))
        );
    }

    #[test]
    fn prop_tuple_associativity(value in any::<i32>(), environment in any::<i32>()) {
        let f = |whole: &(i32, i32)| whole.0.wrapping_mul(whole.1);
        let g = |whole: &(i32, i32)| whole.0.wrapping_sub(whole.1);
        let source = (value, environment);

        let left = TupleTypeLambda::extend(TupleTypeLambda::extend(source, f), g);
        let right = TupleTypeLambda::extend(source, move |whole: &(i32, i32)| g(&TupleTypeLambda::extend(*whole, f)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_duplicate_then_extract(value in any::<u32>()) {
        prop_assert_eq!(IdentityTypeLambda::extract(IdentityTypeLambda::duplicate(Identity(value))), Identity(value));
        prop_assert_eq!(TupleTypeLambda::extract(TupleTypeLambda::duplicate((value, 'e'))), (value, 'e'));
    }
}
