//! Property-based tests for Covariant laws.
//!
//! - **Identity Law**: `F::map(fa, |x| x) == fa`
//! - **Composition Law**: `F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))`

use proptest::prelude::*;
use typekind::data::{
    Function, FunctionTypeLambda, Identity, IdentityTypeLambda, OptionTypeLambda, ResultTypeLambda,
    TupleTypeLambda, VecTypeLambda,
};
use typekind::typeclass::{Bicovariant, Covariant};

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionTypeLambda::map(value, |x| x), value);
    }

    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let left = OptionTypeLambda::map(OptionTypeLambda::map(value, increment), double);
        let right = OptionTypeLambda::map(value, |x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_identity_composition_law(value in any::<String>()) {
        let left = IdentityTypeLambda::map(IdentityTypeLambda::map(Identity(value.clone()), |s: String| s.len()), |n| n * 2);
        let right = IdentityTypeLambda::map(Identity(value), |s: String| s.len() * 2);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_identity_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(ResultTypeLambda::map(value.clone(), |x| x), value);
    }

    #[test]
    fn prop_result_composition_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let left = ResultTypeLambda::map(ResultTypeLambda::map(value.clone(), increment), double);
        let right = ResultTypeLambda::map(value, |x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..50)) {
        prop_assert_eq!(VecTypeLambda::map(values.clone(), |x| x), values);
    }

    #[test]
    fn prop_vec_composition_law(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let left = VecTypeLambda::map(VecTypeLambda::map(values.clone(), increment), double);
        let right = VecTypeLambda::map(values, |x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_tuple_keeps_environment(value in any::<i32>(), environment in any::<String>()) {
        let (mapped, kept) = TupleTypeLambda::map((value, environment.clone()), double);
        prop_assert_eq!(mapped, double(value));
        prop_assert_eq!(kept, environment);
    }

    #[test]
    fn prop_tuple_bimap_identity_law(value in any::<i32>(), environment in any::<u8>()) {
        prop_assert_eq!(TupleTypeLambda::bimap((value, environment), |e| e, |a| a), (value, environment));
    }

    #[test]
    fn prop_function_composition_law(input in any::<i32>()) {
        let source = Function::new(increment);
        let left = FunctionTypeLambda::map(FunctionTypeLambda::map(source.clone(), double), increment);
        let right = FunctionTypeLambda::map(source, |x| increment(double(x)));
        prop_assert_eq!(left.call(input), right.call(input));
    }
}
