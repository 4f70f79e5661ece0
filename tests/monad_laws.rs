//! Property-based tests for Monad laws.
//!
//! This module verifies that every Monad witness satisfies:
//!
//! - **Left Identity**: `F::flat_map(F::of(a), f) == f(a)`
//! - **Right Identity**: `F::flat_map(m, F::of) == m`
//! - **Associativity**: `F::flat_map(F::flat_map(m, f), g) == F::flat_map(m, |x| F::flat_map(f(x), g))`

use proptest::prelude::*;
use typekind::data::{Identity, IdentityTypeLambda, OptionTypeLambda, ResultTypeLambda, VecTypeLambda};
use typekind::typeclass::{FlatMap, Of};

fn halve(n: i32) -> Option<i32> {
    if n % 2 == 0 { Some(n / 2) } else { None }
}

fn decrement(n: i32) -> Option<i32> {
    n.checked_sub(1)
}

fn checked_double(n: i32) -> Result<i32, String> {
    n.checked_mul(2).ok_or_else(|| format!("{n} overflows"))
}

fn non_negative(n: i32) -> Result<i32, String> {
    if n >= 0 { Ok(n) } else { Err(format!("{n} is negative")) }
}

fn neighbours(n: i32) -> Vec<i32> {
    vec![n.wrapping_sub(1), n.wrapping_add(1)]
}

fn positives(n: i32) -> Vec<i32> {
    if n > 0 { vec![n] } else { Vec::new() }
}

// =============================================================================
// Option
// =============================================================================

proptest! {
    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        prop_assert_eq!(OptionTypeLambda::flat_map(OptionTypeLambda::of(value), halve), halve(value));
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionTypeLambda::flat_map(value, OptionTypeLambda::of), value);
    }

    #[test]
    fn prop_option_associativity(value in any::<Option<i32>>()) {
        let left = OptionTypeLambda::flat_map(OptionTypeLambda::flat_map(value, halve), decrement);
        let right = OptionTypeLambda::flat_map(value, |x| OptionTypeLambda::flat_map(halve(x), decrement));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |n: i32| Identity(n.wrapping_mul(3));
        prop_assert_eq!(IdentityTypeLambda::flat_map(IdentityTypeLambda::of(value), function), function(value));
    }

    #[test]
    fn prop_identity_right_identity(value in any::<String>()) {
        let source = Identity(value);
        prop_assert_eq!(IdentityTypeLambda::flat_map(source.clone(), IdentityTypeLambda::of), source);
    }

    #[test]
    fn prop_identity_associativity(value in any::<i32>()) {
        let first = |n: i32| Identity(n.wrapping_add(7));
        let second = |n: i32| Identity(n.to_string());

        let left = IdentityTypeLambda::flat_map(IdentityTypeLambda::flat_map(Identity(value), first), second);
        let right = IdentityTypeLambda::flat_map(Identity(value), move |x| IdentityTypeLambda::flat_map(first(x), second));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Result
// =============================================================================

proptest! {
    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        prop_assert_eq!(ResultTypeLambda::flat_map(ResultTypeLambda::of(value), checked_double), checked_double(value));
    }

    #[test]
    fn prop_result_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(ResultTypeLambda::flat_map(value.clone(), ResultTypeLambda::of), value);
    }

    #[test]
    fn prop_result_associativity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let left = ResultTypeLambda::flat_map(ResultTypeLambda::flat_map(value.clone(), checked_double), non_negative);
        let right = ResultTypeLambda::flat_map(value, |x| ResultTypeLambda::flat_map(checked_double(x), non_negative));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Vec
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_left_identity(value in any::<i32>()) {
        prop_assert_eq!(VecTypeLambda::flat_map(VecTypeLambda::of(value), neighbours), neighbours(value));
    }

    #[test]
    fn prop_vec_right_identity(values in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert_eq!(VecTypeLambda::flat_map(values.clone(), VecTypeLambda::of), values);
    }

    #[test]
    fn prop_vec_associativity(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let left = VecTypeLambda::flat_map(VecTypeLambda::flat_map(values.clone(), neighbours), positives);
        let right = VecTypeLambda::flat_map(values, |x| VecTypeLambda::flat_map(neighbours(x), positives));
        prop_assert_eq!(left, right);
    }
}
