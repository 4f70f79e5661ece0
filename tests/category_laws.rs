//! Property-based tests for Composable and Category laws on function arrows.
//!
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Left Identity**: `compose(identity(), f) == f`
//! - **Right Identity**: `compose(f, identity()) == f`

use proptest::prelude::*;
use typekind::data::{Function, FunctionTypeLambda};
use typekind::typeclass::{Category, Composable};

fn arrows() -> (Function<i32, i64>, Function<i64, String>, Function<String, usize>) {
    (
        Function::new(|n: i32| i64::from(n) * 3),
        Function::new(|n: i64| n.to_string()),
        Function::new(|text: String| text.len()),
    )
}

proptest! {
    #[test]
    fn prop_compose_associativity(input in any::<i32>()) {
        let (f, g, h) = arrows();
        let left = FunctionTypeLambda::compose(FunctionTypeLambda::compose(f.clone(), g.clone()), h.clone());
        let right = FunctionTypeLambda::compose(f, FunctionTypeLambda::compose(g, h));
        prop_assert_eq!(left.call(input), right.call(input));
    }

    #[test]
    fn prop_left_identity(input in any::<i64>()) {
        let (_, g, _) = arrows();
        let composed = FunctionTypeLambda::compose(FunctionTypeLambda::identity(), g.clone());
        prop_assert_eq!(composed.call(input), g.call(input));
    }

    #[test]
    fn prop_right_identity(input in any::<i64>()) {
        let (_, g, _) = arrows();
        let composed = FunctionTypeLambda::compose(g.clone(), FunctionTypeLambda::identity());
        prop_assert_eq!(composed.call(input), g.call(input));
    }
}
