//! Higher-kinded type emulation through generic associated types.
//!
//! Rust has no native way to abstract over a type constructor such as
//! `Option<_>`. This module encodes one as a zero-sized *witness* type that
//! implements [`TypeLambda`]: the witness declares, once, which concrete type
//! it resolves to for each combination of its five slots.
//!
//! | Slot | Meaning      |
//! |------|--------------|
//! | `S`  | state        |
//! | `R`  | requirements |
//! | `O`  | output       |
//! | `E`  | error        |
//! | `A`  | value        |
//!
//! A data type that does not use a slot simply ignores it, and every type
//! class in this crate is stated against [`Kind`], so the slot mapping of a
//! witness is shared by all of its instances.
//!
//! # Example
//!
//! ```rust
//! use typekind::typeclass::{Kind, Never, TypeLambda};
//!
//! struct PairTypeLambda;
//!
//! impl TypeLambda for PairTypeLambda {
//!     type Kind<S, R, O, E, A> = (A, E);
//! }
//!
//! let pair: Kind<PairTypeLambda, (), (), Never, &str, i32> = (1, "meta");
//! assert_eq!(pair.0, 1);
//! ```

/// The uninhabited type used for channels a witness never produces.
pub type Never = std::convert::Infallible;

/// A placeholder for an unapplied type constructor.
///
/// Implementors are zero-sized witnesses. `Kind` resolves the witness applied
/// to the five slots; slots the data type does not use are ignored by the
/// resolution.
///
/// Applying a witness to a type class it does not implement, or to channel
/// values its instances do not support, is rejected by the compiler.
pub trait TypeLambda {
    /// The concrete type this witness denotes for the given slots.
    type Kind<S, R, O, E, A>;
}

/// Resolves witness `F` applied to the slots `S`, `R`, `O`, `E` and `A`.
pub type Kind<F, S, R, O, E, A> = <F as TypeLambda>::Kind<S, R, O, E, A>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct ListTypeLambda;

    impl TypeLambda for ListTypeLambda {
        type Kind<S, R, O, E, A> = Vec<A>;
    }

    struct EitherTypeLambda;

    impl TypeLambda for EitherTypeLambda {
        type Kind<S, R, O, E, A> = Result<A, E>;
    }

    fn assert_same_type<T>(_left: &T, _right: &T) {}

    #[rstest]
    fn kind_resolves_value_slot() {
        let resolved: Kind<ListTypeLambda, (), (), Never, Never, i32> = vec![1, 2, 3];
        assert_same_type(&resolved, &vec![0_i32]);
        assert_eq!(resolved.len(), 3);
    }

    #[rstest]
    fn kind_resolves_error_slot() {
        let resolved: Kind<EitherTypeLambda, (), (), Never, String, u8> = Err("boom".to_string());
        let expected: Result<u8, String> = Err("boom".to_string());
        assert_same_type(&resolved, &expected);
        assert_eq!(resolved, expected);
    }

    #[rstest]
    fn ignored_slots_do_not_change_the_resolution() {
        type First = Kind<ListTypeLambda, u8, u16, u32, u64, bool>;
        type Second = Kind<ListTypeLambda, (), (), Never, Never, bool>;

        let first: First = vec![true];
        let second: Second = first;
        assert_eq!(second, vec![true]);
    }
}
