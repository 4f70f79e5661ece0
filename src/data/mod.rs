//! Concrete data types and their witnesses.
//!
//! Each witness is a zero-sized type implementing
//! [`TypeLambda`](crate::typeclass::TypeLambda) and the type classes its data
//! type supports:
//!
//! | Witness | Kind | Instances |
//! |---|---|---|
//! | [`OptionTypeLambda`] | `Option<A>` | Monad, Product, Alternative |
//! | [`IdentityTypeLambda`] | `Identity<A>` | Monad, Product, Comonad |
//! | [`ResultTypeLambda`] | `Result<A, E>` | Monad, Product, Alt, Bicovariant |
//! | [`VecTypeLambda`] | `Vec<A>` | Monad, Alternative |
//! | `AsyncTypeLambda` | `Async<A>` | Monad, Product |
//! | [`TupleTypeLambda`] | `(A, E)` | Covariant, Bicovariant, Comonad |
//! | [`FunctionTypeLambda`] | `Function<R, A>` | Covariant, Category |
//!
//! `Async` needs the `async` feature.

#[cfg(feature = "async")]
pub mod asynchronous;
pub mod equal;
pub mod equivalence;
pub mod function;
pub mod identity;
pub mod option;
pub mod predicate;
pub mod refinement;
pub mod result;
pub mod struct_;
pub mod tuple;
pub mod vec;

#[cfg(feature = "async")]
pub use asynchronous::{Async, AsyncTypeLambda};
pub use equal::{Equal, Symbol};
pub use equivalence::Equivalence;
pub use function::{Function, FunctionTypeLambda};
pub use identity::{Identity, IdentityTypeLambda};
pub use option::{OptionTypeLambda, none, some};
pub use refinement::{Refinement, RefinementError};
pub use result::ResultTypeLambda;
pub use tuple::{TupleTypeLambda, tuple};
pub use vec::VecTypeLambda;
