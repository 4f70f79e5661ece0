//! Pointed type class - a covariant witness that can also lift values.

use super::covariant::Covariant;
use super::of::Of;

/// `Covariant` together with `Of`.
///
/// There is no new operation: any witness implementing both is `Pointed`.
pub trait Pointed<S, R, O, E>: Covariant<S, R, O, E> + Of<S, R, O, E> {}

impl<F, S, R, O, E> Pointed<S, R, O, E> for F where F: Covariant<S, R, O, E> + Of<S, R, O, E> + ?Sized {}
