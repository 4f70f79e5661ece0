//! Symbols and opt-in structural equality.
//!
//! A [`Symbol`] is a keyed identifier: two symbols are equal exactly when
//! their keys are. [`Equal`] is the capability a type opts into to take part
//! in structural comparison; implementors are recognised through
//! [`Equal::symbol`], which returns the shared [`EQUAL_SYMBOL`] marker.
//!
//! Nothing here is global or mutable: a type is structurally comparable only
//! if it implements [`Equal`].
//!
//! # Examples
//!
//! ```rust
//! use typekind::data::equal::{equals, Equal, Symbol};
//! use typekind::data::Identity;
//!
//! assert!(equals(&Identity(1), &Identity(1)));
//! assert!(!equals(&Identity("a"), &Identity("b")));
//! assert_eq!(Symbol::new("typekind/Equal"), <i32 as Equal>::symbol());
//! ```

use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::identity::Identity;
use super::struct_::{Field, HCons, HNil};

/// A keyed identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    key: Cow<'static, str>,
}

impl Symbol {
    /// Creates a symbol with a static key.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
        }
    }

    /// Creates a symbol with an owned key.
    #[must_use]
    pub fn from_key(key: impl Into<String>) -> Self {
        Self {
            key: Cow::Owned(key.into()),
        }
    }

    /// The key identifying this symbol.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Symbol({})", self.key)
    }
}

/// The marker shared by every [`Equal`] implementor.
pub const EQUAL_SYMBOL: Symbol = Symbol::new("typekind/Equal");

/// Structural equality as an explicit capability.
pub trait Equal {
    /// Whether `self` and `other` are structurally equal.
    fn equals(&self, other: &Self) -> bool;

    /// A hash consistent with [`equals`](Self::equals).
    fn hash_code(&self) -> u64;

    /// The marker identifying structurally comparable values.
    #[must_use]
    fn symbol() -> Symbol
    where
        Self: Sized,
    {
        EQUAL_SYMBOL
    }
}

/// Compares two values structurally.
#[inline]
pub fn equals<T: Equal + ?Sized>(first: &T, second: &T) -> bool {
    first.equals(second)
}

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn combine(seed: u64, next: u64) -> u64 {
    seed.rotate_left(5) ^ next
}

macro_rules! impl_equal_by_eq {
    ($($type:ty),* $(,)?) => {
        $(
            impl Equal for $type {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn hash_code(&self) -> u64 {
                    hash_of(self)
                }
            }
        )*
    };
}

impl_equal_by_eq!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
    Symbol,
);

impl<T: Equal + ?Sized> Equal for &T {
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }

    fn hash_code(&self) -> u64 {
        (**self).hash_code()
    }
}

impl<A: Equal> Equal for Identity<A> {
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }

    fn hash_code(&self) -> u64 {
        combine(hash_of("Identity"), self.0.hash_code())
    }
}

impl<A: Equal> Equal for Option<A> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(first), Some(second)) => first.equals(second),
            (None, None) => true,
            _ => false,
        }
    }

    fn hash_code(&self) -> u64 {
        self.as_ref().map_or_else(|| hash_of("None"), |value| combine(hash_of("Some"), value.hash_code()))
    }
}

impl<A: Equal> Equal for Vec<A> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(first, second)| first.equals(second))
    }

    fn hash_code(&self) -> u64 {
        self.iter().fold(hash_of(&self.len()), |seed, value| combine(seed, value.hash_code()))
    }
}

impl<A: Equal, B: Equal> Equal for (A, B) {
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0) && self.1.equals(&other.1)
    }

    fn hash_code(&self) -> u64 {
        combine(self.0.hash_code(), self.1.hash_code())
    }
}

impl Equal for HNil {
    fn equals(&self, _other: &Self) -> bool {
        true
    }

    fn hash_code(&self) -> u64 {
        hash_of("Record")
    }
}

impl<L, V: Equal> Equal for Field<L, V> {
    fn equals(&self, other: &Self) -> bool {
        self.value().equals(other.value())
    }

    fn hash_code(&self) -> u64 {
        self.value().hash_code()
    }
}

impl<H: Equal, T: Equal> Equal for HCons<H, T> {
    fn equals(&self, other: &Self) -> bool {
        self.head.equals(&other.head) && self.tail.equals(&other.tail)
    }

    fn hash_code(&self) -> u64 {
        combine(self.head.hash_code(), self.tail.hash_code())
    }
}
