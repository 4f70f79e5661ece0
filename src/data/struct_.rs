//! Struct helpers - typed records with labelled fields.
//!
//! A record is a heterogeneous list of [`Field`]s: `HCons<Field<L, V>, T>`
//! terminated by [`HNil`]. Labels are zero-sized types implementing [`Label`],
//! normally declared with [`label!`](crate::label). Because labels live in
//! the type, asking for a field the record does not have is a compile-time
//! error rather than a runtime one.
//!
//! Records are what Do-notation accumulates: each `bind` appends one field
//! at the end.
//!
//! # Examples
//!
//! ```rust
//! use typekind::{label, omit, pick, record};
//!
//! label!(A = "a"; B = "b"; C = "c");
//!
//! let source = record! { A: "a", B: 1, C: true };
//!
//! assert_eq!(pick!(source, A, B), record! { A: "a", B: 1 });
//! assert_eq!(omit!(source, C), record! { A: "a", B: 1 });
//! assert_eq!(format!("{source:?}"), r#"Record { a: "a", b: 1, c: true }"#);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A field name known at compile time.
pub trait Label {
    /// The name used when the record is printed.
    const NAME: &'static str;
}

/// Declares one or more zero-sized label types.
///
/// # Examples
///
/// ```rust
/// use typekind::data::struct_::Label;
/// use typekind::label;
///
/// label!(
///     /// The user's name.
///     pub Name = "name";
///     Age = "age"
/// );
///
/// assert_eq!(Name::NAME, "name");
/// assert_eq!(Age::NAME, "age");
/// ```
#[macro_export]
macro_rules! label {
    ($($(#[$meta:meta])* $visibility:vis $name:ident = $text:literal);+ $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            $visibility struct $name;

            impl $crate::data::struct_::Label for $name {
                const NAME: &'static str = $text;
            }
        )+
    };
}

/// Builds a record from `Label: value` pairs, in the order written.
///
/// # Examples
///
/// ```rust
/// use typekind::data::struct_::get;
/// use typekind::{label, record};
///
/// label!(X = "x"; Y = "y");
///
/// let point = record! { X: 1, Y: 2 };
/// assert_eq!(*get(&point, Y), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::data::struct_::HNil
    };
    ($label:ident : $value:expr $(, $rest_label:ident : $rest_value:expr)* $(,)?) => {
        $crate::data::struct_::HCons::new(
            $crate::data::struct_::Field::<$label, _>::new($value),
            $crate::record!($($rest_label : $rest_value),*),
        )
    };
}

/// Expands to the type-level list of the given label types.
///
/// Used by [`pick!`](crate::pick) and [`omit!`](crate::omit).
#[macro_export]
macro_rules! labels {
    () => {
        $crate::data::struct_::HNil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::data::struct_::HCons<$head, $crate::labels!($($tail),*)>
    };
}

/// Returns a new record with exactly the given labels, in the order given.
///
/// # Examples
///
/// ```rust
/// use typekind::{label, pick, record};
///
/// label!(A = "a"; B = "b"; C = "c");
///
/// let source = record! { A: 1, B: "two", C: 3.0 };
/// assert_eq!(pick!(source, C, A), record! { C: 3.0, A: 1 });
/// ```
///
/// Picking a label the record does not have does not compile:
///
/// ```compile_fail,E0277
/// use typekind::{label, pick, record};
///
/// label!(A = "a"; B = "b"; Missing = "missing");
///
/// let source = record! { A: 1, B: 2 };
/// let _ = pick!(source, Missing);
/// ```
#[macro_export]
macro_rules! pick {
    ($record:expr, $($label:ty),+ $(,)?) => {
        $crate::data::struct_::pick::<$crate::labels!($($label),+), _, _>($record)
    };
}

/// Returns a new record without the given labels, keeping the input order.
///
/// Omitting a label the record does not have does not compile.
#[macro_export]
macro_rules! omit {
    ($record:expr, $($label:ty),+ $(,)?) => {
        $crate::data::struct_::omit::<$crate::labels!($($label),+), _, _>($record)
    };
}

/// The empty record, and the end of every record.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HNil;

/// A record cell: one field followed by the rest of the record.
///
/// The same shape is reused for type-level lists of labels and indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HCons<H, T> {
    /// The first element.
    pub head: H,
    /// The remaining elements.
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    /// Creates a cell from its head and tail.
    #[inline]
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

/// A value tagged with the label `L`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Field<L, V> {
    value: V,
    label: PhantomData<L>,
}

impl<L, V> Field<L, V> {
    /// Wraps `value` under the label `L`.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            label: PhantomData,
        }
    }

    /// Returns a reference to the value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the field and returns the value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }
}

/// Type-level index: the label is at the head.
pub struct Here;

/// Type-level index: the label is somewhere in the tail.
pub struct There<I>(PhantomData<I>);

/// Finds the field labelled `L`; `Index` is inferred by the compiler.
pub trait Pluck<L, Index> {
    /// The value stored under `L`.
    type Value;
    /// The record without the field.
    type Remainder;

    /// Removes the field and returns its value with the rest of the record.
    fn pluck(self) -> (Self::Value, Self::Remainder);

    /// Borrows the value stored under `L`.
    fn get_ref(&self) -> &Self::Value;
}

impl<L, V, T> Pluck<L, Here> for HCons<Field<L, V>, T> {
    type Value = V;
    type Remainder = T;

    #[inline]
    fn pluck(self) -> (V, T) {
        (self.head.value, self.tail)
    }

    #[inline]
    fn get_ref(&self) -> &V {
        &self.head.value
    }
}

impl<L, H, T, I> Pluck<L, There<I>> for HCons<H, T>
where
    T: Pluck<L, I>,
{
    type Value = T::Value;
    type Remainder = HCons<H, T::Remainder>;

    #[inline]
    fn pluck(self) -> (Self::Value, Self::Remainder) {
        let (value, remainder) = <T as Pluck<L, I>>::pluck(self.tail);
        (value, HCons::new(self.head, remainder))
    }

    #[inline]
    fn get_ref(&self) -> &Self::Value {
        <T as Pluck<L, I>>::get_ref(&self.tail)
    }
}

/// Splits a record by a type-level list of labels.
pub trait Sculpt<Labels, Indices> {
    /// The requested fields, in the order requested.
    type Picked;
    /// The other fields, in input order.
    type Remainder;

    /// Performs the split.
    fn sculpt(self) -> (Self::Picked, Self::Remainder);
}

impl<Source> Sculpt<HNil, HNil> for Source {
    type Picked = HNil;
    type Remainder = Source;

    #[inline]
    fn sculpt(self) -> (HNil, Source) {
        (HNil, self)
    }
}

impl<Source, L, Ls, I, Is> Sculpt<HCons<L, Ls>, HCons<I, Is>> for Source
where
    Source: Pluck<L, I>,
    <Source as Pluck<L, I>>::Remainder: Sculpt<Ls, Is>,
{
    type Picked = HCons<Field<L, <Source as Pluck<L, I>>::Value>, <<Source as Pluck<L, I>>::Remainder as Sculpt<Ls, Is>>::Picked>;
    type Remainder = <<Source as Pluck<L, I>>::Remainder as Sculpt<Ls, Is>>::Remainder;

    #[inline]
    fn sculpt(self) -> (Self::Picked, Self::Remainder) {
        let (value, remainder) = <Self as Pluck<L, I>>::pluck(self);
        let (picked, rest) = <<Source as Pluck<L, I>>::Remainder as Sculpt<Ls, Is>>::sculpt(remainder);
        (HCons::new(Field::new(value), picked), rest)
    }
}

/// Appends an element at the end of a list.
pub trait Append<X> {
    /// The list with `X` at the end.
    type Output;

    /// Appends `element`.
    fn append(self, element: X) -> Self::Output;
}

impl<X> Append<X> for HNil {
    type Output = HCons<X, HNil>;

    #[inline]
    fn append(self, element: X) -> Self::Output {
        HCons::new(element, HNil)
    }
}

impl<H, T, X> Append<X> for HCons<H, T>
where
    T: Append<X>,
{
    type Output = HCons<H, T::Output>;

    #[inline]
    fn append(self, element: X) -> Self::Output {
        HCons::new(self.head, <T as Append<X>>::append(self.tail, element))
    }
}

/// Borrows the value stored under `label`.
///
/// # Examples
///
/// ```rust
/// use typekind::data::struct_::get;
/// use typekind::{label, record};
///
/// label!(Name = "name"; Age = "age");
///
/// let person = record! { Name: "Ada", Age: 36 };
/// assert_eq!(*get(&person, Age), 36);
/// ```
#[inline]
pub fn get<Rec, L, I>(record: &Rec, _label: L) -> &Rec::Value
where
    Rec: Pluck<L, I>,
{
    <Rec as Pluck<L, I>>::get_ref(record)
}

/// Appends `value` under `label` at the end of `record`.
///
/// # Examples
///
/// ```rust
/// use typekind::data::struct_::insert;
/// use typekind::{label, record};
///
/// label!(Name = "name"; Age = "age");
///
/// let person = insert(record! { Name: "Ada" }, Age, 36);
/// assert_eq!(person, record! { Name: "Ada", Age: 36 });
/// ```
#[inline]
pub fn insert<Rec, L, V>(record: Rec, _label: L, value: V) -> Rec::Output
where
    Rec: Append<Field<L, V>>,
    L: Label,
{
    <Rec as Append<Field<L, V>>>::append(record, Field::new(value))
}

/// Keeps exactly the fields listed in `Labels`, in that order.
///
/// Usually called through [`pick!`](crate::pick).
#[inline]
pub fn pick<Labels, Indices, Rec>(record: Rec) -> Rec::Picked
where
    Rec: Sculpt<Labels, Indices>,
{
    <Rec as Sculpt<Labels, Indices>>::sculpt(record).0
}

/// Drops the fields listed in `Labels`, keeping the others in input order.
///
/// Usually called through [`omit!`](crate::omit).
#[inline]
pub fn omit<Labels, Indices, Rec>(record: Rec) -> Rec::Remainder
where
    Rec: Sculpt<Labels, Indices>,
{
    <Rec as Sculpt<Labels, Indices>>::sculpt(record).1
}

/// Writes a record's fields into a `Debug` builder.
pub trait DebugFields {
    /// Adds every field, in order, to `builder`.
    fn debug_fields(&self, builder: &mut fmt::DebugStruct<'_, '_>);
}

impl DebugFields for HNil {
    #[inline]
    fn debug_fields(&self, _builder: &mut fmt::DebugStruct<'_, '_>) {}
}

impl<L, V, T> DebugFields for HCons<Field<L, V>, T>
where
    L: Label,
    V: fmt::Debug,
    T: DebugFields,
{
    fn debug_fields(&self, builder: &mut fmt::DebugStruct<'_, '_>) {
        builder.field(L::NAME, &self.head.value);
        self.tail.debug_fields(builder);
    }
}

impl fmt::Debug for HNil {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Record").finish()
    }
}

impl<H, T> fmt::Debug for HCons<H, T>
where
    Self: DebugFields,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = formatter.debug_struct("Record");
        self.debug_fields(&mut builder);
        builder.finish()
    }
}

impl<L: Label, V: fmt::Debug> fmt::Debug for Field<L, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {:?}", L::NAME, self.value)
    }
}
