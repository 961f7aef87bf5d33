//! Container classification and the printing routine.
//!
//! A type is "printable as a container" exactly when it implements
//! [`ContainerFmt`]. The impl set encodes the classification policy:
//!
//! 1. Character arrays (`[char; N]`) get no impl — the blanket array impl
//!    requires [`ContainerElement`](crate::ContainerElement), which `char`
//!    does not satisfy. They stay string-like.
//! 2. `String`, `str`, and `&str` get no impl either; they render as plain
//!    strings through [`ElementFmt`] only.
//! 3. Two-element tuples are pairs ([`Shape::Pair`]).
//! 4. Fixed arrays of non-character elements are sequences.
//! 5. The standard iterable collections (and `indexmap`'s) are containers;
//!    tuples of other arities are [`Shape::Tuple`].
//!
//! Exclusions are absent impls, so they always win over the general rules:
//! `Vec<char>` is a container, `[char; 5]` and `String` are not, and the
//! compiler rejects unsupported types before anything runs.
//!
//! Wrapper and user-defined iterables don't need an impl to be rendered:
//! [`sequence`] and [`shaped`] print anything whose reference iterates,
//! which is the structural escape hatch for types that merely wrap a
//! classified container.

use crate::decor::Decorator;
use crate::delimiters::WideDelimiters;
use crate::element::{ContainerElement, ElementFmt};
use crate::shape::Shape;
use crate::wide::Utf16Write;
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::hash::BuildHasher;

/// A value printable as a container.
///
/// Implementors carry their structural [`Shape`] as an associated constant,
/// so delimiter selection happens at compile time with no runtime branching.
/// The two required methods are the narrow and wide printing paths; the
/// provided [`ContainerFmt::fmt_container`] applies the shape's default
/// delimiters.
///
/// Most code never calls these directly — use [`printed`],
/// [`to_string`](crate::to_string), or [`decorated`](crate::decorated).
pub trait ContainerFmt {
    /// Structural category; picks the default delimiter triple.
    const SHAPE: Shape;

    /// Writes the value using an explicit decorator.
    fn fmt_with<D>(&self, f: &mut fmt::Formatter<'_>, decor: &D) -> fmt::Result
    where
        D: Decorator + ?Sized;

    /// Writes the value as UTF-16 units using the shape's wide delimiters.
    fn fmt_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result;

    /// Writes the value using the shape's default narrow delimiters.
    fn fmt_container(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &Self::SHAPE.delimiters())
    }
}

/// Writes prefix, elements interleaved with separators, then suffix.
///
/// An empty iterator still writes prefix and suffix, so empty containers
/// render as `[]`, `{}`, and friends.
pub(crate) fn fmt_elements<I, D>(f: &mut fmt::Formatter<'_>, elements: I, decor: &D) -> fmt::Result
where
    I: IntoIterator,
    I::Item: ElementFmt,
    D: Decorator + ?Sized,
{
    let mut elements = elements.into_iter();
    decor.write_prefix(f)?;
    if let Some(first) = elements.next() {
        decor.write_element(f, &first)?;
        for element in elements {
            decor.write_separator(f)?;
            decor.write_element(f, &element)?;
        }
    }
    decor.write_suffix(f)
}

/// Wide-path counterpart of [`fmt_elements`].
pub(crate) fn fmt_elements_utf16<I>(
    sink: &mut dyn Utf16Write,
    elements: I,
    delimiters: WideDelimiters,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: ElementFmt,
{
    let mut elements = elements.into_iter();
    sink.write_units(delimiters.prefix)?;
    if let Some(first) = elements.next() {
        first.fmt_element_utf16(sink)?;
        for element in elements {
            sink.write_units(delimiters.separator)?;
            element.fmt_element_utf16(sink)?;
        }
    }
    sink.write_units(delimiters.suffix)
}

/// Classifies an iterable collection: `ContainerFmt` with the given shape,
/// plus the `ElementFmt`/`ContainerElement` impls that let it nest inside
/// other containers.
macro_rules! classify_container {
    (impl[$($generics:tt)*] for $ty:ty => $shape:expr) => {
        impl<$($generics)*> ContainerFmt for $ty {
            const SHAPE: Shape = $shape;

            fn fmt_with<D>(&self, f: &mut fmt::Formatter<'_>, decor: &D) -> fmt::Result
            where
                D: Decorator + ?Sized,
            {
                fmt_elements(f, self, decor)
            }

            fn fmt_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
                fmt_elements_utf16(sink, self, Self::SHAPE.utf16_delimiters())
            }
        }

        impl<$($generics)*> ElementFmt for $ty {
            fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.fmt_container(f)
            }

            fn fmt_element_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
                self.fmt_utf16(sink)
            }
        }

        impl<$($generics)*> ContainerElement for $ty {}
    };
}

classify_container!(impl[T: ElementFmt] for Vec<T> => Shape::Sequence);
classify_container!(impl[T: ElementFmt] for VecDeque<T> => Shape::Sequence);
classify_container!(impl[T: ElementFmt] for LinkedList<T> => Shape::Sequence);
classify_container!(impl[T: ElementFmt] for [T] => Shape::Sequence);
classify_container!(impl[T: ContainerElement, const N: usize] for [T; N] => Shape::Sequence);

classify_container!(impl[T: ElementFmt] for BTreeSet<T> => Shape::Set);
classify_container!(impl[T: ElementFmt, S: BuildHasher] for IndexSet<T, S> => Shape::Set);
// Unordered, so it takes the default brackets rather than set braces.
classify_container!(impl[T: ElementFmt, S: BuildHasher] for HashSet<T, S> => Shape::Sequence);

// Maps render as sequences of (key, value) pairs.
classify_container!(impl[K: ElementFmt, V: ElementFmt] for BTreeMap<K, V> => Shape::Sequence);
classify_container!(impl[K: ElementFmt, V: ElementFmt, S: BuildHasher] for HashMap<K, V, S> => Shape::Sequence);
classify_container!(impl[K: ElementFmt, V: ElementFmt, S: BuildHasher] for IndexMap<K, V, S> => Shape::Sequence);

impl<A: ElementFmt, B: ElementFmt> ContainerFmt for (A, B) {
    const SHAPE: Shape = Shape::Pair;

    // A pair always has exactly two elements; no empty case exists.
    fn fmt_with<D>(&self, f: &mut fmt::Formatter<'_>, decor: &D) -> fmt::Result
    where
        D: Decorator + ?Sized,
    {
        decor.write_prefix(f)?;
        decor.write_element(f, &self.0)?;
        decor.write_separator(f)?;
        decor.write_element(f, &self.1)?;
        decor.write_suffix(f)
    }

    fn fmt_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
        let delimiters = Self::SHAPE.utf16_delimiters();
        sink.write_units(delimiters.prefix)?;
        self.0.fmt_element_utf16(sink)?;
        sink.write_units(delimiters.separator)?;
        self.1.fmt_element_utf16(sink)?;
        sink.write_units(delimiters.suffix)
    }
}

impl<A: ElementFmt, B: ElementFmt> ElementFmt for (A, B) {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_container(f)
    }

    fn fmt_element_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
        self.fmt_utf16(sink)
    }
}

impl<A: ElementFmt, B: ElementFmt> ContainerElement for (A, B) {}

impl ContainerFmt for () {
    const SHAPE: Shape = Shape::Tuple;

    fn fmt_with<D>(&self, f: &mut fmt::Formatter<'_>, decor: &D) -> fmt::Result
    where
        D: Decorator + ?Sized,
    {
        decor.write_prefix(f)?;
        decor.write_suffix(f)
    }

    fn fmt_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
        let delimiters = Self::SHAPE.utf16_delimiters();
        sink.write_units(delimiters.prefix)?;
        sink.write_units(delimiters.suffix)
    }
}

impl ElementFmt for () {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_container(f)
    }

    fn fmt_element_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
        self.fmt_utf16(sink)
    }
}

impl ContainerElement for () {}

/// Classifies non-pair tuple arities. Arity two is the pair shape and is
/// implemented separately above.
macro_rules! classify_tuple {
    ($head:ident $head_idx:tt $(, $tail:ident $tail_idx:tt)*) => {
        impl<$head: ElementFmt $(, $tail: ElementFmt)*> ContainerFmt for ($head, $($tail,)*) {
            const SHAPE: Shape = Shape::Tuple;

            fn fmt_with<Dec>(&self, f: &mut fmt::Formatter<'_>, decor: &Dec) -> fmt::Result
            where
                Dec: Decorator + ?Sized,
            {
                decor.write_prefix(f)?;
                decor.write_element(f, &self.$head_idx)?;
                $(
                    decor.write_separator(f)?;
                    decor.write_element(f, &self.$tail_idx)?;
                )*
                decor.write_suffix(f)
            }

            fn fmt_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
                let delimiters = Self::SHAPE.utf16_delimiters();
                sink.write_units(delimiters.prefix)?;
                self.$head_idx.fmt_element_utf16(sink)?;
                $(
                    sink.write_units(delimiters.separator)?;
                    self.$tail_idx.fmt_element_utf16(sink)?;
                )*
                sink.write_units(delimiters.suffix)
            }
        }

        impl<$head: ElementFmt $(, $tail: ElementFmt)*> ElementFmt for ($head, $($tail,)*) {
            fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.fmt_container(f)
            }

            fn fmt_element_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
                self.fmt_utf16(sink)
            }
        }

        impl<$head: ElementFmt $(, $tail: ElementFmt)*> ContainerElement for ($head, $($tail,)*) {}
    };
}

classify_tuple!(A 0);
classify_tuple!(A 0, B 1, C 2);
classify_tuple!(A 0, B 1, C 2, D 3);
classify_tuple!(A 0, B 1, C 2, D 3, E 4);
classify_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
classify_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
classify_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
classify_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
classify_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
classify_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
classify_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

impl<T: ContainerFmt + ?Sized> ContainerFmt for &T {
    const SHAPE: Shape = T::SHAPE;

    fn fmt_with<D>(&self, f: &mut fmt::Formatter<'_>, decor: &D) -> fmt::Result
    where
        D: Decorator + ?Sized,
    {
        (**self).fmt_with(f, decor)
    }

    fn fmt_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
        (**self).fmt_utf16(sink)
    }
}

/// `Display` adapter for a classified container.
///
/// Created by [`printed`]; the Rust rendition of the stream-insertion
/// operator. Composes with `write!`/`format!` like any `Display` value.
pub struct Printed<'a, T: ?Sized> {
    value: &'a T,
}

/// Wraps a container in a [`Printed`] adapter for use with `format!`,
/// `write!`, or `println!`.
///
/// # Examples
///
/// ```rust
/// use container_display::printed;
///
/// let scores = vec![(1, 90), (2, 85)];
/// assert_eq!(format!("scores: {}", printed(&scores)), "scores: [(1, 90), (2, 85)]");
/// ```
#[must_use]
pub fn printed<T: ContainerFmt + ?Sized>(value: &T) -> Printed<'_, T> {
    Printed { value }
}

impl<T: ContainerFmt + ?Sized> fmt::Display for Printed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_container(f)
    }
}

/// `Display` adapter rendering any iterable by structure.
///
/// Created by [`sequence`] or [`shaped`].
pub struct IterFmt<'a, C: ?Sized> {
    container: &'a C,
    shape: Shape,
}

/// Renders any iterable value as a sequence, whether or not its type is
/// classified.
///
/// This is the structural escape hatch: a newtype wrapping a `Vec` is
/// printable the moment its reference iterates, with no special-casing of
/// the wrapper itself.
///
/// # Examples
///
/// ```rust
/// use container_display::sequence;
///
/// struct Ranked(Vec<u32>);
///
/// impl<'a> IntoIterator for &'a Ranked {
///     type Item = &'a u32;
///     type IntoIter = std::slice::Iter<'a, u32>;
///     fn into_iter(self) -> Self::IntoIter {
///         self.0.iter()
///     }
/// }
///
/// let ranked = Ranked(vec![3, 1, 2]);
/// assert_eq!(sequence(&ranked).to_string(), "[3, 1, 2]");
/// ```
#[must_use]
pub fn sequence<C: ?Sized>(container: &C) -> IterFmt<'_, C> {
    shaped(container, Shape::Sequence)
}

/// Renders any iterable value with an explicit shape's delimiters.
///
/// # Examples
///
/// ```rust
/// use container_display::{shaped, Shape};
///
/// let unique = vec![1, 2, 3];
/// assert_eq!(shaped(&unique, Shape::Set).to_string(), "{1, 2, 3}");
/// ```
#[must_use]
pub fn shaped<C: ?Sized>(container: &C, shape: Shape) -> IterFmt<'_, C> {
    IterFmt { container, shape }
}

impl<'a, C: ?Sized> fmt::Display for IterFmt<'a, C>
where
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: ElementFmt,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.container, &self.shape.delimiters())
    }
}
