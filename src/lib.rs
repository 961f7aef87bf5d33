//! # container_display
//!
//! Bracketed, delimiter-aware `Display` rendering for standard containers,
//! selected by type at compile time.
//!
//! ## What it does
//!
//! Rust's standard containers deliberately don't implement `Display`. This
//! crate provides one generic rendering operation that prints any
//! container-like value — sequences, sets, pairs, tuples, fixed arrays, maps
//! — without a hand-written printer per type. Which delimiters frame the
//! output is decided purely by the value's type:
//!
//! | Shape | Types | Output |
//! |---|---|---|
//! | Sequence | `Vec`, slices, arrays, maps, `HashSet`, ... | `[1, 2, 3]` |
//! | Set | `BTreeSet`, `IndexSet` | `{1, 2, 3}` |
//! | Pair | `(A, B)`, map entries | `(1, 2)` |
//! | Tuple | tuples of other arities | `<1, 2, 3>` |
//!
//! ## Key properties
//!
//! - **Compile-time classification**: eligibility is trait conformance.
//!   Unsupported types fail to compile; there are no runtime error paths.
//! - **Recursive**: elements that are themselves containers render with
//!   their own delimiters, to any nesting depth.
//! - **String-aware**: `String`, `str`, and character arrays are never
//!   treated as containers — they print as plain strings, even though
//!   `Vec<char>` still prints as a container.
//! - **Two widths**: the same logic renders UTF-8 text (`fmt::Write`) and
//!   UTF-16 units ([`Utf16Write`]), each binding its own delimiter table.
//! - **No unsafe code**, no state, no allocation beyond the output itself.
//!
//! ## Quick start
//!
//! ```rust
//! use container_display::{printed, to_string};
//! use std::collections::BTreeSet;
//!
//! assert_eq!(to_string(&vec![1, 2, 3, 4]), "[1, 2, 3, 4]");
//! assert_eq!(to_string(&(10, 100)), "(10, 100)");
//! assert_eq!(to_string(&BTreeSet::from([1, 2, 3])), "{1, 2, 3}");
//! assert_eq!(to_string(&(1, 2, 3)), "<1, 2, 3>");
//!
//! // Empty containers keep their brackets.
//! assert_eq!(to_string(&Vec::<i32>::new()), "[]");
//!
//! // `printed` is a Display adapter for use inside format strings.
//! let nested = vec![vec![1, 2], vec![3]];
//! assert_eq!(format!("got {}", printed(&nested)), "got [[1, 2], [3]]");
//! ```
//!
//! Maps render as sequences of pairs:
//!
//! ```rust
//! use container_display::to_string;
//! use std::collections::BTreeMap;
//!
//! let map = BTreeMap::from([(1, "Template"), (2, "Meta"), (3, "Programming")]);
//! assert_eq!(to_string(&map), "[(1, Template), (2, Meta), (3, Programming)]");
//! ```
//!
//! ## Compile-time rejection
//!
//! Strings expose iteration but must never be routed through container
//! printing:
//!
//! ```compile_fail
//! let greeting = String::from("hello");
//! container_display::to_string(&greeting); // String is not a container
//! ```
//!
//! Character arrays are string-like and are excluded the same way:
//!
//! ```compile_fail
//! let letters = ['h', 'i'];
//! container_display::to_string(&letters); // [char; N] is not a container
//! ```
//!
//! ## Customization
//!
//! The built-in delimiter triples are [`Decorator`]s; supply your own to
//! change the framing without touching the traversal — see [`decorated`].
//! Unclassified iterables (newtype wrappers, user collections) render
//! through [`sequence`] and [`shaped`].

pub mod container;
pub mod decor;
pub mod delimiters;
pub mod element;
pub mod shape;
pub mod wide;

pub use container::{printed, sequence, shaped, ContainerFmt, IterFmt, Printed};
pub use decor::{decorated, Decorated, Decorator};
pub use delimiters::{DelimiterSet, Delimiters, WideDelimiters};
pub use element::{ContainerElement, ElementFmt};
pub use shape::{Shape, Width};
pub use wide::Utf16Write;

use std::fmt;

/// Renders a container to a `String` with its shape's default delimiters.
///
/// # Examples
///
/// ```rust
/// use container_display::to_string;
///
/// assert_eq!(to_string(&vec![(1, 0.5), (2, 1.5)]), "[(1, 0.5), (2, 1.5)]");
/// ```
#[must_use]
pub fn to_string<T>(value: &T) -> String
where
    T: ContainerFmt + ?Sized,
{
    printed(value).to_string()
}

/// Renders a container into any `fmt::Write` sink.
///
/// Returns the sink's own error, if any; the rendering itself cannot fail.
///
/// # Examples
///
/// ```rust
/// use container_display::write_container;
///
/// let mut out = String::from("values: ");
/// write_container(&mut out, &[1, 2, 3][..]).unwrap();
/// assert_eq!(out, "values: [1, 2, 3]");
/// ```
pub fn write_container<W, T>(writer: &mut W, value: &T) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: ContainerFmt + ?Sized,
{
    write!(writer, "{}", printed(value))
}

/// Renders a container to UTF-16 code units with its shape's wide
/// delimiters.
///
/// # Examples
///
/// ```rust
/// use container_display::to_utf16;
///
/// let wide = to_utf16(&(10, 100));
/// assert_eq!(String::from_utf16(&wide).unwrap(), "(10, 100)");
/// ```
#[must_use]
pub fn to_utf16<T>(value: &T) -> Vec<u16>
where
    T: ContainerFmt + ?Sized,
{
    let mut units = Vec::new();
    // Writing into a Vec cannot fail.
    value
        .fmt_utf16(&mut units)
        .expect("rendering into a Vec<u16> returned an error");
    units
}

/// Renders a container into any UTF-16 sink.
///
/// # Examples
///
/// ```rust
/// use container_display::write_utf16;
///
/// let mut units: Vec<u16> = Vec::new();
/// write_utf16(&mut units, &vec![1, 2]).unwrap();
/// assert_eq!(String::from_utf16(&units).unwrap(), "[1, 2]");
/// ```
pub fn write_utf16<T>(sink: &mut dyn Utf16Write, value: &T) -> fmt::Result
where
    T: ContainerFmt + ?Sized,
{
    value.fmt_utf16(sink)
}
