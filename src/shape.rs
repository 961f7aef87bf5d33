//! Structural categories used to select delimiters.
//!
//! Every printable container carries a [`Shape`], and every output sink has a
//! [`Width`]. The pair (shape, width) picks exactly one delimiter triple; see
//! [`crate::delimiters`] for the tables themselves.

/// The structural category of a container type.
///
/// The shape decides which delimiter triple frames the rendered elements.
/// Anything without a specialized triple ([`Shape::Sequence`]) renders with
/// square brackets: vectors, slices, arrays, maps, and unordered sets all
/// fall back to it.
///
/// # Examples
///
/// ```rust
/// use container_display::Shape;
///
/// assert_eq!(Shape::Sequence.delimiters().prefix, "[");
/// assert_eq!(Shape::Set.delimiters().prefix, "{");
/// assert_eq!(Shape::Pair.delimiters().prefix, "(");
/// assert_eq!(Shape::Tuple.delimiters().prefix, "<");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Iterable containers without a more specific category: `[1, 2, 3]`.
    Sequence,
    /// Ordered unique sets (`BTreeSet`, `IndexSet`): `{1, 2, 3}`.
    Set,
    /// Two-element pairs, including map entries: `(k, v)`.
    Pair,
    /// Fixed-arity heterogeneous tuples of arity other than two: `<1, a>`.
    Tuple,
}

impl Shape {
    /// Every shape, for exhaustive iteration in tests and diagnostics.
    pub const ALL: [Shape; 4] = [Shape::Sequence, Shape::Set, Shape::Pair, Shape::Tuple];
}

/// Character width of an output sink.
///
/// Narrow sinks are ordinary UTF-8 text (`std::fmt::Write`); wide sinks take
/// UTF-16 code units through [`crate::Utf16Write`]. The width binds at
/// compile time: the narrow and wide printing paths each reference their own
/// delimiter table, and the wide triples encode the same code points as the
/// narrow ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// UTF-8 text written through `std::fmt::Write`.
    Narrow,
    /// UTF-16 code units written through [`crate::Utf16Write`].
    Wide,
}

impl Width {
    /// Both widths, for exhaustive iteration in tests and diagnostics.
    pub const ALL: [Width; 2] = [Width::Narrow, Width::Wide];
}
