//! Delimiter triples and their per-shape, per-width tables.
//!
//! A [`DelimiterSet`] is the immutable (prefix, separator, suffix) triple
//! that frames a rendered container. Triples exist in two widths: narrow
//! ([`Delimiters`], `&'static str` fragments) and wide ([`WideDelimiters`],
//! `&'static [u16]` fragments carrying the same code points). Selection is a
//! total, exhaustive match on [`Shape`] — every (shape, width) pair resolves
//! to exactly one triple.
//!
//! ## Examples
//!
//! ```rust
//! use container_display::{Delimiters, Shape};
//!
//! let set = Shape::Set.delimiters();
//! assert_eq!((set.prefix, set.separator, set.suffix), ("{", ", ", "}"));
//!
//! // Unspecialized shapes fall back to square brackets.
//! let default = Shape::Sequence.delimiters();
//! assert_eq!(default, Delimiters { prefix: "[", separator: ", ", suffix: "]" });
//! ```

use crate::shape::Shape;
use std::fmt;

/// An immutable (prefix, separator, suffix) triple of static text fragments.
///
/// Parameterized over the fragment type so the same struct serves both
/// widths: `DelimiterSet<str>` for narrow output, `DelimiterSet<[u16]>` for
/// wide output.
pub struct DelimiterSet<T: ?Sized + 'static> {
    /// Written once, before the first element.
    pub prefix: &'static T,
    /// Written between consecutive elements.
    pub separator: &'static T,
    /// Written once, after the last element.
    pub suffix: &'static T,
}

/// Narrow (UTF-8) delimiter triple.
pub type Delimiters = DelimiterSet<str>;

/// Wide (UTF-16) delimiter triple.
pub type WideDelimiters = DelimiterSet<[u16]>;

impl<T: ?Sized> Clone for DelimiterSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for DelimiterSet<T> {}

impl<T: ?Sized + PartialEq> PartialEq for DelimiterSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
            && self.separator == other.separator
            && self.suffix == other.suffix
    }
}

impl<T: ?Sized + Eq> Eq for DelimiterSet<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for DelimiterSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelimiterSet")
            .field("prefix", &self.prefix)
            .field("separator", &self.separator)
            .field("suffix", &self.suffix)
            .finish()
    }
}

/// Default narrow triple for any shape without a specialized one.
pub const SEQUENCE: Delimiters = DelimiterSet {
    prefix: "[",
    separator: ", ",
    suffix: "]",
};

/// Narrow triple for ordered unique sets.
pub const SET: Delimiters = DelimiterSet {
    prefix: "{",
    separator: ", ",
    suffix: "}",
};

/// Narrow triple for pairs.
pub const PAIR: Delimiters = DelimiterSet {
    prefix: "(",
    separator: ", ",
    suffix: ")",
};

/// Narrow triple for fixed-arity tuples.
pub const TUPLE: Delimiters = DelimiterSet {
    prefix: "<",
    separator: ", ",
    suffix: ">",
};

/// Default wide triple for any shape without a specialized one.
pub const SEQUENCE_UTF16: WideDelimiters = DelimiterSet {
    prefix: &['[' as u16],
    separator: &[',' as u16, ' ' as u16],
    suffix: &[']' as u16],
};

/// Wide triple for ordered unique sets.
pub const SET_UTF16: WideDelimiters = DelimiterSet {
    prefix: &['{' as u16],
    separator: &[',' as u16, ' ' as u16],
    suffix: &['}' as u16],
};

/// Wide triple for pairs.
pub const PAIR_UTF16: WideDelimiters = DelimiterSet {
    prefix: &['(' as u16],
    separator: &[',' as u16, ' ' as u16],
    suffix: &[')' as u16],
};

/// Wide triple for fixed-arity tuples.
pub const TUPLE_UTF16: WideDelimiters = DelimiterSet {
    prefix: &['<' as u16],
    separator: &[',' as u16, ' ' as u16],
    suffix: &['>' as u16],
};

impl Shape {
    /// Returns the narrow delimiter triple for this shape.
    ///
    /// The match is exhaustive, so the lookup is total: every shape resolves
    /// to exactly one triple.
    #[must_use]
    pub const fn delimiters(self) -> Delimiters {
        match self {
            Shape::Sequence => SEQUENCE,
            Shape::Set => SET,
            Shape::Pair => PAIR,
            Shape::Tuple => TUPLE,
        }
    }

    /// Returns the wide (UTF-16) delimiter triple for this shape.
    ///
    /// Carries the same code points as [`Shape::delimiters`], encoded as
    /// UTF-16 units.
    #[must_use]
    pub const fn utf16_delimiters(self) -> WideDelimiters {
        match self {
            Shape::Sequence => SEQUENCE_UTF16,
            Shape::Set => SET_UTF16,
            Shape::Pair => PAIR_UTF16,
            Shape::Tuple => TUPLE_UTF16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Width;

    #[test]
    fn lookup_is_total_and_widths_agree() {
        for shape in Shape::ALL {
            for width in Width::ALL {
                // Both widths must resolve, and the wide triple must decode
                // to the narrow one.
                let narrow = shape.delimiters();
                match width {
                    Width::Narrow => {
                        assert!(!narrow.prefix.is_empty());
                        assert!(!narrow.separator.is_empty());
                        assert!(!narrow.suffix.is_empty());
                    }
                    Width::Wide => {
                        let wide = shape.utf16_delimiters();
                        assert_eq!(String::from_utf16(wide.prefix).unwrap(), narrow.prefix);
                        assert_eq!(
                            String::from_utf16(wide.separator).unwrap(),
                            narrow.separator
                        );
                        assert_eq!(String::from_utf16(wide.suffix).unwrap(), narrow.suffix);
                    }
                }
            }
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        for shape in Shape::ALL {
            assert_eq!(shape.delimiters(), shape.delimiters());
            assert_eq!(shape.utf16_delimiters(), shape.utf16_delimiters());
        }
    }

    #[test]
    fn specialized_triples() {
        assert_eq!(Shape::Set.delimiters(), SET);
        assert_eq!(Shape::Pair.delimiters(), PAIR);
        assert_eq!(Shape::Tuple.delimiters(), TUPLE);
        assert_eq!(Shape::Sequence.delimiters(), SEQUENCE);
    }
}
