//! Caller-supplied decorators.
//!
//! A [`Decorator`] owns the four write hooks of a container rendering:
//! prefix, element, separator, suffix. The built-in delimiter triples are
//! themselves decorators, so the default rendering is just
//! `shape.delimiters()` used as one; anything else (custom framing, element
//! transformation) is a user impl.
//!
//! ## Examples
//!
//! ```rust
//! use container_display::{decorated, Decorator};
//! use std::fmt;
//!
//! struct Banner;
//!
//! impl Decorator for Banner {
//!     fn write_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("$$ ")
//!     }
//!     fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(" | ")
//!     }
//!     fn write_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(" $$")
//!     }
//! }
//!
//! let rendered = decorated(&vec![1, 2, 3, 4], Banner).to_string();
//! assert_eq!(rendered, "$$ 1 | 2 | 3 | 4 $$");
//! ```

use crate::container::ContainerFmt;
use crate::delimiters::Delimiters;
use crate::element::ElementFmt;
use std::fmt;

/// The write hooks applied around and between a container's elements.
///
/// `write_element` has a default that renders the element's own textual
/// form; override it to transform elements on the way out.
pub trait Decorator {
    /// Written once, before the first element.
    fn write_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Written between consecutive elements.
    fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Written once, after the last element.
    fn write_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Writes one element. Defaults to the element's own rendering.
    fn write_element<E>(&self, f: &mut fmt::Formatter<'_>, element: &E) -> fmt::Result
    where
        E: ElementFmt + ?Sized,
    {
        element.fmt_element(f)
    }
}

impl Decorator for Delimiters {
    fn write_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix)
    }

    fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.separator)
    }

    fn write_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix)
    }
}

impl<D: Decorator + ?Sized> Decorator for &D {
    fn write_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).write_prefix(f)
    }

    fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).write_separator(f)
    }

    fn write_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).write_suffix(f)
    }

    fn write_element<E>(&self, f: &mut fmt::Formatter<'_>, element: &E) -> fmt::Result
    where
        E: ElementFmt + ?Sized,
    {
        (**self).write_element(f, element)
    }
}

/// `Display` adapter pairing a container with a custom decorator.
///
/// Created by [`decorated`].
pub struct Decorated<'a, T: ?Sized, D> {
    value: &'a T,
    decor: D,
}

/// Renders `value` with `decor` instead of its shape's delimiter triple.
///
/// # Examples
///
/// ```rust
/// use container_display::{decorated, Shape};
///
/// // Borrow another shape's triple as the decorator.
/// let rendered = decorated(&vec![1, 2], Shape::Set.delimiters()).to_string();
/// assert_eq!(rendered, "{1, 2}");
/// ```
#[must_use]
pub fn decorated<T, D>(value: &T, decor: D) -> Decorated<'_, T, D>
where
    T: ContainerFmt + ?Sized,
    D: Decorator,
{
    Decorated { value, decor }
}

impl<T, D> fmt::Display for Decorated<'_, T, D>
where
    T: ContainerFmt + ?Sized,
    D: Decorator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_with(f, &self.decor)
    }
}
