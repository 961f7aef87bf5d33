//! Element rendering: what may appear inside a container.
//!
//! [`ElementFmt`] is the per-element counterpart of
//! [`ContainerFmt`](crate::ContainerFmt). Scalars and strings render through
//! their `Display` impls; containers render recursively with their own
//! delimiters, which is what makes nesting work without any extra wiring.
//!
//! [`ContainerElement`] is the narrower bound used by the fixed-array impl:
//! everything an array of which still counts as a container. `char` is
//! deliberately left out, so character arrays are rejected rather than
//! rendered as bracketed lists — in source order, the string-like exclusions
//! win over the general array rule.

use crate::wide::{self, Utf16Write};
use std::fmt;

/// A value that can be rendered as a container element.
///
/// Implemented for the primitive scalars, strings, references, and every
/// classified container (containers render themselves recursively). User
/// types appearing as elements implement this by delegating to `Display`:
///
/// ```rust
/// use container_display::ElementFmt;
/// use std::fmt;
///
/// struct Celsius(f64);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// impl ElementFmt for Celsius {
///     fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         fmt::Display::fmt(self, f)
///     }
/// }
///
/// assert_eq!(container_display::to_string(&vec![Celsius(21.5)]), "[21.5°C]");
/// ```
pub trait ElementFmt {
    /// Writes this value's narrow textual form.
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Writes this value's wide (UTF-16) textual form.
    ///
    /// The default encodes the narrow form; containers override it to bind
    /// their UTF-16 delimiter tables directly.
    fn fmt_element_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
        struct AsDisplay<'a, T: ?Sized>(&'a T);

        impl<T: ElementFmt + ?Sized> fmt::Display for AsDisplay<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt_element(f)
            }
        }

        wide::write_display(sink, &AsDisplay(self))
    }
}

/// Marker for element types whose fixed arrays are still containers.
///
/// `[T; N]` is classified as a container only when `T: ContainerElement`.
/// Every element type qualifies except `char`: character arrays are
/// string-like and must not be rendered as bracketed lists, mirroring how
/// C-style character arrays print as strings rather than as containers.
pub trait ContainerElement: ElementFmt {}

macro_rules! display_elements {
    ($($ty:ty),* $(,)?) => {$(
        impl ElementFmt for $ty {
            fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }

            fn fmt_element_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
                wide::write_display(sink, self)
            }
        }
    )*};
}

macro_rules! container_elements {
    ($($ty:ty),* $(,)?) => {$(
        impl ContainerElement for $ty {}
    )*};
}

display_elements!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

// Everything above except `char` (string-like) and `str` (unsized, so it can
// never be an array element anyway).
container_elements!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, String,
);

impl<T: ElementFmt + ?Sized> ElementFmt for &T {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }

    fn fmt_element_utf16(&self, sink: &mut dyn Utf16Write) -> fmt::Result {
        (**self).fmt_element_utf16(sink)
    }
}

impl<T: ContainerElement + ?Sized> ContainerElement for &T {}
