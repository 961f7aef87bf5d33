//! Wide-character (UTF-16) output sinks.
//!
//! The narrow printing path writes UTF-8 text through `std::fmt::Write`; the
//! wide path writes UTF-16 code units through [`Utf16Write`]. Delimiter
//! fragments are emitted from the precomputed UTF-16 tables in
//! [`crate::delimiters`], so nothing on the wide path transcodes a narrow
//! rendering of the container structure itself — only element payloads are
//! encoded as they are written.
//!
//! ## Examples
//!
//! ```rust
//! use container_display::to_utf16;
//!
//! let units = to_utf16(&vec![1, 2, 3]);
//! assert_eq!(String::from_utf16(&units).unwrap(), "[1, 2, 3]");
//! ```

use std::fmt;

/// A sink accepting UTF-16 code units.
///
/// Only [`Utf16Write::write_units`] is required; the provided methods encode
/// characters and strings into units. Infallible sinks (such as `Vec<u16>`)
/// simply never return an error.
pub trait Utf16Write {
    /// Writes raw UTF-16 code units to the sink.
    fn write_units(&mut self, units: &[u16]) -> fmt::Result;

    /// Encodes a single character and writes its units.
    fn write_char(&mut self, ch: char) -> fmt::Result {
        let mut buf = [0u16; 2];
        self.write_units(ch.encode_utf16(&mut buf))
    }

    /// Encodes a string and writes its units.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            self.write_char(ch)?;
        }
        Ok(())
    }
}

impl Utf16Write for Vec<u16> {
    fn write_units(&mut self, units: &[u16]) -> fmt::Result {
        self.extend_from_slice(units);
        Ok(())
    }
}

impl<W: Utf16Write + ?Sized> Utf16Write for &mut W {
    fn write_units(&mut self, units: &[u16]) -> fmt::Result {
        (**self).write_units(units)
    }
}

/// Bridges `std::fmt::Write` onto a UTF-16 sink, encoding as it goes.
struct Utf16Adapter<'a>(&'a mut dyn Utf16Write);

impl fmt::Write for Utf16Adapter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s)
    }
}

/// Renders a `Display` value into a UTF-16 sink without an intermediate
/// allocation.
pub(crate) fn write_display<T: fmt::Display + ?Sized>(
    sink: &mut dyn Utf16Write,
    value: &T,
) -> fmt::Result {
    use fmt::Write as _;
    write!(Utf16Adapter(sink), "{}", value)
}
