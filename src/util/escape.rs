/*!
Helpers for printing pattern and haystack bytes in `Debug` output.
*/

/// Provides a convenient `Debug` implementation for a byte string.
///
/// Valid UTF-8 is printed like a `&str`. Anything else is printed one byte at
/// a time, with non-printable and non-ASCII bytes escaped.
pub(crate) struct DebugBytes<'a>(pub(crate) &'a [u8]);

impl<'a> core::fmt::Debug for DebugBytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Ok(s) = core::str::from_utf8(self.0) {
            return write!(f, "{:?}", s);
        }
        write!(f, "\"")?;
        for &b in self.0.iter() {
            // Quotes are escaped by escape_default, so the output stays
            // unambiguous.
            for e in core::ascii::escape_default(b) {
                write!(f, "{}", char::from(e))?;
            }
        }
        write!(f, "\"")
    }
}
