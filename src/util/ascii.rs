/*!
ASCII byte classification and decimal parsing.

These are the predicates behind the `:a`, `:d`, `:w`, `:s` and `:b` meta
classes, plus the digit scanning used for quantifier bounds, back-reference
identities and template placeholders.
*/

use crate::syntax::INFINITE;

/// Returns true for ASCII letters.
#[inline(always)]
pub(crate) fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Returns true for ASCII decimal digits.
#[inline(always)]
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Returns true for ASCII letters and digits. Note that, unlike `\w` in most
/// regex engines, this excludes `_`.
#[inline(always)]
pub(crate) fn is_alnum(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Returns true for a space or any of `\t`, `\n`, `\x0B`, `\x0C` and `\r`.
///
/// This differs from `u8::is_ascii_whitespace` in that it includes the
/// vertical tab.
#[inline(always)]
pub(crate) fn is_space(b: u8) -> bool {
    b == b' ' || (b'\t'..=b'\r').contains(&b)
}

/// Returns true for a space or a horizontal tab.
#[inline(always)]
pub(crate) fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Returns the number of leading ASCII digits in `bytes`.
pub(crate) fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| is_digit(b)).count()
}

/// Parses the leading run of ASCII digits in `bytes` as a decimal number.
///
/// Leading zeros are permitted. An empty run parses as `0`. Values that
/// would exceed the unbounded repetition sentinel are clamped to it, so
/// absurdly long digit strings can never overflow.
pub(crate) fn parse_decimal(bytes: &[u8]) -> usize {
    let mut n: usize = 0;
    for &b in bytes.iter().take_while(|&&b| is_digit(b)) {
        n = n.saturating_mul(10).saturating_add(usize::from(b - b'0'));
        if n >= INFINITE {
            return INFINITE;
        }
    }
    n
}
