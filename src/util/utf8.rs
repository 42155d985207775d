/// Returns the number of bytes making up the UTF-8 encoded codepoint at the
/// beginning of the given byte slice.
///
/// If the leading byte is not a valid UTF-8 leading byte, or if the encoding
/// is truncated or otherwise malformed, then this returns `1`. This
/// guarantees that callers stepping through a haystack one codepoint at a
/// time always make progress, even on invalid UTF-8.
///
/// This returns `0` if and only if `bytes` is empty.
#[inline(always)]
pub(crate) fn encoded_len(bytes: &[u8]) -> usize {
    let lead = match bytes.first() {
        None => return 0,
        Some(&lead) => lead,
    };
    // Each multi-byte leading byte restricts the range of its first
    // continuation byte. This is what rules out overlong encodings,
    // surrogates and codepoints beyond U+10FFFF.
    let (len, lo, hi) = match lead {
        0x00..=0x7F => return 1,
        0xC2..=0xDF => (2, 0x80, 0xBF),
        0xE0 => (3, 0xA0, 0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80, 0xBF),
        0xED => (3, 0x80, 0x9F),
        0xF0 => (4, 0x90, 0xBF),
        0xF1..=0xF3 => (4, 0x80, 0xBF),
        0xF4 => (4, 0x80, 0x8F),
        _ => return 1,
    };
    if bytes.len() < len {
        return 1;
    }
    if bytes[1] < lo || bytes[1] > hi {
        return 1;
    }
    if bytes[2..len].iter().any(|&b| !is_continuation_byte(b)) {
        return 1;
    }
    len
}

/// Returns true if and only if the given offset in the given bytes falls on a
/// valid UTF-8 encoded codepoint boundary.
///
/// If `bytes` is not valid UTF-8, then the behavior of this routine is
/// unspecified.
#[inline(always)]
pub(crate) fn is_boundary(bytes: &[u8], i: usize) -> bool {
    match bytes.get(i) {
        // The position at the end of the bytes always represents an empty
        // string, which is a valid boundary. But anything after that doesn't
        // make much sense to call valid a boundary.
        None => i == bytes.len(),
        Some(&b) => !is_continuation_byte(b),
    }
}

#[inline(always)]
fn is_continuation_byte(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}
