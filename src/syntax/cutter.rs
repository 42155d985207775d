use core::cmp;

use crate::{
    syntax::{Fragment, Kind, Modifiers, INFINITE},
    util::{ascii, search::Span, utf8},
};

/// Slices a pattern into fragments.
///
/// A cutter is stateless. Every routine takes the fragment describing the
/// remaining text at the current nesting level, cuts a unit off of its front
/// and advances it past whatever was consumed. Nothing here ever fails: text
/// that doesn't fit the grammar is cut into *some* fragment, usually plain
/// literal text, so that compilation always makes progress.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cutter<'p> {
    pattern: &'p [u8],
}

impl<'p> Cutter<'p> {
    pub(crate) fn new(pattern: &'p [u8]) -> Cutter<'p> {
        Cutter { pattern }
    }

    pub(crate) fn pattern(&self) -> &'p [u8] {
        self.pattern
    }

    /// Returns the fragment for the entire pattern, after its global
    /// modifier declaration (if any) has been read and stripped.
    pub(crate) fn root(&self) -> Fragment {
        let mut root = Fragment::root(self.pattern);
        self.read_modifiers(&mut root.span, &mut root.mods);
        root
    }

    /// Cuts the next alternative off of the given path. The alternative
    /// extends up to the next `|` that isn't nested inside of a group, hook
    /// or set.
    pub(crate) fn next_track(&self, rest: &mut Fragment) -> Option<Fragment> {
        if rest.is_empty() {
            return None;
        }
        Some(self.cut_balanced(rest, Kind::Path))
    }

    /// Cuts the next unit off of a track, along with its quantifier and
    /// modifier declaration.
    pub(crate) fn next_unit(&self, rest: &mut Fragment) -> Option<Fragment> {
        let bytes = &self.pattern[rest.span];
        let lead = *bytes.first()?;
        let mut unit = if lead >= 0x80 {
            self.cut(rest, utf8::encoded_len(bytes), Kind::CodePoint)
        } else {
            match lead {
                b':' => self.cut_escape(rest),
                b'.' => self.cut(rest, 1, Kind::Any),
                b'@' => {
                    let len = 1 + ascii::count_digits(&bytes[1..]);
                    self.cut(rest, len, Kind::BackRef)
                }
                b'(' => self.cut_balanced(rest, Kind::Group),
                b'<' => self.cut_balanced(rest, Kind::Hook),
                b'[' => self.cut_balanced(rest, Kind::Set),
                _ => self.cut_literal(rest),
            }
        };
        self.read_repetition(&mut rest.span, &mut unit);
        self.read_modifiers(&mut rest.span, &mut unit.mods);
        Some(unit)
    }

    /// Cuts the next member off of the body of a set. Members are never
    /// quantified and never negated on their own.
    pub(crate) fn next_member(&self, rest: &mut Fragment) -> Option<Fragment> {
        let bytes = &self.pattern[rest.span];
        let lead = *bytes.first()?;
        let mut member = if lead >= 0x80 {
            self.cut(rest, utf8::encoded_len(bytes), Kind::CodePoint)
        } else if lead == b':' {
            self.cut_escape(rest)
        } else {
            let (len, kind) = set_literal_len(bytes);
            self.cut(rest, len, kind)
        };
        member.min = 1;
        member.max = 1;
        member.mods.set_negate(false);
        Some(member)
    }

    fn cut(&self, rest: &mut Fragment, len: usize, kind: Kind) -> Fragment {
        let end = cmp::min(rest.span.start + len, rest.span.end);
        let unit = Fragment {
            kind,
            span: Span { start: rest.span.start, end },
            ..*rest
        };
        rest.span.start = end;
        unit
    }

    /// Cuts a `:x` escape. The escaped character may be a non-ASCII code
    /// point. A lone `:` at the end of the text is cut as a literal.
    fn cut_escape(&self, rest: &mut Fragment) -> Fragment {
        let bytes = &self.pattern[rest.span];
        match bytes.get(1) {
            None => self.cut(rest, 1, Kind::Literal),
            Some(&b) if b >= 0x80 => {
                let len = 1 + utf8::encoded_len(&bytes[1..]);
                self.cut(rest, len, Kind::Meta)
            }
            Some(_) => self.cut(rest, 2, Kind::Meta),
        }
    }

    /// Cuts a run of literal bytes. The run stops in front of anything that
    /// begins another unit or a modifier declaration. When it stops at a
    /// quantifier, the last byte of the run is left behind so that the
    /// quantifier applies to that byte alone.
    fn cut_literal(&self, rest: &mut Fragment) -> Fragment {
        let bytes = &self.pattern[rest.span];
        for (i, &b) in bytes.iter().enumerate() {
            if b >= 0x80 {
                return self.cut(rest, i, Kind::Literal);
            }
            match b {
                b'(' | b'<' | b'[' | b'@' | b':' | b'.' if i > 0 => {
                    return self.cut(rest, i, Kind::Literal);
                }
                b'#' => {
                    return self.cut(rest, cmp::max(i, 1), Kind::Literal);
                }
                b'?' | b'+' | b'*' | b'{' => {
                    let len = if i <= 1 { 1 } else { i - 1 };
                    return self.cut(rest, len, Kind::Literal);
                }
                _ => {}
            }
        }
        self.cut(rest, bytes.len(), Kind::Literal)
    }

    /// Cuts a bracketed unit (or, for `Kind::Path`, an alternative) off of
    /// the front of `rest`. The brackets themselves are not part of the
    /// resulting span.
    ///
    /// Only `(`/`<` and `)`/`>` affect the nesting depth, and they are
    /// interchangeable for that purpose. A `[` skips to its closing `]`
    /// wholesale. `:x` escapes are skipped everywhere.
    ///
    /// If no closing delimiter is found, the unit extends to the end of
    /// `rest`.
    fn cut_balanced(&self, rest: &mut Fragment, kind: Kind) -> Fragment {
        let bytes = &self.pattern[rest.span];
        let open = if kind == Kind::Path { 0 } else { 1 };
        let mut unit = Fragment { kind, ..*rest };
        let mut depth: isize = 0;
        let mut i = 0;
        loop {
            i = skip_escapes(bytes, i);
            if i >= bytes.len() {
                break;
            }
            match bytes[i] {
                b'(' | b'<' => depth += 1,
                b')' | b'>' => depth -= 1,
                b'[' => i += set_end(&bytes[i..]),
                _ => {}
            }
            let found = match kind {
                Kind::Group | Kind::Hook => depth == 0,
                Kind::Set => bytes.get(i) == Some(&b']'),
                _ => depth == 0 && bytes.get(i) == Some(&b'|'),
            };
            if found {
                let start = rest.span.start;
                unit.span = Span { start: start + open, end: start + i };
                rest.span.start = start + i + 1;
                return unit;
            }
            i += 1;
        }
        unit.span = rest.span.skip(open);
        rest.span.start = rest.span.end;
        unit
    }

    /// Reads an optional quantifier from the front of `rest` into `unit`.
    ///
    /// A `{` that doesn't begin a well formed counted repetition is not
    /// consumed. The unit is left unquantified and the `{` will be cut as
    /// literal text.
    fn read_repetition(&self, rest: &mut Span, unit: &mut Fragment) {
        let bytes = &self.pattern[*rest];
        let (min, max, len) = match bytes.first() {
            Some(b'?') => (0, 1, 1),
            Some(b'+') => (1, INFINITE, 1),
            Some(b'*') => (0, INFINITE, 1),
            Some(b'{') => match counted_repetition(bytes) {
                Some(rep) => rep,
                None => (1, 1, 0),
            },
            _ => (1, 1, 0),
        };
        unit.min = min;
        unit.max = max;
        *rest = rest.skip(len);
    }

    /// Reads an optional modifier declaration from the front of `rest` into
    /// `mods`. The declaration ends at the first byte that isn't a modifier
    /// flag, which is left in place.
    ///
    /// Negation is never inherited, so it is always cleared first.
    fn read_modifiers(&self, rest: &mut Span, mods: &mut Modifiers) {
        mods.set_negate(false);
        let bytes = &self.pattern[*rest];
        if bytes.first() != Some(&b'#') {
            return;
        }
        let mut len = 1;
        while len < bytes.len() && mods.apply(bytes[len]) {
            len += 1;
        }
        *rest = rest.skip(len);
    }
}

/// Parses a counted repetition at the beginning of `bytes`, which must start
/// with `{`. Returns the minimum, maximum and the number of bytes it spans.
///
/// The accepted forms are `{m}`, `{m,}` and `{m,n}`, where either number may
/// be empty (and is then zero).
pub(crate) fn counted_repetition(
    bytes: &[u8],
) -> Option<(usize, usize, usize)> {
    let mut pos = 1;
    let min = ascii::parse_decimal(&bytes[pos..]);
    pos += ascii::count_digits(&bytes[pos..]);
    match bytes.get(pos)? {
        b'}' => Some((min, min, pos + 1)),
        b',' => {
            pos += 1;
            if bytes.get(pos)? == &b'}' {
                return Some((min, INFINITE, pos + 1));
            }
            let max = ascii::parse_decimal(&bytes[pos..]);
            pos += ascii::count_digits(&bytes[pos..]);
            if bytes.get(pos)? != &b'}' {
                return None;
            }
            Some((min, max, pos + 1))
        }
        _ => None,
    }
}

/// Returns the length of the literal member at the front of a set body, and
/// whether it is actually a range.
///
/// A `-` forms a range only when exactly one byte precedes it in the current
/// run and an ASCII byte follows it. When a `-` appears further along, the
/// run is cut one byte short of it so that the byte in front of the `-` can
/// begin a range on the next call. A leading or trailing `-` is literal.
fn set_literal_len(bytes: &[u8]) -> (usize, Kind) {
    for (i, &b) in bytes.iter().enumerate() {
        if b >= 0x80 || b == b':' {
            return (i, Kind::Literal);
        }
        if b == b'-' && i > 0 {
            if i == 1 && bytes.get(2).map_or(false, |&hi| hi < 0x80) {
                return (3, Kind::Range);
            }
            if i >= 2 {
                return (i - 1, Kind::Literal);
            }
        }
    }
    (bytes.len(), Kind::Literal)
}

/// Skips over any `:x` escapes beginning at `i`, never going past the end of
/// `bytes`.
fn skip_escapes(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i] == b':' {
        i += 2;
    }
    cmp::min(i, bytes.len())
}

/// Given bytes starting with a `[`, returns the index of the `]` closing it,
/// or `bytes.len()` if there is none.
pub(crate) fn set_end(bytes: &[u8]) -> usize {
    let mut i = 0;
    loop {
        i = skip_escapes(bytes, i);
        match bytes.get(i) {
            None => return bytes.len(),
            Some(b']') => return i,
            Some(_) => i += 1,
        }
    }
}
