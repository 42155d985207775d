use alloc::vec::Vec;

use crate::{
    error::Error,
    syntax::{
        cutter::{counted_repetition, set_end, Cutter},
        Fragment, Kind,
    },
    util::{ascii, search::Span, utf8},
};

/// What the most recently scanned piece of a track can be followed by.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Nothing precedes this position in the current track, or the previous
    /// unit is already complete. Neither quantifiers nor modifiers can
    /// follow.
    Empty,
    /// An atom was just scanned. It may be quantified and/or modified.
    Atom,
    /// A quantified atom was just scanned. It may only be modified.
    Quantified,
}

/// Strictly checks the syntax of the given pattern.
///
/// This accepts exactly the patterns for which the lenient cutter never has
/// to guess. It doesn't build anything. Compilation proceeds with the same
/// cutter regardless of whether this ran.
pub(crate) fn validate(pattern: &[u8]) -> Result<(), Error> {
    let root = Cutter::new(pattern).root();
    let mut stack: Vec<(u8, usize)> = Vec::new();
    let mut state = State::Empty;
    let mut i = root.span.start;
    while i < pattern.len() {
        let b = pattern[i];
        match b {
            b'(' | b'<' => {
                stack.push((b, i));
                state = State::Empty;
                i += 1;
            }
            b')' | b'>' => {
                let want = if b == b')' { b'(' } else { b'<' };
                match stack.pop() {
                    Some((open, _)) if open == want => {}
                    _ => return Err(Error::unmatched_close(i, b)),
                }
                state = State::Atom;
                i += 1;
            }
            b'[' => {
                let end = i + set_end(&pattern[i..]);
                if end >= pattern.len() {
                    return Err(Error::unclosed_set(i));
                }
                validate_set(pattern, Span { start: i + 1, end })?;
                state = State::Atom;
                i = end + 1;
            }
            b'|' => {
                state = State::Empty;
                i += 1;
            }
            b':' => {
                if i + 1 >= pattern.len() {
                    return Err(Error::dangling_escape(i));
                }
                i += 1 + utf8::encoded_len(&pattern[i + 1..]);
                state = State::Atom;
            }
            b'@' => {
                i += 1 + ascii::count_digits(&pattern[i + 1..]);
                state = State::Atom;
            }
            b'?' | b'+' | b'*' => {
                if state != State::Atom {
                    return Err(Error::missing_operand(i));
                }
                state = State::Quantified;
                i += 1;
            }
            b'{' => {
                if state != State::Atom {
                    return Err(Error::missing_operand(i));
                }
                if ascii::count_digits(&pattern[i + 1..]) == 0 {
                    return Err(Error::invalid_repetition(i));
                }
                let (min, max, len) = counted_repetition(&pattern[i..])
                    .ok_or_else(|| Error::invalid_repetition(i))?;
                if min > max {
                    return Err(Error::invalid_repetition_range(i, min, max));
                }
                state = State::Quantified;
                i += len;
            }
            b'#' => {
                if state == State::Empty {
                    return Err(Error::missing_operand(i));
                }
                i += 1;
                while i < pattern.len() && b"^$?~*/!".contains(&pattern[i]) {
                    i += 1;
                }
                state = State::Empty;
            }
            _ => {
                i += utf8::encoded_len(&pattern[i..]);
                state = State::Atom;
            }
        }
    }
    match stack.pop() {
        None => Ok(()),
        Some((b'(', offset)) => Err(Error::unclosed_group(offset)),
        Some((_, offset)) => Err(Error::unclosed_hook(offset)),
    }
}

/// Checks that every range in the set body at `body` has its bounds in
/// order.
fn validate_set(pattern: &[u8], mut body: Span) -> Result<(), Error> {
    if pattern.get(body.start) == Some(&b'^') {
        body = body.skip(1);
    }
    let cutter = Cutter::new(pattern);
    let mut rest = Fragment { span: body, ..Fragment::root(pattern) };
    while let Some(member) = cutter.next_member(&mut rest) {
        if member.kind != Kind::Range {
            continue;
        }
        let range = &pattern[member.span];
        if range[0] > range[2] {
            return Err(Error::invalid_set_range(member.span.start));
        }
    }
    Ok(())
}
