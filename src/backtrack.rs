/*!
The matching engine: a recursive backtracker over a compiled [`Program`].

The matcher walks the instruction arena directly. A run of sibling
instructions is matched one after the other by `trek`. Alternatives are
tried in order by `walker`, which commits to the first one that succeeds.
Quantified atoms are matched greedily by `looper`, and quantified groups and
hooks by `loop_group`. None of these ever revisit a choice once made: a
quantifier never gives back what it consumed to let the rest of its run
match. This makes the cost of a match attempt proportional to the pattern's
size times the haystack's length in the common case.

The only state threaded through the recursion is the cursor, the number of
committed capture slots and the next group ID. All three are plain integers,
so saving and restoring them around a failed alternative is a copy.
*/

use crate::{
    program::{Inst, Op, Program},
    syntax::INFINITE,
    util::{ascii, captures::Captures, search::Span, utf8},
};

/// Runs every match attempt of one search over `haystack`, filling in
/// `caps` with the capture slots of every successful attempt. Returns the
/// number of matches found.
///
/// The search tries offsets from left to right. After a match, it resumes at
/// the end of that match, unless the match was empty or the program asks to
/// advance one code point at a time, in which case it resumes at the next
/// code point. The global modifiers may end the search early:
///
/// * anchor-start only tries the first offset.
/// * anchor-end only accepts a match that extends to the end of `haystack`,
/// and stops at the first such match. An attempt that succeeds without
/// reaching the end discards every capture recorded so far.
/// * single-match stops at the first match.
pub(crate) fn search(
    program: &Program,
    haystack: &str,
    caps: &mut Captures,
) -> usize {
    caps.clear();
    let hay = haystack.as_bytes();
    if hay.is_empty() || !program.is_ready() {
        return 0;
    }
    let mods = program.modifiers();
    let offsets = if mods.is_anchor_start() { 1 } else { hay.len() };
    let mut bt =
        Backtracker { program, haystack: hay, caps, at: 0, next_group: 1 };
    let mut count = 0;
    let mut start = 0;
    while start < offsets {
        if let Some(pre) = program.prefilter() {
            let span = Span { start, end: hay.len() };
            match pre.find(hay, span) {
                None => break,
                Some(candidate) => start = candidate.start,
            }
            debug_assert!(utf8::is_boundary(hay, start));
        }
        let mut forward = utf8::encoded_len(&hay[start..]);
        let saved = bt.caps.len();
        bt.at = start;
        bt.next_group = 1;
        if !bt.trek(0) {
            bt.caps.set_len(saved);
        } else if mods.is_anchor_end() {
            if bt.at == hay.len() {
                trace!("anchored match at {:?}", start..bt.at);
                return 1;
            }
            bt.caps.clear();
        } else if mods.is_single_match() {
            trace!("single match at {:?}", start..bt.at);
            return 1;
        } else {
            trace!("match at {:?}", start..bt.at);
            if !mods.is_char_stride() && bt.at > start {
                forward = bt.at - start;
            }
            count += 1;
        }
        start += forward;
    }
    count
}

/// The state of a single match attempt.
struct Backtracker<'a> {
    program: &'a Program,
    haystack: &'a [u8],
    caps: &'a mut Captures,
    /// The current position in the haystack.
    at: usize,
    /// The group ID that the next hook entered will receive.
    next_group: usize,
}

/// Everything needed to undo a failed attempt.
#[derive(Clone, Copy)]
struct Snapshot {
    at: usize,
    slots: usize,
    next_group: usize,
}

impl<'a> Backtracker<'a> {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            at: self.at,
            slots: self.caps.len(),
            next_group: self.next_group,
        }
    }

    fn restore(&mut self, snap: Snapshot) {
        self.at = snap.at;
        self.caps.set_len(snap.slots);
        self.next_group = snap.next_group;
    }

    /// Matches the run of sibling instructions beginning at `index`. The
    /// run ends successfully at the first boundary instruction.
    fn trek(&mut self, mut index: usize) -> bool {
        loop {
            let inst = *self.program.inst(index);
            if inst.op.is_boundary() {
                return true;
            }
            let matched = match inst.op {
                Op::Hook => {
                    let slot = self.caps.open(self.at, self.next_group);
                    self.next_group += 1;
                    let matched = self.loop_group(&inst, index);
                    if matched {
                        self.caps.close(slot, self.at);
                    }
                    matched
                }
                Op::Group => self.loop_group(&inst, index),
                Op::Path => self.walker(index),
                _ => self.looper(&inst, index),
            };
            if !matched {
                return false;
            }
            index = inst.close + 1;
        }
    }

    /// Tries each alternative of the path at `index` in order, stopping at
    /// the first one that matches.
    fn walker(&mut self, index: usize) -> bool {
        let snap = self.snapshot();
        let mut element = index + 1;
        while self.program.inst(element).op == Op::PathElement {
            if self.trek(element + 1) {
                return true;
            }
            self.restore(snap);
            element = self.program.inst(element).close;
        }
        false
    }

    /// Matches a quantified atom as many times as possible.
    ///
    /// A negated atom instead skips one code point at a time for as long as
    /// the atom doesn't match.
    fn looper(&mut self, inst: &Inst, index: usize) -> bool {
        let end = self.haystack.len();
        let mut loops = 0;
        if inst.frag.mods.is_negate() {
            while loops < inst.frag.max
                && self.at < end
                && self.matches(index, self.at).is_none()
            {
                self.at += utf8::encoded_len(&self.haystack[self.at..]);
                loops += 1;
            }
        } else {
            while loops < inst.frag.max && self.at < end {
                match self.matches(index, self.at) {
                    None => break,
                    Some(len) => self.at += len,
                }
                loops += 1;
            }
        }
        loops >= inst.frag.min
    }

    /// Matches the body of a quantified group or hook as many times as
    /// possible.
    ///
    /// A negated group instead skips one code point at a time until its body
    /// would match. Nothing the body did while probing is kept.
    fn loop_group(&mut self, inst: &Inst, index: usize) -> bool {
        let mut loops = 0;
        if inst.frag.mods.is_negate() {
            let end = self.haystack.len();
            let mut probe = self.at;
            while loops < inst.frag.max {
                let snap = self.snapshot();
                self.at = probe;
                let matched = self.trek(index + 1);
                self.restore(snap);
                if matched || probe >= end {
                    break;
                }
                probe += utf8::encoded_len(&self.haystack[probe..]);
                loops += 1;
            }
            self.at = probe;
        } else {
            while loops < inst.frag.max {
                let before = self.at;
                if !self.trek(index + 1) {
                    break;
                }
                loops += 1;
                // A body that matched nothing would match nothing again and
                // again. Only an unbounded quantifier could spin on it.
                if self.at == before && inst.frag.max == INFINITE {
                    loops = core::cmp::max(loops, inst.frag.min);
                    break;
                }
            }
        }
        loops >= inst.frag.min
    }

    /// Returns the number of bytes matched by the atom at `index` when
    /// matched at position `at`, if it matches. `at` must be less than the
    /// length of the haystack.
    fn matches(&self, index: usize, at: usize) -> Option<usize> {
        let inst = self.program.inst(index);
        let text = &self.haystack[at..];
        let pattern = self.program.text(&inst.frag);
        let fold = inst.frag.mods.is_fold_case();
        match inst.op {
            Op::Any => Some(utf8::encoded_len(text)),
            Op::Set => self.matches_set(index, at),
            Op::BackRef => self.matches_backref(pattern, text, fold),
            Op::Range => matches_range(pattern, text[0], fold),
            Op::Meta => matches_meta(pattern, text, fold),
            _ => matches_literal(pattern, text, fold),
        }
    }

    /// Returns the length matched by the first member of the set at `index`
    /// that matches at `at`. Literal members match a single byte that
    /// appears anywhere among their bytes.
    fn matches_set(&self, index: usize, at: usize) -> Option<usize> {
        let b = self.haystack[at];
        let mut member = index + 1;
        loop {
            let inst = self.program.inst(member);
            let len = match inst.op {
                Op::SetEnd => return None,
                Op::Range | Op::CodePoint | Op::Meta => {
                    self.matches(member, at)
                }
                _ => {
                    let fold = inst.frag.mods.is_fold_case();
                    let found =
                        self.program.text(&inst.frag).iter().any(|&p| {
                            p == b || (fold && p.eq_ignore_ascii_case(&b))
                        });
                    if found {
                        Some(1)
                    } else {
                        None
                    }
                }
            };
            if len.is_some() {
                return len;
            }
            member += 1;
        }
    }

    /// Matches the text most recently captured for the group named by the
    /// `@N` in `pattern`. An empty capture never matches.
    fn matches_backref(
        &self,
        pattern: &[u8],
        text: &[u8],
        fold: bool,
    ) -> Option<usize> {
        let group_id = ascii::parse_decimal(&pattern[1..]);
        let slot = self.caps.last_with_group(group_id)?;
        let captured = &self.haystack[slot.span];
        if captured.is_empty() {
            return None;
        }
        matches_literal(captured, text, fold)
    }
}

fn matches_literal(literal: &[u8], text: &[u8], fold: bool) -> Option<usize> {
    let prefix = text.get(..literal.len())?;
    let matched = if fold {
        prefix.eq_ignore_ascii_case(literal)
    } else {
        prefix == literal
    };
    if matched {
        Some(literal.len())
    } else {
        None
    }
}

/// Matches a single byte against a range like `a-z`. When folding case, the
/// bounds and the byte are all lowercased first.
fn matches_range(range: &[u8], b: u8, fold: bool) -> Option<usize> {
    let (lo, hi) = (range[0], range[2]);
    let matched = if fold {
        let b = b.to_ascii_lowercase();
        lo.to_ascii_lowercase() <= b && b <= hi.to_ascii_lowercase()
    } else {
        lo <= b && b <= hi
    };
    if matched {
        Some(1)
    } else {
        None
    }
}

/// Matches a `:x` escape.
///
/// The lowercase classes match a single ASCII byte. The uppercase classes
/// match a single byte outside of the class, or a whole code point if it is
/// not ASCII. `:&` matches any code point that is not ASCII. Any other
/// escaped character matches itself.
fn matches_meta(meta: &[u8], text: &[u8], fold: bool) -> Option<usize> {
    let class = meta[1];
    if class >= 0x80 {
        return matches_literal(&meta[1..], text, false);
    }
    let b = text[0];
    let (is, negated): (fn(u8) -> bool, bool) = match class {
        b'a' => (ascii::is_alpha, false),
        b'A' => (ascii::is_alpha, true),
        b'd' => (ascii::is_digit, false),
        b'D' => (ascii::is_digit, true),
        b'w' => (ascii::is_alnum, false),
        b'W' => (ascii::is_alnum, true),
        b's' => (ascii::is_space, false),
        b'S' => (ascii::is_space, true),
        b'b' => (ascii::is_blank, false),
        b'B' => (ascii::is_blank, true),
        b'&' if b >= 0x80 => return Some(utf8::encoded_len(text)),
        b'&' => return None,
        _ => return matches_literal(&meta[1..2], text, fold),
    };
    match (is(b), negated) {
        (true, false) => Some(1),
        (false, true) => Some(utf8::encoded_len(text)),
        _ => None,
    }
}
