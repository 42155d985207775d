/*!
The capture slot table filled in by a search.

Every time the matcher enters a hook, it opens a slot recording where the
hook began and which group it belongs to. Slots are allocated in a stack-like
fashion: the table's length is a high-water mark that the matcher saves
before trying something and restores if that something fails. Anything above
the mark is garbage and is never read, so rolling back costs nothing.

Slots are numbered starting at `1` in the public API. The group ID of a slot
identifies the hook that opened it, counting hooks from `1` in the order they
are entered during a single match attempt.
*/

use alloc::{string::String, vec::Vec};

use crate::util::{ascii, search::Span};

/// A single capture: where it matched and which hook it came from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Slot {
    pub(crate) span: Span,
    pub(crate) group_id: usize,
}

/// A table of capture slots.
#[derive(Clone, Debug, Default)]
pub(crate) struct Captures {
    slots: Vec<Slot>,
    /// The number of committed slots. Everything in `slots` at or beyond
    /// this index is stale.
    len: usize,
}

impl Captures {
    pub(crate) fn new() -> Captures {
        Captures::default()
    }

    /// The number of committed slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Rolls the table back (or forward, after a restore) to `len` slots.
    #[inline]
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.slots.len());
        self.len = len;
    }

    /// Discards every slot.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    /// Opens a new empty slot at `at` for the given group and returns its
    /// index. Stale storage is reused when there is some.
    pub(crate) fn open(&mut self, at: usize, group_id: usize) -> usize {
        let slot = Slot { span: Span { start: at, end: at }, group_id };
        let index = self.len;
        if index < self.slots.len() {
            self.slots[index] = slot;
        } else {
            self.slots.push(slot);
        }
        self.len += 1;
        index
    }

    /// Sets the end of the slot at `index`. Does nothing if that slot has
    /// been rolled back in the meantime.
    pub(crate) fn close(&mut self, index: usize, at: usize) {
        if index < self.len {
            self.slots[index].span.end = at;
        }
    }

    /// Returns the committed slot with the given 1-based number.
    pub(crate) fn get(&self, number: usize) -> Option<&Slot> {
        if number == 0 || number > self.len {
            return None;
        }
        self.slots.get(number - 1)
    }

    /// Returns the most recently opened committed slot for the given group.
    pub(crate) fn last_with_group(&self, group_id: usize) -> Option<&Slot> {
        self.iter().rev().find(|slot| slot.group_id == group_id)
    }

    /// Returns the heap memory usage, in bytes, of this table.
    pub(crate) fn memory_usage(&self) -> usize {
        self.slots.capacity() * core::mem::size_of::<Slot>()
    }

    /// Returns an iterator over the committed slots in the order they were
    /// opened.
    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Slot> {
        self.slots[..self.len].iter()
    }

    /// Returns `haystack` with the text of every slot belonging to the given
    /// group replaced by `replacement`. Slots are spliced in the order they
    /// were opened.
    ///
    /// Slots may overlap when the search advanced by code point rather than
    /// by match. In that case the text between two slots is never copied
    /// twice: copying restarts at the later slot's start even if it begins
    /// before the end of the previous one.
    ///
    /// If no slot belongs to the group, `haystack` is returned unchanged.
    pub(crate) fn replace(
        &self,
        haystack: &str,
        replacement: &str,
        group_id: usize,
        overlapping: bool,
    ) -> String {
        let (mut count, mut removed) = (0, 0);
        for slot in self.iter().filter(|slot| slot.group_id == group_id) {
            count += 1;
            removed += slot.span.len();
        }
        if count == 0 {
            return String::from(haystack);
        }
        // Overlapping slots can remove the same text twice, so the exact
        // length can't be computed from the slots alone.
        if overlapping {
            removed = 0;
        }
        let capacity = (haystack.len() + count * replacement.len())
            .saturating_sub(removed);
        let mut buf = Vec::with_capacity(capacity);
        let bytes = haystack.as_bytes();
        let mut last = 0;
        for slot in self.iter().filter(|slot| slot.group_id == group_id) {
            if last > slot.span.start {
                last = slot.span.start;
            }
            buf.extend_from_slice(&bytes[last..slot.span.start]);
            buf.extend_from_slice(replacement.as_bytes());
            last = slot.span.end;
        }
        if last < bytes.len() {
            buf.extend_from_slice(&bytes[last..]);
        }
        // Every splice point is a code point boundary, since slots only ever
        // begin and end where the matcher stopped.
        String::from_utf8(buf).unwrap_or_else(|err| {
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        })
    }

    /// Expands a template. `##` is a literal `#`, and `#` followed by
    /// decimal digits is the text of the capture with that number. A `#`
    /// followed by anything else expands to nothing. Every other character
    /// is copied as is.
    pub(crate) fn substitute(&self, haystack: &str, template: &str) -> String {
        let bytes = template.as_bytes();
        let mut out = String::with_capacity(template.len());
        let (mut i, mut copied) = (0, 0);
        while i < bytes.len() {
            if bytes[i] != b'#' {
                i += 1;
                continue;
            }
            out.push_str(&template[copied..i]);
            i += 1;
            if bytes.get(i) == Some(&b'#') {
                out.push('#');
                i += 1;
            } else {
                let digits = &bytes[i..];
                let number = ascii::parse_decimal(digits);
                out.push_str(self.text(haystack, number));
                i += ascii::count_digits(digits);
            }
            copied = i;
        }
        out.push_str(&template[copied..]);
        out
    }

    /// Returns the text of the capture with the given 1-based number, or
    /// `""` if there is no such capture.
    pub(crate) fn text<'h>(
        &self,
        haystack: &'h str,
        number: usize,
    ) -> &'h str {
        self.get(number)
            .and_then(|slot| haystack.get(slot.span.range()))
            .unwrap_or("")
    }
}
