/*!
The pattern tokenizer.

A pattern is never turned into an abstract syntax tree. Instead, the
[`Cutter`](cutter::Cutter) repeatedly slices the head off of the remaining
pattern text and hands back a [`Fragment`]: a span of the pattern, what kind
of unit that span is, the modifiers in force for it and its quantifier
range. The compiler drives the cutter recursively, one nesting level at a
time.

The optional [`validate`](validate::validate) pass checks the same grammar
strictly. It never changes what a pattern compiles to; it only decides
whether compilation is allowed to proceed.
*/

use crate::util::search::Span;

pub(crate) mod cutter;
pub(crate) mod validate;

/// The sentinel used for an unbounded quantifier maximum, i.e., the maximum
/// of `+`, `*` and `{m,}`.
pub(crate) const INFINITE: usize = 1 << 30;

/// The structural kind of a fragment of a pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Kind {
    /// A list of alternatives separated by `|`. Also used for each
    /// individual alternative (a "track") before it is cut into units.
    Path,
    /// A non-capturing group, `(...)`. The span excludes the brackets.
    Group,
    /// A capturing group, `<...>`. The span excludes the brackets.
    Hook,
    /// A character set, `[...]`. The span excludes the brackets.
    Set,
    /// A back-reference, `@N`. The span includes the `@`.
    BackRef,
    /// A two byte meta class like `:d`, or an escaped code point like `:▲`.
    Meta,
    /// A three byte set range like `a-z`.
    Range,
    /// A single non-ASCII code point.
    CodePoint,
    /// The `.` wildcard.
    Any,
    /// A run of plain literal bytes.
    Literal,
}

/// The set of modifiers in force for a fragment, or for a compiled pattern as
/// a whole.
///
/// Modifiers are declared with `#` followed by any of `^ $ ? ~ * / !`. A
/// declaration at the very start of the pattern is global. A declaration
/// after a unit (and after its quantifier, if any) applies to that unit and,
/// for groups, hooks and sets, to everything nested inside of it.
///
/// Only the search-level flags of the global declaration (anchor-start,
/// anchor-end, single-match and char-stride) affect how a search proceeds.
/// Fold-case and negate affect how individual units compare text.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct Modifiers {
    bools: u8,
}

impl Modifiers {
    define_bool!(0, is_anchor_start, set_anchor_start);
    define_bool!(1, is_anchor_end, set_anchor_end);
    define_bool!(2, is_single_match, set_single_match);
    define_bool!(3, is_char_stride, set_char_stride);
    define_bool!(4, is_fold_case, set_fold_case);
    define_bool!(7, is_negate, set_negate);

    /// Applies a single modifier flag character. Returns false if the given
    /// byte is not a modifier flag, in which case nothing is changed.
    pub(crate) fn apply(&mut self, flag: u8) -> bool {
        match flag {
            b'^' => self.set_anchor_start(true),
            b'$' => self.set_anchor_end(true),
            b'?' => self.set_single_match(true),
            b'~' => self.set_char_stride(true),
            b'*' => self.set_fold_case(true),
            b'/' => self.set_fold_case(false),
            b'!' => self.set_negate(true),
            _ => return false,
        }
        true
    }
}

impl core::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let flags = [
            (self.is_anchor_start(), '^'),
            (self.is_anchor_end(), '$'),
            (self.is_single_match(), '?'),
            (self.is_char_stride(), '~'),
            (self.is_fold_case(), '*'),
            (self.is_negate(), '!'),
        ];
        write!(f, "#")?;
        for &(yes, flag) in flags.iter() {
            if yes {
                write!(f, "{}", flag)?;
            }
        }
        Ok(())
    }
}

/// A recognized syntactic unit of a pattern.
///
/// Fragments never own any text. Their span always points into the pattern
/// that the cutter which produced them was given.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fragment {
    pub(crate) kind: Kind,
    pub(crate) span: Span,
    pub(crate) mods: Modifiers,
    pub(crate) min: usize,
    pub(crate) max: usize,
}

impl Fragment {
    /// The fragment covering an entire pattern before its global modifiers
    /// have been read.
    pub(crate) fn root(pattern: &[u8]) -> Fragment {
        Fragment {
            kind: Kind::Path,
            span: Span { start: 0, end: pattern.len() },
            mods: Modifiers::default(),
            min: 1,
            max: 1,
        }
    }

    /// An empty fragment at the given offset. This is attached to closing
    /// instructions, which have no text of their own.
    pub(crate) fn empty(at: usize) -> Fragment {
        Fragment {
            kind: Kind::Path,
            span: Span { start: at, end: at },
            mods: Modifiers::default(),
            min: 1,
            max: 1,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
