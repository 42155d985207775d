/*!
The compiled form of a pattern: a flat sequence of instructions.

A pattern compiles to an arena of [`Inst`] values addressed by index. There
is no tree. Instead, every opening instruction (`Path`, `Group`, `Hook`,
`Set`) records in its `close` field the index of its matching closing
instruction, which lets the matcher skip an entire nested construct in
constant time. Each `PathElement` records the index of the next alternative
of its path, or of the path's `PathEnd` if it is the last one. Leaf
instructions record their own index. Every program ends with exactly one
`End`.

For example, `<a|b>c+` compiles to the following, as printed by the `Debug`
impl on `Program`. Each line shows the instruction index, its opcode, its
`close` index and the fragment it was built from:

```text
000000: Path => 000011 "<a|b>c+" {1,1} #
000001: PathElement => 000011 "<a|b>c+" {1,1} #
000002: Hook => 000009 "a|b" {1,1} #
000003: Path => 000008 "a|b" {1,1} #
000004: PathElement => 000006 "a" {1,1} #
000005: Literal => 000005 "a" {1,1} #
000006: PathElement => 000008 "b" {1,1} #
000007: Literal => 000007 "b" {1,1} #
000008: PathEnd => 000008
000009: HookEnd => 000009
000010: Literal => 000010 "c" {1,} #
000011: PathEnd => 000011
000012: End => 000012
```
*/

use core::fmt;

use alloc::{string::String, vec::Vec};

use crate::{
    syntax::{Fragment, Modifiers, INFINITE},
    util::{escape::DebugBytes, prefilter::Prefilter},
};

pub(crate) use self::compiler::Compiler;

mod compiler;

/// An instruction opcode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Op {
    Path,
    PathElement,
    PathEnd,
    Group,
    GroupEnd,
    Hook,
    HookEnd,
    Set,
    SetEnd,
    BackRef,
    Meta,
    Range,
    CodePoint,
    Any,
    Literal,
    End,
}

impl Op {
    /// Returns true for the opcodes that terminate a run of sibling
    /// instructions.
    pub(crate) fn is_boundary(&self) -> bool {
        match *self {
            Op::PathElement
            | Op::PathEnd
            | Op::GroupEnd
            | Op::HookEnd
            | Op::SetEnd
            | Op::End => true,
            _ => false,
        }
    }

    fn has_fragment(&self) -> bool {
        match *self {
            Op::PathEnd
            | Op::GroupEnd
            | Op::HookEnd
            | Op::SetEnd
            | Op::End => false,
            _ => true,
        }
    }
}

/// A single instruction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Inst {
    pub(crate) op: Op,
    pub(crate) close: usize,
    pub(crate) frag: Fragment,
}

/// A compiled pattern.
///
/// A program is immutable once built, and is shared between duplicated
/// regexes behind an `Arc`.
pub(crate) struct Program {
    pattern: String,
    insts: Vec<Inst>,
    mods: Modifiers,
    prefilter: Option<Prefilter>,
}

impl Program {
    /// The pattern this program was compiled from.
    pub(crate) fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern text that the given fragment was cut from.
    #[inline(always)]
    pub(crate) fn text(&self, frag: &Fragment) -> &[u8] {
        &self.pattern.as_bytes()[frag.span]
    }

    /// Returns false for the program compiled from an empty pattern. Such a
    /// program never matches anything.
    pub(crate) fn is_ready(&self) -> bool {
        !self.insts.is_empty()
    }

    #[inline(always)]
    pub(crate) fn inst(&self, index: usize) -> &Inst {
        &self.insts[index]
    }

    pub(crate) fn insts(&self) -> &[Inst] {
        &self.insts
    }

    /// The global modifiers of this program.
    pub(crate) fn modifiers(&self) -> Modifiers {
        self.mods
    }

    pub(crate) fn prefilter(&self) -> Option<&Prefilter> {
        self.prefilter.as_ref()
    }

    /// Returns the heap memory usage, in bytes, of this program.
    pub(crate) fn memory_usage(&self) -> usize {
        self.pattern.len()
            + self.insts.len() * core::mem::size_of::<Inst>()
            + self.prefilter.as_ref().map_or(0, |p| p.memory_usage())
    }

    /// Returns the instruction that every match must begin with, if there is
    /// one and it is literal text.
    ///
    /// This follows the program from its start through paths with a single
    /// alternative and through groups and hooks that must match at least
    /// once. It gives up at anything that could match the empty string,
    /// anything negated and anything that isn't literal.
    pub(crate) fn required_literal(&self) -> Option<&Inst> {
        if self.mods.is_anchor_start() {
            return None;
        }
        let mut index = 0;
        loop {
            let inst = self.insts.get(index)?;
            match inst.op {
                Op::Path => {
                    let first = self.insts.get(index + 1)?;
                    if first.op != Op::PathElement || first.close != inst.close
                    {
                        return None;
                    }
                    index += 2;
                }
                Op::Group | Op::Hook => {
                    if inst.frag.min == 0 || inst.frag.mods.is_negate() {
                        return None;
                    }
                    index += 1;
                }
                Op::Literal | Op::CodePoint => {
                    if inst.frag.min == 0 || inst.frag.mods.is_negate() {
                        return None;
                    }
                    return Some(inst);
                }
                _ => return None,
            }
        }
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "raptor::Program(")?;
        writeln!(f, "modifiers: {:?}", self.mods)?;
        for (index, inst) in self.insts.iter().enumerate() {
            write!(f, "{:06?}: {:?} => {:06?}", index, inst.op, inst.close)?;
            if inst.op.has_fragment() {
                let frag = &inst.frag;
                write!(f, " {:?}", DebugBytes(self.text(frag)))?;
                if frag.max == INFINITE {
                    write!(f, " {{{},}}", frag.min)?;
                } else {
                    write!(f, " {{{},{}}}", frag.min, frag.max)?;
                }
                write!(f, " {:?}", frag.mods)?;
            }
            writeln!(f, "")?;
        }
        writeln!(f, "")?;
        writeln!(f, "prefilter: {:?}", self.prefilter)?;
        writeln!(f, ")")?;
        Ok(())
    }
}
