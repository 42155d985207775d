use alloc::{string::String, vec::Vec};

use crate::{
    error::Error,
    program::{Inst, Op, Program},
    syntax::{cutter::Cutter, validate::validate, Fragment, Kind},
    util::prefilter::Prefilter,
};

/// Compiles a pattern into a [`Program`].
///
/// The compiler drives a [`Cutter`] recursively over the pattern, emitting
/// instructions as it goes and backpatching the `close` index of every
/// opening instruction once the construct it opens has been fully emitted.
#[derive(Clone, Debug)]
pub(crate) struct Compiler {
    validate: bool,
    nest_limit: u32,
    prefilter: bool,
}

impl Compiler {
    pub(crate) fn new() -> Compiler {
        Compiler { validate: false, nest_limit: 250, prefilter: true }
    }

    /// When enabled, patterns are checked strictly before being compiled
    /// and any syntax the lenient cutter would have to guess at is reported
    /// as an error.
    pub(crate) fn validate(&mut self, yes: bool) -> &mut Compiler {
        self.validate = yes;
        self
    }

    /// The maximum number of nested paths permitted. The whole pattern
    /// counts as one, and every group or hook adds one.
    pub(crate) fn nest_limit(&mut self, limit: u32) -> &mut Compiler {
        self.nest_limit = limit;
        self
    }

    pub(crate) fn prefilter(&mut self, yes: bool) -> &mut Compiler {
        self.prefilter = yes;
        self
    }

    pub(crate) fn compile(&self, pattern: &str) -> Result<Program, Error> {
        let mut program = Program {
            pattern: String::from(pattern),
            insts: Vec::new(),
            mods: Default::default(),
            prefilter: None,
        };
        if pattern.is_empty() {
            debug!("empty pattern compiled into an empty program");
            return Ok(program);
        }
        if self.validate {
            validate(pattern.as_bytes())?;
        }
        let cutter = Cutter::new(pattern.as_bytes());
        let root = cutter.root();
        let mut emitter = Emitter {
            cutter,
            insts: Vec::new(),
            nest_limit: self.nest_limit,
            depth: 0,
        };
        emitter.paths(root)?;
        emitter.push(Op::End, Fragment::empty(pattern.len()));

        program.insts = emitter.insts;
        program.mods = root.mods;
        if self.prefilter {
            let prefilter = program.required_literal().and_then(|inst| {
                Prefilter::new(
                    program.text(&inst.frag),
                    inst.frag.mods.is_fold_case(),
                )
            });
            program.prefilter = prefilter;
        }
        debug!(
            "compiled {:?} into {} instructions using {} bytes",
            pattern,
            program.insts.len(),
            program.memory_usage(),
        );
        Ok(program)
    }
}

impl Default for Compiler {
    fn default() -> Compiler {
        Compiler::new()
    }
}

/// The mutable state of a single compilation.
struct Emitter<'p> {
    cutter: Cutter<'p>,
    insts: Vec<Inst>,
    nest_limit: u32,
    depth: u32,
}

impl<'p> Emitter<'p> {
    /// Emits the given instruction and returns its index. The instruction's
    /// `close` initially points at itself.
    fn push(&mut self, op: Op, frag: Fragment) -> usize {
        let index = self.insts.len();
        self.insts.push(Inst { op, close: index, frag });
        index
    }

    /// Points the `close` of the instruction at `index` to the next
    /// instruction to be emitted.
    fn patch(&mut self, index: usize) {
        self.insts[index].close = self.insts.len();
    }

    /// Emits a path: one `PathElement` for each of the alternatives of
    /// `path`, framed by `Path` and `PathEnd`.
    fn paths(&mut self, path: Fragment) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > self.nest_limit {
            return Err(Error::nest_limit_exceeded(self.nest_limit));
        }
        let open = self.push(Op::Path, path);
        let mut rest = path;
        while let Some(track) = self.cutter.next_track(&mut rest) {
            let element = self.push(Op::PathElement, track);
            self.tracks(track)?;
            self.patch(element);
        }
        self.patch(open);
        self.push(Op::PathEnd, Fragment::empty(path.span.end));
        self.depth -= 1;
        Ok(())
    }

    /// Emits every unit of a single alternative, in order.
    fn tracks(&mut self, track: Fragment) -> Result<(), Error> {
        let mut rest = track;
        while let Some(unit) = self.cutter.next_unit(&mut rest) {
            match unit.kind {
                Kind::Group => self.nested(unit, Op::Group, Op::GroupEnd)?,
                Kind::Hook => self.nested(unit, Op::Hook, Op::HookEnd)?,
                Kind::Set => self.set(unit),
                kind => {
                    self.push(leaf(kind), unit);
                }
            }
        }
        Ok(())
    }

    fn nested(
        &mut self,
        unit: Fragment,
        open: Op,
        close: Op,
    ) -> Result<(), Error> {
        let index = self.push(open, unit);
        self.paths(unit)?;
        self.patch(index);
        self.push(close, Fragment::empty(unit.span.end));
        Ok(())
    }

    /// Emits a set and its members. A leading `^` in the body inverts the
    /// set. An empty body emits nothing at all.
    fn set(&mut self, mut unit: Fragment) {
        if unit.is_empty() {
            return;
        }
        if self.cutter.pattern()[unit.span.start] == b'^' {
            unit.span = unit.span.skip(1);
            let negate = unit.mods.is_negate();
            unit.mods.set_negate(!negate);
        }
        let index = self.push(Op::Set, unit);
        let mut rest = unit;
        while let Some(member) = self.cutter.next_member(&mut rest) {
            self.push(leaf(member.kind), member);
        }
        self.patch(index);
        self.push(Op::SetEnd, Fragment::empty(unit.span.end));
    }
}

/// The opcode for a unit that doesn't contain any other units.
fn leaf(kind: Kind) -> Op {
    match kind {
        Kind::BackRef => Op::BackRef,
        Kind::Meta => Op::Meta,
        Kind::Range => Op::Range,
        Kind::CodePoint => Op::CodePoint,
        Kind::Any => Op::Any,
        _ => Op::Literal,
    }
}
