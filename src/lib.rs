/*!
A small backtracking pattern engine with its own compact syntax.

A pattern is compiled into a flat sequence of instructions, which is then
run against a haystack by a recursive matcher. A search counts every match
in the haystack, from left to right, and records the text of every capturing
group ("hook") entered along the way. Those captures can then be read back
individually, spliced into a template or used to rewrite the haystack.

# Example

```
use regex_raptor::Regex;

let mut re = Regex::new("<aptor|est>")?;
assert_eq!(2, re.match_count("Raptor Test"));
assert_eq!("aptor", re.capture(1));
assert_eq!("est", re.capture(2));
assert_eq!("aptor est", re.substitute_template("#1 #2"));
# Ok::<(), Box<dyn std::error::Error>>(())
```

# Syntax

| Syntax | Meaning |
|---|---|
| `(...)` | a group; may contain alternatives separated by `\|` |
| `<...>` | a hook, i.e., a capturing group |
| `[...]`, `[^...]` | a set or a negated set of literals, ranges like `a-z` and `:x` classes |
| `.` | any one code point |
| `:a` `:d` `:w` `:s` `:b` | an ASCII letter, digit, letter or digit, whitespace or blank |
| `:A` `:D` `:W` `:S` `:B` | anything not in the corresponding class |
| `:&` | any code point that isn't ASCII |
| `:x` | any other character `x`, literally |
| `@N` | the text most recently captured by the hook with group ID `N` |
| `?` `+` `*` `{m}` `{m,}` `{m,n}` | quantifiers |
| `\|` | alternation, scoped to the enclosing group or hook |

Modifiers are declared with `#` followed by one or more flags. At the very
start of a pattern they apply to the whole pattern. After a unit (and its
quantifier, if any) they apply to that unit and to everything inside it.

| Flag | Meaning |
|---|---|
| `^` | only try a match at the start of the haystack |
| `$` | only accept a match that reaches the end of the haystack |
| `?` | stop after the first match |
| `~` | after a match, resume at the next code point instead of after the match |
| `*` | compare ASCII letters case insensitively |
| `/` | compare case sensitively again |
| `!` | negate the unit: skip code points while it doesn't match |

# Semantics

Matching is greedy and never gives anything back. Quantifiers consume as much
as they can, and the first alternative that matches is taken even if the rest
of the pattern then fails. For example, `<a|ab>c` doesn't match `abc`, while
`<ab|a>c` does.

Hooks receive group IDs counting from `1` in the order they are entered
during a single match. Captures are numbered counting from `1` across every
match of a search.

# Crate features

* **std** - Enabled by default. Provides `std::error::Error` for [`Error`]
and a faster prefilter for multi-byte literals. Without it, this crate is
`no_std` but still requires `alloc`.
* **logging** - Emits compilation decisions and matches through the `log`
crate.
*/

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
)))]
compile_error!("regex-raptor currently not supported on non-{16,32,64}");

extern crate alloc;

pub use crate::{
    error::Error,
    regex::{Builder, Capture, CapturesIter, Config, Regex},
    syntax::Modifiers,
    util::search::Span,
};

#[macro_use]
mod macros;

mod backtrack;
mod error;
mod program;
mod regex;
mod syntax;
pub mod util;
