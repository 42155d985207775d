/*!
Fast scanners for the literal text that every match must begin with.

When the compiler can prove that every match begins with some literal text,
it builds a prefilter for that text. The search loop then uses the
prefilter to jump straight to the next position at which a match could
begin, instead of attempting a match at every position in between. A
prefilter may report false positives, but never false negatives.
*/

use core::{
    fmt::Debug,
    panic::{RefUnwindSafe, UnwindSafe},
};

use alloc::sync::Arc;

#[cfg(feature = "std")]
use memchr::memmem;
use memchr::{memchr, memchr2};

use crate::util::search::Span;

/// A prefilter for a single literal.
///
/// This is cheap to clone. Clones share the same underlying scanner.
#[derive(Clone, Debug)]
pub(crate) struct Prefilter(Arc<dyn PrefilterI>);

impl Prefilter {
    /// Builds a prefilter for the given literal. When `fold` is true, the
    /// literal is compared case insensitively for ASCII letters.
    ///
    /// This returns `None` if the literal is empty.
    pub(crate) fn new(needle: &[u8], fold: bool) -> Option<Prefilter> {
        let first = match needle.first() {
            None => {
                debug!("prefilter building failed: empty literal");
                return None;
            }
            Some(&first) => first,
        };
        if fold && first.is_ascii_alphabetic() {
            debug!("prefilter built: memchr2");
            let b1 = first.to_ascii_lowercase();
            let b2 = first.to_ascii_uppercase();
            return Some(Prefilter(Arc::new(Memchr2(b1, b2))));
        }
        #[cfg(feature = "std")]
        if !fold && needle.len() > 1 {
            debug!("prefilter built: memmem");
            return Some(Prefilter(Arc::new(Memmem::new(needle))));
        }
        debug!("prefilter built: memchr");
        Some(Prefilter(Arc::new(Memchr(first))))
    }

    /// Returns the span of the first candidate found at or after the start
    /// of `span`, but never past its end.
    #[inline]
    pub(crate) fn find(&self, haystack: &[u8], span: Span) -> Option<Span> {
        self.0.find(haystack, span)
    }

    pub(crate) fn memory_usage(&self) -> usize {
        self.0.memory_usage()
    }
}

trait PrefilterI:
    Debug + Send + Sync + RefUnwindSafe + UnwindSafe + 'static
{
    fn find(&self, haystack: &[u8], span: Span) -> Option<Span>;
    fn memory_usage(&self) -> usize;
}

#[derive(Clone, Debug)]
struct Memchr(u8);

impl PrefilterI for Memchr {
    fn find(&self, haystack: &[u8], span: Span) -> Option<Span> {
        memchr(self.0, &haystack[span]).map(|i| {
            let start = span.start + i;
            let end = start + 1;
            Span { start, end }
        })
    }

    fn memory_usage(&self) -> usize {
        0
    }
}

#[derive(Clone, Debug)]
struct Memchr2(u8, u8);

impl PrefilterI for Memchr2 {
    fn find(&self, haystack: &[u8], span: Span) -> Option<Span> {
        memchr2(self.0, self.1, &haystack[span]).map(|i| {
            let start = span.start + i;
            let end = start + 1;
            Span { start, end }
        })
    }

    fn memory_usage(&self) -> usize {
        0
    }
}

#[cfg(feature = "std")]
#[derive(Clone, Debug)]
struct Memmem(memmem::Finder<'static>);

#[cfg(feature = "std")]
impl Memmem {
    fn new(needle: &[u8]) -> Memmem {
        Memmem(memmem::Finder::new(needle).into_owned())
    }
}

#[cfg(feature = "std")]
impl PrefilterI for Memmem {
    fn find(&self, haystack: &[u8], span: Span) -> Option<Span> {
        self.0.find(&haystack[span]).map(|i| {
            let start = span.start + i;
            let end = start + self.0.needle().len();
            Span { start, end }
        })
    }

    fn memory_usage(&self) -> usize {
        self.0.needle().len()
    }
}
