use core::iter::FusedIterator;

use alloc::{string::String, sync::Arc};

use crate::{
    backtrack,
    error::Error,
    program::{Compiler, Program},
    syntax::Modifiers,
    util::{
        captures::{Captures, Slot},
        search::Span,
    },
};

/// The configuration used for compiling a [`Regex`].
///
/// A configuration is a simple data object that is typically used with
/// [`Builder::configure`]. Every option left unset takes its default value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    validate: Option<bool>,
    nest_limit: Option<u32>,
    prefilter: Option<bool>,
}

impl Config {
    /// Return a new default regex configuration.
    pub fn new() -> Config {
        Config::default()
    }

    /// Whether to reject malformed patterns.
    ///
    /// By default, compilation never fails because of syntax. A pattern that
    /// doesn't fit the grammar is still compiled: an unclosed bracket
    /// extends to the end of the pattern, a quantifier with nothing to
    /// apply to is a literal character, a malformed counted repetition is
    /// literal text, and so on. When this is enabled, all of those are
    /// reported as errors instead.
    ///
    /// This is disabled by default.
    ///
    /// # Example
    ///
    /// ```
    /// use regex_raptor::Regex;
    ///
    /// // Leniently, the stray `)` is just a character.
    /// let mut re = Regex::new("a)")?;
    /// assert_eq!(1, re.match_count("xa)"));
    ///
    /// let result = Regex::builder()
    ///     .configure(Regex::config().validate(true))
    ///     .build("a)");
    /// assert!(result.is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn validate(mut self, yes: bool) -> Config {
        self.validate = Some(yes);
        self
    }

    /// Set the maximum nesting depth of a pattern.
    ///
    /// The pattern itself counts as one level, and each group or hook adds
    /// another. Matching recurses once per level, so this bounds the stack
    /// space a search can use. Exceeding the limit is always an error, even
    /// when validation is disabled.
    ///
    /// The default limit is `250`.
    ///
    /// # Example
    ///
    /// ```
    /// use regex_raptor::Regex;
    ///
    /// let builder = Regex::builder()
    ///     .configure(Regex::config().nest_limit(2))
    ///     .clone();
    /// assert!(builder.build("(a)").is_ok());
    /// assert!(builder.build("((a))").is_err());
    /// ```
    pub fn nest_limit(mut self, limit: u32) -> Config {
        self.nest_limit = Some(limit);
        self
    }

    /// Whether to accelerate searches with a literal prefilter.
    ///
    /// When every match must begin with the same literal text, a search can
    /// skip straight to the places where that text occurs. This never
    /// changes the results of a search.
    ///
    /// This is enabled by default.
    pub fn prefilter(mut self, yes: bool) -> Config {
        self.prefilter = Some(yes);
        self
    }

    pub fn get_validate(&self) -> bool {
        self.validate.unwrap_or(false)
    }

    pub fn get_nest_limit(&self) -> u32 {
        self.nest_limit.unwrap_or(250)
    }

    pub fn get_prefilter(&self) -> bool {
        self.prefilter.unwrap_or(true)
    }

    /// Overwrite the default configuration such that the options in `o` are
    /// always used. If an option in `o` is not set, then the corresponding
    /// option in `self` is used. If it's not set in `self` either, then it
    /// remains not set.
    pub(crate) fn overwrite(self, o: Config) -> Config {
        Config {
            validate: o.validate.or(self.validate),
            nest_limit: o.nest_limit.or(self.nest_limit),
            prefilter: o.prefilter.or(self.prefilter),
        }
    }
}

/// A builder for a [`Regex`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new regex builder with its default configuration.
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Compile the given pattern into a regex.
    pub fn build(&self, pattern: &str) -> Result<Regex, Error> {
        let program = Compiler::new()
            .validate(self.config.get_validate())
            .nest_limit(self.config.get_nest_limit())
            .prefilter(self.config.get_prefilter())
            .compile(pattern)?;
        Ok(Regex::from_program(program))
    }

    /// Apply the given configuration to this builder. Options set in
    /// `config` replace those already set on this builder.
    pub fn configure(&mut self, config: Config) -> &mut Builder {
        self.config = self.config.overwrite(config);
        self
    }
}

/// A compiled pattern together with the results of its most recent search.
///
/// A regex owns the haystack and the capture slots of the last search it
/// ran, which is why searching requires `&mut self`. The compiled program
/// itself is immutable and shared: [`Regex::duplicate`] (or `clone`) is
/// cheap and gives an independent regex for use elsewhere, such as on
/// another thread, without recompiling.
///
/// # Example
///
/// ```
/// use regex_raptor::Regex;
///
/// let mut re = Regex::new("<:d+>-<:d+>")?;
/// assert_eq!(2, re.match_count("1-2 and 30-40"));
/// assert_eq!(4, re.total_captures());
/// assert_eq!("30", re.capture(3));
/// assert_eq!("1+2 and 30+40", re.substitute_template("#1+#2 and #3+#4"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Regex {
    program: Arc<Program>,
    caps: Captures,
    haystack: String,
    count: usize,
}

impl Regex {
    /// Compile the given pattern with the default configuration.
    ///
    /// An empty pattern compiles successfully, but the resulting regex is
    /// not [ready](Regex::is_ready) and never matches anything.
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        Regex::builder().build(pattern)
    }

    /// Return a default configuration for a regex.
    pub fn config() -> Config {
        Config::new()
    }

    /// Return a builder for configuring the construction of a regex.
    pub fn builder() -> Builder {
        Builder::new()
    }

    fn from_program(program: Program) -> Regex {
        Regex {
            program: Arc::new(program),
            caps: Captures::new(),
            haystack: String::new(),
            count: 0,
        }
    }

    /// Returns true if this regex was compiled from a non-empty pattern.
    pub fn is_ready(&self) -> bool {
        self.program.is_ready()
    }

    /// Returns the pattern this regex was compiled from.
    pub fn pattern(&self) -> &str {
        self.program.pattern()
    }

    /// Returns the global modifiers declared at the start of the pattern.
    pub fn modifiers(&self) -> Modifiers {
        self.program.modifiers()
    }

    /// Search `haystack` and return the number of matches.
    ///
    /// Matches never overlap unless the pattern declares the `#~` modifier,
    /// in which case a match is attempted at every code point. The `#^`,
    /// `#$` and `#?` modifiers limit the count to at most `1`.
    ///
    /// Afterwards, the capture accessors report on this search. Captures
    /// from every match are kept, in the order they were made.
    ///
    /// # Example
    ///
    /// ```
    /// use regex_raptor::Regex;
    ///
    /// let mut re = Regex::new("a{5}")?;
    /// assert_eq!(4, re.match_count("aaaaaaaaaaaaaaaaaaaa"));
    ///
    /// let mut re = Regex::new("#~aa")?;
    /// assert_eq!(3, re.match_count("aaaa"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn match_count(&mut self, haystack: &str) -> usize {
        self.haystack.clear();
        self.haystack.push_str(haystack);
        self.count =
            backtrack::search(&self.program, haystack, &mut self.caps);
        self.count
    }

    /// Search `haystack` and return true if there is at least one match.
    ///
    /// This is a search like any other, so the capture accessors report on
    /// it afterwards.
    pub fn find(&mut self, haystack: &str) -> bool {
        self.match_count(haystack) > 0
    }

    /// Returns the number of matches found by the most recent search.
    pub fn last_match_count(&self) -> usize {
        self.count
    }

    /// Returns the number of captures recorded by the most recent search.
    pub fn total_captures(&self) -> usize {
        self.caps.len()
    }

    /// Returns the text of the capture numbered `n`, counting from `1`.
    ///
    /// Captures are numbered in the order they were made, across all matches
    /// of the last search. This returns `""` if there is no such capture.
    pub fn capture(&self, n: usize) -> &str {
        self.caps.text(&self.haystack, n)
    }

    /// Returns the byte offset at which the capture numbered `n` starts, or
    /// `0` if there is no such capture.
    pub fn capture_position(&self, n: usize) -> usize {
        self.capture_span(n).map_or(0, |span| span.start)
    }

    /// Returns the length in bytes of the capture numbered `n`, or `0` if
    /// there is no such capture.
    pub fn capture_len(&self, n: usize) -> usize {
        self.capture_span(n).map_or(0, |span| span.len())
    }

    /// Returns the span of the capture numbered `n`.
    pub fn capture_span(&self, n: usize) -> Option<Span> {
        self.caps.get(n).map(|slot| slot.span)
    }

    /// Returns the group ID of the capture numbered `n`. Within a single
    /// match, hooks are given IDs counting from `1` in the order they are
    /// entered.
    pub fn capture_group_id(&self, n: usize) -> Option<usize> {
        self.caps.get(n).map(|slot| slot.group_id)
    }

    /// Returns an iterator over every capture recorded by the most recent
    /// search, in the order they were made.
    pub fn captures(&self) -> CapturesIter<'_> {
        CapturesIter { it: self.caps.iter(), haystack: &self.haystack }
    }

    /// Returns the haystack of the most recent search with the text of
    /// every capture whose group ID is `group_id` replaced by
    /// `replacement`.
    ///
    /// If no capture has that group ID, the haystack is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use regex_raptor::Regex;
    ///
    /// let mut re = Regex::new("<cat|dog>s")?;
    /// assert_eq!(2, re.match_count("cats and dogs"));
    /// // In each match, the first hook entered gets ID 1.
    /// assert_eq!("pets and pets", re.replace_by_group_id("pet", 1));
    /// assert_eq!("cats and dogs", re.replace_by_group_id("pet", 2));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn replace_by_group_id(
        &self,
        replacement: &str,
        group_id: usize,
    ) -> String {
        let overlapping = self.program.modifiers().is_char_stride();
        self.caps.replace(&self.haystack, replacement, group_id, overlapping)
    }

    /// Expands `template` using the captures of the most recent search.
    ///
    /// Every `#` followed by decimal digits is replaced by the text of the
    /// capture with that number. `##` is a literal `#`. Everything else is
    /// copied unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use regex_raptor::Regex;
    ///
    /// let mut re = Regex::new("<aptor|est>")?;
    /// re.match_count("Raptor Test");
    /// assert_eq!("aptor est", re.substitute_template("#1 #2"));
    /// assert_eq!("#1", re.substitute_template("##1"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn substitute_template(&self, template: &str) -> String {
        self.caps.substitute(&self.haystack, template)
    }

    /// Returns an independent copy of this regex. The compiled program is
    /// shared. The captures and haystack of the last search are copied.
    pub fn duplicate(&self) -> Regex {
        self.clone()
    }

    /// Returns the heap memory usage, in bytes, of this regex. The shared
    /// program is counted in full.
    pub fn memory_usage(&self) -> usize {
        self.program.memory_usage()
            + self.caps.memory_usage()
            + self.haystack.capacity()
    }
}

/// A capture recorded by a search.
///
/// `'h` is the lifetime of the haystack, which is owned by the regex that
/// ran the search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capture<'h> {
    group_id: usize,
    span: Span,
    text: &'h str,
}

impl<'h> Capture<'h> {
    /// Returns the group ID of the hook that made this capture.
    pub fn group_id(&self) -> usize {
        self.group_id
    }

    /// Returns the span of this capture in the haystack.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Returns the captured text.
    pub fn as_str(&self) -> &'h str {
        self.text
    }
}

/// An iterator over the captures of the most recent search.
///
/// This is created by [`Regex::captures`].
#[derive(Clone, Debug)]
pub struct CapturesIter<'r> {
    it: core::slice::Iter<'r, Slot>,
    haystack: &'r str,
}

impl<'r> Iterator for CapturesIter<'r> {
    type Item = Capture<'r>;

    fn next(&mut self) -> Option<Capture<'r>> {
        let slot = self.it.next()?;
        Some(Capture {
            group_id: slot.group_id,
            span: slot.span,
            text: self.haystack.get(slot.span.range()).unwrap_or(""),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'r> ExactSizeIterator for CapturesIter<'r> {}

impl<'r> FusedIterator for CapturesIter<'r> {}
