/// An error that can occur while compiling a pattern.
///
/// This error does not provide many introspection capabilities. There are
/// generally only two things you can do with it:
///
/// * Obtain a human readable message via its `std::fmt::Display` impl.
/// * Use it as a `std::error::Error` trait object.
///
/// By default, compilation is lenient: malformed patterns are compiled into
/// *something* rather than rejected. The only error that can occur in that
/// mode is exceeding the nesting limit set by
/// [`Config::nest_limit`](crate::Config::nest_limit). Every other error kind
/// is only reported when strict validation is enabled via
/// [`Config::validate`](crate::Config::validate).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of error that occurred while compiling a pattern. All offsets
/// are byte offsets into the pattern string.
#[derive(Clone, Debug, Eq, PartialEq)]
enum ErrorKind {
    /// A `(` without a matching `)`.
    UnclosedGroup { offset: usize },
    /// A `<` without a matching `>`.
    UnclosedHook { offset: usize },
    /// A `[` without a matching `]`.
    UnclosedSet { offset: usize },
    /// A `)` or `>` that doesn't close anything, or that closes the wrong
    /// kind of bracket.
    UnmatchedClose { offset: usize, byte: u8 },
    /// A quantifier or modifier declaration with nothing before it to apply
    /// to. For example, `*a` or `a|+b`.
    MissingOperand { offset: usize },
    /// A counted repetition that isn't of the form `{m}`, `{m,}` or `{m,n}`.
    InvalidRepetition { offset: usize },
    /// A counted repetition whose minimum exceeds its maximum.
    InvalidRepetitionRange { offset: usize, min: usize, max: usize },
    /// A set range like `z-a` whose low bound exceeds its high bound.
    InvalidSetRange { offset: usize },
    /// A `:` at the very end of the pattern.
    DanglingEscape { offset: usize },
    /// Paths, groups, hooks and sets were nested more deeply than allowed.
    NestLimitExceeded { limit: u32 },
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn unclosed_group(offset: usize) -> Error {
        Error { kind: ErrorKind::UnclosedGroup { offset } }
    }

    pub(crate) fn unclosed_hook(offset: usize) -> Error {
        Error { kind: ErrorKind::UnclosedHook { offset } }
    }

    pub(crate) fn unclosed_set(offset: usize) -> Error {
        Error { kind: ErrorKind::UnclosedSet { offset } }
    }

    pub(crate) fn unmatched_close(offset: usize, byte: u8) -> Error {
        Error { kind: ErrorKind::UnmatchedClose { offset, byte } }
    }

    pub(crate) fn missing_operand(offset: usize) -> Error {
        Error { kind: ErrorKind::MissingOperand { offset } }
    }

    pub(crate) fn invalid_repetition(offset: usize) -> Error {
        Error { kind: ErrorKind::InvalidRepetition { offset } }
    }

    pub(crate) fn invalid_repetition_range(
        offset: usize,
        min: usize,
        max: usize,
    ) -> Error {
        Error { kind: ErrorKind::InvalidRepetitionRange { offset, min, max } }
    }

    pub(crate) fn invalid_set_range(offset: usize) -> Error {
        Error { kind: ErrorKind::InvalidSetRange { offset } }
    }

    pub(crate) fn dangling_escape(offset: usize) -> Error {
        Error { kind: ErrorKind::DanglingEscape { offset } }
    }

    pub(crate) fn nest_limit_exceeded(limit: u32) -> Error {
        Error { kind: ErrorKind::NestLimitExceeded { limit } }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self.kind() {
            ErrorKind::UnclosedGroup { offset } => {
                write!(f, "unclosed group opened at offset {}", offset)
            }
            ErrorKind::UnclosedHook { offset } => {
                write!(f, "unclosed hook opened at offset {}", offset)
            }
            ErrorKind::UnclosedSet { offset } => {
                write!(f, "unclosed set opened at offset {}", offset)
            }
            ErrorKind::UnmatchedClose { offset, byte } => write!(
                f,
                "unmatched '{}' at offset {}",
                char::from(byte),
                offset,
            ),
            ErrorKind::MissingOperand { offset } => write!(
                f,
                "quantifier or modifier at offset {} has nothing to apply to",
                offset,
            ),
            ErrorKind::InvalidRepetition { offset } => write!(
                f,
                "malformed counted repetition at offset {}, \
                 expected {{m}}, {{m,}} or {{m,n}}",
                offset,
            ),
            ErrorKind::InvalidRepetitionRange { offset, min, max } => write!(
                f,
                "counted repetition at offset {} has minimum {} \
                 greater than maximum {}",
                offset, min, max,
            ),
            ErrorKind::InvalidSetRange { offset } => write!(
                f,
                "set range at offset {} has its bounds reversed",
                offset,
            ),
            ErrorKind::DanglingEscape { offset } => write!(
                f,
                "escape ':' at offset {} is missing its class character",
                offset,
            ),
            ErrorKind::NestLimitExceeded { limit } => write!(
                f,
                "pattern nesting exceeds the limit of {}",
                limit,
            ),
        }
    }
}
