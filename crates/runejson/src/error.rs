use std::fmt;
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A value was required but the input ran out.
    UnexpectedEndOfInput,
    /// An exact character was required (literal-word letters).
    UnexpectedCharacter { expected: char },
    /// The current character starts no known value.
    UnrecognizedValue,
    MalformedObject { expected: &'static str },
    MalformedArray { expected: &'static str },
    UnterminatedString,
    /// Backslash escapes are not supported.
    UnsupportedEscape,
    /// `e`/`E` exponents are not supported.
    UnsupportedExponent,
    MalformedNumber,
    /// Non-whitespace input after a complete top-level value.
    TrailingContent,
    DepthLimitExceeded { limit: usize },
}

impl ParseErrorKind {
    /// True for inputs that are valid JSON but use a feature this parser
    /// does not implement.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            ParseErrorKind::UnsupportedEscape | ParseErrorKind::UnsupportedExponent
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedEndOfInput => f.write_str("expected a value"),
            ParseErrorKind::UnexpectedCharacter { expected } => {
                write!(f, "expected '{}'", expected)
            }
            ParseErrorKind::UnrecognizedValue => {
                f.write_str("expected object, array, string, number, true, false or null")
            }
            ParseErrorKind::MalformedObject { expected } => {
                write!(f, "malformed object: expected {}", expected)
            }
            ParseErrorKind::MalformedArray { expected } => {
                write!(f, "malformed array: expected {}", expected)
            }
            ParseErrorKind::UnterminatedString => f.write_str("expected closing '\"'"),
            ParseErrorKind::UnsupportedEscape => {
                f.write_str("escape sequences in strings are not supported")
            }
            ParseErrorKind::UnsupportedExponent => {
                f.write_str("exponent notation in numbers is not supported")
            }
            ParseErrorKind::MalformedNumber => {
                f.write_str("malformed number: expected digits fitting a 64-bit value")
            }
            ParseErrorKind::TrailingContent => f.write_str("expected end of input"),
            ParseErrorKind::DepthLimitExceeded { limit } => {
                write!(f, "nesting deeper than {} levels", limit)
            }
        }
    }
}

/// A grammar violation at a code-point position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at {position}, found {}: {kind}", Found(.found))]
pub struct ParseError {
    /// Index in code points, not bytes.
    pub position: usize,
    /// `None` when the input was exhausted.
    pub found: Option<char>,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(position: usize, found: Option<char>, kind: ParseErrorKind) -> Self {
        Self {
            position,
            found,
            kind,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        self.kind.is_unsupported()
    }
}

struct Found<'a>(&'a Option<char>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(c) => write!(f, "{:?}", c),
            None => f.write_str("end of input"),
        }
    }
}
