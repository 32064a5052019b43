//! Error types raised by the codec and by checked [`Value`](crate::Value) access.

use thiserror::Error;

use crate::value::Kind;

/// Error raised by the parser on malformed input.
///
/// Every variant carries the absolute byte offset into the input at which the
/// problem was detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEnd(usize),
    #[error("unexpected character {found} at offset {1}", found = describe(.0))]
    UnexpectedByte(u8, usize),
    #[error("expected character '{want}' but found {found} at offset {2}", want = as_char(.0), found = describe_opt(.1))]
    ExpectedByte(u8, Option<u8>, usize),
    #[error("expected literal `{0}` but found {found} at offset {2}", found = describe_opt(.1))]
    ExpectedLiteral(&'static str, Option<u8>, usize),
    #[error("could not parse number `{0}` at offset {1}")]
    InvalidNumber(String, usize),
    #[error("invalid escape sequence `\\{esc}` at offset {1}", esc = as_char(.0))]
    InvalidEscape(u8, usize),
    #[error("unicode escape sequences are not supported (offset {0})")]
    UnsupportedEscape(usize),
    #[error("invalid UTF-8 in string at offset {0}")]
    InvalidUtf8(usize),
    #[error("trailing characters after value at offset {0}")]
    TrailingCharacters(usize),
    #[error("nesting deeper than {0} levels at offset {1}")]
    DepthLimitExceeded(usize, usize),
}

impl ParseError {
    /// Absolute byte offset of the failure.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd(x)
            | ParseError::UnexpectedByte(_, x)
            | ParseError::ExpectedByte(_, _, x)
            | ParseError::ExpectedLiteral(_, _, x)
            | ParseError::InvalidNumber(_, x)
            | ParseError::InvalidEscape(_, x)
            | ParseError::UnsupportedEscape(x)
            | ParseError::InvalidUtf8(x)
            | ParseError::TrailingCharacters(x)
            | ParseError::DepthLimitExceeded(_, x) => *x,
        }
    }

    /// Number of input bytes left unconsumed at the failure point.
    pub fn remaining(&self, input_len: usize) -> usize {
        input_len.saturating_sub(self.offset())
    }
}

fn as_char(b: &u8) -> char {
    char::from(*b)
}

fn describe(b: &u8) -> String {
    if b.is_ascii_graphic() {
        format!("'{}'", char::from(*b))
    } else {
        format!("0x{b:02x}")
    }
}

fn describe_opt(b: &Option<u8>) -> String {
    match b {
        Some(b) => describe(b),
        None => "end of input".to_string(),
    }
}

/// Error raised when a [`Value`](crate::Value) is accessed as a case it does not hold.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct TypeError {
    pub expected: Kind,
    pub found: Kind,
}
