//! Lexer error types.
//!
//! Every error carries the span of the offending character (or of the
//! literal that could not be completed) and a [`LexErrorKind`] describing
//! what went wrong. Lexing is fail-fast: the first error ends the pass.

use thiserror::Error;

use crate::Span;

/// A lexical error with its location.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("Unknown token: {}", describe(.0))]
    UnknownChar(char),
    /// `!` not followed by `=`.
    #[error("Expected !=, got !{}", describe(.found))]
    BangWithoutEq { found: char },
    /// A character a string literal may not contain.
    #[error("Illegal character in string: {}", describe(.0))]
    IllegalStringChar(char),
    /// String literal reached end of input without a closing `"`.
    #[error("Unterminated string literal")]
    UnterminatedString,
    /// `.` in a number not followed by a digit.
    #[error("Illegal character in number: {}", describe(.found))]
    MissingFractionDigits { found: char },
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }
}

/// Printable rendering of a character in an error message.
///
/// Control characters and whitespace are escaped so the message stays on one line.
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes fields by reference"
)]
fn describe(c: &char) -> String {
    match *c {
        '\0' => "'\\0'".to_string(),
        '\n' => "'\\n'".to_string(),
        '\r' => "'\\r'".to_string(),
        '\t' => "'\\t'".to_string(),
        c if c.is_control() || c.is_whitespace() => format!("'{}'", c.escape_unicode()),
        c => format!("'{c}'"),
    }
}
