//! Check error types.
//!
//! [`SyntaxError`] covers grammar violations found by the parser.
//! [`CheckError`] is what every checking entry point returns: either a
//! lexical error surfaced through the token pull, or a syntax error. Its
//! `Display` is the user-facing message (`Lexing error. ...` / `Error. ...`).

use teeny_lexer::{LexError, Span, Token, TokenKind};
use thiserror::Error;

/// A syntax error with its location.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
#[error("{kind}")]
pub struct SyntaxError {
    pub span: Span,
    pub kind: SyntaxErrorKind,
}

/// What grammar rule was violated.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum SyntaxErrorKind {
    /// `expect` saw a different token kind.
    #[error("Expected {expected}, got {found}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
    },
    /// No statement starts with this token.
    #[error("Invalid statement at {} ({kind})", shown(.text, .kind))]
    InvalidStatement { text: String, kind: TokenKind },
    /// A comparison was missing its relational operator.
    #[error("Expected comparison operator at {} ({kind})", shown(.text, .kind))]
    ExpectedComparisonOperator { text: String, kind: TokenKind },
    /// Neither a number nor an identifier where a primary was required.
    #[error("Unexpected token at {} ({kind})", shown(.text, .kind))]
    UnexpectedToken { text: String, kind: TokenKind },
    /// An IF or WHILE body ran into end of input before its closing keyword.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: TokenKind },
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        SyntaxError { span, kind }
    }

    /// `expect` failure at `found`.
    pub(crate) fn expected(expected: TokenKind, found: &Token) -> Self {
        Self::new(
            SyntaxErrorKind::Expected {
                expected,
                found: found.kind,
            },
            found.span,
        )
    }
}

/// Render a token's text for a message. Structural tokens have no
/// printable text, so they are named instead.
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes fields by reference"
)]
fn shown(text: &str, kind: &TokenKind) -> String {
    match kind {
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::Newline => "end of line".to_string(),
        _ => format!("{text:?}"),
    }
}

/// Any error that stops a check.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum CheckError {
    #[error("Lexing error. {0}")]
    Lex(#[from] LexError),
    #[error("Error. {0}")]
    Syntax(#[from] SyntaxError),
}

impl CheckError {
    /// Where in the source the error was found.
    pub fn span(&self) -> Span {
        match self {
            CheckError::Lex(err) => err.span,
            CheckError::Syntax(err) => err.span,
        }
    }

    /// Returns `true` for lexical errors.
    pub fn is_lex(&self) -> bool {
        matches!(self, CheckError::Lex(_))
    }
}
