//! Recursive descent grammar checker for Teeny.
//!
//! Decides whether a source text is a syntactically valid program. Nothing
//! is built: each grammar rule is a method that consumes the tokens of its
//! production or returns an error.
//!
//! ```text
//! program     ::= {EOL} {statement}
//! statement   ::= PRINT (expression | STRING) nl
//!               | IF comparison THEN nl {statement} ENDIF nl
//!               | WHILE comparison REPEAT nl {statement} ENDWHILE nl
//!               | LABEL IDENT nl
//!               | GOTO IDENT nl
//!               | LET IDENT '=' expression nl
//!               | INPUT IDENT nl
//! nl          ::= EOL {EOL}
//! comparison  ::= expression relop expression
//! expression  ::= term {('+' | '-') term}
//! term        ::= unary {('*' | '/') unary}
//! unary       ::= ['+' | '-'] primary
//! primary     ::= NUMBER | IDENT
//! ```
//!
//! The parser pulls tokens from a [`Lexer`] through a two-token window
//! (`current` and `peek`). It is fail-fast by default; see
//! [`Parser::parse_program_recovering`] for the opt-in mode that keeps
//! going after syntax errors.

mod error;
mod grammar;
mod recovery;
mod stack;

pub use error::{CheckError, SyntaxError, SyntaxErrorKind};
pub use teeny_lexer::{Lexer, Span, Token, TokenKind};

use tracing::trace;

/// Parser state: the token source and a two-token lookahead window.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    /// Set by [`Parser::parse_program_recovering`].
    recovering: bool,
    /// Errors recorded while recovering.
    errors: Vec<CheckError>,
}

impl Parser {
    /// Create a parser, pulling the first two tokens from `lexer`.
    pub fn new(mut lexer: Lexer) -> Result<Self, CheckError> {
        let current = lexer.next_token()?;
        let peek = if current.is_eof() {
            current.clone()
        } else {
            lexer.next_token()?
        };
        Ok(Parser {
            lexer,
            current,
            peek,
            recovering: false,
            errors: Vec::new(),
        })
    }

    /// The token being examined.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// The token after [`current`](Self::current).
    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// Check if the current token is of `kind`.
    #[inline]
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Check if the next token is of `kind`.
    #[inline]
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shift `peek` into `current` and pull a fresh `peek`.
    ///
    /// EOF is absorbing: once `peek` is EOF the lexer is not asked again.
    pub fn advance(&mut self) -> Result<(), CheckError> {
        let next = if self.peek.is_eof() {
            self.peek.clone()
        } else {
            self.lexer.next_token()?
        };
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(current = %self.current.kind, peek = %self.peek.kind, "advance");
        Ok(())
    }

    /// Consume the current token if it is of `kind`, else fail.
    pub fn expect(&mut self, kind: TokenKind) -> Result<(), CheckError> {
        if !self.at(kind) {
            return Err(SyntaxError::expected(kind, &self.current).into());
        }
        self.advance()
    }

    /// Syntax error at the current token.
    fn error_at_current(
        &self,
        kind: impl FnOnce(String, TokenKind) -> SyntaxErrorKind,
    ) -> CheckError {
        let kind = kind(self.current.text.clone(), self.current.kind);
        SyntaxError::new(kind, self.current.span).into()
    }
}

/// Check `source`, stopping at the first error.
pub fn check(source: &str) -> Result<(), CheckError> {
    Parser::new(Lexer::new(source))?.parse_program()
}

/// Check `source` in recovery mode, returning every error found.
///
/// An empty vector means the program is valid.
pub fn check_all(source: &str) -> Vec<CheckError> {
    match Parser::new(Lexer::new(source)) {
        Ok(parser) => parser.parse_program_recovering(),
        Err(err) => vec![err],
    }
}

#[cfg(test)]
mod tests;
