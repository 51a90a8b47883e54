//! Program and statement rules.

mod expr;

use tracing::{debug, debug_span};

use crate::stack::ensure_sufficient_stack;
use crate::{CheckError, Parser, SyntaxError, SyntaxErrorKind, TokenKind};

impl Parser {
    /// `program ::= {EOL} {statement}`
    pub fn parse_program(&mut self) -> Result<(), CheckError> {
        debug!("program");
        while self.at(TokenKind::Newline) {
            self.advance()?;
        }
        while !self.at(TokenKind::Eof) {
            self.statement()?;
        }
        Ok(())
    }

    /// Parse one statement, dispatching on its leading keyword.
    pub fn parse_statement(&mut self) -> Result<(), CheckError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<(), CheckError> {
        let kind = self.current.kind;
        let _span = debug_span!("statement", %kind).entered();
        match kind {
            // PRINT (expression | STRING)
            TokenKind::Print => {
                self.advance()?;
                if self.at(TokenKind::String) {
                    self.advance()?;
                } else {
                    self.parse_expression()?;
                }
            }
            // IF comparison THEN nl {statement} ENDIF
            TokenKind::If => {
                self.advance()?;
                self.parse_comparison()?;
                self.expect(TokenKind::Then)?;
                self.parse_nl()?;
                self.parse_body(TokenKind::EndIf)?;
            }
            // WHILE comparison REPEAT nl {statement} ENDWHILE
            TokenKind::While => {
                self.advance()?;
                self.parse_comparison()?;
                self.expect(TokenKind::Repeat)?;
                self.parse_nl()?;
                self.parse_body(TokenKind::EndWhile)?;
            }
            // LABEL IDENT | GOTO IDENT | INPUT IDENT
            TokenKind::Label | TokenKind::Goto | TokenKind::Input => {
                self.advance()?;
                self.expect(TokenKind::Ident)?;
            }
            // LET IDENT '=' expression
            TokenKind::Let => {
                self.advance()?;
                self.expect(TokenKind::Ident)?;
                self.expect(TokenKind::Eq)?;
                self.parse_expression()?;
            }
            _ => {
                return Err(self.error_at_current(|text, kind| {
                    SyntaxErrorKind::InvalidStatement { text, kind }
                }));
            }
        }
        self.parse_nl()
    }

    /// Statements up to and including `closing`.
    ///
    /// Reaching EOF first is an error rather than an endless loop.
    fn parse_body(&mut self, closing: TokenKind) -> Result<(), CheckError> {
        while !self.at(closing) {
            if self.at(TokenKind::Eof) {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedEof { expected: closing },
                    self.current.span,
                )
                .into());
            }
            self.statement()?;
        }
        self.advance()
    }

    /// `nl ::= EOL {EOL}`
    pub fn parse_nl(&mut self) -> Result<(), CheckError> {
        debug!("newline");
        self.expect(TokenKind::Newline)?;
        while self.at(TokenKind::Newline) {
            self.advance()?;
        }
        Ok(())
    }
}
