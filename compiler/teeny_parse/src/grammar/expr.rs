//! Comparison and arithmetic expression rules.
//!
//! Precedence, loosest first: relational operators, `+`/`-`, `*`/`/`,
//! unary `+`/`-`. A comparison takes exactly one relational operator.

use crate::{CheckError, Parser, SyntaxErrorKind, TokenKind};

impl Parser {
    /// `comparison ::= expression relop expression`
    pub fn parse_comparison(&mut self) -> Result<(), CheckError> {
        self.parse_expression()?;
        if !self.current.kind.is_comparison_operator() {
            return Err(self.error_at_current(|text, kind| {
                SyntaxErrorKind::ExpectedComparisonOperator { text, kind }
            }));
        }
        self.advance()?;
        self.parse_expression()
    }

    /// `expression ::= term {('+' | '-') term}`
    pub fn parse_expression(&mut self) -> Result<(), CheckError> {
        self.parse_term()?;
        while self.at(TokenKind::Plus) || self.at(TokenKind::Minus) {
            self.advance()?;
            self.parse_term()?;
        }
        Ok(())
    }

    /// `term ::= unary {('*' | '/') unary}`
    pub fn parse_term(&mut self) -> Result<(), CheckError> {
        self.parse_unary()?;
        while self.at(TokenKind::Asterisk) || self.at(TokenKind::Slash) {
            self.advance()?;
            self.parse_unary()?;
        }
        Ok(())
    }

    /// `unary ::= ['+' | '-'] primary`
    pub fn parse_unary(&mut self) -> Result<(), CheckError> {
        if self.at(TokenKind::Plus) || self.at(TokenKind::Minus) {
            self.advance()?;
        }
        self.parse_primary()
    }

    /// `primary ::= NUMBER | IDENT`
    pub fn parse_primary(&mut self) -> Result<(), CheckError> {
        if self.at(TokenKind::Number) || self.at(TokenKind::Ident) {
            return self.advance();
        }
        Err(self.error_at_current(|text, kind| SyntaxErrorKind::UnexpectedToken { text, kind }))
    }
}
