//! Statement-level error recovery.
//!
//! In recovery mode a syntax error inside a statement is recorded, the
//! parser skips to the next line, and parsing resumes with the following
//! statement, at top level or inside the enclosing IF/WHILE body. Lexical
//! errors still end the pass: the token stream cannot continue past them.

use tracing::debug;

use crate::{CheckError, Parser, TokenKind};

impl Parser {
    /// Check the whole program, collecting every error instead of stopping
    /// at the first one.
    ///
    /// Returns an empty vector for a valid program. The first error is the
    /// one [`parse_program`](Self::parse_program) would have returned.
    pub fn parse_program_recovering(mut self) -> Vec<CheckError> {
        self.recovering = true;
        if let Err(err) = self.parse_program() {
            self.errors.push(err);
        }
        self.errors
    }

    /// Parse a statement, recovering from syntax errors when enabled.
    pub(crate) fn statement(&mut self) -> Result<(), CheckError> {
        match self.parse_statement() {
            Err(err @ CheckError::Syntax(_)) if self.recovering => {
                debug!(error = %err, "recovering");
                self.errors.push(err);
                self.synchronize()
            }
            result => result,
        }
    }

    /// Skip to the start of the next line.
    ///
    /// Consumes everything up to and including the next run of line
    /// terminators, or stops at EOF.
    fn synchronize(&mut self) -> Result<(), CheckError> {
        while !self.at(TokenKind::Newline) && !self.at(TokenKind::Eof) {
            self.advance()?;
        }
        while self.at(TokenKind::Newline) {
            self.advance()?;
        }
        Ok(())
    }
}
