//! Pull-model tokenizer.
//!
//! [`Lexer::next_token`] produces one token per call, scanning strictly
//! left to right. Dispatch is on the current character, first match wins:
//! single-char operators, `=`/`==`, `<`/`<=`, `>`/`>=`, `!=`, strings,
//! numbers, newline, end of input, identifiers and keywords.

use tracing::trace;

use crate::cursor::{Cursor, SENTINEL};
use crate::{LexError, LexErrorKind, Token, TokenKind};

/// Tokenizer over a single source text.
///
/// One instance per compilation. The cursor only moves forward.
#[derive(Clone, Debug)]
pub struct Lexer {
    cursor: Cursor,
}

impl Lexer {
    /// Create a lexer over `source`. A `\n` is appended internally.
    pub fn new(source: &str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Character at the scan position, or `'\0'` past the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.cursor.current()
    }

    /// Character after the scan position, without moving.
    #[inline]
    pub fn peek_char(&self) -> char {
        self.cursor.peek()
    }

    /// Move the scan position forward one character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.cursor.advance();
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] once the text is exhausted; further calls
    /// keep returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_insignificant();
        let start = self.cursor.pos();
        let token = match self.cursor.current() {
            '+' => self.single(start, TokenKind::Plus),
            '-' => self.single(start, TokenKind::Minus),
            '*' => self.single(start, TokenKind::Asterisk),
            '/' => self.single(start, TokenKind::Slash),
            '=' => self.with_optional_eq(start, TokenKind::Eq, TokenKind::EqEq),
            '>' => self.with_optional_eq(start, TokenKind::Gt, TokenKind::GtEq),
            '<' => self.with_optional_eq(start, TokenKind::Lt, TokenKind::LtEq),
            '!' => self.bang(start)?,
            '"' => self.string(start)?,
            '0'..='9' => self.number(start)?,
            '\n' => self.single(start, TokenKind::Newline),
            SENTINEL if self.cursor.is_eof() => {
                Token::new(TokenKind::Eof, "", self.cursor.span_from(start))
            }
            c if c.is_alphabetic() => self.identifier(start),
            c => {
                self.cursor.advance();
                return Err(LexError::new(
                    LexErrorKind::UnknownChar(c),
                    self.cursor.span_from(start),
                ));
            }
        };
        trace!(kind = %token.kind, text = %token.text, span = ?token.span, "token");
        Ok(token)
    }

    /// Skip spaces, tabs, carriage returns and `#` comments.
    ///
    /// Newlines are significant and never skipped.
    fn skip_insignificant(&mut self) {
        loop {
            match self.cursor.current() {
                ' ' | '\t' | '\r' => self.cursor.advance(),
                '#' => self.cursor.eat_until_newline(),
                _ => return,
            }
        }
    }

    /// Single-character token: consume it and emit `kind`.
    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token_from(start, kind)
    }

    /// `=`, `<` or `>`, optionally followed by `=`.
    fn with_optional_eq(&mut self, start: usize, one: TokenKind, two: TokenKind) -> Token {
        if self.cursor.peek() == '=' {
            self.cursor.advance();
            self.single(start, two)
        } else {
            self.single(start, one)
        }
    }

    fn bang(&mut self, start: usize) -> Result<Token, LexError> {
        let found = self.cursor.peek();
        if found == '=' {
            self.cursor.advance();
            return Ok(self.single(start, TokenKind::NotEq));
        }
        self.cursor.advance();
        Err(LexError::new(
            LexErrorKind::BangWithoutEq { found },
            self.cursor.span_from(start),
        ))
    }

    /// String literal. The token text excludes both quotes.
    fn string(&mut self, start: usize) -> Result<Token, LexError> {
        self.cursor.advance(); // opening '"'
        let content_start = self.cursor.pos();
        match self.cursor.skip_to_string_delim() {
            '"' => {
                let text = self.cursor.slice_from(content_start).to_string();
                self.cursor.advance(); // closing '"'
                Ok(Token::new(TokenKind::String, text, self.cursor.span_from(start)))
            }
            // Only the appended newline sits at the end of the source.
            '\n' if self.cursor.pos() == self.cursor.source_len() => Err(LexError::new(
                LexErrorKind::UnterminatedString,
                self.cursor.span_from(start),
            )),
            c => {
                let at = self.cursor.pos();
                self.cursor.advance();
                Err(LexError::new(
                    LexErrorKind::IllegalStringChar(c),
                    self.cursor.span_from(at),
                ))
            }
        }
    }

    /// Integer or decimal literal, kept as text.
    fn number(&mut self, start: usize) -> Result<Token, LexError> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.current() == '.' {
            self.cursor.advance();
            let found = self.cursor.current();
            if !found.is_ascii_digit() {
                return Err(LexError::new(
                    LexErrorKind::MissingFractionDigits { found },
                    self.cursor.span_from(start),
                ));
            }
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        Ok(self.token_from(start, TokenKind::Number))
    }

    /// Identifier or keyword (maximal munch, then exact keyword lookup).
    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.advance();
        self.cursor.eat_while(char::is_alphanumeric);
        let text = self.cursor.slice_from(start);
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Ident);
        self.token_from(start, kind)
    }

    fn token_from(&self, start: usize, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(start),
            self.cursor.span_from(start),
        )
    }
}

/// Tokenize a whole source, up to and including [`TokenKind::Eof`].
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests;
