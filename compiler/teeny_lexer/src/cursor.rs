//! Character cursor over a newline-terminated source.
//!
//! The cursor owns the source text with exactly one `\n` appended, so the
//! last statement always ends with a line terminator. Once the position
//! passes the final character, [`Cursor::current`] returns the sentinel
//! [`SENTINEL`] (`'\0'`).
//!
//! # Interior Null Characters
//!
//! A `'\0'` inside the source is not EOF. [`Cursor::is_eof`] compares the
//! position against the text length, so callers can tell the two apart.

use crate::Span;

/// Character returned once the cursor is past the end of the text.
pub const SENTINEL: char = '\0';

/// Forward-only character cursor.
///
/// Positions are byte offsets, so token text is sliced straight out of the
/// source without copying character by character.
#[derive(Clone, Debug)]
pub struct Cursor {
    /// Source text plus the appended `\n`.
    text: String,
    /// Byte offset of `current`.
    pos: usize,
    /// Character at `pos`, or [`SENTINEL`] at end of text.
    current: char,
}

impl Cursor {
    /// Create a cursor at the first character of `source`.
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len() + 1);
        text.push_str(source);
        text.push('\n');
        let current = text.chars().next().unwrap_or(SENTINEL);
        Cursor {
            text,
            pos: 0,
            current,
        }
    }

    /// Character at the cursor, or [`SENTINEL`] at end of text.
    #[inline]
    pub fn current(&self) -> char {
        self.current
    }

    /// Character one position ahead, or [`SENTINEL`] if there is none.
    #[inline]
    pub fn peek(&self) -> char {
        if self.is_eof() {
            return SENTINEL;
        }
        self.text[self.pos + self.current.len_utf8()..]
            .chars()
            .next()
            .unwrap_or(SENTINEL)
    }

    /// Move forward one character. Does nothing at end of text.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.seek(self.pos + self.current.len_utf8());
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source as given (excludes the appended newline).
    #[inline]
    pub fn source_len(&self) -> usize {
        self.text.len() - 1
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &str {
        &self.text[start..self.pos]
    }

    /// Span from `start` to the cursor.
    ///
    /// Offsets are clamped to the source length so the appended
    /// newline and EOF point at the end of the user's text.
    pub fn span_from(&self, start: usize) -> Span {
        let clamp = |offset: usize| {
            u32::try_from(offset.min(self.source_len())).unwrap_or(u32::MAX)
        };
        Span::new(clamp(start), clamp(self.pos))
    }

    /// Advance while `pred` holds for the current character.
    ///
    /// `pred(SENTINEL)` must be `false`; every classifier the lexer passes
    /// here rejects `'\0'`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current) {
            self.advance();
        }
    }

    /// Advance to the next `\n` (not consumed) or end of text.
    pub fn eat_until_newline(&mut self) {
        let rest = &self.text.as_bytes()[self.pos..];
        let offset = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        self.seek(self.pos + offset);
    }

    /// Advance past ordinary string content to the next interesting character.
    ///
    /// Stops on the closing `"` or any character a string literal may not
    /// contain (`\r`, `\n`, `\t`, `\`, `%`). Returns that character, or
    /// [`SENTINEL`] at end of text.
    pub fn skip_to_string_delim(&mut self) -> char {
        let rest = &self.text.as_bytes()[self.pos..];
        let primary = memchr::memchr3(b'"', b'\\', b'\n', rest);
        let secondary = memchr::memchr3(b'\r', b'\t', b'%', rest);
        let offset = earliest_of(primary, secondary).unwrap_or(rest.len());
        self.seek(self.pos + offset);
        self.current
    }

    fn seek(&mut self, pos: usize) {
        self.pos = pos;
        self.current = self.text[pos..].chars().next().unwrap_or(SENTINEL);
    }
}

/// Returns the earliest of two optional offsets.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}
