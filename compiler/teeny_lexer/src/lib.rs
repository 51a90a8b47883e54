//! Tokenizer for the Teeny language.
//!
//! Turns source text into a stream of typed [`Token`]s, one per call to
//! [`Lexer::next_token`]. The checker in `teeny_parse` pulls from it on
//! demand; [`lex`] collects a whole source for tooling and tests.
//!
//! # Lexical rules
//!
//! - Spaces, tabs and carriage returns separate tokens; `#` starts a comment
//!   that runs to the end of the line.
//! - Newlines are tokens: they terminate statements.
//! - Numbers are digit runs with an optional `.digits` fraction.
//! - Strings are `"..."` on one line and may not contain `\r`, `\n`, `\t`,
//!   `\` or `%`.
//! - Identifiers start with a letter and continue with letters or digits;
//!   the eleven upper-case keywords are matched exactly.

mod cursor;
mod lex_error;
mod lexer;
mod span;
mod token;

pub use cursor::SENTINEL;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{lex, Lexer};
pub use span::{LineOffsetTable, Span};
pub use token::{Token, TokenKind};
