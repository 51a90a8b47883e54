//! Token and token kind definitions.
//!
//! Keywords are resolved by [`TokenKind::keyword`], a length-bucketed `match`
//! on the exact identifier text. There is no runtime table to iterate.

use std::fmt;

use crate::Span;

/// Token kinds.
///
/// Literal kinds carry no payload: the token's `text` holds the lexeme
/// verbatim (numbers are not converted, strings exclude their quotes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Structural ===
    Eof,
    Newline,

    // === Literals ===
    Number,
    Ident,
    String,

    // === Keywords ===
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    EndIf,
    While,
    Repeat,
    EndWhile,

    // === Operators ===
    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
}

impl TokenKind {
    /// Every keyword kind, in declaration order.
    pub const KEYWORDS: [TokenKind; 11] = [
        TokenKind::Label,
        TokenKind::Goto,
        TokenKind::Print,
        TokenKind::Input,
        TokenKind::Let,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::EndIf,
        TokenKind::While,
        TokenKind::Repeat,
        TokenKind::EndWhile,
    ];

    /// Look up a keyword by its exact spelling.
    ///
    /// Case-sensitive and whole-text only: `"IF"` is a keyword, `"If"` and
    /// `"IFX"` are not. Keywords are 2-8 bytes long, so anything outside
    /// that range is rejected before any comparison.
    #[inline]
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text.len() {
            2 => match text {
                "IF" => Some(TokenKind::If),
                _ => None,
            },
            3 => match text {
                "LET" => Some(TokenKind::Let),
                _ => None,
            },
            4 => match text {
                "GOTO" => Some(TokenKind::Goto),
                "THEN" => Some(TokenKind::Then),
                _ => None,
            },
            5 => match text {
                "LABEL" => Some(TokenKind::Label),
                "PRINT" => Some(TokenKind::Print),
                "INPUT" => Some(TokenKind::Input),
                "ENDIF" => Some(TokenKind::EndIf),
                "WHILE" => Some(TokenKind::While),
                _ => None,
            },
            6 => match text {
                "REPEAT" => Some(TokenKind::Repeat),
                _ => None,
            },
            8 => match text {
                "ENDWHILE" => Some(TokenKind::EndWhile),
                _ => None,
            },
            _ => None,
        }
    }

    /// Check if this kind is one of the eleven keywords.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Label
                | TokenKind::Goto
                | TokenKind::Print
                | TokenKind::Input
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::EndIf
                | TokenKind::While
                | TokenKind::Repeat
                | TokenKind::EndWhile
        )
    }

    /// Check if this kind is a relational operator (`==`, `!=`, `<`, `<=`, `>`, `>=`).
    pub fn is_comparison_operator(self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    /// Upper-case name used in diagnostics, e.g. `ENDIF` or `EQEQ`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Number => "NUMBER",
            TokenKind::Ident => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Label => "LABEL",
            TokenKind::Goto => "GOTO",
            TokenKind::Print => "PRINT",
            TokenKind::Input => "INPUT",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::EndIf => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::EndWhile => "ENDWHILE",
            TokenKind::Eq => "EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::EqEq => "EQEQ",
            TokenKind::NotEq => "NOTEQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTEQ",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTEQ",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its kind, the exact text matched, and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Check if this token is the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Renders as `KIND` or `KIND text` for tokens with meaningful text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof | TokenKind::Newline => write!(f, "{}", self.kind),
            TokenKind::String => write!(f, "{} {:?}", self.kind, self.text),
            _ => write!(f, "{} {}", self.kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests;
