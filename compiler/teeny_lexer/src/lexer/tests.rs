#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::Span;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .expect("source should lex")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn lex_err(source: &str) -> LexErrorKind {
    lex(source).expect_err("source should not lex").kind
}

// === Operators ===

#[test]
fn single_char_operators_skip_whitespace() {
    assert_eq!(
        kinds("+- */"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn two_char_operators_win_only_on_exact_second_char() {
    assert_eq!(kinds("=")[0], TokenKind::Eq);
    assert_eq!(kinds("==")[0], TokenKind::EqEq);
    assert_eq!(kinds("<")[0], TokenKind::Lt);
    assert_eq!(kinds("<=")[0], TokenKind::LtEq);
    assert_eq!(kinds(">")[0], TokenKind::Gt);
    assert_eq!(kinds(">=")[0], TokenKind::GtEq);
    assert_eq!(kinds("!=")[0], TokenKind::NotEq);
}

#[test]
fn separated_equals_are_two_tokens() {
    assert_eq!(
        kinds("= ="),
        vec![TokenKind::Eq, TokenKind::Eq, TokenKind::Newline, TokenKind::Eof]
    );
    assert_eq!(
        kinds("<>"),
        vec![TokenKind::Lt, TokenKind::Gt, TokenKind::Newline, TokenKind::Eof]
    );
}

#[test]
fn operator_text_is_the_lexeme() {
    let tokens = lex(">= != ==").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec![">=", "!=", "==", "\n", ""]);
}

#[test]
fn bang_requires_equals() {
    assert_eq!(lex_err("!"), LexErrorKind::BangWithoutEq { found: '\n' });
    assert_eq!(lex_err("!x"), LexErrorKind::BangWithoutEq { found: 'x' });
    assert_eq!(lex_err("! ="), LexErrorKind::BangWithoutEq { found: ' ' });
}

// === Full statements ===

#[test]
fn let_statement_without_trailing_newline() {
    let tokens = lex("LET foobar = 123").unwrap();
    let expected = vec![
        Token::new(TokenKind::Let, "LET", Span::new(0, 3)),
        Token::new(TokenKind::Ident, "foobar", Span::new(4, 10)),
        Token::new(TokenKind::Eq, "=", Span::new(11, 12)),
        Token::new(TokenKind::Number, "123", Span::new(13, 16)),
        Token::new(TokenKind::Newline, "\n", Span::new(16, 16)),
        Token::new(TokenKind::Eof, "", Span::new(16, 16)),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn trailing_newline_is_not_doubled_into_extra_statement_text() {
    assert_eq!(
        kinds("PRINT x\n"),
        vec![
            TokenKind::Print,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::Newline, TokenKind::Eof]);
}

// === Keywords vs identifiers ===

#[test]
fn keyword_is_recognized() {
    assert_eq!(kinds("IF"), vec![TokenKind::If, TokenKind::Newline, TokenKind::Eof]);
}

#[test]
fn maximal_munch_beats_keyword_prefix() {
    let tokens = lex("IFX").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].text, "IFX");
    assert_eq!(tokens.len(), 3);
}

#[test]
fn identifiers_keep_case_and_digits() {
    let tokens = lex("while Label2 x1y").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "while", Span::new(0, 5)));
    assert_eq!(tokens[1].text, "Label2");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[2].text, "x1y");
}

#[test]
fn all_keywords_on_one_line() {
    assert_eq!(
        kinds("LABEL GOTO PRINT INPUT LET IF THEN ENDIF WHILE REPEAT ENDWHILE"),
        vec![
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
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn identifier_then_digit_run_stays_one_token() {
    let tokens = lex("a123+").unwrap();
    assert_eq!(tokens[0].text, "a123");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
}

// === Strings ===

#[test]
fn string_text_excludes_quotes() {
    let tokens = lex("\"this is a string\"").unwrap();
    assert_eq!(
        tokens[0],
        Token::new(TokenKind::String, "this is a string", Span::new(0, 18))
    );
}

#[test]
fn empty_string() {
    let tokens = lex("\"\"").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "");
}

#[test]
fn string_may_contain_keywords_and_operators() {
    let tokens = lex("\"IF x >= 3 # not a comment\"").unwrap();
    assert_eq!(tokens[0].text, "IF x >= 3 # not a comment");
    assert_eq!(tokens[1].kind, TokenKind::Newline);
}

#[test]
fn string_rejects_illegal_characters() {
    assert_eq!(lex_err("\"a\tb\""), LexErrorKind::IllegalStringChar('\t'));
    assert_eq!(lex_err("\"a\\nb\""), LexErrorKind::IllegalStringChar('\\'));
    assert_eq!(lex_err("\"100%\""), LexErrorKind::IllegalStringChar('%'));
    assert_eq!(lex_err("\"a\rb\""), LexErrorKind::IllegalStringChar('\r'));
}

#[test]
fn string_cannot_span_lines() {
    assert_eq!(lex_err("\"abc\ndef\""), LexErrorKind::IllegalStringChar('\n'));
    assert_eq!(lex_err("\"abc\n"), LexErrorKind::IllegalStringChar('\n'));
}

#[test]
fn string_at_end_of_input_is_unterminated() {
    assert_eq!(lex_err("\"abc"), LexErrorKind::UnterminatedString);
    assert_eq!(lex_err("\""), LexErrorKind::UnterminatedString);
    let err = lex("PRINT \"").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(6, 7));
    assert_eq!(err.to_string(), "Unterminated string literal");
}

#[test]
fn illegal_string_char_span_points_at_char() {
    let err = lex("PRINT \"ab%\"").unwrap_err();
    assert_eq!(err.span, Span::new(9, 10));
}

// === Numbers ===

#[test]
fn integer_and_decimal_numbers() {
    let tokens = lex("123 9.81").unwrap();
    assert_eq!(tokens[0].text, "123");
    assert_eq!(tokens[1], Token::new(TokenKind::Number, "9.81", Span::new(4, 8)));
}

#[test]
fn decimal_point_requires_digit() {
    assert_eq!(
        lex_err("9."),
        LexErrorKind::MissingFractionDigits { found: '\n' }
    );
    assert_eq!(
        lex_err("9.x"),
        LexErrorKind::MissingFractionDigits { found: 'x' }
    );
}

#[test]
fn number_has_no_sign_or_exponent() {
    assert_eq!(
        kinds("-5"),
        vec![TokenKind::Minus, TokenKind::Number, TokenKind::Newline, TokenKind::Eof]
    );
    let tokens = lex("1e5").unwrap();
    assert_eq!(tokens[0].text, "1");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].text, "e5");
}

#[test]
fn second_decimal_point_is_unknown() {
    assert_eq!(lex_err("1.2.3"), LexErrorKind::UnknownChar('.'));
}

// === Comments and whitespace ===

#[test]
fn comment_skipped_up_to_newline() {
    assert_eq!(
        kinds("*# trailing comment\n/"),
        vec![
            TokenKind::Asterisk,
            TokenKind::Newline,
            TokenKind::Slash,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comment_on_last_line() {
    assert_eq!(kinds("# only a comment"), vec![TokenKind::Newline, TokenKind::Eof]);
}

#[test]
fn carriage_returns_are_insignificant() {
    assert_eq!(
        kinds("PRINT x\r\n"),
        vec![
            TokenKind::Print,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

// === Unknown characters ===

#[test]
fn unknown_characters() {
    assert_eq!(lex_err("@"), LexErrorKind::UnknownChar('@'));
    assert_eq!(lex_err("(1)"), LexErrorKind::UnknownChar('('));
    assert_eq!(lex_err("_x"), LexErrorKind::UnknownChar('_'));
    assert_eq!(lex_err("a\0b"), LexErrorKind::UnknownChar('\0'));
}

#[test]
fn unknown_char_span() {
    let err = lex("LET a = $").unwrap_err();
    assert_eq!(err.span, Span::new(8, 9));
}

// === Pull model ===

#[test]
fn eof_is_absorbing() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Ident);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
    assert!(lexer.next_token().unwrap().is_eof());
    assert!(lexer.next_token().unwrap().is_eof());
}

#[test]
fn char_level_navigation() {
    let mut lexer = Lexer::new("ab");
    assert_eq!(lexer.current_char(), 'a');
    assert_eq!(lexer.peek_char(), 'b');
    lexer.advance_char();
    lexer.advance_char();
    assert_eq!(lexer.current_char(), '\n');
    assert_eq!(lexer.peek_char(), SENTINEL);
    lexer.advance_char();
    assert_eq!(lexer.current_char(), SENTINEL);
}

// === Properties ===

proptest! {
    #[test]
    fn never_panics_and_ends_in_eof(source in "\\PC{0,64}") {
        if let Ok(tokens) = lex(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        }
    }

    #[test]
    fn non_keyword_words_stay_identifiers(word in "[a-zA-Z][a-zA-Z0-9]{0,10}") {
        let tokens = lex(&word).unwrap();
        prop_assert_eq!(tokens.len(), 3);
        let expected = TokenKind::keyword(&word).unwrap_or(TokenKind::Ident);
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert_eq!(&tokens[0].text, &word);
    }

    #[test]
    fn numbers_round_trip_as_text(int in "[0-9]{1,8}", frac in proptest::option::of("[0-9]{1,4}")) {
        let source = match &frac {
            Some(f) => format!("{int}.{f}"),
            None => int.clone(),
        };
        let tokens = lex(&source).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].text, &source);
    }

    #[test]
    fn spans_stay_within_source(source in "[ A-Z0-9a-z=<>+*/\\-\n]{0,48}") {
        let len = u32::try_from(source.len()).unwrap();
        for token in lex(&source).unwrap() {
            prop_assert!(token.span.start <= token.span.end);
            prop_assert!(token.span.end <= len);
        }
    }
}
