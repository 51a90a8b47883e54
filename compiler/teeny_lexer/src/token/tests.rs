use super::*;

// === Keyword lookup ===

#[test]
fn every_keyword_resolves() {
    assert_eq!(TokenKind::keyword("LABEL"), Some(TokenKind::Label));
    assert_eq!(TokenKind::keyword("GOTO"), Some(TokenKind::Goto));
    assert_eq!(TokenKind::keyword("PRINT"), Some(TokenKind::Print));
    assert_eq!(TokenKind::keyword("INPUT"), Some(TokenKind::Input));
    assert_eq!(TokenKind::keyword("LET"), Some(TokenKind::Let));
    assert_eq!(TokenKind::keyword("IF"), Some(TokenKind::If));
    assert_eq!(TokenKind::keyword("THEN"), Some(TokenKind::Then));
    assert_eq!(TokenKind::keyword("ENDIF"), Some(TokenKind::EndIf));
    assert_eq!(TokenKind::keyword("WHILE"), Some(TokenKind::While));
    assert_eq!(TokenKind::keyword("REPEAT"), Some(TokenKind::Repeat));
    assert_eq!(TokenKind::keyword("ENDWHILE"), Some(TokenKind::EndWhile));
}

#[test]
fn keyword_names_round_trip_through_lookup() {
    for kind in TokenKind::KEYWORDS {
        assert!(kind.is_keyword());
        assert_eq!(TokenKind::keyword(kind.name()), Some(kind));
    }
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    assert_eq!(TokenKind::keyword("if"), None);
    assert_eq!(TokenKind::keyword("If"), None);
    assert_eq!(TokenKind::keyword("print"), None);
    assert_eq!(TokenKind::keyword("EndWhile"), None);
}

#[test]
fn keyword_lookup_rejects_prefixes_and_extensions() {
    assert_eq!(TokenKind::keyword("IFX"), None);
    assert_eq!(TokenKind::keyword("I"), None);
    assert_eq!(TokenKind::keyword("END"), None);
    assert_eq!(TokenKind::keyword("ENDWHILES"), None);
    assert_eq!(TokenKind::keyword(""), None);
}

#[test]
fn non_keyword_kinds_are_not_keywords() {
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::Eq.is_keyword());
    assert!(!TokenKind::Eof.is_keyword());
}

// === Classification ===

#[test]
fn comparison_operators() {
    for kind in [
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::Gt,
        TokenKind::GtEq,
    ] {
        assert!(kind.is_comparison_operator(), "{kind}");
    }
    assert!(!TokenKind::Eq.is_comparison_operator());
    assert!(!TokenKind::Plus.is_comparison_operator());
}

// === Display ===

#[test]
fn kind_display_uses_upper_case_names() {
    assert_eq!(TokenKind::EndIf.to_string(), "ENDIF");
    assert_eq!(TokenKind::NotEq.to_string(), "NOTEQ");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn token_display() {
    let ident = Token::new(TokenKind::Ident, "foo", Span::new(0, 3));
    assert_eq!(ident.to_string(), "IDENT foo");

    let string = Token::new(TokenKind::String, "hi there", Span::new(0, 10));
    assert_eq!(string.to_string(), "STRING \"hi there\"");

    let newline = Token::new(TokenKind::Newline, "\n", Span::new(3, 4));
    assert_eq!(newline.to_string(), "NEWLINE");
    assert!(!newline.is_eof());
}
