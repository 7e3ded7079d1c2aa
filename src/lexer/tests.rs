//! Unit tests for the lexer module.
//!
//! Covers each scanner, the order they are tried in, trivia attachment,
//! position tracking and reconstruction of the source.

use super::{
    lexer::tokenize,
    tokens::{TokenKind, TokenValue},
};

#[test]
fn test_tokenize_integer() {
    let tokens = tokenize("123");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::Number);
    assert_eq!(tokens[0].value, TokenValue::Number(123.0));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("1.5 0 100.25 .5");

    assert_eq!(tokens[0].value, TokenValue::Number(1.5));
    assert_eq!(tokens[1].value, TokenValue::Number(0.0));
    assert_eq!(tokens[2].value, TokenValue::Number(100.25));
    assert_eq!(tokens[3].value, TokenValue::Number(0.5));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_number_without_fraction() {
    // A dot needs digits after it to be part of the number
    let tokens = tokenize("1.");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, TokenValue::Number(1.0));
    assert_eq!(tokens[1].value, TokenValue::Char('.'));
}

#[test]
fn test_tokenize_number_before_word() {
    let tokens = tokenize("123abc abc123");

    assert_eq!(tokens[0].value, TokenValue::Number(123.0));
    assert_eq!(tokens[1].value, TokenValue::Word("abc".to_string()));
    assert_eq!(tokens[2].value, TokenValue::Word("abc123".to_string()));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_tokenize_words() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase");

    for (token, expected) in tokens
        .iter()
        .zip(["foo", "bar", "baz_123", "_underscore", "CamelCase"])
    {
        assert_eq!(token.kind(), TokenKind::Word);
        assert_eq!(token.value, TokenValue::Word(expected.to_string()));
    }
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0].value, TokenValue::String("hello".to_string()));
    assert_eq!(tokens[0].text, "\"hello\"");
    assert_eq!(tokens[1].value, TokenValue::String("multiple words".to_string()));
    assert_eq!(tokens[2].value, TokenValue::String(String::new()));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "quote\"test""#);

    assert_eq!(tokens[0].value, TokenValue::String("hello\nworld".to_string()));
    assert_eq!(tokens[1].value, TokenValue::String("tab\there".to_string()));
    assert_eq!(tokens[2].value, TokenValue::String("backslash\\".to_string()));
    assert_eq!(tokens[3].value, TokenValue::String("hexA".to_string()));
    assert_eq!(tokens[4].value, TokenValue::String("quote\"test".to_string()));
    assert_eq!(tokens[4].text, r#""quote\"test""#);
}

#[test]
fn test_tokenize_unterminated_string() {
    let tokens = tokenize("\"abc");

    assert_eq!(tokens[0].value, TokenValue::Char('"'));
    assert_eq!(tokens[1].value, TokenValue::Word("abc".to_string()));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_tokenize_chars() {
    let tokens = tokenize("{}();,<=+@");

    let chars: Vec<char> = tokens.iter().filter_map(|token| token.as_char()).collect();
    assert_eq!(chars, vec!['{', '}', '(', ')', ';', ',', '<', '=', '+', '@']);
    assert_eq!(tokens.len(), 10);
}

#[test]
fn test_tokenize_empty() {
    let tokens = tokenize("");

    assert!(tokens.is_empty());
    assert_eq!(tokens.leading_trivia, "");
    assert_eq!(tokens.end.absolute_offset, 0);
}

#[test]
fn test_tokenize_whitespace_only() {
    let tokens = tokenize("  \n\t ");

    assert!(tokens.is_empty());
    assert_eq!(tokens.leading_trivia, "  \n\t ");
    assert_eq!(tokens.end.line_number, 2);
    assert_eq!(tokens.end.line_column, 3);
}

#[test]
fn test_tokenize_trivia() {
    let tokens = tokenize("set a\n\n  to 1");

    assert_eq!(tokens[0].trivia, " ");
    assert_eq!(tokens[1].trivia, "\n\n  ");
    assert_eq!(tokens[2].trivia, " ");
    assert_eq!(tokens[3].trivia, "");
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("set a\n  to 12");

    assert_eq!(tokens[0].span.start.line_number, 1);
    assert_eq!(tokens[0].span.start.line_column, 1);
    assert_eq!(tokens[0].span.end.line_column, 4);

    assert_eq!(tokens[1].span.start.line_column, 5);

    assert_eq!(tokens[2].span.start.line_number, 2);
    assert_eq!(tokens[2].span.start.line_column, 3);
    assert_eq!(tokens[2].span.start.absolute_offset, 8);

    assert_eq!(tokens[3].span.start.line_column, 6);
    assert_eq!(tokens[3].span.end.absolute_offset, 13);
    assert_eq!(tokens.end.absolute_offset, 13);
}

#[test]
fn test_tokenize_leading_trivia() {
    let tokens = tokenize("\n  x");

    assert_eq!(tokens.leading_trivia, "\n  ");
    assert_eq!(tokens[0].value, TokenValue::Word("x".to_string()));
    assert_eq!(tokens[0].span.start.line_number, 2);
    assert_eq!(tokens[0].span.start.line_column, 3);
}

#[test]
fn test_tokenize_round_trip() {
    let sources = [
        "",
        "   ",
        "set a to 1",
        "  if a < 4 { x } else {\n\ty(1, \"two\")\n}\n",
        "1.5.5..3 \"unterminated\\\" \r\n tail",
        "naïve ünïcödé → 42 ",
        "a<=b!=c^2%3",
    ];

    for source in sources {
        assert_eq!(tokenize(source).reconstruct(), source);
    }
}

#[test]
fn test_tokenize_unicode_word() {
    let tokens = tokenize("größe → 1");

    assert_eq!(tokens[0].value, TokenValue::Word("größe".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Char('→'));
    assert_eq!(tokens[2].span.start.line_column, 9);
}

#[test]
fn test_token_matches() {
    let tokens = tokenize("set ( \"s\" 2");

    assert!(tokens[0].matches(TokenKind::Word, None));
    assert!(tokens[0].matches(TokenKind::Word, Some("set")));
    assert!(!tokens[0].matches(TokenKind::Word, Some("to")));
    assert!(!tokens[0].matches(TokenKind::Char, None));
    assert!(tokens[1].matches(TokenKind::Char, Some("(")));
    assert!(tokens[2].matches(TokenKind::String, Some("s")));
    assert!(tokens[3].matches(TokenKind::Number, Some("2")));
}
