use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_PATTERN, MK_TOKEN};

use super::tokens::{Token, TokenList, TokenValue};

/// Builds the token payload from the matched text, `None` rejects the match.
pub type RegexHandler = fn(&str) -> Option<TokenValue>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in this order, first match wins. The char pattern only fails on
    // an empty remainder.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)", number_handler),
        MK_PATTERN!(r#"^(?s)"(?:[^"\\]|\\.)*""#, string_handler),
        MK_PATTERN!(r"^\w+", word_handler),
        MK_PATTERN!(r"^(?s).", char_handler),
    ];
    static ref TRIVIA: Regex = Regex::new(r"^\s*").unwrap();
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            position: Position::start(),
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn advance_n(&mut self, n: usize) -> &'a str {
        let text = &self.source[self.pos..self.pos + n];
        self.pos += n;
        self.position = self.position.advance(text);
        text
    }

    fn skip_trivia(&mut self) -> String {
        let len = TRIVIA.find(self.remainder()).map_or(0, |m| m.end());
        self.advance_n(len).to_string()
    }

    /// Scans one token and its trailing trivia.
    ///
    /// Returns false only when invoked at the end of the input.
    pub fn scan_token(&mut self) -> bool {
        for pattern in PATTERNS.iter() {
            let Some(found) = pattern.regex.find(self.remainder()) else {
                continue;
            };
            let Some(value) = (pattern.handler)(found.as_str()) else {
                continue;
            };

            let start = self.position;
            let text = self.advance_n(found.end()).to_string();
            let end = self.position;
            let trivia = self.skip_trivia();

            self.tokens
                .push(MK_TOKEN!(value, text, trivia, Span { start, end }));
            return true;
        }

        false
    }
}

fn number_handler(matched: &str) -> Option<TokenValue> {
    matched.parse().ok().map(TokenValue::Number)
}

fn string_handler(matched: &str) -> Option<TokenValue> {
    let string_literal = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        // The pattern guarantees a backslash is always followed by a character
        let Some(next_ch) = chars.next() else {
            result.push(ch);
            break;
        };

        match next_ch {
            'n' => result.push('\n'),
            't' => result.push('\t'),
            'r' => result.push('\r'),
            '\\' => result.push('\\'),
            '"' => result.push('"'),
            '0' => result.push('\0'),
            'x' => {
                let mut hex = String::new();

                while hex.len() < 2 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            _ => {
                // Unknown escapes are kept verbatim
                result.push(ch);
                result.push(next_ch);
            }
        }
    }

    Some(TokenValue::String(result))
}

fn word_handler(matched: &str) -> Option<TokenValue> {
    Some(TokenValue::Word(matched.to_string()))
}

fn char_handler(matched: &str) -> Option<TokenValue> {
    matched.chars().next().map(TokenValue::Char)
}

/// Scans the whole source into a token list.
///
/// Lexing cannot fail: anything the other scanners reject becomes a
/// single-character token.
pub fn tokenize(source: &str) -> TokenList {
    let mut lex = Lexer::new(source);
    let leading_trivia = lex.skip_trivia();

    while lex.scan_token() {}

    tracing::debug!(tokens = lex.tokens.len(), "tokenized source");

    TokenList {
        leading_trivia,
        tokens: lex.tokens,
        end: lex.position,
    }
}
