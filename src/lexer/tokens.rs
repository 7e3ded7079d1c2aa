use std::{fmt::Display, ops::Deref};

use crate::{Position, Span};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    String,
    Word,
    Char,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The payload of a token, one variant per token kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Number(f64),
    /// Unescaped content between the quotes
    String(String),
    Word(String),
    Char(char),
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Number(_) => TokenKind::Number,
            TokenValue::String(_) => TokenKind::String,
            TokenValue::Word(_) => TokenKind::Word,
            TokenValue::Char(_) => TokenKind::Char,
        }
    }
}

// This is the rendering used for the received token in diagnostics.
impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Number(value) => write!(f, "{}", value),
            TokenValue::String(value) => write!(f, "{}", value),
            TokenValue::Word(value) => write!(f, "{}", value),
            TokenValue::Char(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: TokenValue,
    /// The source text of the token itself
    pub text: String,
    /// Whitespace following the token, newlines included
    pub trivia: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) @ {}", self.kind(), self.value, self.span.start)
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// Checks the token against a kind and, optionally, an exact value.
    pub fn matches(&self, kind: TokenKind, expected: Option<&str>) -> bool {
        if self.kind() != kind {
            return false;
        }

        match expected {
            None => true,
            Some(expected) => match &self.value {
                TokenValue::Word(value) | TokenValue::String(value) => value == expected,
                TokenValue::Char(value) => {
                    let mut buffer = [0; 4];
                    &*value.encode_utf8(&mut buffer) == expected
                }
                TokenValue::Number(value) => value.to_string() == expected,
            },
        }
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.matches(TokenKind::Word, Some(word))
    }

    pub fn is_char(&self, ch: char) -> bool {
        self.value == TokenValue::Char(ch)
    }

    pub fn as_char(&self) -> Option<char> {
        match self.value {
            TokenValue::Char(ch) => Some(ch),
            _ => None,
        }
    }
}

/// The complete output of the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenList {
    /// Whitespace before the first token
    pub leading_trivia: String,
    pub tokens: Vec<Token>,
    /// Position just past the end of the input
    pub end: Position,
}

impl TokenList {
    /// Rebuilds the source text from the tokens and their trivia.
    pub fn reconstruct(&self) -> String {
        let mut source = self.leading_trivia.clone();
        for token in &self.tokens {
            source.push_str(&token.text);
            source.push_str(&token.trivia);
        }
        source
    }
}

impl Deref for TokenList {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}
