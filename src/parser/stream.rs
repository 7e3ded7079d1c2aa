//! Forward-only cursor over the token list.
//!
//! `consume_if` is the only way the parsers take tokens conditionally:
//! it either consumes exactly one matching token or leaves the cursor
//! where it was.

use crate::{
    lexer::tokens::{Token, TokenKind, TokenList},
    Position,
};

pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    /// End of the last consumed token
    last_end: Position,
    /// Position just past the end of the input
    end: Position,
}

impl TokenStream {
    pub fn new(list: TokenList) -> Self {
        let last_end = list.first().map_or(list.end, |token| token.span.start);

        TokenStream {
            tokens: list.tokens,
            pos: 0,
            last_end,
            end: list.end,
        }
    }

    /// The token under the cursor, `None` once exhausted.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Looks `offset` tokens past the cursor without moving it.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Returns the current token and advances past it. Does nothing once
    /// exhausted.
    pub fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.clone();
        tracing::trace!(%token, "consumed");

        self.pos += 1;
        self.last_end = token.span.end;
        Some(token)
    }

    /// Consumes the current token only if it has the given kind and, when
    /// `expected` is set, exactly that value.
    pub fn consume_if(&mut self, kind: TokenKind, expected: Option<&str>) -> Option<Token> {
        if self.current()?.matches(kind, expected) {
            self.consume()
        } else {
            None
        }
    }

    pub fn consume_word(&mut self, word: &str) -> Option<Token> {
        self.consume_if(TokenKind::Word, Some(word))
    }

    pub fn consume_char(&mut self, ch: char) -> Option<Token> {
        if self.current()?.is_char(ch) {
            self.consume()
        } else {
            None
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Index of the cursor into the token list.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Start of the current token, or the end of the input once exhausted.
    pub fn current_position(&self) -> Position {
        self.current().map_or(self.end, |token| token.span.start)
    }

    pub fn last_end(&self) -> Position {
        self.last_end
    }
}
