//! Parser state and the top-level entry point.
//!
//! A `Parser` is built fresh for every parse and owns its token stream;
//! every `parse_*` function takes it by `&mut`.

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenList},
    Position, Span,
};

use super::{
    stmt::{parse_block, parse_stmt_list},
    stream::TokenStream,
};

/// Deepest nesting of expressions and bodies before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    stream: TokenStream,
    /// Current nesting of `parse_expr` and `parse_body` calls
    depth: usize,
}

impl Parser {
    pub fn new(tokens: TokenList) -> Self {
        Parser {
            stream: TokenStream::new(tokens),
            depth: 0,
        }
    }

    /// Enters one level of nesting, failing past `MAX_NESTING_DEPTH`.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(|token| ErrorImpl::NestingTooDeep { token }));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut TokenStream {
        &mut self.stream
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.stream.current()
    }

    /// The current token as shown in diagnostics.
    pub fn received(&self) -> String {
        match self.stream.current() {
            Some(token) => token.value.to_string(),
            None => String::from("end of input"),
        }
    }

    /// Builds a fatal error at the current token.
    pub fn error(&self, make: impl FnOnce(String) -> ErrorImpl) -> Error {
        Error::new(make(self.received()), self.get_position())
    }

    /// Consumes the given keyword or fails.
    pub fn expect_word(&mut self, keyword: &str) -> Result<Token, Error> {
        match self.stream.consume_word(keyword) {
            Some(token) => Ok(token),
            None => Err(self.error(|token| ErrorImpl::ExpectedKeyword {
                keyword: keyword.to_string(),
                token,
            })),
        }
    }

    /// Consumes the given character or fails.
    pub fn expect_char(&mut self, character: char) -> Result<Token, Error> {
        match self.stream.consume_char(character) {
            Some(token) => Ok(token),
            None => Err(self.error(|token| ErrorImpl::ExpectedCharacter { character, token })),
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.stream.last_end(),
        }
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.stream.current_position()
    }
}

/// Parses a token list into the root block.
///
/// The input is either a single braced block or a sequence of statements,
/// and must be consumed entirely.
pub fn parse(tokens: TokenList) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(tokens);

    let block = match parse_block(&mut parser)? {
        Some(block) => block,
        None => {
            let start = parser.get_position();
            let body = parse_stmt_list(&mut parser)?;
            BlockStmt {
                body,
                span: parser.span_from(start),
            }
        }
    };

    if !parser.stream.is_exhausted() {
        return Err(parser.error(|token| ErrorImpl::UnexpectedToken { token }));
    }

    tracing::debug!(statements = block.len(), "parsed source");
    Ok(block)
}
