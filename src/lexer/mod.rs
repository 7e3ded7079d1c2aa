//! Lexical analysis module.
//!
//! Converts source text into a list of tokens for the parser. It handles:
//!
//! - Ordered scanning: number, string, word, then single character
//! - Trailing whitespace (trivia) attached to each token
//! - Line/column/offset tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
