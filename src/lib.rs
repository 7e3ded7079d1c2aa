#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text.
///
/// `line_number` and `line_column` are 1-based and count characters,
/// `absolute_offset` is the 0-based byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line_number: usize,
    pub line_column: usize,
    pub absolute_offset: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            line_number: 1,
            line_column: 1,
            absolute_offset: 0,
        }
    }

    /// Returns the position reached after walking over `text`.
    pub fn advance(&self, text: &str) -> Position {
        let mut next = *self;

        for ch in text.chars() {
            if ch == '\n' {
                next.line_number += 1;
                next.line_column = 1;
            } else {
                next.line_column += 1;
            }
        }

        next.absolute_offset += text.len();
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line_number, self.line_column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses a complete source text.
pub fn parse_source(source: &str) -> Result<BlockStmt, Error> {
    parse(tokenize(source))
}

/// Returns the text of the line `position` falls on, without its line break.
pub fn get_line_at_position<'a>(source: &'a str, position: &Position) -> Option<&'a str> {
    source
        .split('\n')
        .nth(position.line_number.checked_sub(1)?)
        .map(|line| line.trim_end_matches('\r'))
}


pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: ExpectedKeyword (expected keyword `to`, received `1`)
        -> main.script
          |
        1 | set a 1
          | ------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position).unwrap_or_default();

    let line_string = position.line_number.to_string();
    let padding = line_string.len() + 2;

    let header = match error.get_tip() {
        ErrorTip::None => format!("Error: {}", error.get_error_name()),
        tip => format!("Error: {} ({})", error.get_error_name(), tip),
    };

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);

    let arrows = position
        .line_column
        .saturating_sub(removed_whitespace)
        .max(1);

    format!(
        "{header}\n-> {file}\n{bar:>padding$}\n{line_string} | {text}\n{bar:>padding$} {caret:->arrows$}",
        bar = "|",
        text = line_text_removed.trim_end(),
        caret = "^",
    )
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.chars().count() - trimmed.chars().count())
}
