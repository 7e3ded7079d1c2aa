//! Error types for the parser.
//!
//! Lexing never fails, so the only error is the fatal syntax error raised
//! once a construct has started matching and a required piece is missing.
//! Each error carries the position and the text of the offending token.

pub mod errors;
