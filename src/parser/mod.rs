//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! Recursive descent without backtracking. Every `parse_*` function returns
//! `Ok(None)` when the input does not start its construct, and in that case
//! has not moved the token cursor. Once a construct has started, a missing
//! piece is a fatal `Err`.
//!
//! Expressions use precedence climbing over the table in `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod stream;
