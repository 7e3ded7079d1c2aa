use std::fmt::Display;

use crate::Span;

use super::statements::{AssignmentStmt, CallStmt, IfStmt};

/// A statement node. Blocks only appear as statement bodies, never as
/// statements of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    Call(CallStmt),
    If(IfStmt),
}

impl Stmt {
    pub fn get_span(&self) -> Span {
        match self {
            Stmt::Assignment(stmt) => stmt.span,
            Stmt::Call(stmt) => stmt.span,
            Stmt::If(stmt) => stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Assignment(stmt) => write!(f, "(set {} {})", stmt.target, stmt.value),
            Stmt::Call(stmt) => {
                write!(f, "(call {}", stmt.callee)?;
                for argument in &stmt.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
            Stmt::If(stmt) => {
                write!(f, "(if {} {}", stmt.condition, stmt.then_block)?;
                if let Some(else_block) = &stmt.else_block {
                    write!(f, " {}", else_block)?;
                }
                write!(f, ")")
            }
        }
    }
}
