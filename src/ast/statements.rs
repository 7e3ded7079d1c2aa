use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::{ast::Stmt, expressions::Expr};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, stmt) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, " {}", stmt)?;
        }
        write!(f, " }}")
    }
}

/// `set <target> to <value>`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: String,
    pub value: Expr,
    pub span: Span,
}

/// `<callee>(<arguments>)`, or a bare `<callee>` with no arguments
#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub callee: Expr,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_block: BlockStmt,
    pub else_block: Option<BlockStmt>,
    pub span: Span,
}
