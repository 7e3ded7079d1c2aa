use std::fmt::Display;

use crate::{
    lexer::tokens::{Token, TokenValue},
    Span,
};

// LITERALS

/// String Expression
/// Represents a string literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub token: Token,
}

impl StringExpr {
    pub fn value(&self) -> &str {
        match &self.token.value {
            TokenValue::String(value) => value,
            _ => "",
        }
    }
}

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub token: Token,
}

impl NumberExpr {
    pub fn value(&self) -> f64 {
        match self.token.value {
            TokenValue::Number(value) => value,
            _ => f64::NAN,
        }
    }
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes callees.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub token: Token,
}

impl SymbolExpr {
    pub fn name(&self) -> &str {
        match &self.token.value {
            TokenValue::Word(name) => name,
            _ => "",
        }
    }
}

// COMPLEX

/// Binary Expression
/// Represents an infix operation such as `a + b` or `2 ^ 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    String(StringExpr),
    Number(NumberExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn get_span(&self) -> Span {
        match self {
            Expr::String(expr) => expr.token.span,
            Expr::Number(expr) => expr.token.span,
            Expr::Symbol(expr) => expr.token.span,
            Expr::Binary(expr) => expr.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::String(expr) => write!(f, "{:?}", expr.value()),
            Expr::Number(expr) => write!(f, "{}", expr.value()),
            Expr::Symbol(expr) => write!(f, "{}", expr.name()),
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.operator, expr.left, expr.right),
        }
    }
}
