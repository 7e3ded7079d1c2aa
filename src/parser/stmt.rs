use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, BlockStmt, CallStmt, IfStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Tries each statement form in turn. The keyword forms go first so that
/// `if` and `set` never end up as callee identifiers.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    if let Some(stmt) = parse_if_stmt(parser)? {
        return Ok(Some(stmt));
    }
    if let Some(stmt) = parse_assignment_stmt(parser)? {
        return Ok(Some(stmt));
    }
    parse_call_stmt(parser)
}

/// Parses statements, each optionally followed by `;`, until none matches.
pub fn parse_stmt_list(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    while let Some(stmt) = parse_stmt(parser)? {
        statements.push(stmt);
        parser.stream_mut().consume_char(';');
    }

    Ok(statements)
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let Some(start) = parser.stream_mut().consume_word("set") else {
        return Ok(None);
    };

    let Some(target) = parser.stream_mut().consume_if(TokenKind::Word, None) else {
        return Err(parser.error(|token| ErrorImpl::ExpectedIdentifier { token }));
    };

    parser.expect_word("to")?;

    let Some(value) = parse_expr(parser, BindingPower::Default)? else {
        return Err(parser.error(|token| ErrorImpl::ExpectedExpression { token }));
    };

    Ok(Some(Stmt::Assignment(AssignmentStmt {
        target: target.value.to_string(),
        value,
        span: parser.span_from(start.span.start),
    })))
}

/// Whether the current token ends a statement: `;`, `}`, `else` or the end
/// of the input.
fn at_stmt_end(parser: &Parser) -> bool {
    match parser.current_token() {
        None => true,
        Some(token) => token.is_char(';') || token.is_char('}') || token.is_word("else"),
    }
}

pub fn parse_call_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let Some(callee) = parse_expr(parser, BindingPower::Default)? else {
        return Ok(None);
    };
    let start = callee.get_span().start;

    let mut arguments = Vec::new();

    if parser.stream_mut().consume_char('(').is_some() {
        if let Some(first) = parse_expr(parser, BindingPower::Default)? {
            arguments.push(first);

            while parser.stream_mut().consume_char(',').is_some() {
                let Some(argument) = parse_expr(parser, BindingPower::Default)? else {
                    return Err(parser.error(|token| ErrorImpl::ExpectedExpression { token }));
                };
                arguments.push(argument);
            }
        }

        parser.expect_char(')')?;
    } else if !at_stmt_end(parser) {
        return Err(parser.error(|token| ErrorImpl::ExpectedCharacter {
            character: '(',
            token,
        }));
    }

    Ok(Some(Stmt::Call(CallStmt {
        callee,
        arguments,
        span: parser.span_from(start),
    })))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let Some(start) = parser.stream_mut().consume_word("if") else {
        return Ok(None);
    };

    let Some(condition) = parse_expr(parser, BindingPower::Default)? else {
        return Err(parser.error(|token| ErrorImpl::ExpectedExpression { token }));
    };

    let Some(then_block) = parse_body(parser)? else {
        return Err(parser.error(|token| ErrorImpl::ExpectedBody { token }));
    };

    let else_block = if parser.stream_mut().consume_word("else").is_some() {
        match parse_body(parser)? {
            Some(block) => Some(block),
            None => return Err(parser.error(|token| ErrorImpl::ExpectedBody { token })),
        }
    } else {
        None
    };

    Ok(Some(Stmt::If(IfStmt {
        condition,
        then_block,
        else_block,
        span: parser.span_from(start.span.start),
    })))
}

/// `{ statement* }`
pub fn parse_block(parser: &mut Parser) -> Result<Option<BlockStmt>, Error> {
    let Some(start) = parser.stream_mut().consume_char('{') else {
        return Ok(None);
    };

    let body = parse_stmt_list(parser)?;

    parser.expect_char('}')?;

    Ok(Some(BlockStmt {
        body,
        span: parser.span_from(start.span.start),
    }))
}

/// A single statement wrapped as a block, for branches without braces.
pub fn parse_simple_block(parser: &mut Parser) -> Result<Option<BlockStmt>, Error> {
    let Some(stmt) = parse_stmt(parser)? else {
        return Ok(None);
    };

    Ok(Some(BlockStmt {
        span: stmt.get_span(),
        body: vec![stmt],
    }))
}

pub fn parse_body(parser: &mut Parser) -> Result<Option<BlockStmt>, Error> {
    parser.enter()?;
    let body = match parse_block(parser) {
        Ok(None) => parse_simple_block(parser),
        result => result,
    };
    parser.leave();
    body
}
