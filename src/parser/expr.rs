use crate::{
    ast::expressions::{BinaryExpr, Expr, NumberExpr, StringExpr, SymbolExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{lookup_operator, BindingPower, Operator},
    parser::Parser,
};

/// Parses a string, number or identifier. Consumes nothing on no match.
pub fn parse_atom(parser: &mut Parser) -> Option<Expr> {
    let stream = parser.stream_mut();

    if let Some(token) = stream.consume_if(TokenKind::String, None) {
        return Some(Expr::String(StringExpr { token }));
    }
    if let Some(token) = stream.consume_if(TokenKind::Number, None) {
        return Some(Expr::Number(NumberExpr { token }));
    }
    if let Some(token) = stream.consume_if(TokenKind::Word, None) {
        return Some(Expr::Symbol(SymbolExpr { token }));
    }

    None
}

/// Looks at the operator under the cursor without consuming it.
///
/// Two-character operators are two adjacent char tokens with no trivia in
/// between. Returns the symbol, the number of tokens it spans and its entry
/// in the operator table.
fn peek_operator(parser: &Parser) -> Option<(String, usize, Operator)> {
    let stream = parser.stream();
    let first = stream.current()?;
    let first_char = first.as_char()?;

    if first.trivia.is_empty() {
        if let Some(second_char) = stream.peek(1).and_then(|token| token.as_char()) {
            let symbol = format!("{}{}", first_char, second_char);
            if let Some(operator) = lookup_operator(&symbol) {
                return Some((symbol, 2, operator));
            }
        }
    }

    let symbol = first_char.to_string();
    lookup_operator(&symbol).map(|operator| (symbol, 1, operator))
}

/// Precedence climbing over the operator table.
///
/// Returns `Ok(None)` without consuming anything when no atom starts here.
/// An operator without a right-hand operand is fatal.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Option<Expr>, Error> {
    parser.enter()?;
    let expr = parse_operands(parser, bp);
    parser.leave();
    expr
}

fn parse_operands(parser: &mut Parser, bp: BindingPower) -> Result<Option<Expr>, Error> {
    let Some(mut left) = parse_atom(parser) else {
        return Ok(None);
    };

    while let Some((symbol, width, operator)) = peek_operator(parser) {
        if operator.binding_power <= bp {
            break;
        }

        for _ in 0..width {
            parser.stream_mut().consume();
        }

        let Some(right) = parse_expr(parser, operator.right_binding_power())? else {
            return Err(parser.error(|token| ErrorImpl::ExpectedExpression { token }));
        };

        let span = Span {
            start: left.get_span().start,
            end: right.get_span().end,
        };

        left = Expr::Binary(BinaryExpr {
            operator: symbol,
            left: Box::new(left),
            right: Box::new(right),
            span,
        });
    }

    Ok(Some(left))
}
