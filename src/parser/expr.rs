use crate::{
    ast::{ast::Expr, operators::BinaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    parser::{Parser, MAX_NESTING_DEPTH},
    stmt::parse_block,
};

/// Parses a full expression: a primary followed by any chain of binary
/// operators.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter()?;
    let result = parse_primary_expr(parser, "expected expression")
        .and_then(|left| parse_binary_rhs(parser, 0, left));
    parser.leave();

    result
}

/// Precedence climbing.
///
/// Consumes operators whose precedence is at least `min_precedence`. When the
/// operator after the right operand binds tighter than the current one, the
/// right operand is extended first with a floor of current precedence + 1.
/// Operators of equal precedence therefore fold to the left.
///
/// A chain folds into a left-leaning tree one level per operator, so the
/// height of every folded node is held to `MAX_NESTING_DEPTH` as well.
pub fn parse_binary_rhs(parser: &mut Parser, min_precedence: i32, mut left: Expr) -> Result<Expr, Error> {
    loop {
        let precedence = parser.current_precedence();
        if precedence < min_precedence {
            return Ok(left);
        }

        let operator_token = parser.advance()?;
        let operator = match BinaryOperator::from_token_kind(operator_token.kind) {
            Some(operator) => operator,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: operator_token.value },
                    operator_token.span.start,
                ))
            }
        };

        let mut right = parse_primary_expr(parser, "expected right-hand side expression")?;

        if precedence < parser.current_precedence() {
            right = parse_binary_rhs(parser, precedence + 1, right)?;
        }

        let depth = 1 + left.depth().max(right.depth());
        if depth > MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                operator_token.span.start,
            ));
        }

        left = Expr::Binary {
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            operator,
            left: Box::new(left),
            right: Box::new(right),
            depth,
        };
    }
}

/// Dispatches to the NUD handler registered for the current token.
pub fn parse_primary_expr(parser: &mut Parser, message: &str) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();

    match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected(message)),
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match token.value.parse::<f64>() {
        Ok(value) => Ok(Expr::Number { value, span: token.span }),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    Ok(Expr::String { value: token.value, span: token.span })
}

/// Parses everything that starts with a name: variable reads, array reads,
/// and assignments to either.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name_token = parser.advance()?;
    let name = name_token.value;
    let start = name_token.span.start;

    let index = if parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance()?;
        let index = parse_expr(parser)?;
        parser.expect_error(TokenKind::CloseBracket, Some("expected ']' after array index"))?;
        Some(Box::new(index))
    } else {
        None
    };

    if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance()?;
        let value = parse_expr(parser)?;

        return Ok(Expr::VariableAssignment {
            span: Span {
                start,
                end: value.get_span().end.clone(),
            },
            name,
            index,
            value: Box::new(value),
        });
    }

    let span = Span {
        start,
        end: parser.get_previous_end(),
    };

    Ok(match index {
        Some(index) => Expr::ArrayAccess { name, index, span },
        None => Expr::Variable { name, span },
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, Some("expected ')'"))?;

    Ok(expr)
}

/// Parses the `(condition) { body }` part shared by `if` and `while`.
fn parse_condition_and_body(parser: &mut Parser, keyword: &str) -> Result<(Expr, Expr), Error> {
    parser.expect_error(TokenKind::OpenParen, Some(&format!("expected '(' after '{}'", keyword)))?;
    let condition = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, Some("expected ')' after condition"))?;

    if parser.current_token_kind() != TokenKind::OpenCurly {
        return Err(parser.unexpected(&format!("expected '{{' after '{}' condition", keyword)));
    }
    let body = parse_block(parser)?;

    Ok((condition, body))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance()?.span.start;
    let (condition, then_body) = parse_condition_and_body(parser, "if")?;

    Ok(Expr::If {
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
        condition: Box::new(condition),
        then_body: Box::new(then_body),
    })
}

pub fn parse_while_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance()?.span.start;
    let (condition, body) = parse_condition_and_body(parser, "while")?;

    Ok(Expr::While {
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
        condition: Box::new(condition),
        body: Box::new(body),
    })
}

pub fn parse_print_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance()?.span.start;
    let value = parse_expr(parser)?;

    Ok(Expr::Print {
        span: Span {
            start,
            end: value.get_span().end.clone(),
        },
        value: Box::new(value),
    })
}

pub fn parse_endl_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    Ok(Expr::Endl { span: token.span })
}

pub fn parse_read_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance()?.span.start;
    let name = parser.expect_error(TokenKind::Identifier, Some("expected identifier after 'read'"))?;

    Ok(Expr::Input {
        span: Span {
            start,
            end: name.span.end,
        },
        name: name.value,
    })
}
