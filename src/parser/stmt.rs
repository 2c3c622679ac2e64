use log::trace;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_expr(parser),
    }
}

/// Parses `int name = value` and `int name[size]`.
pub fn parse_int_decl_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance()?.span.start;
    let name = parser
        .expect_error(TokenKind::Identifier, Some("expected identifier after 'int'"))?
        .value;

    if parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance()?;
        let size_token =
            parser.expect_error(TokenKind::Number, Some("expected number in array declaration"))?;
        let size = match size_token.value.parse::<f64>() {
            // `usize::MAX as f64` rounds up, so this also rules out saturation.
            Ok(size) if size.trunc() < usize::MAX as f64 => size.trunc() as usize,
            Ok(_) => {
                return Err(Error::new(
                    ErrorImpl::ArrayTooLarge {
                        array: name,
                        size: size_token.value,
                    },
                    size_token.span.start,
                ))
            }
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: size_token.value },
                    size_token.span.start,
                ))
            }
        };
        parser.expect_error(TokenKind::CloseBracket, Some("expected ']' after array size"))?;

        return Ok(Expr::ArrayDeclaration {
            name,
            size,
            span: Span {
                start,
                end: parser.get_previous_end(),
            },
        });
    }

    parser.expect_error(TokenKind::Assignment, Some("expected '=' after identifier"))?;
    let value = parse_expr(parser)?;

    Ok(Expr::VariableDeclaration {
        span: Span {
            start,
            end: value.get_span().end.clone(),
        },
        name,
        value: Box::new(value),
    })
}

/// Parses `{ statement; ... }`.
///
/// Stray semicolons are skipped and the last statement may omit its `;`.
/// A block holding exactly one statement is returned as that statement.
pub fn parse_block(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance()?;
            continue;
        }

        statements.push(parse_stmt(parser)?);

        match parser.current_token_kind() {
            TokenKind::Semicolon => {
                parser.advance()?;
            }
            TokenKind::CloseCurly => {}
            _ => return Err(parser.unexpected("expected ';' at the end of statement")),
        }
    }

    parser.expect_error(TokenKind::CloseCurly, Some("expected '}' at the end of block"))?;

    if statements.len() == 1 {
        trace!("collapsing single statement block");
        return Ok(statements.remove(0));
    }

    Ok(Expr::Block {
        body: statements,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    })
}
