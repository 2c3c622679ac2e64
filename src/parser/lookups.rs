use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence. Higher binds tighter; equal precedence associates
/// left. Equality sits below the relational operators, so `a < b == c` groups
/// as `(a < b) == c` and `a == b < c` as `a == (b < c)`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    LogicalOr = 1,
    LogicalAnd = 3,
    Equality = 5,
    Additive = 10,
    Relational = 15,
    Multiplicative = 20,
}

impl BindingPower {
    pub fn value(self) -> i32 {
        self as i32
    }
}

/// Precedence reported for tokens that are not binary operators.
pub const NO_PRECEDENCE: i32 = -1;

pub type StmtHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.operator(TokenKind::Or, BindingPower::LogicalOr);
    parser.operator(TokenKind::And, BindingPower::LogicalAnd);

    // Equality and relational
    parser.operator(TokenKind::Equals, BindingPower::Equality);
    parser.operator(TokenKind::NotEquals, BindingPower::Equality);
    parser.operator(TokenKind::Less, BindingPower::Relational);
    parser.operator(TokenKind::LessEquals, BindingPower::Relational);
    parser.operator(TokenKind::Greater, BindingPower::Relational);
    parser.operator(TokenKind::GreaterEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.operator(TokenKind::Plus, BindingPower::Additive);
    parser.operator(TokenKind::Dash, BindingPower::Additive);
    parser.operator(TokenKind::Star, BindingPower::Multiplicative);
    parser.operator(TokenKind::Slash, BindingPower::Multiplicative);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_number_expr);
    parser.nud(TokenKind::String, parse_string_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Keyword expressions
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::While, parse_while_expr);
    parser.nud(TokenKind::Print, parse_print_expr);
    parser.nud(TokenKind::Endl, parse_endl_expr);
    parser.nud(TokenKind::Read, parse_read_expr);

    // Statements
    parser.stmt(TokenKind::Int, parse_int_decl_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
