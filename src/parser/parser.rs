//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser keeps exactly one
//! token of lookahead over a [`TokenStream`] and hands out one top-level
//! statement at a time, so the driver can run each statement before the next
//! one is even scanned.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for primary expressions
//! - Binding powers for operator precedence

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, stream::TokenStream, tokens::{Token, TokenKind}},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, NUDHandler, NUDLookup, StmtHandler,
        StmtLookup, NO_PRECEDENCE,
    },
    stmt::parse_stmt,
};

/// Deepest nesting of expressions and blocks the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Where tokens come from
    tokens: Box<dyn TokenStream>,
    /// The lookahead token
    current: Token,
    /// End of the most recently consumed token
    previous_end: Position,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for binary operator precedence
    binding_power_lookup: BPLookup,
    /// Current expression nesting depth
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `tokens`, pulling the first token
    /// as lookahead.
    pub fn new(mut tokens: Box<dyn TokenStream>) -> Result<Self, Error> {
        let current = tokens.next_token()?;

        let mut parser = Parser {
            previous_end: current.span.start.clone(),
            tokens,
            current,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Creates a parser that scans `source` lazily.
    pub fn from_source(source: String, file: Option<String>) -> Result<Self, Error> {
        Parser::new(Box::new(Lexer::new(source, file)))
    }

    /// Creates a parser over an already scanned list of tokens.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, Error> {
        Parser::new(Box::new(VecDeque::from(tokens)))
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.tokens.next_token()?;
        let previous = std::mem::replace(&mut self.current, next);
        self.previous_end = previous.span.end.clone();
        Ok(previous)
    }

    /// Expects a token of the specified kind, with optional custom message.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an
    /// error naming the token that was found instead.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        message: Option<&str>,
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            match message {
                Some(message) => Err(self.unexpected(message)),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: self.current.value.clone(),
                    },
                    self.get_position(),
                )),
            }
        } else {
            self.advance()
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an error for the current token with an explanation of what was
    /// expected in its place.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current.value.clone(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Precedence of the current token, or `NO_PRECEDENCE` when it is not a
    /// binary operator.
    pub fn current_precedence(&self) -> i32 {
        self.binding_power_lookup
            .get(&self.current.kind)
            .map(|bp| bp.value())
            .unwrap_or(NO_PRECEDENCE)
    }

    /// Registers a binary operator and its precedence.
    pub fn operator(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Enters one level of nesting, failing once `MAX_NESTING_DEPTH` is
    /// exceeded.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Returns the end of the last consumed token.
    pub fn get_previous_end(&self) -> Position {
        self.previous_end.clone()
    }

    /// Parses the next top-level statement.
    ///
    /// Stray semicolons are skipped. Returns `Ok(None)` at end of input. The
    /// terminating `;` is checked but left as lookahead, so nothing after the
    /// statement is scanned before the caller has run it.
    pub fn parse_statement(&mut self) -> Result<Option<Expr>, Error> {
        self.depth = 0;

        while self.current.kind == TokenKind::Semicolon {
            self.advance()?;
        }

        if !self.has_tokens() {
            return Ok(None);
        }

        let statement = parse_stmt(self)?;

        match self.current.kind {
            TokenKind::Semicolon | TokenKind::EOF => {}
            _ => return Err(self.unexpected("expected ';' at the end of statement")),
        }

        debug!("parsed {:?} statement: {}", statement.get_expr_type(), statement);
        Ok(Some(statement))
    }
}

/// Parses a whole program into its top-level statements.
///
/// This is the entry point for callers that want the complete tree up front;
/// the driver uses [`Parser::parse_statement`] directly instead.
pub fn parse(source: String, file: Option<String>) -> Result<Vec<Expr>, Error> {
    let mut parser = Parser::from_source(source, file)?;
    let mut body = vec![];

    while let Some(statement) = parser.parse_statement()? {
        body.push(statement);
    }

    Ok(body)
}
