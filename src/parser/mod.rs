//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, blocks, control flow)
//! - Expression parsing by precedence climbing over a fixed precedence table
//! - Primary expressions through NUD (null denotation) handlers
//!
//! Parsing stops at the first structural error; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
