//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - `#` comments and whitespace handling
//!
//! The parser only sees the [`stream::TokenStream`] trait, so it can be fed
//! by the lexer or by a prepared list of tokens.

pub mod lexer;
pub mod stream;
pub mod tokens;
