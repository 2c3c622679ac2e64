use std::collections::VecDeque;

use crate::{errors::errors::Error, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// A source of tokens for the parser.
///
/// End of input is reported as a `TokenKind::EOF` token, never as an error,
/// and keeps being reported on every further call.
pub trait TokenStream {
    fn next_token(&mut self) -> Result<Token, Error>;
}

impl TokenStream for VecDeque<Token> {
    fn next_token(&mut self) -> Result<Token, Error> {
        match self.pop_front() {
            Some(token) => Ok(token),
            None => Ok(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: Position::null(),
                    end: Position::null()
                }
            )),
        }
    }
}
