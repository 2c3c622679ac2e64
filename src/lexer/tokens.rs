use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("if", TokenKind::If);
        map.insert("while", TokenKind::While);
        map.insert("print", TokenKind::Print);
        map.insert("endl", TokenKind::Endl);
        map.insert("read", TokenKind::Read);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Int,
    If,
    While,
    Print,
    Endl,
    Read,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Whether the token carries a literal payload in `value`.
    pub fn has_payload(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::String | TokenKind::Identifier | TokenKind::Number
        )
    }

    pub fn debug(&self) -> String {
        if self.has_payload() {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
