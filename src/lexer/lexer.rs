use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{stream::TokenStream, tokens::{Token, TokenKind, RESERVED_LOOKUP}};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

lazy_static! {
    // Anchored at the start of the remaining input; the first match wins, so
    // two-character operators come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[A-Za-zА-Яа-яЁё][A-Za-z0-9А-Яа-яЁё_]*").unwrap(), handler: symbol_handler},
        RegexPattern { regex: Regex::new("^[0-9.]+").unwrap(), handler: number_handler},
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler},
        RegexPattern { regex: Regex::new("^\"[^\"]*\"?").unwrap(), handler: string_handler},
        RegexPattern { regex: Regex::new("^#[^\\r\\n]*").unwrap(), handler: skip_handler},
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")},
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")},
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")},
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")},
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")},
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")},
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")},
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")},
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")},
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")},
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<")},
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")},
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")},
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||")},
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&")},
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")},
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")},
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")},
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")},
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")},
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*")},
    ];
}

/// Incremental scanner: tokens are produced on demand, one pattern match at a
/// time, so a bad character late in a file does not stop earlier statements.
pub struct Lexer {
    tokens: VecDeque<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: VecDeque::new(),
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!("scanned {}", token.debug());
        self.tokens.push_back(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes of input.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }

    fn scan(&mut self) -> Result<(), Error> {
        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(self.remainder()) {
                return (pattern.handler)(self, &pattern.regex);
            }
        }

        let token = self.at().map(String::from).unwrap_or_default();
        Err(Error::new(ErrorImpl::UnrecognisedToken { token }, self.position()))
    }
}

impl TokenStream for Lexer {
    fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }

            if self.at_eof() {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span_of(0)));
            }

            self.scan()?;
        }
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    if matched.parse::<f64>().is_err() {
        return Err(Error::new(ErrorImpl::NumberParseError { token: matched }, lexer.position()));
    }

    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    // No escape sequences; an unterminated literal runs to the end of input.
    let contents = matched[1..].strip_suffix('"').unwrap_or(&matched[1..]).to_string();

    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::String, contents, span));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(value.len());
    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, span));
    Ok(())
}

/// Scans the whole source, returning every token including the final `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
