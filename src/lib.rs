#![allow(clippy::module_inception)]

use std::{io::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod driver;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within the
/// line. An offset at or past the end of `source` points just after the last
/// line. `None` only for empty source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        let line_end = line.trim_end_matches(&['\r', '\n'][..]).len();
        last_line = Some((line_number, line.to_string(), line_end));

        start = end;
        line_number += 1;
    }

    last_line
}

pub fn display_error<W: Write>(output: &mut W, error: &Error, source: &str) -> std::io::Result<()> {
    /*
        Error: Name (tip)
        -> program.lang
           |
        20 | int a = $;
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        writeln!(output, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(output, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }

    let position = error.get_position();
    writeln!(output, "-> {}", position.1)?;

    let (line, line_text, line_pos) = match get_line_at_position(source, position.0) {
        Some(found) => found,
        None => return Ok(()),
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    writeln!(output, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(output, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    writeln!(output, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches(&[' ', '\t'][..]);
    let start = string.len() - trimmed.len();

    (String::from(trimmed), start)
}
