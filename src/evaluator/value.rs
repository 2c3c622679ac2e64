use std::fmt::Display;

use crate::ast::display::format_number;

/// Result of evaluating a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    /// Produced by a string literal, whose text has already been written out.
    Empty,
}

impl Value {
    /// Zero and `Empty` are false, every other number is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(number) => *number != 0.0,
            Value::Empty => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Empty => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Empty => "string",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Number(if value { 1.0 } else { 0.0 })
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", format_number(*number)),
            Value::Empty => Ok(()),
        }
    }
}
