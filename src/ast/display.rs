//! Textual form of the syntax tree.
//!
//! The driver echoes every top-level statement in this form before running
//! it. Control flow is written postfix (`cond body while`), everything else
//! reads close to the source.

use std::fmt::{Display, Formatter, Result};

use super::ast::Expr;

/// Writes a number the way `print` does: always with a fractional part.
pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Number { value, .. } => write!(f, "{}", format_number(*value)),
            Expr::String { value, .. } => write!(f, "{}", value),
            Expr::Variable { name, .. } => write!(f, "{}", name),
            Expr::Binary {
                operator,
                left,
                right,
                ..
            } => write!(f, "{} {} {}", left, operator, right),
            Expr::If {
                condition,
                then_body,
                ..
            } => write!(f, "{} {} if", condition, then_body),
            Expr::Block { body, .. } => {
                let statements = body
                    .iter()
                    .map(|statement| statement.to_string())
                    .collect::<Vec<_>>();

                if statements.is_empty() {
                    write!(f, "{{ }}")
                } else {
                    write!(f, "{{ {} }}", statements.join(" ; "))
                }
            }
            Expr::ArrayAccess { name, index, .. } => write!(f, "{}[{}]", name, index),
            Expr::ArrayDeclaration { name, size, .. } => write!(f, "{}[{}] array", name, size),
            Expr::VariableAssignment {
                name,
                index: Some(index),
                value,
                ..
            } => write!(f, "{}[{}] = {}", name, index, value),
            Expr::VariableAssignment {
                name,
                index: None,
                value,
                ..
            } => write!(f, "{} = {}", name, value),
            Expr::VariableDeclaration { name, value, .. } => write!(f, "int {} = {}", name, value),
            Expr::While {
                condition, body, ..
            } => write!(f, "{} {} while", condition, body),
            Expr::Print { value, .. } => write!(f, "{} print", value),
            Expr::Endl { .. } => write!(f, "endl"),
            Expr::Input { name, .. } => write!(f, "{} input", name),
        }
    }
}
