//! The Evaluator and its dispatch over syntax tree nodes.
//!
//! An `Evaluator` owns the [`Environment`] and the console it reads from and
//! writes to. It is generic over both ends of the console so a run can be
//! driven from memory as easily as from the terminal.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    environment::Environment,
    expr::{evaluate_array_access, evaluate_binary, evaluate_string, evaluate_variable},
    stmt::{
        evaluate_array_declaration, evaluate_assignment, evaluate_block, evaluate_endl,
        evaluate_if, evaluate_input, evaluate_print, evaluate_variable_declaration,
        evaluate_while,
    },
    value::Value,
};

pub struct Evaluator<R: BufRead, W: Write> {
    environment: Environment,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Evaluator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Evaluator {
            environment: Environment::new(),
            input,
            output,
        }
    }

    /// Evaluates one node, recursing into its children.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, Error> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::String { value, span } => evaluate_string(self, value, &span.start),
            Expr::Variable { name, span } => evaluate_variable(self, name, &span.start),
            Expr::Binary {
                operator,
                left,
                right,
                ..
            } => evaluate_binary(self, *operator, left, right),
            Expr::If {
                condition,
                then_body,
                ..
            } => evaluate_if(self, condition, then_body),
            Expr::Block { body, .. } => evaluate_block(self, body),
            Expr::ArrayAccess { name, index, span } => {
                evaluate_array_access(self, name, index, &span.start)
            }
            Expr::ArrayDeclaration { name, size, span } => {
                evaluate_array_declaration(self, name, *size, &span.start)
            }
            Expr::VariableAssignment {
                name,
                index,
                value,
                span,
            } => evaluate_assignment(self, name, index.as_deref(), value, &span.start),
            Expr::VariableDeclaration { name, value, .. } => {
                evaluate_variable_declaration(self, name, value)
            }
            Expr::While {
                condition, body, ..
            } => evaluate_while(self, condition, body),
            Expr::Print { value, span } => evaluate_print(self, value, &span.start),
            Expr::Endl { span } => evaluate_endl(self, &span.start),
            Expr::Input { name, span } => evaluate_input(self, name, &span.start),
        }
    }

    pub fn get_environment(&self) -> &Environment {
        &self.environment
    }

    pub fn get_environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn get_output(&self) -> &W {
        &self.output
    }

    /// Writes `text` to the output and flushes it.
    pub fn write_output(&mut self, text: &str, position: &Position) -> Result<(), Error> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|error| io_error(error, position))
    }

    /// Reads one line of input, `None` once the input is exhausted.
    pub fn read_line(&mut self, position: &Position) -> Result<Option<String>, Error> {
        let mut line = String::new();

        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(error) => Err(io_error(error, position)),
        }
    }
}

impl Evaluator<StdinLock<'static>, Stdout> {
    /// An evaluator bound to the process console.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Evaluator::new(stdin.lock(), io::stdout())
    }
}

fn io_error(error: io::Error, position: &Position) -> Error {
    Error::new(
        ErrorImpl::IoError {
            message: error.to_string(),
        },
        position.clone(),
    )
}
