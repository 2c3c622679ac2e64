//! Runs a whole program one top-level statement at a time.
//!
//! Each statement is echoed in its textual form, then evaluated, before the
//! next one is parsed. The first error of any kind is reported and ends the
//! run.

use std::io::{BufRead, StdinLock, Stdout, Write};

use log::{error, info};

use crate::{
    ast::ast::Expr,
    display_error,
    errors::errors::Error,
    evaluator::evaluator::Evaluator,
    parser::parser::Parser,
};

pub struct Driver<R: BufRead, W: Write> {
    evaluator: Evaluator<R, W>,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Driver {
            evaluator: Evaluator::new(input, output),
        }
    }

    pub fn get_evaluator(&self) -> &Evaluator<R, W> {
        &self.evaluator
    }

    /// Parses and runs `source` until it is exhausted or the first error.
    ///
    /// The error is written to the output as a report before it is
    /// returned.
    pub fn run(&mut self, source: String, file: Option<String>) -> Result<(), Error> {
        let file_name = file.clone().unwrap_or_else(|| String::from("shell"));
        info!("running {}", file_name);

        let mut parser = match Parser::from_source(source.clone(), file) {
            Ok(parser) => parser,
            Err(error) => return Err(self.report(error, &source, None)),
        };

        let mut count = 0;
        loop {
            let statement = match parser.parse_statement() {
                Ok(Some(statement)) => statement,
                Ok(None) => break,
                Err(error) => return Err(self.report(error, &source, None)),
            };

            let echo = format!("{}\n", statement);
            if let Err(error) = self
                .evaluator
                .write_output(&echo, &statement.get_span().start)
            {
                return Err(self.report(error, &source, None));
            }

            if let Err(error) = self.evaluator.evaluate(&statement) {
                return Err(self.report(error, &source, Some(&statement)));
            }

            count += 1;
        }

        info!("finished {} after {} statements", file_name, count);
        Ok(())
    }

    /// Writes the error report, followed by the failing statement when the
    /// error came from evaluating it.
    fn report(&mut self, error: Error, source: &str, statement: Option<&Expr>) -> Error {
        let mut report = Vec::new();

        let written = display_error(&mut report, &error, source).and_then(|_| match statement {
            Some(statement) => writeln!(report, "AST: {}", statement),
            None => Ok(()),
        });

        let result = written.map_err(|write_error| write_error.to_string()).and_then(|_| {
            self.evaluator
                .write_output(&String::from_utf8_lossy(&report), error.get_position())
                .map_err(|write_error| write_error.to_string())
        });

        if let Err(message) = result {
            error!("failed to report {}: {}", error.get_error_name(), message);
        }

        error
    }
}

impl Driver<StdinLock<'static>, Stdout> {
    /// A driver reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Driver {
            evaluator: Evaluator::stdio(),
        }
    }
}
