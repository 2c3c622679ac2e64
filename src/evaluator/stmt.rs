use std::io::{BufRead, Write};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    evaluator::Evaluator,
    expr::{expect_number, resolve_index},
    value::Value,
};

pub fn evaluate_if<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    condition: &Expr,
    then_body: &Expr,
) -> Result<Value, Error> {
    if evaluator.evaluate(condition)?.is_truthy() {
        evaluator.evaluate(then_body)
    } else {
        Ok(Value::Number(0.0))
    }
}

/// Yields the result of the last pass through the body, 0.0 if there was none.
pub fn evaluate_while<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    condition: &Expr,
    body: &Expr,
) -> Result<Value, Error> {
    let mut last = Value::Number(0.0);

    while evaluator.evaluate(condition)?.is_truthy() {
        last = evaluator.evaluate(body)?;
    }

    Ok(last)
}

pub fn evaluate_block<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    body: &[Expr],
) -> Result<Value, Error> {
    let mut last = Value::Number(0.0);

    for statement in body {
        last = evaluator.evaluate(statement)?;
    }

    Ok(last)
}

pub fn evaluate_array_declaration<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    name: &str,
    size: usize,
    position: &Position,
) -> Result<Value, Error> {
    evaluator
        .get_environment_mut()
        .declare_array(name.to_string(), size, position)?;

    Ok(Value::Number(0.0))
}

pub fn evaluate_variable_declaration<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    name: &str,
    value: &Expr,
) -> Result<Value, Error> {
    let number = expect_number(evaluator.evaluate(value)?, value)?;

    evaluator
        .get_environment_mut()
        .declare_variable(name.to_string(), number);

    Ok(Value::Number(number))
}

/// Assigns to an existing scalar, or to an element of an existing array when
/// `index` is present. The value is evaluated first, then the target array is
/// checked, then the index.
pub fn evaluate_assignment<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    name: &str,
    index: Option<&Expr>,
    value: &Expr,
    position: &Position,
) -> Result<Value, Error> {
    let number = expect_number(evaluator.evaluate(value)?, value)?;

    match index {
        Some(index) => {
            evaluator.get_environment().get_array(name, position)?;

            let index_value = evaluator.evaluate(index)?;
            let values = evaluator
                .get_environment_mut()
                .get_array_mut(name, position)?;
            let slot = resolve_index(name, index_value, values.len(), index)?;

            values[slot] = number;
        }
        None => {
            *evaluator
                .get_environment_mut()
                .get_scalar_mut(name, position)? = number;
        }
    }

    Ok(Value::Number(number))
}

pub fn evaluate_print<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    value: &Expr,
    position: &Position,
) -> Result<Value, Error> {
    let value = evaluator.evaluate(value)?;
    evaluator.write_output(&value.to_string(), position)?;

    Ok(value)
}

pub fn evaluate_endl<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    position: &Position,
) -> Result<Value, Error> {
    evaluator.write_output("\n", position)?;

    Ok(Value::Number(0.0))
}

/// Reads one line into an existing scalar.
pub fn evaluate_input<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    name: &str,
    position: &Position,
) -> Result<Value, Error> {
    evaluator.get_environment().get_scalar(name, position)?;

    let line = evaluator.read_line(position)?.unwrap_or_default();
    let input = line.trim();

    let number = input.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::InputParseError {
                input: input.to_string(),
            },
            position.clone(),
        )
    })?;

    *evaluator
        .get_environment_mut()
        .get_scalar_mut(name, position)? = number;

    Ok(Value::Number(number))
}
