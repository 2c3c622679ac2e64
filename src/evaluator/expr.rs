use std::io::{BufRead, Write};

use crate::{
    ast::{ast::Expr, operators::BinaryOperator},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{evaluator::Evaluator, value::Value};

/// Writes the literal's text straight away; the literal itself has no value.
pub fn evaluate_string<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    text: &str,
    position: &Position,
) -> Result<Value, Error> {
    evaluator.write_output(text, position)?;
    Ok(Value::Empty)
}

pub fn evaluate_variable<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    name: &str,
    position: &Position,
) -> Result<Value, Error> {
    evaluator
        .get_environment()
        .get_scalar(name, position)
        .map(Value::Number)
}

/// Checks that `name` is an array before its index is evaluated.
pub fn evaluate_array_access<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    name: &str,
    index: &Expr,
    position: &Position,
) -> Result<Value, Error> {
    evaluator.get_environment().get_array(name, position)?;

    // The index may redeclare the array, so look it up again afterwards.
    let index_value = evaluator.evaluate(index)?;
    let values = evaluator.get_environment().get_array(name, position)?;
    let slot = resolve_index(name, index_value, values.len(), index)?;

    Ok(Value::Number(values[slot]))
}

/// Both operands are always evaluated, left first.
pub fn evaluate_binary<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    operator: BinaryOperator,
    left: &Expr,
    right: &Expr,
) -> Result<Value, Error> {
    let lhs = evaluator.evaluate(left)?;
    let rhs = evaluator.evaluate(right)?;

    match operator {
        BinaryOperator::And => return Ok(if lhs.is_truthy() { rhs } else { lhs }),
        BinaryOperator::Or => return Ok(if lhs.is_truthy() { lhs } else { rhs }),
        _ => {}
    }

    let l = expect_number(lhs, left)?;
    let r = expect_number(rhs, right)?;

    let value = match operator {
        BinaryOperator::Add => Value::Number(l + r),
        BinaryOperator::Subtract => Value::Number(l - r),
        BinaryOperator::Multiply => Value::Number(l * r),
        BinaryOperator::Divide => {
            if r == 0.0 {
                return Err(Error::new(
                    ErrorImpl::DivisionByZero,
                    right.get_span().start.clone(),
                ));
            }
            Value::Number(l / r)
        }
        BinaryOperator::Equals => Value::from(l == r),
        BinaryOperator::NotEquals => Value::from(l != r),
        BinaryOperator::Less => Value::from(l < r),
        BinaryOperator::LessEquals => Value::from(l <= r),
        BinaryOperator::Greater => Value::from(l > r),
        BinaryOperator::GreaterEquals => Value::from(l >= r),
        BinaryOperator::And | BinaryOperator::Or => unreachable!(),
    };

    Ok(value)
}

/// The number inside `value`, or a type error pointing at `expr`.
pub fn expect_number(value: Value, expr: &Expr) -> Result<f64, Error> {
    value.as_number().ok_or_else(|| {
        Error::new(
            ErrorImpl::TypeMismatch {
                expected: String::from("number"),
                received: value.type_name().to_string(),
            },
            expr.get_span().start.clone(),
        )
    })
}

/// Truncates an index toward zero and checks it against `length`.
pub fn resolve_index(name: &str, index: Value, length: usize, index_expr: &Expr) -> Result<usize, Error> {
    let index = expect_number(index, index_expr)?.trunc();

    if !index.is_finite() || index < 0.0 || index >= length as f64 {
        return Err(Error::new(
            ErrorImpl::IndexOutOfBounds {
                array: name.to_string(),
                index: index as i64,
                length,
            },
            index_expr.get_span().start.clone(),
        ));
    }

    Ok(index as usize)
}
