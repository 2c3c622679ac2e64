use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnknownVariable { .. } => "UnknownVariable",
            ErrorImpl::UnknownArray { .. } => "UnknownArray",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::IndexOutOfBounds { .. } => "IndexOutOfBounds",
            ErrorImpl::ArrayTooLarge { .. } => "ArrayTooLarge",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::InputParseError { .. } => "InputParseError",
            ErrorImpl::IoError { .. } => "IoError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, does it contain more than one dot?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions and blocks may be nested at most {} levels deep",
                limit
            )),
            ErrorImpl::UnknownVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` not declared, declare it with `int {} = ...`",
                variable, variable
            )),
            ErrorImpl::UnknownArray { array } => ErrorTip::Suggestion(format!(
                "Array `{}` not declared, declare it with `int {}[size]`",
                array, array
            )),
            ErrorImpl::TypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {}, received {}",
                expected, received
            )),
            ErrorImpl::IndexOutOfBounds {
                array,
                index,
                length,
            } => ErrorTip::Suggestion(format!(
                "Index {} is outside of `{}`, which has length {}",
                index, array, length
            )),
            ErrorImpl::ArrayTooLarge { array, size } => ErrorTip::Suggestion(format!(
                "Array `{}` cannot hold {} elements",
                array, size
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::InputParseError { input } => {
                ErrorTip::Suggestion(format!("Could not read `{}` as a number", input))
            }
            ErrorImpl::IoError { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("unknown variable name: {variable:?}")]
    UnknownVariable { variable: String },
    #[error("unknown array name: {array:?}")]
    UnknownArray { array: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMismatch { expected: String, received: String },
    #[error("array index out of bounds: {array}[{index}] with length {length}")]
    IndexOutOfBounds {
        array: String,
        index: i64,
        length: usize,
    },
    #[error("array {array:?} is too large: {size} elements")]
    ArrayTooLarge { array: String, size: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("could not parse input as a number: {input:?}")]
    InputParseError { input: String },
    #[error("console i/o failed: {message}")]
    IoError { message: String },
}
