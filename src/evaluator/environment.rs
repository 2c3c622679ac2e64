use std::collections::HashMap;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Variable {
    pub fn type_name(&self) -> &'static str {
        match self {
            Variable::Scalar(_) => "number",
            Variable::Array(_) => "array",
        }
    }
}

/// Every variable and array of a run, keyed by name.
///
/// Entries are only ever added or overwritten, never removed.
#[derive(Debug, Default)]
pub struct Environment {
    variable_lookup: HashMap<String, Variable>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    /// Creates or replaces a scalar, whatever `variable_name` held before.
    pub fn declare_variable(&mut self, variable_name: String, value: f64) {
        debug!("declared variable {} = {:?}", variable_name, value);
        self.variable_lookup
            .insert(variable_name, Variable::Scalar(value));
    }

    /// Creates or replaces a zero-filled array of `size` elements.
    ///
    /// Fails with `ArrayTooLarge` when the storage cannot be allocated; the
    /// previous entry under `array_name` is then left untouched.
    pub fn declare_array(
        &mut self,
        array_name: String,
        size: usize,
        position: &Position,
    ) -> Result<(), Error> {
        let mut values = Vec::new();
        if values.try_reserve_exact(size).is_err() {
            return Err(Error::new(
                ErrorImpl::ArrayTooLarge {
                    array: array_name,
                    size: size.to_string(),
                },
                position.clone(),
            ));
        }
        values.resize(size, 0.0);

        debug!("declared array {}[{}]", array_name, size);
        self.variable_lookup
            .insert(array_name, Variable::Array(values));
        Ok(())
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Variable> {
        self.variable_lookup.get(variable_name)
    }

    pub fn get_scalar(&self, variable_name: &str, position: &Position) -> Result<f64, Error> {
        match self.variable_lookup.get(variable_name) {
            Some(Variable::Scalar(value)) => Ok(*value),
            Some(other) => Err(type_mismatch("number", other, position)),
            None => Err(Error::new(
                ErrorImpl::UnknownVariable {
                    variable: variable_name.to_string(),
                },
                position.clone(),
            )),
        }
    }

    pub fn get_scalar_mut(
        &mut self,
        variable_name: &str,
        position: &Position,
    ) -> Result<&mut f64, Error> {
        match self.variable_lookup.get_mut(variable_name) {
            Some(Variable::Scalar(value)) => Ok(value),
            Some(other) => Err(type_mismatch("number", other, position)),
            None => Err(Error::new(
                ErrorImpl::UnknownVariable {
                    variable: variable_name.to_string(),
                },
                position.clone(),
            )),
        }
    }

    pub fn get_array(&self, array_name: &str, position: &Position) -> Result<&Vec<f64>, Error> {
        match self.variable_lookup.get(array_name) {
            Some(Variable::Array(values)) => Ok(values),
            Some(other) => Err(type_mismatch("array", other, position)),
            None => Err(Error::new(
                ErrorImpl::UnknownArray {
                    array: array_name.to_string(),
                },
                position.clone(),
            )),
        }
    }

    pub fn get_array_mut(
        &mut self,
        array_name: &str,
        position: &Position,
    ) -> Result<&mut Vec<f64>, Error> {
        match self.variable_lookup.get_mut(array_name) {
            Some(Variable::Array(values)) => Ok(values),
            Some(other) => Err(type_mismatch("array", other, position)),
            None => Err(Error::new(
                ErrorImpl::UnknownArray {
                    array: array_name.to_string(),
                },
                position.clone(),
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}

fn type_mismatch(expected: &str, received: &Variable, position: &Position) -> Error {
    Error::new(
        ErrorImpl::TypeMismatch {
            expected: expected.to_string(),
            received: received.type_name().to_string(),
        },
        position.clone(),
    )
}
