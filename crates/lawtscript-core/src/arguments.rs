// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{FloatValue, IntegerValue, Value};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("argument {index} was requested, but only {len} were given")]
    OutOfRange { index: usize, len: usize },
}

/// Typed access to the resolved arguments of an invocation.
///
/// Builtins do not check how many arguments they were given; asking for one
/// past the end fails with [`ArgumentError::OutOfRange`], and any extra
/// arguments are simply never looked at.
pub trait ArgumentSlice {
    fn value(&self, index: usize) -> crate::Result<&Value>;

    fn string(&self, index: usize) -> crate::Result<&str> {
        self.value(index).map(Value::as_str)
    }

    fn integer(&self, index: usize) -> crate::Result<IntegerValue> {
        Ok(self.value(index)?.integer()?)
    }

    fn float(&self, index: usize) -> crate::Result<FloatValue> {
        Ok(self.value(index)?.float()?)
    }
}

impl ArgumentSlice for [Value] {
    fn value(&self, index: usize) -> crate::Result<&Value> {
        match self.get(index) {
            Some(value) => Ok(value),
            None => Err(ArgumentError::OutOfRange { index, len: self.len() }.into()),
        }
    }
}
