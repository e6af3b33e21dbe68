// SPDX-License-Identifier: LGPL-3.0-or-later

use std::num::{ParseFloatError, ParseIntError};

/// The integer type handed to builtins.
pub type IntegerValue = i64;

/// The floating-point type handed to builtins.
pub type FloatValue = f64;

/// Text substituted for a variable that has never been assigned.
pub const NIL: &str = "nil";

/// A script value.
///
/// Values are always stored as the text they were written with; the
/// distinction between strings and numbers only matters once a builtin
/// coerces a value through [`Value::integer`] or [`Value::float`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    String(String),
    Numeral(String),
}

impl Value {
    pub fn nil() -> Self {
        Self::String(NIL.to_owned())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Value::String(text) => text,
            Value::Numeral(text) => text,
        }
    }

    pub fn is_numeral(&self) -> bool {
        matches!(self, Value::Numeral(_))
    }

    pub fn integer(&self) -> Result<IntegerValue, NumericError> {
        let text = self.as_str();
        text.parse().map_err(|source| NumericError::MalformedInteger { text: text.to_owned(), source })
    }

    pub fn float(&self) -> Result<FloatValue, NumericError> {
        let text = self.as_str();
        text.parse().map_err(|source| NumericError::MalformedFloat { text: text.to_owned(), source })
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<IntegerValue> for Value {
    fn from(value: IntegerValue) -> Self {
        Self::Numeral(value.to_string())
    }
}

impl From<FloatValue> for Value {
    fn from(value: FloatValue) -> Self {
        Self::Numeral(value.to_string())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("'{text}' is not a valid integer")]
    MalformedInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("'{text}' is not a valid number")]
    MalformedFloat {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}
