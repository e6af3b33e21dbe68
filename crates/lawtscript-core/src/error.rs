// SPDX-License-Identifier: LGPL-3.0-or-later

use std::backtrace::Backtrace;

use crate::{ArgumentError, ExecutionError, LoadError, NumericError};

pub type Result<T = ()> = std::result::Result<T, self::Error>;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    #[error("{0}")]
    ExecutionError(#[from] ExecutionError),

    #[error("{0}")]
    NumericError(#[from] NumericError),

    #[error("{0}")]
    ArgumentError(#[from] ArgumentError),

    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    LoadError(#[from] LoadError),
}

/// Data is separated out and boxed to keep the size of [`Error`] down,
/// and consequently the size of [`Result`].
#[derive(Debug)]
struct ErrorData {
    kind: ErrorKind,
    location: Backtrace,
}

pub struct Error {
    data: Box<ErrorData>,
}

impl self::Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            data: Box::new(ErrorData { kind, location: Backtrace::capture() }),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.data.kind
    }

    pub fn location(&self) -> &Backtrace {
        &self.data.location
    }
}

impl std::error::Error for self::Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.data.kind)
    }
}

impl std::fmt::Debug for self::Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Skip straight to displaying `data` for simplicity
        std::fmt::Debug::fmt(&self.data, f)
    }
}

impl std::fmt::Display for self::Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.data.kind, f)
    }
}

impl<E: Into<ErrorKind>> From<E> for self::Error {
    fn from(value: E) -> Self {
        Self::new(value.into())
    }
}

/// Returns early from a builtin with an [`ExecutionError::Failure`].
#[macro_export]
macro_rules! lawt_fail {
    ($($arg:tt)+) => {
        return Err(
            $crate::ExecutionError::Failure(format!($($arg)+)).into()
        )
    };
}
