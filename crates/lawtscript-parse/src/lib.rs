// SPDX-License-Identifier: LGPL-3.0-or-later

mod diagnostics;
mod lexer;
mod parser;

pub use diagnostics::*;
pub use lexer::*;
pub use parser::*;

#[cfg(feature = "reporting")]
pub use codespan_reporting as reporting;

pub mod prolog {
    pub use super::lexer::{RawStatement, Splitter};
    pub use super::parser::{NumeralRule, ParseOptions, Statement, ValueExpression};
}
