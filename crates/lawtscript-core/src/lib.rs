// SPDX-License-Identifier: LGPL-3.0-or-later

mod arguments;
mod context;
mod diagnostics;
mod error;
mod loader;
mod value;
mod variable;

pub use arguments::*;
pub use context::*;
pub use diagnostics::*;
pub use error::*;
pub use loader::*;
pub use value::*;
pub use variable::*;

pub use lawtscript_parse::{NumeralRule, ParseOptions};

pub mod prolog {
    pub use super::{
        arguments::ArgumentSlice,
        context::{Context, ExecuteResult},
        loader::{Argument, Invocation, Program},
        value::{FloatValue, IntegerValue, Value},
        NumeralRule,
        ParseOptions,
    };
}
