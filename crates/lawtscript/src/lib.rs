// SPDX-License-Identifier: LGPL-3.0-or-later

pub use lawtscript_core::*;
pub use {lawtscript_core as core, lawtscript_parse as parse, lawtscript_stdlib as stdlib};

mod interpreter;
pub use interpreter::*;

pub mod prolog {
    pub use lawtscript_core::prolog::*;
    pub use lawtscript_stdlib::prolog::*;

    pub use super::interpreter::Interpreter;
}
