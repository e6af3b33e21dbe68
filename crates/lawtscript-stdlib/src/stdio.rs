// SPDX-License-Identifier: LGPL-3.0-or-later

use lawtscript_core::prolog::*;

use crate::HostEnvironment;

pub fn register_funcs<S: HostEnvironment + 'static>(context: &mut Context<S>) {
    context.register_func("print", self::print);
    context.register_func("printErr", self::print_err);
}

pub fn print<S: HostEnvironment>(context: &mut Context<S>, args: &[Value]) -> ExecuteResult {
    let message = args.string(0)?;
    context.state.print(message)?;
    Ok(())
}

/// Writes to the error stream. This does not stop the program.
pub fn print_err<S: HostEnvironment>(context: &mut Context<S>, args: &[Value]) -> ExecuteResult {
    let message = args.string(0)?;
    context.state.print_err(message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HostCall, RecordingHost};

    #[test]
    fn print() -> lawtscript_core::Result {
        let mut context = Context::new(RecordingHost::capturing());

        super::print(&mut context, &[Value::from("hello"), Value::from("ignored")])?;
        super::print(&mut context, &[Value::Numeral("5".to_owned())])?;
        super::print_err(&mut context, &[Value::from("oops")])?;

        assert_eq!(context.state.output(), vec!["hello", "5"]);
        assert_eq!(context.state.error_output(), vec!["oops"]);
        assert_eq!(context.state.calls().last(), Some(&HostCall::PrintErr("oops".to_owned())));

        Ok(())
    }

    #[test]
    fn print_requires_message() {
        let mut context = Context::new(RecordingHost::capturing());
        assert!(super::print(&mut context, &[]).is_err());
        assert!(context.state.calls().is_empty());
    }
}
