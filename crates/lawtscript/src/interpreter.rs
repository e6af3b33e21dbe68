// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(feature = "file-loading")]
use std::path::Path;

use lawtscript_core::{Context, ExecuteResult, ExecutionError, LoadError, ParseOptions, Program};
use lawtscript_stdlib::HostEnvironment;

/// A loaded script, bound to the host it acts upon.
///
/// An interpreter whose source could not be read is not runnable; executing it
/// fails with [`ExecutionError::SourceUnavailable`] without touching the host.
pub struct Interpreter<H: HostEnvironment + 'static> {
    context: Context<H>,
    program: Program,
    load_error: Option<LoadError>,
}

impl<H: HostEnvironment + 'static> Interpreter<H> {
    fn make_context(host: H) -> Context<H> {
        let mut context = Context::new(host);
        lawtscript_stdlib::register_funcs(&mut context);
        context
    }

    pub fn from_text(host: H, options: &ParseOptions, text: &str) -> Self {
        let mut context = Self::make_context(host);
        let program = context.load_text(options, text);
        Self { context, program, load_error: None }
    }

    /// Loads the script at `path`.
    ///
    /// Read failures are logged and leave the interpreter non-runnable.
    #[cfg(feature = "file-loading")]
    pub fn from_path(host: H, options: &ParseOptions, path: impl AsRef<Path>) -> Self {
        let mut context = Self::make_context(host);
        match context.load_path(options, path) {
            Ok(program) => Self { context, program, load_error: None },
            Err(error) => {
                log::error!("{error}");
                Self { context, program: Program::default(), load_error: Some(error) }
            },
        }
    }

    pub fn is_runnable(&self) -> bool {
        self.load_error.is_none()
    }

    /// Runs every invocation of the program in order.
    ///
    /// May be called more than once; each call runs the program again against
    /// the current variable table.
    pub fn execute(&mut self) -> ExecuteResult {
        if let Some(error) = &self.load_error {
            return Err(ExecutionError::SourceUnavailable(error.to_string()).into());
        }

        self.context.execute_program(&self.program)
    }

    pub fn context(&self) -> &Context<H> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context<H> {
        &mut self.context
    }

    pub fn host(&self) -> &H {
        &self.context.state
    }

    pub fn into_host(self) -> H {
        self.context.state
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use lawtscript_stdlib::{HostCall, RecordingHost};

    use super::*;

    #[test]
    fn runnable() -> lawtscript_core::Result {
        let mut interpreter = Interpreter::from_text(RecordingHost::new(), &ParseOptions::default(), "");
        assert!(interpreter.is_runnable());
        assert!(interpreter.load_error().is_none());
        assert!(interpreter.program().is_empty());

        interpreter.execute()?;
        assert!(interpreter.host().calls().is_empty());

        Ok(())
    }

    #[test]
    fn re_execute() -> lawtscript_core::Result {
        let text = "circle(1, 2, 3);";
        let mut interpreter = Interpreter::from_text(RecordingHost::new(), &ParseOptions::default(), text);

        interpreter.execute()?;
        interpreter.execute()?;

        let expected = HostCall::CreateCircle { x: 1.0, y: 2.0, radius: 3.0 };
        assert_eq!(interpreter.into_host().into_calls(), vec![expected.clone(), expected]);

        Ok(())
    }

    #[cfg(feature = "file-loading")]
    #[test]
    fn unreadable() {
        let path = "definitely/not/a/real/script.ls";
        let mut interpreter = Interpreter::from_path(RecordingHost::new(), &ParseOptions::default(), path);
        assert!(!interpreter.is_runnable());
        assert!(matches!(interpreter.load_error(), Some(LoadError::Unreadable { .. })));

        let error = interpreter.execute().unwrap_err();
        assert!(matches!(
            error.kind(),
            lawtscript_core::ErrorKind::ExecutionError(ExecutionError::SourceUnavailable(_))
        ));
        assert!(interpreter.host().calls().is_empty());
    }
}
