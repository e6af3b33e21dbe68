// SPDX-License-Identifier: LGPL-3.0-or-later

use std::collections::HashMap;
use std::ops::Range;
#[cfg(feature = "file-loading")]
use std::path::Path;
use std::rc::Rc;

use lawtscript_parse::ParseOptions;

#[cfg(feature = "file-loading")]
use crate::LoadError;
use crate::{Argument, Invocation, Program, RuntimeDiagnostic, RuntimeDiagnosticKind, Value, VariableTable};

/// The result of a script execution.
pub type ExecuteResult = crate::Result;

/// A function which is callable from script.
#[allow(clippy::type_complexity)]
pub struct HandleFn<State>(Rc<dyn Fn(&mut Context<State>, &[Value]) -> ExecuteResult>);

impl<State> HandleFn<State> {
    pub fn new(f: impl Fn(&mut Context<State>, &[Value]) -> ExecuteResult + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, context: &mut Context<State>, args: &[Value]) -> ExecuteResult {
        self.0(context, args)
    }
}

// manual impl, derive would require `State: Clone`
impl<State> Clone for HandleFn<State> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<State> std::fmt::Debug for HandleFn<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HandleFn").finish_non_exhaustive()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ExecutionError {
    #[error("Program can't be executed: {0}")]
    SourceUnavailable(String),

    #[error("{0}")]
    Failure(String),
}

pub struct Context<State> {
    pub state: State,

    variables: VariableTable,
    functions: HashMap<String, HandleFn<State>>,
    diagnostics: Vec<RuntimeDiagnostic>,
}

impl<State> Context<State> {
    pub fn new(state: State) -> Self {
        Self {
            state,

            variables: VariableTable::new(),
            functions: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.set(name, value);
    }

    /// Registers a builtin under `name`.
    /// Returns `false` if another function was already registered with that name and got replaced.
    pub fn register_func(
        &mut self,
        name: impl Into<String>,
        func: impl Fn(&mut Context<State>, &[Value]) -> ExecuteResult + 'static,
    ) -> bool {
        self.functions.insert(name.into(), HandleFn::new(func)).is_none()
    }

    pub fn register_func_alias(&mut self, alias: impl Into<String>, actual: &str) -> bool {
        match self.functions.get(actual) {
            Some(func) => {
                let func = func.clone();
                self.functions.insert(alias.into(), func).is_none()
            },
            None => false,
        }
    }

    pub fn get_func(&self, name: &str) -> Option<HandleFn<State>> {
        self.functions.get(name).cloned()
    }

    pub fn has_func(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn report(&mut self, diagnostic: RuntimeDiagnostic) {
        log::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[RuntimeDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<RuntimeDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn load_text(&mut self, options: &ParseOptions, text: &str) -> Program {
        crate::load_text(self, options, text)
    }

    #[cfg(feature = "file-loading")]
    pub fn load_path(&mut self, options: &ParseOptions, path: impl AsRef<Path>) -> Result<Program, LoadError> {
        crate::load_path(self, options, path)
    }

    /// Produces the value an argument currently refers to.
    ///
    /// Unknown variables are reported and resolve to [`Value::nil`].
    pub fn resolve(&mut self, argument: &Argument, location: &Range<usize>) -> Value {
        match argument {
            Argument::Literal(value) => value.clone(),
            Argument::Variable(name) => match self.variables.get(name) {
                Some(value) => value.clone(),
                None => {
                    let kind = RuntimeDiagnosticKind::UnknownVariable(name.clone());
                    self.report(RuntimeDiagnostic::new(kind, location.clone()));
                    Value::nil()
                },
            },
        }
    }

    pub fn execute(&mut self, invocation: &Invocation) -> ExecuteResult {
        let args = invocation
            .arguments
            .iter()
            .map(|argument| self.resolve(argument, &invocation.location))
            .collect::<Vec<_>>();

        match self.get_func(&invocation.name) {
            Some(func) => {
                log::trace!("Calling '{}' with {args:?}", invocation.name);
                func.call(self, &args)
            },
            None => {
                let kind = RuntimeDiagnosticKind::UnknownFunction(invocation.name.clone());
                self.report(RuntimeDiagnostic::new(kind, invocation.location.clone()));
                Ok(())
            },
        }
    }

    /// Executes every invocation once, in order.
    /// The first error aborts the remainder of the program.
    pub fn execute_program(&mut self, program: &Program) -> ExecuteResult {
        log::debug!("Executing {} invocations", program.len());
        for invocation in program.invocations() {
            self.execute(invocation)?;
        }

        Ok(())
    }
}

impl<State: Default> Default for Context<State> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}
