// SPDX-License-Identifier: LGPL-3.0-or-later

use std::ops::Range;
#[cfg(feature = "file-loading")]
use std::path::Path;
use std::path::PathBuf;

use lawtscript_parse::{AssignExpression, CallExpression, Diagnostic, ParseOptions, Statement, ValueExpression};

use crate::{Context, RuntimeDiagnostic, RuntimeDiagnosticKind, Value};

/// A single argument of an [`Invocation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Literal(Value),
    /// Resolved against the variable table when the invocation executes.
    Variable(String),
}

impl From<ValueExpression> for Argument {
    fn from(value: ValueExpression) -> Self {
        match value {
            ValueExpression::String(text) => Self::Literal(Value::String(text)),
            ValueExpression::Numeral(text) => Self::Literal(Value::Numeral(text)),
            ValueExpression::Variable(name) => Self::Variable(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub location: Range<usize>,
}

impl Invocation {
    fn from_call(call: CallExpression, location: Range<usize>) -> Self {
        Self {
            name: call.name,
            arguments: call.arguments.into_iter().map(Argument::from).collect(),
            location,
        }
    }
}

/// The calls of a loaded script, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    invocations: Vec<Invocation>,
    warnings: Vec<Diagnostic>,
}

impl Program {
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Non-fatal problems found while parsing the source.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

struct Loader<'ctx, S> {
    context: &'ctx mut Context<S>,
}

impl<'ctx, S> Loader<'ctx, S> {
    fn new(context: &'ctx mut Context<S>) -> Self {
        Self { context }
    }

    fn load_statements(&mut self, statements: impl IntoIterator<Item = Statement>) -> Vec<Invocation> {
        let mut invocations = Vec::new();

        for statement in statements {
            if let Some(assignment) = statement.assignment {
                self.assign(assignment, &statement.location);
            }

            if let Some(call) = statement.call {
                log::trace!("Queued call to '{}' at {:?}", call.name, statement.location);
                invocations.push(Invocation::from_call(call, statement.location));
            }
        }

        invocations
    }

    fn assign(&mut self, assignment: AssignExpression, location: &Range<usize>) {
        // Copies the current value; later assignments to the source do not carry over
        let value = match assignment.value {
            ValueExpression::Variable(source) => match self.context.get_variable(&source) {
                Some(value) => value.clone(),
                None => {
                    let kind = RuntimeDiagnosticKind::UnknownVariable(source);
                    self.context.report(RuntimeDiagnostic::new(kind, location.clone()));
                    Value::nil()
                },
            },
            ValueExpression::String(text) => Value::String(text),
            ValueExpression::Numeral(text) => Value::Numeral(text),
        };

        log::trace!("Assigned {} = {value:?}", assignment.name);
        self.context.set_variable(assignment.name, value);
    }

    fn load_text(&mut self, options: &ParseOptions, text: &str) -> Program {
        let output = lawtscript_parse::parse_text(text, options);
        let invocations = self.load_statements(output.statements);

        log::debug!("Loaded {} invocations", invocations.len());
        Program { invocations, warnings: output.diagnostics }
    }

    #[cfg(feature = "file-loading")]
    fn load_path(&mut self, options: &ParseOptions, path: &Path) -> Result<Program, LoadError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| LoadError::Unreadable { path: path.to_owned(), source })?;
        Ok(self.load_text(options, &text))
    }
}

/// Parses `text` and applies its assignments to the context's variables.
pub fn load_text<S>(context: &mut Context<S>, options: &ParseOptions, text: &str) -> Program {
    Loader::new(context).load_text(options, text)
}

#[cfg(feature = "file-loading")]
pub fn load_path<S>(
    context: &mut Context<S>,
    options: &ParseOptions,
    path: impl AsRef<Path>,
) -> Result<Program, LoadError> {
    Loader::new(context).load_path(options, path.as_ref())
}
