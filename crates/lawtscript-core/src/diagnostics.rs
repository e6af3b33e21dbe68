// SPDX-License-Identifier: LGPL-3.0-or-later

use std::ops::Range;

#[cfg(feature = "reporting")]
use codespan_reporting::diagnostic::{Diagnostic as CodespanDiagnostic, Label};

/// A recoverable problem found while loading or executing a script.
///
/// These never stop a run; the affected reference resolves to
/// [`NIL`](crate::NIL), and an unknown function is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeDiagnostic {
    kind: RuntimeDiagnosticKind,
    location: Range<usize>,
}

impl RuntimeDiagnostic {
    pub fn new(kind: RuntimeDiagnosticKind, location: Range<usize>) -> Self {
        Self { kind, location }
    }

    pub fn kind(&self) -> &RuntimeDiagnosticKind {
        &self.kind
    }

    pub fn location(&self) -> Range<usize> {
        self.location.clone()
    }
}

impl std::fmt::Display for RuntimeDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeDiagnosticKind {
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

#[cfg(feature = "reporting")]
impl RuntimeDiagnostic {
    pub fn to_codespan<FileId>(&self, file_id: FileId) -> CodespanDiagnostic<FileId> {
        let location = self.location.clone();
        let description = self.to_string();

        match &self.kind {
            RuntimeDiagnosticKind::UnknownVariable(_) => CodespanDiagnostic::error()
                .with_code("LWT0100")
                .with_message(description)
                .with_notes(vec!["the reference was replaced with nil".to_owned()])
                .with_labels(vec![Label::primary(file_id, location)]),
            RuntimeDiagnosticKind::UnknownFunction(_) => CodespanDiagnostic::error()
                .with_code("LWT0101")
                .with_message(description)
                .with_notes(vec!["the call was skipped".to_owned()])
                .with_labels(vec![Label::primary(file_id, location)]),
        }
    }
}
