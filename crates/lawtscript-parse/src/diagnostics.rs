// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(feature = "reporting")]
use codespan_reporting::diagnostic::{Diagnostic as CodespanDiagnostic, Label};
use logos::Span;

/// A non-fatal problem found while parsing.
///
/// Parsing itself never fails; malformed statements still produce a best-effort
/// result, and these warnings describe what was assumed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct Diagnostic {
    #[source]
    kind: DiagnosticKind,
    location: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: Span) -> Self {
        Self { kind, location }
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn location(&self) -> Span {
        self.location.clone()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("argument list of '{function}' is never closed")]
    UnclosedArgumentList { function: String },

    #[error("string literal is never closed")]
    UnterminatedString,
}

#[cfg(feature = "reporting")]
impl Diagnostic {
    pub fn to_codespan<FileId>(&self, file_id: FileId) -> CodespanDiagnostic<FileId> {
        let location = self.location.clone();
        let description = self.to_string();

        match &self.kind {
            DiagnosticKind::UnclosedArgumentList { .. } => CodespanDiagnostic::warning()
                .with_code("LWT0001")
                .with_message(description)
                .with_notes(vec!["arguments were read up to the end of the statement".to_owned()])
                .with_labels(vec![Label::primary(file_id, location)]),
            DiagnosticKind::UnterminatedString => CodespanDiagnostic::warning()
                .with_code("LWT0002")
                .with_message(description)
                .with_notes(vec!["the string was read up to the end of its argument".to_owned()])
                .with_labels(vec![Label::primary(file_id, location)]),
        }
    }
}
