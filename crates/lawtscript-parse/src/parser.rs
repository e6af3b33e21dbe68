// SPDX-License-Identifier: LGPL-3.0-or-later

use lazy_regex::regex_is_match;
use logos::Span;

use crate::{Diagnostic, DiagnosticKind, RawStatement, Splitter};

/// How bare argument and assignment text is recognized as a numeral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumeralRule {
    /// The whole text must be an optionally negative decimal numeral,
    /// such as `5`, `-12` or `0.25`.
    #[default]
    Strict,
    /// Any text containing an ASCII digit is a numeral, so `x1` is one too.
    /// Matches how older scripts were interpreted.
    Legacy,
}

impl NumeralRule {
    pub fn is_numeral(self, text: &str) -> bool {
        match self {
            NumeralRule::Strict => regex_is_match!(r#"^-?[0-9]+(\.[0-9]+)?$"#, text),
            NumeralRule::Legacy => text.bytes().any(|b| b.is_ascii_digit()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub numerals: NumeralRule,
}

/// An argument or assigned value, as classified from its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExpression {
    String(String),
    Numeral(String),
    Variable(String),
}

impl std::fmt::Display for ValueExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueExpression::String(text) => write!(f, "\"{text}\""),
            ValueExpression::Numeral(text) => write!(f, "{text}"),
            ValueExpression::Variable(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub name: String,
    pub arguments: Vec<ValueExpression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignExpression {
    pub name: String,
    pub value: ValueExpression,
}

/// The structural facts found in one statement.
///
/// A statement may be a call, an assignment, both, or neither. When both are
/// present, the assignment is applied before the call is queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub assignment: Option<AssignExpression>,
    pub call: Option<CallExpression>,
    pub location: Span,
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.assignment.is_none() && self.call.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Statement>,
    pub diagnostics: Vec<Diagnostic>,
}

struct Parser<'opt> {
    options: &'opt ParseOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'opt> Parser<'opt> {
    fn new(options: &'opt ParseOptions) -> Self {
        Self { options, diagnostics: Vec::new() }
    }

    fn parse_statement(&mut self, statement: &RawStatement<'_>) -> Statement {
        let text = statement.text.as_ref();
        let location = statement.location.clone();

        let assignment = self.parse_assignment(text, &location);
        let call = text.find('(').map(|paren| self.parse_call(text, paren, &location));

        Statement { assignment, call, location }
    }

    fn parse_call(&mut self, text: &str, paren: usize, location: &Span) -> CallExpression {
        let name = text[..paren].trim_start().to_owned();

        let after_paren = &text[paren + 1..];
        let inner = match after_paren.rfind(')') {
            Some(close) => &after_paren[..close],
            None => {
                let kind = DiagnosticKind::UnclosedArgumentList { function: name.clone() };
                self.diagnostics.push(Diagnostic::new(kind, location.clone()));
                after_paren
            },
        };

        let arguments = self.parse_arguments(inner, location);
        CallExpression { name, arguments }
    }

    fn parse_arguments(&mut self, text: &str, location: &Span) -> Vec<ValueExpression> {
        // Commas inside string literals are not escaped and will split the literal
        text.split(',').map(|piece| self.parse_value(piece, location)).collect()
    }

    fn parse_assignment(&mut self, text: &str, location: &Span) -> Option<AssignExpression> {
        // Whitespace is removed before anything is split off, quoted text included
        let text = remove_whitespace(text);
        let equals = text.find('=')?;

        // An `=` inside the argument list does not make an assignment
        if text.find('(').is_some_and(|paren| paren < equals) {
            return None;
        }

        let name = text[..equals].to_owned();
        let value = self.parse_value(&text[equals + 1..], location);
        Some(AssignExpression { name, value })
    }

    fn parse_value(&mut self, text: &str, location: &Span) -> ValueExpression {
        if let Some(quote) = text.find('"') {
            let after_quote = &text[quote + 1..];
            let literal = match after_quote.find('"') {
                Some(close) => &after_quote[..close],
                None => {
                    self.diagnostics
                        .push(Diagnostic::new(DiagnosticKind::UnterminatedString, location.clone()));
                    after_quote
                },
            };
            return ValueExpression::String(literal.to_owned());
        }

        let text = remove_whitespace(text);
        if self.options.numerals.is_numeral(&text) {
            ValueExpression::Numeral(text)
        } else {
            ValueExpression::Variable(text)
        }
    }
}

fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn parse_text(text: &str, options: &ParseOptions) -> ParseOutput {
    parse_statements(Splitter::new(text), options)
}

pub fn parse_statements<'src>(
    statements: impl IntoIterator<Item = RawStatement<'src>>,
    options: &ParseOptions,
) -> ParseOutput {
    let mut parser = Parser::new(options);
    let statements = statements
        .into_iter()
        .map(|raw| parser.parse_statement(&raw))
        .filter(|statement| !statement.is_empty())
        .collect::<Vec<_>>();

    log::debug!(
        "Parsed {} statements with {} warnings",
        statements.len(),
        parser.diagnostics.len()
    );
    ParseOutput { statements, diagnostics: parser.diagnostics }
}

/// Classifies the text between a call's parentheses.
pub fn parse_arguments(text: &str, options: &ParseOptions) -> Vec<ValueExpression> {
    Parser::new(options).parse_arguments(text, &(0..text.len()))
}
