// SPDX-License-Identifier: LGPL-3.0-or-later

use std::borrow::Cow;

use logos::{Logos, Span};

type SpannedIter<'src> = logos::SpannedIter<'src, TokenKind>;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    #[token(";")]
    Separator,
    // A comment never crosses the separator which ends its statement.
    #[regex(r#"//[^\n;]*"#)]
    Comment,
    #[regex(r#"[^;/]+"#)]
    #[token("/")]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub location: Span,
}

pub fn lex_text(text: &str) -> impl Iterator<Item = Token<'_>> {
    TokenKind::lexer(text).spanned().map(|(kind, location)| Token {
        // Every input character is covered by some token, but stay total regardless
        kind: kind.unwrap_or(TokenKind::Text),
        text: &text[location.clone()],
        location,
    })
}

/// A single statement as written in the source, with line comments removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatement<'src> {
    pub text: Cow<'src, str>,
    /// Location of the whole segment, comments included.
    pub location: Span,
}

impl RawStatement<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Splits source text into statements on every `;`, skipping blank ones.
pub struct Splitter<'src> {
    text: &'src str,
    tokens: SpannedIter<'src>,
    segment_start: usize,
    finished: bool,
}

impl<'src> Splitter<'src> {
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            tokens: TokenKind::lexer(text).spanned(),
            segment_start: 0,
            finished: false,
        }
    }

    fn next_segment(&mut self) -> RawStatement<'src> {
        let start = self.segment_start;
        let mut end = self.text.len();
        let mut comments = Vec::new();

        loop {
            match self.tokens.next() {
                Some((Ok(TokenKind::Separator), location)) => {
                    end = location.start;
                    self.segment_start = location.end;
                    break;
                },
                Some((Ok(TokenKind::Comment), location)) => comments.push(location),
                Some((_, _)) => continue,
                None => {
                    self.finished = true;
                    break;
                },
            }
        }

        let location = start..end;
        let text = remove_spans(self.text, location.clone(), &comments);
        RawStatement { text, location }
    }
}

impl<'src> Iterator for Splitter<'src> {
    type Item = RawStatement<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let statement = self.next_segment();
            if !statement.is_blank() {
                log::trace!("Split statement {:?} at {:?}", statement.text, statement.location);
                return Some(statement);
            }
        }

        None
    }
}

pub fn split_statements(text: &str) -> Splitter<'_> {
    Splitter::new(text)
}

/// Removes all line comments from a single statement.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    let comments = lex_text(text)
        .filter(|token| token.kind == TokenKind::Comment)
        .map(|token| token.location)
        .collect::<Vec<_>>();
    remove_spans(text, 0..text.len(), &comments)
}

fn remove_spans<'src>(text: &'src str, range: Span, removed: &[Span]) -> Cow<'src, str> {
    if removed.is_empty() {
        return Cow::Borrowed(&text[range]);
    }

    let mut result = String::with_capacity(range.len());
    let mut cursor = range.start;
    for span in removed {
        result.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    result.push_str(&text[cursor..range.end]);

    Cow::Owned(result)
}
