//! Multi-line code blocks and their highlighted lines.

use serde::Serialize;

use crate::token::Span;

/// Rendered in place of an empty line so it keeps its height.
static EMPTY_LINE_PLACEHOLDER: [Span<'static>; 1] = [Span::plain(" ")];

/// A snippet split into lines for per-line highlighting.
///
/// Lines are split on `\n` only. A trailing newline produces a final empty
/// line and carriage returns stay part of the line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    lines: Vec<&'a str>,
}

impl<'a> CodeBlock<'a> {
    /// Splits `source` into lines.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.split('\n').collect(),
        }
    }

    /// Returns the lines in order.
    #[must_use]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Number of lines; never zero, since even an empty snippet has one line.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of decimal digits needed for the largest line number.
    #[must_use]
    pub fn line_number_width(&self) -> usize {
        self.line_count().to_string().len()
    }
}

/// One tokenized line of a [`CodeBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedLine<'a> {
    number: usize,
    spans: Vec<Span<'a>>,
}

impl<'a> HighlightedLine<'a> {
    /// Pairs a one-based line number with its spans.
    #[must_use]
    pub const fn new(number: usize, spans: Vec<Span<'a>>) -> Self {
        Self { number, spans }
    }

    /// One-based line number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Spans exactly as produced by the tokenizer.
    #[must_use]
    pub fn spans(&self) -> &[Span<'a>] {
        &self.spans
    }

    /// Spans to draw: a single space placeholder when the line is empty.
    #[must_use]
    pub fn display_spans(&self) -> &[Span<'a>] {
        if self.spans.is_empty() {
            &EMPTY_LINE_PLACEHOLDER
        } else {
            &self.spans
        }
    }

    /// Reassembles the original line text.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}
