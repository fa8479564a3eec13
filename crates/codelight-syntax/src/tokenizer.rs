//! The line tokenization pipeline.
//!
//! Tokenizing a line runs four stages, each a plain function over the
//! previous stage's output:
//!
//! 1. [`collect_candidates`] pools every match of every pattern, in pattern
//!    priority order.
//! 2. [`order_candidates`] stable-sorts the pool by start offset, so ties keep
//!    pattern priority.
//! 3. [`select_non_overlapping`] keeps a candidate only if it starts at or
//!    after the end of the last kept one.
//! 4. [`assemble_spans`] fills the gaps between kept candidates with untagged
//!    text.

use crate::block::{CodeBlock, HighlightedLine};
use crate::error::HighlightError;
use crate::pattern::{Pattern, builtin_patterns};
use crate::token::{Span, TokenKind};

/// A single pattern match within a line, before overlap resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    start: usize,
    text: &'a str,
    kind: TokenKind,
}

impl<'a> Candidate<'a> {
    pub(crate) const fn new(start: usize, text: &'a str, kind: TokenKind) -> Self {
        Self { start, text, kind }
    }

    /// Byte offset of the first matched character.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last matched character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.text.len())
    }

    /// The matched text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The classification of the pattern that produced this match.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// Tokenizes lines of TypeScript source into classified spans.
///
/// The highlighter owns only its compiled pattern table, so a single instance
/// can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<Pattern>,
}

impl Highlighter {
    /// Builds a highlighter with the built-in pattern table.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::PatternCompile`] if a built-in pattern fails
    /// to compile.
    pub fn new() -> Result<Self, HighlightError> {
        Ok(Self {
            patterns: builtin_patterns()?,
        })
    }

    /// Returns the pattern table in scan priority order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Splits one line into spans whose concatenation is the line itself.
    ///
    /// An empty line yields no spans.
    #[must_use]
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<Span<'a>> {
        let candidates = order_candidates(collect_candidates(&self.patterns, line));
        assemble_spans(line, &select_non_overlapping(candidates))
    }

    /// Returns every raw match in `line`, ordered by start offset.
    ///
    /// Overlapping candidates are kept; this is the pool that
    /// [`Highlighter::tokenize`] resolves.
    #[must_use]
    pub fn candidates<'a>(&self, line: &'a str) -> Vec<Candidate<'a>> {
        order_candidates(collect_candidates(&self.patterns, line))
    }

    /// Tokenizes every line of a code block.
    #[must_use]
    pub fn highlight_block<'a>(&self, block: &CodeBlock<'a>) -> Vec<HighlightedLine<'a>> {
        block
            .lines()
            .iter()
            .copied()
            .zip(1..)
            .map(|(line, number)| HighlightedLine::new(number, self.tokenize(line)))
            .collect()
    }
}

pub(crate) fn collect_candidates<'a>(patterns: &[Pattern], line: &'a str) -> Vec<Candidate<'a>> {
    patterns
        .iter()
        .flat_map(|pattern| pattern.find_all(line))
        .collect()
}

pub(crate) fn order_candidates(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    // `sort_by_key` is stable, which preserves pattern priority on ties.
    candidates.sort_by_key(Candidate::start);
    candidates
}

pub(crate) fn select_non_overlapping(candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    let mut last_end = 0;
    candidates
        .into_iter()
        .filter(|candidate| {
            if candidate.start() < last_end {
                return false;
            }
            last_end = candidate.end();
            true
        })
        .collect()
}

pub(crate) fn assemble_spans<'a>(line: &'a str, kept: &[Candidate<'a>]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(kept.len().saturating_mul(2).saturating_add(1));
    let mut cursor = 0;
    for candidate in kept {
        if candidate.start() > cursor
            && let Some(gap) = line.get(cursor..candidate.start())
        {
            spans.push(Span::plain(gap));
        }
        spans.push(Span::tagged(candidate.text(), candidate.kind()));
        cursor = candidate.end();
    }
    if let Some(rest) = line.get(cursor..).filter(|rest| !rest.is_empty()) {
        spans.push(Span::plain(rest));
    }
    spans
}
