//! Error types for highlighter construction.
//!
//! Tokenizing a line never fails; the only fallible step is compiling the
//! pattern table when a [`crate::Highlighter`] is built.

use thiserror::Error;

use crate::token::TokenKind;

/// Errors from building the highlighting pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HighlightError {
    /// A pattern's regular expression failed to compile.
    #[error("failed to compile {kind} pattern: {message}")]
    PatternCompile {
        /// The classification the pattern was meant to produce.
        kind: TokenKind,
        /// Description of the compilation failure.
        message: String,
    },
}

impl HighlightError {
    /// Creates a pattern compilation error.
    #[must_use]
    pub fn pattern_compile(kind: TokenKind, message: impl Into<String>) -> Self {
        Self::PatternCompile {
            kind,
            message: message.into(),
        }
    }
}
