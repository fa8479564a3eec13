//! Line-oriented syntax highlighting for TypeScript code snippets.
//!
//! This crate provides the highlighting pipeline behind the `codelight`
//! snippet viewer:
//!
//! - **Tokenization** via [`Highlighter::tokenize`], which turns one line of
//!   source text into an ordered sequence of [`Span`]s
//! - **Code blocks** via [`CodeBlock`] and [`Highlighter::highlight_block`] for
//!   multi-line snippets with line numbering
//! - **Rendering** via [`render_html`], [`render_ansi`] and [`render_plain`],
//!   which apply [`DisplayOptions`] around the highlighted lines
//!
//! # Tokenization Model
//!
//! Each line is scanned independently by a fixed, ordered table of
//! [`Pattern`]s (comments, the three string forms, keywords, built-in type
//! names, numbers and call names). Every pattern contributes all of its
//! matches; the pooled matches are ordered by start offset (pattern priority
//! breaks ties) and kept greedily, so a match that starts inside an earlier
//! kept match is dropped regardless of its length.
//!
//! Concatenating the text of the returned spans always reproduces the input
//! line exactly. Empty lines produce no spans; renderers substitute a single
//! space so the line keeps its height.
//!
//! # Example
//!
//! ```
//! use codelight_syntax::{Highlighter, TokenKind};
//!
//! let highlighter = Highlighter::new()?;
//! let spans = highlighter.tokenize(r#"const s = "return";"#);
//!
//! assert_eq!(spans[0].kind(), Some(TokenKind::Keyword));
//! assert_eq!(spans[2].text(), r#""return""#);
//! # Ok::<(), codelight_syntax::HighlightError>(())
//! ```

mod block;
mod error;
mod pattern;
mod render;
mod style;
mod token;
mod tokenizer;

pub use block::{CodeBlock, HighlightedLine};
pub use error::HighlightError;
pub use pattern::{KEYWORDS, Pattern, TYPE_NAMES};
pub use render::{
    DisplayOptions, FontSize, FontSizeParseError, render_ansi, render_html, render_plain,
};
pub use token::{Span, TokenKind};
pub use tokenizer::{Candidate, Highlighter};
