//! Classification tags and the spans produced by tokenization.

use std::fmt;

use serde::Serialize;

/// Lexical categories recognised by the highlighter.
///
/// Variants are declared in scan priority order; [`TokenKind::ALL`] lists
/// them in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A `//` line comment running to the end of the line.
    Comment,
    /// A double-quoted string literal.
    #[serde(rename = "string-double")]
    DoubleQuotedString,
    /// A single-quoted string literal.
    #[serde(rename = "string-single")]
    SingleQuotedString,
    /// A backtick template literal.
    TemplateString,
    /// A reserved word such as `const` or `return`.
    Keyword,
    /// A built-in type name such as `string` or `Promise`.
    TypeName,
    /// An integer or decimal literal.
    Number,
    /// An identifier directly followed by an opening parenthesis.
    CallName,
}

impl TokenKind {
    /// All kinds in scan priority order.
    pub const ALL: [Self; 8] = [
        Self::Comment,
        Self::DoubleQuotedString,
        Self::SingleQuotedString,
        Self::TemplateString,
        Self::Keyword,
        Self::TypeName,
        Self::Number,
        Self::CallName,
    ];

    /// Returns the kebab-case tag used in serialised output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::DoubleQuotedString => "string-double",
            Self::SingleQuotedString => "string-single",
            Self::TemplateString => "template-string",
            Self::Keyword => "keyword",
            Self::TypeName => "type-name",
            Self::Number => "number",
            Self::CallName => "call-name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous run of line text, optionally classified.
///
/// Spans borrow from the line they were produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    text: &'a str,
    kind: Option<TokenKind>,
}

impl<'a> Span<'a> {
    /// Creates an untagged span rendered as-is.
    #[must_use]
    pub const fn plain(text: &'a str) -> Self {
        Self { text, kind: None }
    }

    /// Creates a span tagged with a classification.
    #[must_use]
    pub const fn tagged(text: &'a str, kind: TokenKind) -> Self {
        Self {
            text,
            kind: Some(kind),
        }
    }

    /// Returns the covered text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the classification, or `None` for untagged text.
    #[must_use]
    pub const fn kind(&self) -> Option<TokenKind> {
        self.kind
    }

    /// Returns true if the span carries no classification.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.kind.is_none()
    }
}
