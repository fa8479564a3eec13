//! Presentation styles for each token kind.
//!
//! Both mappings are exhaustive matches, so adding a [`TokenKind`] fails to
//! compile until it has a style.

use owo_colors::Style;

use crate::token::TokenKind;

impl TokenKind {
    /// Utility classes applied to the token's `<span>` in HTML output.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Comment => "text-zinc-500 italic",
            Self::DoubleQuotedString | Self::SingleQuotedString | Self::TemplateString => {
                "text-emerald-400"
            }
            Self::Keyword => "text-purple-400 font-medium",
            Self::TypeName => "text-amber-400",
            Self::Number => "text-orange-400",
            Self::CallName => "text-sky-400",
        }
    }

    /// Terminal colour and emphasis for ANSI output.
    #[must_use]
    pub const fn ansi_style(self) -> Style {
        match self {
            Self::Comment => Style::new().bright_black().italic(),
            Self::DoubleQuotedString | Self::SingleQuotedString | Self::TemplateString => {
                Style::new().green()
            }
            Self::Keyword => Style::new().magenta().bold(),
            Self::TypeName => Style::new().yellow(),
            Self::Number => Style::new().bright_yellow(),
            Self::CallName => Style::new().cyan(),
        }
    }
}
