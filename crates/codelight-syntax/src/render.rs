//! Rendering highlighted lines with display options applied.
//!
//! The tokenizer knows nothing about line numbers, wrapping or font size;
//! these renderers apply [`DisplayOptions`] around its output. Empty lines are
//! drawn with a single-space placeholder.

use std::fmt;

use owo_colors::Style;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::block::HighlightedLine;
use crate::token::Span;

/// Code font sizes offered by the snippet viewer.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FontSize {
    /// Compact 13px text.
    #[default]
    Sm,
    /// Standard small text.
    Base,
    /// Larger body-sized text.
    Lg,
}

/// Errors encountered while parsing a [`FontSize`] from text.
pub type FontSizeParseError = strum::ParseError;

impl FontSize {
    /// Utility class controlling the code font size.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Sm => "text-[13px]",
            Self::Base => "text-sm",
            Self::Lg => "text-base",
        }
    }
}

/// Caller-side presentation settings applied around highlighted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Prefix each line with its number.
    pub show_line_numbers: bool,
    /// Let long lines wrap instead of scrolling.
    pub word_wrap: bool,
    /// Code font size.
    pub font_size: FontSize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            word_wrap: false,
            font_size: FontSize::default(),
        }
    }
}

const LINE_NUMBER_CLASS: &str =
    "table-cell pr-4 text-right select-none text-zinc-600 dark:text-zinc-500";

/// Renders lines as an HTML `<pre>` block styled with utility classes.
///
/// `line_number_width` is the digit count of the largest line number, as
/// returned by [`crate::CodeBlock::line_number_width`].
#[must_use]
pub fn render_html(
    lines: &[HighlightedLine<'_>],
    line_number_width: usize,
    options: &DisplayOptions,
) -> String {
    HtmlBlock {
        lines,
        line_number_width,
        options,
    }
    .to_string()
}

/// Renders lines for a terminal using ANSI colour escapes.
///
/// Word wrapping is left to the terminal.
#[must_use]
pub fn render_ansi(
    lines: &[HighlightedLine<'_>],
    line_number_width: usize,
    options: &DisplayOptions,
) -> String {
    TerminalBlock {
        lines,
        line_number_width,
        options,
        colour: true,
    }
    .to_string()
}

/// Renders lines as plain text, keeping line numbers but no styling.
#[must_use]
pub fn render_plain(
    lines: &[HighlightedLine<'_>],
    line_number_width: usize,
    options: &DisplayOptions,
) -> String {
    TerminalBlock {
        lines,
        line_number_width,
        options,
        colour: false,
    }
    .to_string()
}

struct HtmlBlock<'r, 'a> {
    lines: &'r [HighlightedLine<'a>],
    line_number_width: usize,
    options: &'r DisplayOptions,
}

impl fmt::Display for HtmlBlock<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wrap = if self.options.word_wrap {
            "whitespace-pre-wrap wrap-break-word"
        } else {
            "whitespace-pre"
        };
        write!(
            f,
            r#"<pre class="p-4 {} font-mono leading-relaxed {wrap}"><code class="text-zinc-100">"#,
            self.options.font_size.css_class()
        )?;
        for line in self.lines {
            f.write_str(r#"<div class="table-row">"#)?;
            if self.options.show_line_numbers {
                write!(
                    f,
                    r#"<span class="{LINE_NUMBER_CLASS}" style="width:{}ch">{}</span>"#,
                    self.line_number_width.saturating_add(2),
                    line.number()
                )?;
            }
            f.write_str(r#"<span class="table-cell">"#)?;
            for span in line.display_spans() {
                write_html_span(f, span)?;
            }
            f.write_str("</span></div>")?;
        }
        f.write_str("</code></pre>")
    }
}

fn write_html_span(f: &mut fmt::Formatter<'_>, span: &Span<'_>) -> fmt::Result {
    match span.kind() {
        Some(kind) => write!(
            f,
            r#"<span class="{}">{}</span>"#,
            kind.css_class(),
            EscapeHtml(span.text())
        ),
        None => write!(f, "{}", EscapeHtml(span.text())),
    }
}

/// Escapes text for use in HTML element content.
struct EscapeHtml<'a>(&'a str);

impl fmt::Display for EscapeHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(index) = rest.find(['&', '<', '>', '"', '\'']) {
            let (before, after) = rest.split_at(index);
            f.write_str(before)?;
            let mut chars = after.chars();
            let entity = match chars.next() {
                Some('&') => "&amp;",
                Some('<') => "&lt;",
                Some('>') => "&gt;",
                Some('"') => "&quot;",
                _ => "&#x27;",
            };
            f.write_str(entity)?;
            rest = chars.as_str();
        }
        f.write_str(rest)
    }
}

struct TerminalBlock<'r, 'a> {
    lines: &'r [HighlightedLine<'a>],
    line_number_width: usize,
    options: &'r DisplayOptions,
    colour: bool,
}

impl fmt::Display for TerminalBlock<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.line_number_width;
        for line in self.lines {
            if self.options.show_line_numbers {
                let number = format!("{:>width$}", line.number());
                if self.colour {
                    write!(f, "{}  ", Style::new().dimmed().style(number))?;
                } else {
                    write!(f, "{number}  ")?;
                }
            }
            for span in line.display_spans() {
                match span.kind() {
                    Some(kind) if self.colour => {
                        write!(f, "{}", kind.ansi_style().style(span.text()))?;
                    }
                    _ => f.write_str(span.text())?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use rstest::rstest;
    use std::str::FromStr;

    fn single_line(spans: Vec<Span<'_>>) -> Vec<HighlightedLine<'_>> {
        vec![HighlightedLine::new(1, spans)]
    }

    #[rstest]
    #[case("sm", FontSize::Sm)]
    #[case("BASE", FontSize::Base)]
    #[case("Lg", FontSize::Lg)]
    fn font_size_parses_case_insensitively(#[case] input: &str, #[case] expected: FontSize) {
        assert_eq!(FontSize::from_str(input), Ok(expected));
    }

    #[test]
    fn font_size_rejects_unknown_values() {
        assert!(FontSize::from_str("xl").is_err());
    }

    #[test]
    fn defaults_show_line_numbers_without_wrapping() {
        let options = DisplayOptions::default();
        assert!(options.show_line_numbers);
        assert!(!options.word_wrap);
        assert_eq!(options.font_size, FontSize::Sm);
    }

    #[test]
    fn html_escapes_token_and_plain_text() {
        let lines = single_line(vec![
            Span::plain("a < b && "),
            Span::tagged("\"<x>\"", TokenKind::DoubleQuotedString),
            Span::plain(" 'q'"),
        ]);
        let options = DisplayOptions {
            show_line_numbers: false,
            ..DisplayOptions::default()
        };
        let html = render_html(&lines, 1, &options);
        assert!(html.contains("a &lt; b &amp;&amp; "));
        assert!(html.contains(
            r#"<span class="text-emerald-400">&quot;&lt;x&gt;&quot;</span>"#
        ));
        assert!(html.contains(" &#x27;q&#x27;"));
    }

    #[test]
    fn html_wrap_and_font_size_select_classes() {
        let lines = single_line(vec![Span::plain("x")]);
        let options = DisplayOptions {
            show_line_numbers: false,
            word_wrap: true,
            font_size: FontSize::Lg,
        };
        let html = render_html(&lines, 1, &options);
        assert!(html.starts_with(
            r#"<pre class="p-4 text-base font-mono leading-relaxed whitespace-pre-wrap wrap-break-word">"#
        ));
    }

    #[test]
    fn plain_right_aligns_line_numbers() {
        let lines: Vec<_> = (8..=10)
            .map(|number| HighlightedLine::new(number, vec![Span::plain("x")]))
            .collect();
        let text = render_plain(&lines, 2, &DisplayOptions::default());
        assert_eq!(text, " 8  x\n 9  x\n10  x\n");
    }

    #[test]
    fn plain_draws_placeholder_for_empty_lines() {
        let lines = single_line(Vec::new());
        let options = DisplayOptions {
            show_line_numbers: false,
            ..DisplayOptions::default()
        };
        assert_eq!(render_plain(&lines, 1, &options), " \n");
    }

    #[test]
    fn ansi_wraps_tokens_in_escape_codes() {
        let lines = single_line(vec![
            Span::tagged("const", TokenKind::Keyword),
            Span::plain(" x"),
        ]);
        let options = DisplayOptions {
            show_line_numbers: false,
            ..DisplayOptions::default()
        };
        let text = render_ansi(&lines, 1, &options);
        assert!(text.starts_with("\u{1b}["));
        assert!(text.ends_with("\u{1b}[0m x\n"));
    }
}
