//! Output format selection and rendering of highlighted blocks.

use std::io::Write;

use clap::ValueEnum;
use codelight_syntax::{DisplayOptions, HighlightedLine, render_ansi, render_html, render_plain};

use crate::errors::AppError;

/// Output format selection for rendered snippets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `ansi` for terminal output and `json` for redirected output.
    #[default]
    Auto,
    /// An HTML `<pre>` block styled with utility classes.
    Html,
    /// Terminal colours.
    Ansi,
    /// Text with line numbers but no styling.
    Plain,
    /// The highlighted lines as JSON.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// An HTML `<pre>` block.
    Html,
    /// Terminal colours.
    Ansi,
    /// Unstyled text.
    Plain,
    /// The highlighted lines as JSON.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Ansi
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Html => ResolvedOutputFormat::Html,
            Self::Ansi => ResolvedOutputFormat::Ansi,
            Self::Plain => ResolvedOutputFormat::Plain,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// Writes highlighted lines to `stdout` in the resolved format.
pub(crate) fn write_block<W: Write>(
    stdout: &mut W,
    lines: &[HighlightedLine<'_>],
    line_number_width: usize,
    options: &DisplayOptions,
    format: ResolvedOutputFormat,
) -> Result<(), AppError> {
    match format {
        ResolvedOutputFormat::Html => {
            let html = render_html(lines, line_number_width, options);
            writeln!(stdout, "{html}").map_err(AppError::WriteOutput)?;
        }
        ResolvedOutputFormat::Ansi => stdout
            .write_all(render_ansi(lines, line_number_width, options).as_bytes())
            .map_err(AppError::WriteOutput)?,
        ResolvedOutputFormat::Plain => stdout
            .write_all(render_plain(lines, line_number_width, options).as_bytes())
            .map_err(AppError::WriteOutput)?,
        ResolvedOutputFormat::Json => write_json(stdout, lines)?,
    }
    stdout.flush().map_err(AppError::WriteOutput)
}

/// Writes any serialisable value as pretty JSON followed by a newline.
pub(crate) fn write_json<W, T>(stdout: &mut W, value: &T) -> Result<(), AppError>
where
    W: Write,
    T: serde::Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *stdout, value).map_err(AppError::SerialiseTokens)?;
    stdout.write_all(b"\n").map_err(AppError::WriteOutput)
}
