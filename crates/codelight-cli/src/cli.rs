//! CLI argument definitions for the codelight binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Command-line interface for the codelight snippet highlighter.
#[derive(Parser, Debug)]
#[command(
    name = "codelight",
    version,
    about = "Syntax-highlights TypeScript snippets",
    disable_help_subcommand = true
)]
pub(crate) struct Cli {
    /// The operation to run.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Operations offered by the CLI.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Highlights a snippet file (or stdin) and writes the rendered block.
    Render(RenderArgs),
    /// Prints the spans of a single line as JSON.
    Tokens {
        /// The line to tokenize.
        #[arg(value_name = "LINE", allow_hyphen_values = true)]
        line: String,
    },
}

/// Arguments for `codelight render`.
#[derive(Args, Debug, Clone)]
pub(crate) struct RenderArgs {
    /// Controls how the highlighted block is written.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) format: OutputFormat,
    /// Omits the line-number gutter.
    #[arg(long)]
    pub(crate) no_line_numbers: bool,
    /// Lets long lines wrap in HTML output.
    #[arg(long)]
    pub(crate) wrap: bool,
    /// Snippet to highlight; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    pub(crate) file: Option<PathBuf>,
}
