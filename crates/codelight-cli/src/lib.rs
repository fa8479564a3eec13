//! Command-line runtime for the codelight snippet highlighter.
//!
//! The module owns argument parsing, configuration bootstrapping and the
//! dispatch of `render` and `tokens`. The runtime is driven both from the
//! binary entrypoint and from tests, where configuration loading and the IO
//! streams are substituted.

use std::ffi::OsString;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use codelight_config::Config;
use codelight_syntax::{CodeBlock, DisplayOptions, Highlighter};
use tracing::{debug, info};

mod cli;
mod config;
mod errors;
mod output;
mod telemetry;

use cli::{Cli, CliCommand, RenderArgs};
use config::{ConfigArgumentSplit, split_config_arguments};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub(crate) use errors::AppError;
use output::{write_block, write_json};
pub use output::{OutputFormat, ResolvedOutputFormat};

/// CLI flags recognised by the configuration loader.
///
/// MAINTENANCE: keep in sync with the fields of `codelight_config::Config`.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--font-size",
];

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, R: Read, W: Write, E: Write> {
    pub(crate) stdin: &'a mut R,
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
    stdout_is_terminal: bool,
}

impl<'a, R: Read, W: Write, E: Write> IoStreams<'a, R, W, E> {
    pub(crate) const fn new(
        stdin: &'a mut R,
        stdout: &'a mut W,
        stderr: &'a mut E,
        stdout_is_terminal: bool,
    ) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
            stdout_is_terminal,
        }
    }
}

struct CliRunner<'a, R: Read, W: Write, E: Write, L: ConfigLoader> {
    io: IoStreams<'a, R, W, E>,
    loader: &'a L,
}

impl<'a, R, W, E, L> CliRunner<'a, R, W, E, L>
where
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: IoStreams<'a, R, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let cli_arguments = prepare_cli_arguments(&args, &split);

        let cli = match Cli::try_parse_from(cli_arguments) {
            Ok(cli) => cli,
            // Help and version requests are successful output, not usage errors.
            Err(error) if !error.use_stderr() => {
                let _ = write!(self.io.stdout, "{error}");
                return ExitCode::SUCCESS;
            }
            Err(error) => return self.report(&AppError::CliUsage(error)),
        };

        let result = self
            .loader
            .load(&split.config_arguments)
            .and_then(|config| {
                telemetry::initialise(&config)?;
                self.execute(cli.command, &config)
            });

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => self.report(&error),
        }
    }

    fn report(&mut self, error: &AppError) -> ExitCode {
        let _ = writeln!(self.io.stderr, "{error}");
        ExitCode::FAILURE
    }

    fn execute(&mut self, command: CliCommand, config: &Config) -> Result<(), AppError> {
        match command {
            CliCommand::Render(args) => self.render(&args, config),
            CliCommand::Tokens { line } => self.tokens(&line),
        }
    }

    fn render(&mut self, args: &RenderArgs, config: &Config) -> Result<(), AppError> {
        let source = read_source(args.file.as_deref(), &mut *self.io.stdin)?;
        let snippet = normalise_snippet(&source);
        let highlighter = Highlighter::new()?;
        let block = CodeBlock::new(&snippet);
        let lines = highlighter.highlight_block(&block);
        debug!(
            target: "codelight::render",
            lines = block.line_count(),
            "highlighted snippet"
        );

        let options = DisplayOptions {
            show_line_numbers: !args.no_line_numbers,
            word_wrap: args.wrap,
            font_size: config.font_size(),
        };
        let format = args.format.resolve(self.io.stdout_is_terminal);
        info!(target: "codelight::render", ?format, "writing highlighted block");
        write_block(
            &mut *self.io.stdout,
            &lines,
            block.line_number_width(),
            &options,
            format,
        )
    }

    fn tokens(&mut self, line: &str) -> Result<(), AppError> {
        let highlighter = Highlighter::new()?;
        let spans = highlighter.tokenize(line);
        debug!(target: "codelight::tokens", spans = spans.len(), "tokenized line");
        write_json(&mut *self.io.stdout, spans.as_slice())?;
        self.io.stdout.flush().map_err(AppError::WriteOutput)
    }
}

fn prepare_cli_arguments(args: &[OsString], split: &ConfigArgumentSplit) -> Vec<OsString> {
    args.first()
        .into_iter()
        .chain(args.iter().skip(split.command_start))
        .cloned()
        .collect()
}

fn read_source<R: Read>(path: Option<&Path>, stdin: &mut R) -> Result<String, AppError> {
    path.map_or_else(
        || {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(AppError::ReadStdin)?;
            Ok(buffer)
        },
        |file| {
            fs::read_to_string(file).map_err(|source| AppError::ReadInput {
                path: file.to_path_buf(),
                source,
            })
        },
    )
}

/// Converts CRLF line endings to LF and drops a single trailing newline, so a
/// file ending in a newline does not grow an extra empty line.
fn normalise_snippet(source: &str) -> String {
    let mut normalised = source.replace("\r\n", "\n");
    if normalised.ends_with('\n') {
        normalised.pop();
    }
    normalised
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, R, W, E>(
    args: I,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
    stdout_is_terminal: bool,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let io = IoStreams::new(stdin, stdout, stderr, stdout_is_terminal);
    run_with_loader(args, io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
#[must_use]
pub(crate) fn run_with_loader<I, R, W, E, L>(
    args: I,
    io: IoStreams<'_, R, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}
