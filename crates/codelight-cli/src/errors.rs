//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use codelight_syntax::HighlightError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("failed to read snippet from stdin: {0}")]
    ReadStdin(io::Error),
    #[error("failed to prepare highlighter: {0}")]
    Highlighter(#[from] HighlightError),
    #[error("failed to serialise tokens: {0}")]
    SerialiseTokens(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}
