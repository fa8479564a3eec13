//! Log record formats accepted by `--log-format`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How the CLI writes tracing records to stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One human-readable line per record.
    #[default]
    Compact,
    /// One flattened JSON object per record.
    Json,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;
