//! Shared configuration for the codelight tooling.
//!
//! [`Config`] is loaded through `ortho_config`, layering (lowest to highest
//! precedence) built-in defaults, a configuration file, `CODELIGHT_*`
//! environment variables and command-line flags. The file is located with
//! `--config-path` or `CODELIGHT_CONFIG_PATH`.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use codelight_syntax::FontSize;
pub use defaults::{
    DEFAULT_LOG_FILTER, default_font_size, default_log_filter, default_log_filter_string,
    default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Runtime configuration for the `codelight` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "CODELIGHT")]
pub struct Config {
    /// Filter expression handed to the tracing subscriber.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log records.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Font size used when rendering HTML.
    #[serde(default = "default_font_size")]
    #[ortho_config(default = default_font_size())]
    pub font_size: FontSize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            font_size: default_font_size(),
        }
    }
}

impl Config {
    /// Filter expression handed to the tracing subscriber.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Output format for log records.
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Font size used when rendering HTML.
    pub const fn font_size(&self) -> FontSize {
        self.font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_declared_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.font_size(), FontSize::Sm);
    }
}
