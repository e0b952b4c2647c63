//! Runner configuration.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::Level;

use crate::command::ReportFormat;
use crate::error::{Result, RunnerError};

/// Parse a log level name, case-insensitively.
pub fn parse_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(RunnerError::Config(format!("unknown log level '{}'", level))),
    }
}

/// Runner configuration, loaded from JSON.
///
/// Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunnerConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Largest symbol accepted by `inspect`
    #[serde(default = "default_max_symbol_value")]
    pub max_symbol_value: u32,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            max_symbol_value: default_max_symbol_value(),
            pretty: false,
        }
    }
}

impl RunnerConfig {
    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| RunnerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line values on top of the loaded ones.
    ///
    /// Flags that were given win over the file; the result is revalidated.
    pub fn merge_args(
        mut self,
        log_level: Option<&str>,
        max_symbol_value: Option<u32>,
    ) -> Result<Self> {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        if let Some(max) = max_symbol_value {
            self.max_symbol_value = max;
        }
        self.validate()?;
        Ok(self)
    }

    /// Tracing level for the subscriber.
    pub fn level(&self) -> Result<Level> {
        parse_level(&self.log_level)
    }

    /// Output format for `inspect`, honoring `pretty` for JSON.
    pub fn report_format(&self, json: bool) -> ReportFormat {
        if json {
            ReportFormat::Json {
                pretty: self.pretty,
            }
        } else {
            ReportFormat::Text
        }
    }

    fn validate(&self) -> Result<()> {
        self.level().map(|_| ())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_symbol_value() -> u32 {
    ncount_fse::params::FSE_MAX_SYMBOL_VALUE
}
