//! Application configuration. Output format, log level.

use crate::domain::DomainError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Default tracing filter when neither `RUST_LOG` nor `CHATFIX_LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// How parsed records are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Output format for parsed lines (`json` or `csv`). Read from CHATFIX_OUTPUT_FORMAT.
    #[serde(default)]
    pub output_format: Option<String>,

    /// Tracing filter directive (e.g. `debug`). Read from CHATFIX_LOG_LEVEL.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let path = std::env::var("CHATFIX_CONFIG").ok();
        Self::load_from(path.as_deref())
    }

    /// Build from an optional config file, then CHATFIX_* env vars on top.
    pub fn load_from(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = path {
            c = c.add_source(config::File::with_name(path));
        }
        c = c.add_source(config::Environment::with_prefix("CHATFIX"));
        c.build()?.try_deserialize()
    }

    /// Fall back to defaults on a failed load, keeping the failure for the caller to report.
    pub fn or_default_with_error(
        loaded: Result<Self, config::ConfigError>,
    ) -> (Self, Option<DomainError>) {
        match loaded {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(DomainError::Config(e.to_string()))),
        }
    }

    /// Returns the configured output format. Unknown values fall back to JSON.
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the tracing filter directive. Defaults to `info`.
    pub fn log_level_or_default(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
