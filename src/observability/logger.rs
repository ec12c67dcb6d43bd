//! Process-wide log subscriber
//!
//! Events are emitted with `tracing`; this module installs the
//! `tracing-subscriber` formatter once at startup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Output format of log lines
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single line with file and line
    #[default]
    Default,
    /// One JSON object per event
    Json,
    /// Multi-line, for local development
    Pretty,
    /// Abbreviated single line
    Compact,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Default => "default",
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(LogFormat::Default),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log level: {0}")]
    InvalidLevel(#[from] tracing_subscriber::filter::ParseError),
    #[error("unknown log format: {0}")]
    UnknownFormat(String),
    #[error("failed to init logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Parses a level or directive string such as `info` or `clientfolio=debug,sqlx=warn`.
pub fn parse_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::from_str(level)?)
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(level: &str, format: LogFormat) -> Result<(), LoggingError> {
    let env_filter = parse_filter(level)?;

    match format {
        LogFormat::Default => tracing_subscriber::fmt()
            .with_line_number(true)
            .with_file(true)
            .with_env_filter(env_filter)
            .finish()
            .try_init()?,
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_line_number(true)
            .with_file(true)
            .with_env_filter(env_filter)
            .finish()
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_line_number(true)
            .with_file(true)
            .with_env_filter(env_filter)
            .finish()
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .finish()
            .try_init()?,
    }

    Ok(())
}
