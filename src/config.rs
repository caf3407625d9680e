//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before any command is read.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT, DEFAULT_MAX_PROBLEMS};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub log: LogConfig,
    pub input: InputConfig,
    pub contest: ContestConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is not set
    pub rust_log: String,
    pub format: LogFormat,
}

/// Log line format on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Command source configuration
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Read commands from this file instead of stdin
    pub path: Option<PathBuf>,
}

/// Contest limits
#[derive(Debug, Clone)]
pub struct ContestConfig {
    /// Upper bound for `START ... PROBLEM <p>`
    pub max_problems: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            log: LogConfig::from_lookup(&lookup)?,
            input: InputConfig::from_lookup(&lookup),
            contest: ContestConfig::from_lookup(&lookup)?,
        })
    }
}

impl LogConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let format = match lookup("LOG_FORMAT")
            .unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string())
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        };

        Ok(Self {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            format,
        })
    }
}

impl InputConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            path: lookup("SCOREBOARD_INPUT")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl ContestConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_problems: usize = lookup("SCOREBOARD_MAX_PROBLEMS")
            .unwrap_or_else(|| DEFAULT_MAX_PROBLEMS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SCOREBOARD_MAX_PROBLEMS".to_string()))?;

        if !(1..=olympus_common::MAX_PROBLEMS).contains(&max_problems) {
            return Err(ConfigError::InvalidValue("SCOREBOARD_MAX_PROBLEMS".to_string()));
        }

        Ok(Self { max_problems })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
