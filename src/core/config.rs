//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and output paths are not here: Leptos reads those from
//! `[package.metadata.leptos]` and its own `LEPTOS_*` variables.

use super::error::ConfigError;

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const COMPRESSION_VAR: &str = "AIME_COMPRESSION";
pub const COMPRESSION_LEVEL_VAR: &str = "AIME_COMPRESSION_LEVEL";

const DEFAULT_LOG_FILTER: &str = "info";

/// How hard to compress responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionQuality {
    Fastest,
    Default,
    #[default]
    Best,
}

impl CompressionQuality {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fastest" => Ok(CompressionQuality::Fastest),
            "default" => Ok(CompressionQuality::Default),
            "best" => Ok(CompressionQuality::Best),
            _ => Err(ConfigError::InvalidCompressionLevel {
                var: COMPRESSION_LEVEL_VAR,
                value: value.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionQuality::Fastest => "fastest",
            CompressionQuality::Default => "default",
            CompressionQuality::Best => "best",
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber` filter directive, e.g. `info,tower_http=debug`
    pub log_filter: String,

    /// Compress responses with Brotli/gzip
    pub compression: bool,

    pub compression_quality: CompressionQuality,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = match lookup(COMPRESSION_VAR) {
            Some(value) => parse_bool(COMPRESSION_VAR, &value)?,
            None => true,
        };

        let compression_quality = match lookup(COMPRESSION_LEVEL_VAR) {
            Some(value) => CompressionQuality::parse(&value)?,
            None => CompressionQuality::default(),
        };

        Ok(Self {
            log_filter,
            compression,
            compression_quality,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
            compression_quality: CompressionQuality::default(),
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
