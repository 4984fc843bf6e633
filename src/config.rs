//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::console::OutputFormat;
use crate::profile::loader::ProfileSource;
use crate::reveal::{DEFAULT_COMPLETION_DELAY_MS, DEFAULT_REVEAL_INTERVAL_MS, RevealTiming};

pub const DEFAULT_DATA_SOURCE: &str = "data.json";
pub const DEFAULT_PREFS_PATH: &str = ".profile-reveal-prefs.json";
pub const DEFAULT_LOADING_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_source: ProfileSource,
    pub prefs_path: PathBuf,
    pub timing: RevealTiming,
    /// Minimum time the loading screen stays up.
    pub loading_delay: Duration,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Build config from environment variables. Every variable is optional.
    ///
    /// - `REVEAL_DATA_SOURCE`: file path or `http(s)://` URL (default `data.json`)
    /// - `REVEAL_PREFS_PATH`: preference store file
    /// - `REVEAL_INTERVAL_MS`: default 2500; zero falls back to the default
    /// - `REVEAL_COMPLETION_DELAY_MS`: default 1000
    /// - `REVEAL_LOADING_DELAY_MS`: default 2000
    /// - `REVEAL_OUTPUT`: `text` (default) or `json`
    #[must_use]
    pub fn from_env() -> Self {
        let data_source = std::env::var("REVEAL_DATA_SOURCE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());
        let prefs_path = std::env::var("REVEAL_PREFS_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREFS_PATH.to_string());

        Self {
            data_source: ProfileSource::parse(&data_source),
            prefs_path: PathBuf::from(prefs_path),
            timing: RevealTiming {
                interval: Duration::from_millis(env_parse_nonzero("REVEAL_INTERVAL_MS", DEFAULT_REVEAL_INTERVAL_MS)),
                completion_delay: Duration::from_millis(env_parse(
                    "REVEAL_COMPLETION_DELAY_MS",
                    DEFAULT_COMPLETION_DELAY_MS,
                )),
            },
            loading_delay: Duration::from_millis(env_parse("REVEAL_LOADING_DELAY_MS", DEFAULT_LOADING_DELAY_MS)),
            output: std::env::var("REVEAL_OUTPUT")
                .ok()
                .and_then(|v| OutputFormat::parse(&v))
                .unwrap_or_default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: ProfileSource::parse(DEFAULT_DATA_SOURCE),
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            timing: RevealTiming::default(),
            loading_delay: Duration::from_millis(DEFAULT_LOADING_DELAY_MS),
            output: OutputFormat::default(),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Like `env_parse`, but a zero value also falls back to `default`.
fn env_parse_nonzero(key: &str, default: u64) -> u64 {
    match env_parse(key, default) {
        0 => default,
        value => value,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
