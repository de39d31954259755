// src/config/mod.rs
mod models;
mod parse;

pub use models::*;

use parse::{lookup_opt, lookup_parse};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

/// Resolve configuration from the process environment and report the
/// effective settings.
pub fn load_config() -> Result<Config, ConfigError> {
    let config = Config::from_lookup(|key| std::env::var_os(key))?;
    config.log_summary();
    Ok(config)
}

impl Config {
    /// Resolve configuration through `lookup`, which maps a variable name to
    /// its raw value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let uri = lookup_opt(&lookup, ENV_URI);
        let file = lookup_opt(&lookup, ENV_FILE);

        let mode = match (uri, file) {
            (None, None) => return Err(ConfigError::MissingSelector),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSelectors),
            (Some(uri), None) => CheckMode::Uri(UriCheckConfig {
                // a URI that is not UTF-8 cannot parse and fails as a network error
                uri: uri.to_string_lossy().into_owned(),
                timeout_secs: lookup_parse(&lookup, ENV_URI_TIMEOUT, DEFAULT_URI_TIMEOUT_SECS),
                expected_status: lookup_parse(
                    &lookup,
                    ENV_URI_STATUS_CODE,
                    DEFAULT_URI_STATUS_CODE,
                ),
            }),
            (None, Some(path)) => CheckMode::File(FileCheckConfig {
                path: PathBuf::from(path),
                max_age_secs: lookup_parse(&lookup, ENV_FILE_MAX_AGE, DEFAULT_FILE_MAX_AGE_SECS),
            }),
        };

        Ok(Config { mode })
    }

    pub fn log_summary(&self) {
        info!("Running {}", self.mode);
        match &self.mode {
            CheckMode::Uri(uri) => {
                info!(
                    "Using {} timeout: {}s",
                    uri.timeout_secs.origin(),
                    uri.timeout_secs.value
                );
                info!(
                    "Using {} status code: {}",
                    uri.expected_status.origin(),
                    uri.expected_status.value
                );
            }
            CheckMode::File(file) => {
                info!(
                    "Using {} file max age: {}s",
                    file.max_age_secs.origin(),
                    file.max_age_secs.value
                );
            }
        }
    }
}
