// src/config/models.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_URI: &str = "HEALTHCHECK_URI";
pub const ENV_FILE: &str = "HEALTHCHECK_FILE";
pub const ENV_URI_TIMEOUT: &str = "HEALTHCHECK_URI_TIMEOUT";
pub const ENV_URI_STATUS_CODE: &str = "HEALTHCHECK_URI_STATUS_CODE";
pub const ENV_FILE_MAX_AGE: &str = "HEALTHCHECK_FILE_MAX_AGE";

pub const DEFAULT_URI_TIMEOUT_SECS: i64 = 10;
pub const DEFAULT_URI_STATUS_CODE: i64 = 200;
pub const DEFAULT_FILE_MAX_AGE_SECS: i64 = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Either HEALTHCHECK_URI or HEALTHCHECK_FILE must be set")]
    MissingSelector,

    #[error("Only one of HEALTHCHECK_URI or HEALTHCHECK_FILE may be set")]
    ConflictingSelectors,
}

/// A resolved numeric parameter and whether it was overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting<T> {
    pub value: T,
    pub overridden: bool,
}

impl<T> Setting<T> {
    pub fn custom(value: T) -> Self {
        Self { value, overridden: true }
    }

    pub fn default_value(value: T) -> Self {
        Self { value, overridden: false }
    }

    pub fn origin(&self) -> &'static str {
        if self.overridden {
            "custom"
        } else {
            "default"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriCheckConfig {
    pub uri: String,
    pub timeout_secs: Setting<i64>,
    pub expected_status: Setting<i64>,
}

impl UriCheckConfig {
    /// Request timeout; `None` when the configured value is not positive.
    pub fn timeout(&self) -> Option<Duration> {
        u64::try_from(self.timeout_secs.value)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheckConfig {
    pub path: PathBuf,
    pub max_age_secs: Setting<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckMode {
    Uri(UriCheckConfig),
    File(FileCheckConfig),
}

impl CheckMode {
    pub fn name(&self) -> &'static str {
        match self {
            CheckMode::Uri(_) => "URI",
            CheckMode::File(_) => "File",
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMode::Uri(uri) => write!(f, "URI healthcheck: {}", uri.uri),
            CheckMode::File(file) => write!(f, "file healthcheck: {}", file.path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: CheckMode,
}
