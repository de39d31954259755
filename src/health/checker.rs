// src/health/checker.rs
use super::{check_file, check_uri};
use crate::config::{CheckMode, Config};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HealthCheckError {
    #[error("failed to get URI")]
    Network(#[source] reqwest::Error),

    #[error("invalid status code: {actual}, expected {expected}")]
    StatusMismatch { actual: u16, expected: i64 },

    #[error("failed to access the file {}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the file was not modified in the last {max_age_secs} seconds")]
    Stale { max_age_secs: i64, age_secs: u64 },
}

/// Runs the single check selected by the configuration.
pub struct HealthChecker {
    config: Config,
}

impl HealthChecker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn mode(&self) -> &CheckMode {
        &self.config.mode
    }

    pub async fn check(&self) -> Result<(), HealthCheckError> {
        match &self.config.mode {
            CheckMode::Uri(uri) => {
                check_uri(&uri.uri, uri.timeout(), uri.expected_status.value).await
            }
            CheckMode::File(file) => check_file(&file.path, file.max_age_secs.value),
        }
    }
}
