// src/health/uri.rs
use super::HealthCheckError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Issue a single GET to `uri` and compare the response status against
/// `expected_status`. `timeout` bounds the whole request; `None` leaves it to
/// the network stack.
pub async fn check_uri(
    uri: &str,
    timeout: Option<Duration>,
    expected_status: i64,
) -> Result<(), HealthCheckError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(HealthCheckError::Network)?;

    // The response (and its connection) is released when it goes out of scope.
    let response = client
        .get(uri)
        .send()
        .await
        .map_err(HealthCheckError::Network)?;

    let status = response.status();
    debug!("Received {} from {}", status, uri);

    if i64::from(status.as_u16()) != expected_status {
        return Err(HealthCheckError::StatusMismatch {
            actual: status.as_u16(),
            expected: expected_status,
        });
    }

    Ok(())
}
