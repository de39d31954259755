// src/main.rs
use anyhow::{Context, Result};
use healthcheck::{config, health::HealthChecker};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("healthcheck=info")),
        )
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = config::load_config()?;
    let checker = HealthChecker::new(config);

    checker
        .check()
        .await
        .with_context(|| format!("{} healthcheck failed", checker.mode().name()))?;

    info!("{} healthcheck passed", checker.mode().name());
    Ok(())
}
