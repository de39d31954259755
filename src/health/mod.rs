// src/health/mod.rs
mod checker;
mod file;
mod uri;

pub use checker::{HealthCheckError, HealthChecker};
pub use file::check_file;
pub use uri::check_uri;
