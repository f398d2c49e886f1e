//! Error types for eventq.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
