//! Logging initialization and level control.
//!
//! Sets up tracing-subscriber with a reloadable level filter. The level
//! state is process-wide but explicit: `init` installs it with a default,
//! `set_level` changes it at runtime. Nothing else in the crate touches it —
//! library modules only emit tracing events, which are inert until a
//! subscriber is installed.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Registry, reload};

use crate::error::{Error, Result};

/// Severity threshold for emitted log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(Error::InvalidLogLevel(other.to_string())),
        }
    }
}

static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Initialize logging with `default_level` as the threshold.
///
/// A `RUST_LOG` environment variable, when set, overrides the default.
///
/// # Errors
///
/// Returns an error if a global tracing subscriber is already installed
/// (e.g. on a second `init` call).
pub fn init(default_level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::Telemetry(format!("failed to init tracing subscriber: {e}")))?;

    let _ = FILTER_HANDLE.set(handle);
    Ok(())
}

/// Change the logging threshold at runtime.
///
/// # Errors
///
/// Returns an error when called before [`init`], or if the filter can no
/// longer be swapped.
pub fn set_level(level: LogLevel) -> Result<()> {
    let handle = FILTER_HANDLE
        .get()
        .ok_or_else(|| Error::Telemetry("telemetry is not initialized".to_string()))?;

    handle
        .reload(EnvFilter::new(level.as_str()))
        .map_err(|e| Error::Telemetry(format!("failed to update log level: {e}")))
}
