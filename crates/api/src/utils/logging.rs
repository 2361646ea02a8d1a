//! Structured logging helpers shared by the command layer.

use std::path::PathBuf;
use std::time::Duration;

use asnalo_domain::{Config, LoggingConfig, SfaError};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set. Fails when a
/// subscriber is already installed or the directive does not parse.
pub fn init(config: &LoggingConfig) -> Result<(), SfaError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|err| {
            SfaError::Config(format!("invalid log level '{}': {err}", config.level))
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|err| SfaError::Config(format!("failed to install tracing subscriber: {err}")))
}

/// Secret-free view of the loaded configuration.
///
/// Configuration is read before the subscriber exists, so its outcome is
/// logged from here once [`init`] has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSummary {
    pub source: Option<PathBuf>,
    pub credential_present: bool,
    pub fast_model: String,
    pub deep_model: String,
    pub timeout_secs: u64,
}

impl ConfigSummary {
    pub fn new(config: &Config, source: Option<PathBuf>) -> Self {
        Self {
            source,
            credential_present: config.gateway.api_key.is_some(),
            fast_model: config.gateway.fast_model.clone(),
            deep_model: config.gateway.deep_model.clone(),
            timeout_secs: config.gateway.timeout_secs,
        }
    }

    pub fn log(&self) {
        let source = match &self.source {
            Some(path) => path.display().to_string(),
            None => "defaults".to_string(),
        };
        info!(
            source = %source,
            credential_present = self.credential_present,
            fast_model = %self.fast_model,
            deep_model = %self.deep_model,
            timeout_secs = self.timeout_secs,
            "configuration loaded"
        );
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"pipeline::move_deal_stage"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
/// * `error_type` - Stable label from [`error_label`] when the command failed.
///
/// Callers must avoid forwarding client data or credentials in `command`.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&'static str>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(
            command,
            duration_ms,
            error_type = error_type.unwrap_or("unknown"),
            "command_execution_failure"
        );
    }
}

/// Convert an `SfaError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SfaError) -> &'static str {
    match error {
        SfaError::Config(_) => "config",
        SfaError::Network(_) => "network",
        SfaError::NotFound(_) => "not_found",
        SfaError::InvalidInput(_) => "invalid_input",
        SfaError::Internal(_) => "internal",
    }
}
