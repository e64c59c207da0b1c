//! Tracing Setup
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr, so
//! stdout stays free for reports.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; wins over the configured level when set
//! - `observability.logging.format`: `json`, `pretty` or `compact`
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::config::LoggingConfig;
//! use payoff_engine::telemetry::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Tracing initialization errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log level '{level}': {message}")]
    InvalidLevel {
        /// Configured level.
        level: String,
        /// Parser message.
        message: String,
    },

    /// Format is not one of the supported outputs.
    #[error("Unknown log format: {0}")]
    UnknownFormat(String),

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    InitFailed(String),
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::InvalidLevel {
        level: config.level.clone(),
        message: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails on an invalid level or format, or when a subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format.as_str() {
        "json" => builder
            .json()
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .try_init(),
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        other => return Err(TelemetryError::UnknownFormat(other.to_string())),
    };
    result.map_err(|e| TelemetryError::InitFailed(e.to_string()))?;

    tracing::debug!(
        level = %config.level,
        format = %config.format,
        "Tracing initialized"
    );
    Ok(())
}
