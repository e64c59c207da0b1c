//! Configuration loading for the payoff engine.
//!
//! YAML files with `${VAR}` / `${VAR:-default}` environment interpolation,
//! serde defaults for every section, and validation after parsing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::config::load_config;
//!
//! // Defaults only
//! let config = load_config(None)?;
//!
//! // From a file
//! let config = load_config(Some("payoff-engine.yaml"))?;
//! println!("steps: {}", config.curve.steps);
//! ```

mod curve;
mod observability;
mod portfolio;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use curve::CurveConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use portfolio::PortfolioConfig;

/// Environment variable naming the config file used by the binary.
pub const CONFIG_PATH_ENV: &str = "PAYOFF_ENGINE_CONFIG";

/// Largest accepted curve step count.
pub const MAX_CURVE_STEPS: usize = 100_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Curve sampling.
    #[serde(default)]
    pub curve: CurveConfig,
    /// Portfolio accounting.
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    /// Logging.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// `None` yields the validated defaults without touching the filesystem.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let Some(path) = path else {
        let config = EngineConfig::default();
        validate_config(&config)?;
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<EngineConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: EngineConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset or empty
/// variables without a default become the empty string.
#[allow(clippy::expect_used)] // Regex is compile-time constant
pub(crate) fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
    let steps = config.curve.steps;
    if !(1..=MAX_CURVE_STEPS).contains(&steps) {
        return Err(ConfigError::ValidationError(format!(
            "curve.steps must be between 1 and {MAX_CURVE_STEPS}, got {steps}"
        )));
    }

    let rates = [
        (
            "portfolio.naked_call_margin_rate",
            config.portfolio.naked_call_margin_rate,
        ),
        (
            "portfolio.naked_put_margin_rate",
            config.portfolio.naked_put_margin_rate,
        ),
    ];
    for (name, rate) in rates {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(ConfigError::ValidationError(format!(
                "{name} must be between 0.0 and 1.0, got {rate}"
            )));
        }
    }

    let logging = &config.observability.logging;
    if logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }
    if !LOG_FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
